use std::sync::Arc;

use notes_service::NotesService;
use notes_storage::{NoteStore, db::Db};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<NotesService>,
}
impl AppState {
	pub async fn new(config: notes_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		Ok(Self::with_store(Arc::new(db)))
	}

	pub fn with_store(store: Arc<dyn NoteStore>) -> Self {
		Self { service: Arc::new(NotesService::new(store)) }
	}
}
