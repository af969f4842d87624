use serde::{Deserialize, Serialize};

use crate::{NotesService, Result};
use notes_domain::MSG_DELETED;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
	pub message: String,
}

impl NotesService {
	pub async fn delete(&self, raw_id: &str) -> Result<DeleteResponse> {
		let note_id = crate::gate_note_id(raw_id)?;

		self.store.delete(note_id).await?;

		tracing::info!(note_id, "Note deleted.");

		Ok(DeleteResponse { message: MSG_DELETED.to_string() })
	}
}
