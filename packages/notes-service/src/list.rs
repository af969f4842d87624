use crate::{NoteResponse, NotesService, Result};

impl NotesService {
	pub async fn list(&self) -> Result<Vec<NoteResponse>> {
		let notes = self.store.list().await?;

		Ok(notes.into_iter().map(NoteResponse::from).collect())
	}
}
