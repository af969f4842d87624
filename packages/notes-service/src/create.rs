use crate::{NoteInput, NoteResponse, NotesService, Result};

impl NotesService {
	pub async fn create(&self, input: NoteInput) -> Result<NoteResponse> {
		let fields = crate::gate_fields(input)?;
		let note = self.store.create(&fields.title, &fields.content).await?;

		tracing::info!(note_id = note.id, "Note created.");

		Ok(note.into())
	}
}
