use crate::{NoteInput, NoteResponse, NotesService, Result};

impl NotesService {
	/// Fields are validated before the id, so a bad body wins over a bad id.
	pub async fn update(&self, raw_id: &str, input: NoteInput) -> Result<NoteResponse> {
		let fields = crate::gate_fields(input)?;
		let note_id = crate::gate_note_id(raw_id)?;
		let note = self.store.update(note_id, &fields.title, &fields.content).await?;

		tracing::info!(note_id, "Note updated.");

		Ok(note.into())
	}
}
