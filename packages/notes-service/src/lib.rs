pub mod create;
pub mod delete;
pub mod list;
pub mod update;

mod error;

pub use delete::DeleteResponse;
pub use error::{Error, Result};
pub use notes_domain::writegate::NoteInput;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use notes_domain::{
	MSG_FIELDS_REQUIRED, MSG_INVALID_ID,
	note_id::{self, NoteIdError},
	writegate::{self, NoteFields},
};
use notes_storage::{NoteStore, models::Note};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
	pub id: i32,
	pub title: String,
	pub content: String,
	#[serde(with = "notes_domain::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "notes_domain::time_serde")]
	pub updated_at: OffsetDateTime,
}
impl From<Note> for NoteResponse {
	fn from(note: Note) -> Self {
		Self {
			id: note.id,
			title: note.title,
			content: note.content,
			created_at: note.created_at,
			updated_at: note.updated_at,
		}
	}
}

/// CRUD over a [`NoteStore`]. Validation happens here; persistence is a pass-through.
pub struct NotesService {
	store: Arc<dyn NoteStore>,
}
impl NotesService {
	pub fn new(store: Arc<dyn NoteStore>) -> Self {
		Self { store }
	}
}

pub(crate) fn gate_fields(input: NoteInput) -> Result<NoteFields> {
	writegate::writegate(input)
		.map_err(|_| Error::InvalidRequest { message: MSG_FIELDS_REQUIRED.to_string() })
}

/// Ids too wide for the `note` table fail like the store would, not as a bad request.
pub(crate) fn gate_note_id(raw: &str) -> Result<i32> {
	note_id::parse_note_id(raw).map_err(|err| match err {
		NoteIdError::OutOfRange =>
			Error::Storage { message: format!("Note id {raw:?} is out of range for the store.") },
		NoteIdError::NotANumber | NoteIdError::Zero =>
			Error::InvalidRequest { message: MSG_INVALID_ID.to_string() },
	})
}
