//! Client-side note board: the local copy of the server's notes plus a form that is either
//! creating a new note or editing the selected one.

use std::fmt;

use crate::{Note, NotesBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	Create,
	Edit,
}

/// Emitted after every successful server round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
	Added { id: i32 },
	Updated { id: i32 },
	Deleted { id: i32 },
}
impl fmt::Display for Notice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Added { id } => write!(f, "Note {id} added successfully."),
			Self::Updated { id } => write!(f, "Note {id} updated successfully."),
			Self::Deleted { id } => write!(f, "Note {id} deleted successfully."),
		}
	}
}

#[derive(Debug, Default)]
pub struct Board {
	notes: Vec<Note>,
	title: String,
	content: String,
	selected: Option<Note>,
}
impl Board {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn notes(&self) -> &[Note] {
		&self.notes
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn selected(&self) -> Option<&Note> {
		self.selected.as_ref()
	}

	pub fn mode(&self) -> Mode {
		if self.selected.is_some() { Mode::Edit } else { Mode::Create }
	}

	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = title.into();
	}

	pub fn set_content(&mut self, content: impl Into<String>) {
		self.content = content.into();
	}

	/// Enters edit mode for the note with `id`, loading its fields into the form.
	/// Returns `false` when the note is not on the board.
	pub fn select(&mut self, id: i32) -> bool {
		let Some(note) = self.notes.iter().find(|note| note.id == id).cloned() else {
			return false;
		};

		self.title = note.title.clone();
		self.content = note.content.clone();
		self.selected = Some(note);

		true
	}

	/// Leaves edit mode and discards the form.
	pub fn cancel(&mut self) {
		if self.selected.is_some() {
			self.reset_form();
		}
	}

	/// Both fields must be filled before anything is sent.
	pub fn can_submit(&self) -> bool {
		!self.title.is_empty() && !self.content.is_empty()
	}

	pub async fn load(&mut self, backend: &dyn NotesBackend) -> bool {
		match backend.list().await {
			Ok(notes) => {
				self.notes = notes;

				true
			},
			Err(err) => {
				tracing::warn!(error = %err, "Failed to fetch notes.");

				false
			},
		}
	}

	/// Creates in create mode, updates the selected note in edit mode.
	pub async fn submit(&mut self, backend: &dyn NotesBackend) -> Option<Notice> {
		if !self.can_submit() {
			return None;
		}

		match self.selected.as_ref().map(|note| note.id) {
			None => {
				let result = backend.create(&self.title, &self.content).await;

				match result {
					Ok(note) => {
						let id = note.id;

						self.notes.insert(0, note);
						self.reset_form();

						Some(Notice::Added { id })
					},
					Err(err) => {
						tracing::warn!(error = %err, "Failed to add note.");

						None
					},
				}
			},
			Some(id) => {
				let result = backend.update(id, &self.title, &self.content).await;

				match result {
					Ok(updated) => {
						for note in self.notes.iter_mut().filter(|note| note.id == id) {
							*note = updated.clone();
						}

						self.reset_form();

						Some(Notice::Updated { id })
					},
					Err(err) => {
						tracing::warn!(error = %err, note_id = id, "Failed to update note.");

						None
					},
				}
			},
		}
	}

	/// Removes a note once the server confirms. The form and selection are left alone.
	pub async fn delete(&mut self, backend: &dyn NotesBackend, id: i32) -> Option<Notice> {
		match backend.delete(id).await {
			Ok(()) => {
				self.notes.retain(|note| note.id != id);

				Some(Notice::Deleted { id })
			},
			Err(err) => {
				tracing::warn!(error = %err, note_id = id, "Failed to delete note.");

				None
			},
		}
	}

	fn reset_form(&mut self) {
		self.title.clear();
		self.content.clear();
		self.selected = None;
	}
}
