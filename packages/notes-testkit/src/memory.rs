use std::{
	collections::BTreeMap,
	sync::{
		Mutex,
		atomic::{AtomicBool, Ordering},
	},
};

use time::OffsetDateTime;

use notes_storage::{BoxFuture, Error, NoteStore, Result, models::Note};

/// In-process [`NoteStore`] with `SERIAL`-like id assignment.
#[derive(Default)]
pub struct MemoryStore {
	state: Mutex<State>,
	unavailable: AtomicBool,
}

#[derive(Default)]
struct State {
	last_id: i32,
	notes: BTreeMap<i32, Note>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Makes every later call fail as if the database were unreachable.
	pub fn set_unavailable(&self, unavailable: bool) {
		self.unavailable.store(unavailable, Ordering::SeqCst);
	}

	pub fn len(&self) -> usize {
		self.lock().notes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn lock(&self) -> std::sync::MutexGuard<'_, State> {
		self.state.lock().unwrap_or_else(|err| err.into_inner())
	}

	fn check_available(&self) -> Result<()> {
		if self.unavailable.load(Ordering::SeqCst) {
			return Err(Error::Sqlx(sqlx::Error::PoolClosed));
		}

		Ok(())
	}

	fn list_now(&self) -> Result<Vec<Note>> {
		self.check_available()?;

		Ok(self.lock().notes.values().cloned().collect())
	}

	fn create_now(&self, title: &str, content: &str) -> Result<Note> {
		self.check_available()?;

		let now = OffsetDateTime::now_utc();
		let mut state = self.lock();

		state.last_id += 1;

		let note = Note {
			id: state.last_id,
			title: title.to_string(),
			content: content.to_string(),
			created_at: now,
			updated_at: now,
		};

		state.notes.insert(note.id, note.clone());

		Ok(note)
	}

	fn update_now(&self, id: i32, title: &str, content: &str) -> Result<Note> {
		self.check_available()?;

		let mut state = self.lock();
		let note = state.notes.get_mut(&id).ok_or_else(|| Error::NotFound(format!("note {id}")))?;

		note.title = title.to_string();
		note.content = content.to_string();
		note.updated_at = OffsetDateTime::now_utc();

		Ok(note.clone())
	}

	fn delete_now(&self, id: i32) -> Result<()> {
		self.check_available()?;

		self.lock()
			.notes
			.remove(&id)
			.map(|_| ())
			.ok_or_else(|| Error::NotFound(format!("note {id}")))
	}
}

impl NoteStore for MemoryStore {
	fn list(&self) -> BoxFuture<'_, Result<Vec<Note>>> {
		Box::pin(async move { self.list_now() })
	}

	fn create<'a>(&'a self, title: &'a str, content: &'a str) -> BoxFuture<'a, Result<Note>> {
		Box::pin(async move { self.create_now(title, content) })
	}

	fn update<'a>(
		&'a self,
		id: i32,
		title: &'a str,
		content: &'a str,
	) -> BoxFuture<'a, Result<Note>> {
		Box::pin(async move { self.update_now(id, title, content) })
	}

	fn delete(&self, id: i32) -> BoxFuture<'_, Result<()>> {
		Box::pin(async move { self.delete_now(id) })
	}
}
