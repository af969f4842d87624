use std::{future::Future, pin::Pin};

use crate::{Result, db::Db, models::Note, queries};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Persistence seam for notes. Updates and deletes of unknown ids return
/// [`crate::Error::NotFound`].
pub trait NoteStore
where
	Self: Send + Sync,
{
	fn list(&self) -> BoxFuture<'_, Result<Vec<Note>>>;

	fn create<'a>(&'a self, title: &'a str, content: &'a str) -> BoxFuture<'a, Result<Note>>;

	fn update<'a>(
		&'a self,
		id: i32,
		title: &'a str,
		content: &'a str,
	) -> BoxFuture<'a, Result<Note>>;

	fn delete(&self, id: i32) -> BoxFuture<'_, Result<()>>;
}

impl NoteStore for Db {
	fn list(&self) -> BoxFuture<'_, Result<Vec<Note>>> {
		Box::pin(queries::list_notes(self))
	}

	fn create<'a>(&'a self, title: &'a str, content: &'a str) -> BoxFuture<'a, Result<Note>> {
		Box::pin(queries::insert_note(self, title, content))
	}

	fn update<'a>(
		&'a self,
		id: i32,
		title: &'a str,
		content: &'a str,
	) -> BoxFuture<'a, Result<Note>> {
		Box::pin(queries::update_note(self, id, title, content))
	}

	fn delete(&self, id: i32) -> BoxFuture<'_, Result<()>> {
		Box::pin(queries::delete_note(self, id))
	}
}
