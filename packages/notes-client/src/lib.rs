pub mod api;
pub mod board;

mod error;

pub use api::{NotesApi, NotesBackend};
pub use board::{Board, Mode, Notice};
pub use error::{Error, Result};

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/notes";

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A note as the server returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
	pub id: i32,
	pub title: String,
	pub content: String,
	#[serde(with = "notes_domain::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "notes_domain::time_serde")]
	pub updated_at: OffsetDateTime,
}
