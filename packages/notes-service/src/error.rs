pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<notes_storage::Error> for Error {
	fn from(err: notes_storage::Error) -> Self {
		match err {
			notes_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			notes_storage::Error::NotFound(message) => Self::NotFound { message },
		}
	}
}
