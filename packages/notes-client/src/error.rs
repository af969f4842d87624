pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Reqwest(#[from] reqwest::Error),
	#[error("Server answered {status}: {message}")]
	Api { status: u16, message: String },
	#[error("{message}")]
	InvalidConfig { message: String },
}
