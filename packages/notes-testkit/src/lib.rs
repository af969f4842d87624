mod error;
mod memory;

pub use error::{Error, Result};
pub use memory::MemoryStore;

use std::{env, str::FromStr};

use sqlx::{
	ConnectOptions, Connection, Executor,
	postgres::{PgConnectOptions, PgConnection},
};
use uuid::Uuid;

/// A scratch database created next to the one `NOTES_PG_DSN` points at.
///
/// Call [`TestDatabase::cleanup`] at the end of a test; connections still open are terminated.
pub struct TestDatabase {
	name: String,
	dsn: String,
	admin_options: PgConnectOptions,
}
impl TestDatabase {
	pub async fn new(base_dsn: &str) -> Result<Self> {
		let base_options = PgConnectOptions::from_str(base_dsn)
			.map_err(|err| Error::Message(format!("Failed to parse NOTES_PG_DSN: {err}.")))?;
		let admin_options = base_options.clone().database("postgres");
		let name = format!("notes_test_{}", Uuid::new_v4().simple());
		let mut admin_conn = PgConnection::connect_with(&admin_options).await?;

		admin_conn.execute(format!(r#"CREATE DATABASE "{name}""#).as_str()).await?;

		let dsn = base_options.database(&name).to_url_lossy().to_string();

		Ok(Self { name, dsn, admin_options })
	}

	pub fn dsn(&self) -> &str {
		&self.dsn
	}

	pub async fn cleanup(self) -> Result<()> {
		let mut admin_conn = PgConnection::connect_with(&self.admin_options).await?;

		admin_conn
			.execute(format!(r#"DROP DATABASE IF EXISTS "{}" WITH (FORCE)"#, self.name).as_str())
			.await?;

		Ok(())
	}
}

pub fn env_dsn() -> Option<String> {
	env::var("NOTES_PG_DSN").ok()
}
