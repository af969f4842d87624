use std::time::Duration as StdDuration;

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::json;

use crate::{BoxFuture, Error, Note, Result};

/// The four note operations the board needs from a server.
pub trait NotesBackend
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

#[derive(Deserialize)]
struct MessageBody {
	message: String,
}

/// HTTP client for `/api/notes`.
#[derive(Clone, Debug)]
pub struct NotesApi {
	base_url: String,
	client: Client,
}
impl NotesApi {
	pub fn new(base_url: &str, timeout: StdDuration) -> Result<Self> {
		let base_url = base_url.trim().trim_end_matches('/').to_string();

		if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
			return Err(Error::InvalidConfig {
				message: format!("Base URL must start with http:// or https://, got {base_url}."),
			});
		}

		let client = Client::builder().timeout(timeout).build()?;

		Ok(Self { base_url, client })
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub async fn list_notes(&self) -> Result<Vec<Note>> {
		let res = self.client.get(&self.base_url).send().await?;

		decode(res).await
	}

	pub async fn create_note(&self, title: &str, content: &str) -> Result<Note> {
		let body = json!({ "title": title, "content": content });
		let res = self.client.post(&self.base_url).json(&body).send().await?;

		decode(res).await
	}

	pub async fn update_note(&self, id: i32, title: &str, content: &str) -> Result<Note> {
		let body = json!({ "title": title, "content": content });
		let res = self.client.put(self.note_url(id)).json(&body).send().await?;

		decode(res).await
	}

	pub async fn delete_note(&self, id: i32) -> Result<String> {
		let res = self.client.delete(self.note_url(id)).send().await?;
		let body: MessageBody = decode(res).await?;

		Ok(body.message)
	}

	fn note_url(&self, id: i32) -> String {
		format!("{}/{id}", self.base_url)
	}
}

impl NotesBackend for NotesApi {
	fn list(&self) -> BoxFuture<'_, Result<Vec<Note>>> {
		Box::pin(self.list_notes())
	}

	fn create<'a>(&'a self, title: &'a str, content: &'a str) -> BoxFuture<'a, Result<Note>> {
		Box::pin(self.create_note(title, content))
	}

	fn update<'a>(
		&'a self,
		id: i32,
		title: &'a str,
		content: &'a str,
	) -> BoxFuture<'a, Result<Note>> {
		Box::pin(self.update_note(id, title, content))
	}

	fn delete(&self, id: i32) -> BoxFuture<'_, Result<()>> {
		Box::pin(async move {
			self.delete_note(id).await?;

			Ok(())
		})
	}
}

async fn decode<T>(res: Response) -> Result<T>
where
	T: DeserializeOwned,
{
	let status = res.status();

	if status.is_success() {
		return Ok(res.json().await?);
	}

	let raw = res.text().await.unwrap_or_default();

	Err(Error::Api { status: status.as_u16(), message: error_message(status, &raw) })
}

fn error_message(status: StatusCode, raw: &str) -> String {
	serde_json::from_str::<MessageBody>(raw)
		.map(|body| body.message)
		.unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown error").to_string())
}
