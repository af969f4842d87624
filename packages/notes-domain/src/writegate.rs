use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectCode {
	RejectMissingTitle,
	RejectMissingContent,
}

/// Raw request body. Absent keys and `null` both deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteInput {
	pub title: Option<String>,
	pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
	pub title: String,
	pub content: String,
}

/// Accepts a note only when both fields are present and non-empty. Whitespace is kept as-is.
pub fn writegate(input: NoteInput) -> Result<NoteFields, RejectCode> {
	let title = input.title.filter(|title| !title.is_empty());
	let content = input.content.filter(|content| !content.is_empty());
	let Some(title) = title else {
		return Err(RejectCode::RejectMissingTitle);
	};
	let Some(content) = content else {
		return Err(RejectCode::RejectMissingContent);
	};

	Ok(NoteFields { title, content })
}
