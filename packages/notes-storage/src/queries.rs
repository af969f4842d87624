use crate::{Error, Result, db::Db, models::Note};

pub async fn list_notes(db: &Db) -> Result<Vec<Note>> {
	let notes = sqlx::query_as::<_, Note>(
		"\
SELECT id, title, content, created_at, updated_at
FROM note
ORDER BY id",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(notes)
}

pub async fn insert_note(db: &Db, title: &str, content: &str) -> Result<Note> {
	let note = sqlx::query_as::<_, Note>(
		"\
INSERT INTO note (title, content)
VALUES ($1, $2)
RETURNING id, title, content, created_at, updated_at",
	)
	.bind(title)
	.bind(content)
	.fetch_one(&db.pool)
	.await?;

	Ok(note)
}

pub async fn update_note(db: &Db, id: i32, title: &str, content: &str) -> Result<Note> {
	sqlx::query_as::<_, Note>(
		"\
UPDATE note
SET
	title = $1,
	content = $2,
	updated_at = now()
WHERE id = $3
RETURNING id, title, content, created_at, updated_at",
	)
	.bind(title)
	.bind(content)
	.bind(id)
	.fetch_optional(&db.pool)
	.await?
	.ok_or_else(|| Error::NotFound(format!("note {id}")))
}

pub async fn delete_note(db: &Db, id: i32) -> Result<()> {
	let result = sqlx::query("DELETE FROM note WHERE id = $1").bind(id).execute(&db.pool).await?;

	if result.rows_affected() == 0 {
		return Err(Error::NotFound(format!("note {id}")));
	}

	Ok(())
}
