use notes_config::Postgres;
use notes_storage::{Error, NoteStore, db::Db};
use notes_testkit::TestDatabase;

async fn bootstrapped_db(test_db: &TestDatabase) -> Db {
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	db
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NOTES_PG_DSN to run."]
async fn db_connects_and_bootstraps_twice() {
	let Some(base_dsn) = notes_testkit::env_dsn() else {
		eprintln!("Skipping db_connects_and_bootstraps_twice; set NOTES_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = bootstrapped_db(&test_db).await;

	db.ensure_schema().await.expect("Schema bootstrap must be idempotent.");

	let count: i64 = sqlx::query_scalar(
		"SELECT count(*) FROM information_schema.tables WHERE table_name = 'note'",
	)
	.fetch_one(&db.pool)
	.await
	.expect("Failed to query schema tables.");

	assert_eq!(count, 1);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NOTES_PG_DSN to run."]
async fn crud_round_trip() {
	let Some(base_dsn) = notes_testkit::env_dsn() else {
		eprintln!("Skipping crud_round_trip; set NOTES_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = bootstrapped_db(&test_db).await;
	let created = db.create("A", "B").await.expect("Failed to create note.");

	assert_eq!(created.title, "A");
	assert_eq!(created.content, "B");

	let updated = db.update(created.id, "A2", "B").await.expect("Failed to update note.");

	assert_eq!(updated.id, created.id);
	assert_eq!(updated.title, "A2");
	assert_eq!(updated.created_at, created.created_at);
	assert!(updated.updated_at >= created.updated_at);

	let listed = db.list().await.expect("Failed to list notes.");

	assert_eq!(listed, vec![updated]);

	db.delete(created.id).await.expect("Failed to delete note.");

	let err = db.delete(created.id).await.expect_err("Expected second delete to fail.");

	assert!(matches!(err, Error::NotFound(_)), "Unexpected error: {err:?}");
	assert!(db.list().await.expect("Failed to list notes.").is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NOTES_PG_DSN to run."]
async fn update_of_unknown_id_creates_nothing() {
	let Some(base_dsn) = notes_testkit::env_dsn() else {
		eprintln!("Skipping update_of_unknown_id_creates_nothing; set NOTES_PG_DSN to run.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = bootstrapped_db(&test_db).await;
	let err = db.update(404, "A", "B").await.expect_err("Expected update to fail.");

	assert!(matches!(err, Error::NotFound(_)), "Unexpected error: {err:?}");
	assert!(db.list().await.expect("Failed to list notes.").is_empty());

	let empty = sqlx::query("INSERT INTO note (title, content) VALUES ('', 'B')")
		.execute(&db.pool)
		.await;

	assert!(empty.is_err(), "Empty titles must be rejected by the table constraint.");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
