use storage::repository::{KeyValueStore, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_set_then_get_roundtrips() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get("course_1_progress").await.unwrap(), None);

    repo.set(
        "course_1_progress",
        r#"{"courseId":1,"completedLessons":1,"completed":[1]}"#,
    )
    .await
    .unwrap();
    let value = repo.get("course_1_progress").await.unwrap();
    assert_eq!(
        value.as_deref(),
        Some(r#"{"courseId":1,"completedLessons":1,"completed":[1]}"#)
    );

    repo.set("course_1_progress", "{}").await.unwrap();
    assert_eq!(repo.get("course_1_progress").await.unwrap().as_deref(), Some("{}"));
}

#[tokio::test]
async fn sqlite_migrate_is_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.set("bookmarkedLessons", "[]").await.unwrap();
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.get("bookmarkedLessons").await.unwrap().as_deref(), Some("[]"));
}

#[tokio::test]
async fn sqlite_prefix_listing_matches_literally() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_prefix?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.set("course_1_progress", "{}").await.unwrap();
    repo.set("course_12_progress", "{}").await.unwrap();
    repo.set("courseX1", "{}").await.unwrap();
    repo.set("COURSE_3_progress", "{}").await.unwrap();
    repo.set("bookmarkedLessons", "[]").await.unwrap();

    let keys = repo.keys_with_prefix("course_").await.unwrap();
    assert_eq!(keys, vec!["course_12_progress", "course_1_progress"]);
}

#[tokio::test]
async fn sqlite_file_survives_reconnect() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("learn.sqlite3");
    let url = format!("sqlite://{}?mode=rwc", path.display());

    {
        let storage = Storage::sqlite(&url).await.expect("open");
        storage
            .kv
            .set("bookmarkedLessons", r#"[{"courseId":2,"lessonId":3}]"#)
            .await
            .unwrap();
    }

    let storage = Storage::sqlite(&url).await.expect("reopen");
    let value = storage.kv.get("bookmarkedLessons").await.unwrap();
    assert_eq!(value.as_deref(), Some(r#"[{"courseId":2,"lessonId":3}]"#));
}
