use assert_cmd::Command;
use predicates::prelude::*;

fn learn(db: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("learn").unwrap();
    cmd.env_remove("LEARN_CATALOG")
        .env_remove("RUST_LOG")
        .arg("--db")
        .arg(format!("sqlite://{}", db.display()));
    cmd
}

#[test]
fn courses_lists_bundled_catalog() {
    let dir = tempfile::tempdir().unwrap();
    learn(&dir.path().join("state.sqlite3"))
        .arg("courses")
        .assert()
        .success()
        .stdout(predicate::str::contains("Courses (4 available)"))
        .stdout(predicate::str::contains("Digital Printing Basics"))
        .stdout(predicate::str::contains("0% complete"));
}

#[test]
fn progress_survives_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("state.sqlite3");

    learn(&db)
        .args(["complete", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 3 lessons completed"));
    learn(&db).args(["complete", "1", "2"]).assert().success();

    learn(&db)
        .args(["progress", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"completedLessons\": 1"))
        .stdout(predicate::str::contains("\"courseId\": 1"));

    learn(&db)
        .arg("courses")
        .assert()
        .success()
        .stdout(predicate::str::contains("33% complete"));
}

#[test]
fn bookmark_toggles_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("state.sqlite3");

    learn(&db)
        .args(["bookmark", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmarked"));
    learn(&db)
        .arg("bookmarks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Maintenance and Troubleshooting"));
    learn(&db)
        .args(["bookmark", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(": Bookmark\n"));
}

#[test]
fn unknown_ids_redirect_home() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("state.sqlite3");

    learn(&db)
        .args(["course", "42"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Course not found\n"))
        .stdout(predicate::str::contains("Courses (4 available)"));
    learn(&db)
        .args(["open", "lesson.html?course=1&lesson=abc"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Lesson not found\n"));
    learn(&db)
        .args(["complete", "9", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Lesson not found\n"));
}

#[test]
fn lesson_prints_embed_and_navigation() {
    let dir = tempfile::tempdir().unwrap();
    learn(&dir.path().join("state.sqlite3"))
        .args(["lesson", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inkjet Printer Types"))
        .stdout(predicate::str::contains("Video: https://www.youtube.com/embed/"))
        .stdout(predicate::str::contains("Previous: lesson.html?course=1&lesson=1"))
        .stdout(predicate::str::contains("Next: lesson.html?course=1&lesson=3"))
        .stdout(predicate::str::contains("[Mark as Complete] [Bookmark]"));
}

#[test]
fn broken_catalog_exits_with_status_two() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(&catalog, "{not json").unwrap();
    learn(&dir.path().join("state.sqlite3"))
        .arg("--catalog")
        .arg(&catalog)
        .arg("categories")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("parsing catalog"));
}
