use learn_core::Catalog;
use learn_core::model::{BookmarkToggle, CourseId, LessonId};
use services::LearningServices;

fn c(id: u64) -> CourseId {
    CourseId::new(id)
}

fn l(id: u64) -> LessonId {
    LessonId::new(id)
}

#[tokio::test]
async fn progress_and_bookmarks_survive_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("learn.sqlite3").display());

    {
        let services = LearningServices::new_sqlite(&url, Catalog::bundled().unwrap())
            .await
            .expect("open");
        let state = services.learner_state();
        state.mark_lesson_completed(c(1), l(1)).await.unwrap();
        state.mark_lesson_completed(c(1), l(2)).await.unwrap();
        assert_eq!(
            state.toggle_bookmark(c(2), l(3)).await.unwrap(),
            BookmarkToggle::Added
        );
    }

    let services = LearningServices::new_sqlite(&url, Catalog::bundled().unwrap())
        .await
        .expect("reopen");
    let state = services.learner_state();
    let catalog = services.catalog();

    let progress = state.course_progress(c(1)).await;
    assert_eq!(progress.completed_lessons(), 2);
    let course = catalog.get_course(c(1)).unwrap();
    assert!((progress.percent_of(course) - 200.0 / 3.0).abs() < 1e-9);

    assert!(state.is_lesson_bookmarked(c(2), l(3)).await);
    assert_eq!(
        state.toggle_bookmark(c(2), l(3)).await.unwrap(),
        BookmarkToggle::Removed
    );
    assert!(!state.is_lesson_bookmarked(c(2), l(3)).await);
}

#[tokio::test]
async fn repeated_completion_keeps_count_stable() {
    let services = LearningServices::new_sqlite(
        "sqlite:file:memdb_services_repeat?mode=memory&cache=shared",
        Catalog::bundled().unwrap(),
    )
    .await
    .expect("open");
    let state = services.learner_state();

    for _ in 0..5 {
        state.mark_lesson_completed(c(3), l(2)).await.unwrap();
        assert!(state.is_lesson_completed(c(3), l(2)).await);
    }
    assert_eq!(state.course_progress(c(3)).await.completed_lessons(), 1);
}
