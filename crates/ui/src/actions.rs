//! Learner actions available on a lesson page.

use learn_core::Catalog;
use learn_core::model::{CourseId, LessonId};
use services::{LearnerStateError, LearnerStateService};
use thiserror::Error;

use crate::routes::NavigationError;
use crate::vm::{LessonVm, build_lesson};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonAction {
    MarkComplete { course: CourseId, lesson: LessonId },
    ToggleBookmark { course: CourseId, lesson: LessonId },
}

impl LessonAction {
    #[must_use]
    pub fn target(self) -> (CourseId, LessonId) {
        match self {
            LessonAction::MarkComplete { course, lesson }
            | LessonAction::ToggleBookmark { course, lesson } => (course, lesson),
        }
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ActionError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error("could not save learner state: {0}")]
    State(#[from] LearnerStateError),
}

/// Apply `action` and rebuild the lesson view from fresh state.
///
/// Only lessons that exist in `catalog` can be changed.
///
/// # Errors
///
/// `ActionError::Navigation` for an unknown lesson, `ActionError::State` when
/// the store rejects the write.
pub async fn dispatch(
    catalog: &Catalog,
    learner_state: &LearnerStateService,
    action: LessonAction,
) -> Result<LessonVm, ActionError> {
    let (course_id, lesson_id) = action.target();
    let course = catalog
        .get_course(course_id)
        .ok_or(NavigationError::LessonNotFound)?;
    let lesson = course
        .lesson(lesson_id)
        .ok_or(NavigationError::LessonNotFound)?;

    match action {
        LessonAction::MarkComplete { .. } => {
            learner_state
                .mark_lesson_completed(course_id, lesson_id)
                .await?;
        }
        LessonAction::ToggleBookmark { .. } => {
            learner_state.toggle_bookmark(course_id, lesson_id).await?;
        }
    }

    let snapshot = learner_state.snapshot().await;
    Ok(build_lesson(course, lesson, &snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storage::repository::Storage;

    fn setup() -> (Catalog, LearnerStateService) {
        let storage = Storage::in_memory();
        (
            Catalog::bundled().unwrap(),
            LearnerStateService::new(Arc::clone(&storage.kv)),
        )
    }

    #[tokio::test]
    async fn mark_complete_refreshes_view() {
        let (catalog, state) = setup();
        let action = LessonAction::MarkComplete {
            course: CourseId::new(2),
            lesson: LessonId::new(1),
        };
        let vm = dispatch(&catalog, &state, action).await.unwrap();
        assert!(vm.completed);
        assert_eq!(vm.progress_label, "1 of 3 lessons completed (33%)");

        let vm = dispatch(&catalog, &state, action).await.unwrap();
        assert_eq!(vm.progress_label, "1 of 3 lessons completed (33%)");
    }

    #[tokio::test]
    async fn toggle_bookmark_flips_each_time() {
        let (catalog, state) = setup();
        let action = LessonAction::ToggleBookmark {
            course: CourseId::new(4),
            lesson: LessonId::new(2),
        };
        assert!(dispatch(&catalog, &state, action).await.unwrap().bookmarked);
        assert!(!dispatch(&catalog, &state, action).await.unwrap().bookmarked);
        assert!(dispatch(&catalog, &state, action).await.unwrap().bookmarked);
    }

    #[tokio::test]
    async fn unknown_lesson_is_rejected_without_writing() {
        let (catalog, state) = setup();
        let action = LessonAction::MarkComplete {
            course: CourseId::new(1),
            lesson: LessonId::new(12),
        };
        let err = dispatch(&catalog, &state, action).await.unwrap_err();
        assert!(matches!(
            err,
            ActionError::Navigation(NavigationError::LessonNotFound)
        ));
        assert!(state.course_progress(CourseId::new(1)).await.is_empty());
    }
}
