use std::collections::HashMap;

use learn_core::model::{Bookmark, BookmarkSet, CourseId, CourseProgress, LessonId};

/// Point-in-time copy of everything the learner has recorded.
///
/// Views are rendered from a snapshot so they never touch storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LearnerSnapshot {
    progress: HashMap<CourseId, CourseProgress>,
    bookmarks: BookmarkSet,
}

impl LearnerSnapshot {
    #[must_use]
    pub fn new(progress: impl IntoIterator<Item = CourseProgress>, bookmarks: BookmarkSet) -> Self {
        let progress = progress
            .into_iter()
            .map(|record| (record.course_id(), record))
            .collect();
        Self {
            progress,
            bookmarks,
        }
    }

    /// Progress for `course_id`, or an empty record when nothing is stored.
    #[must_use]
    pub fn progress_for(&self, course_id: CourseId) -> CourseProgress {
        self.progress
            .get(&course_id)
            .cloned()
            .unwrap_or_else(|| CourseProgress::new(course_id))
    }

    #[must_use]
    pub fn is_completed(&self, course_id: CourseId, lesson_id: LessonId) -> bool {
        self.progress
            .get(&course_id)
            .is_some_and(|record| record.contains(lesson_id))
    }

    #[must_use]
    pub fn is_bookmarked(&self, course_id: CourseId, lesson_id: LessonId) -> bool {
        self.bookmarks
            .contains(Bookmark::new(course_id, lesson_id))
    }

    #[must_use]
    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_course_defaults_to_empty_progress() {
        let snapshot = LearnerSnapshot::default();
        let progress = snapshot.progress_for(CourseId::new(7));
        assert_eq!(progress.course_id(), CourseId::new(7));
        assert_eq!(progress.completed_lessons(), 0);
        assert!(!snapshot.is_completed(CourseId::new(7), LessonId::new(1)));
    }

    #[test]
    fn answers_completion_and_bookmarks() {
        let mut progress = CourseProgress::new(CourseId::new(1));
        progress.mark_completed(LessonId::new(2));
        let mut bookmarks = BookmarkSet::new();
        bookmarks.toggle(Bookmark::new(CourseId::new(2), LessonId::new(3)));

        let snapshot = LearnerSnapshot::new([progress], bookmarks);
        assert!(snapshot.is_completed(CourseId::new(1), LessonId::new(2)));
        assert!(!snapshot.is_completed(CourseId::new(1), LessonId::new(3)));
        assert!(snapshot.is_bookmarked(CourseId::new(2), LessonId::new(3)));
        assert!(!snapshot.is_bookmarked(CourseId::new(1), LessonId::new(2)));
    }
}
