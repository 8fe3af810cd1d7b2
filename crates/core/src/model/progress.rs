use serde::{Deserialize, Serialize};

use crate::model::course::Course;
use crate::model::ids::{CourseId, LessonId};

/// Persisted layout of a progress record.
///
/// `completed_lessons` is written for readers of the raw record but ignored
/// on the way in; the count is always recomputed from `completed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CourseProgressRecord {
    course_id: CourseId,
    #[serde(default)]
    completed_lessons: usize,
    #[serde(default)]
    completed: Vec<LessonId>,
}

/// Lessons a learner has completed within one course.
///
/// The completed list keeps first-completion order and never holds the same
/// lesson twice, so `completed_lessons()` is always its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CourseProgressRecord", into = "CourseProgressRecord")]
pub struct CourseProgress {
    course_id: CourseId,
    completed: Vec<LessonId>,
}

impl From<CourseProgressRecord> for CourseProgress {
    fn from(record: CourseProgressRecord) -> Self {
        let mut progress = CourseProgress::new(record.course_id);
        for lesson in record.completed {
            progress.mark_completed(lesson);
        }
        progress
    }
}

impl From<CourseProgress> for CourseProgressRecord {
    fn from(progress: CourseProgress) -> Self {
        Self {
            course_id: progress.course_id,
            completed_lessons: progress.completed.len(),
            completed: progress.completed,
        }
    }
}

impl CourseProgress {
    /// Fresh record with nothing completed.
    #[must_use]
    pub fn new(course_id: CourseId) -> Self {
        Self {
            course_id,
            completed: Vec::new(),
        }
    }

    #[must_use]
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// Re-key the record, keeping its completed lessons.
    #[must_use]
    pub fn with_course_id(mut self, course_id: CourseId) -> Self {
        self.course_id = course_id;
        self
    }

    #[must_use]
    pub fn completed(&self) -> &[LessonId] {
        &self.completed
    }

    #[must_use]
    pub fn completed_lessons(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    #[must_use]
    pub fn contains(&self, lesson: LessonId) -> bool {
        self.completed.contains(&lesson)
    }

    /// Add a lesson to the completed set.
    ///
    /// Returns `false` when the lesson was already present.
    pub fn mark_completed(&mut self, lesson: LessonId) -> bool {
        if self.contains(lesson) {
            return false;
        }
        self.completed.push(lesson);
        true
    }

    /// Completed lessons that still exist in `course`.
    #[must_use]
    pub fn completed_in(&self, course: &Course) -> usize {
        self.completed
            .iter()
            .filter(|lesson| course.has_lesson(**lesson))
            .count()
    }

    /// Percentage of `course` completed, in `0.0..=100.0`.
    ///
    /// Ids that are no longer part of the course are not counted. A course
    /// without lessons reports `0.0`.
    #[must_use]
    pub fn percent_of(&self, course: &Course) -> f64 {
        let total = course.lesson_count();
        if total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let percent = self.completed_in(course) as f64 / total as f64 * 100.0;
        percent
    }
}
