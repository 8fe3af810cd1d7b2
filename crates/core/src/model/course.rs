use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::model::ids::{CourseId, LessonId};
use crate::model::lesson::{Lesson, LessonDraft, LessonError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course {0} has an empty title")]
    EmptyTitle(CourseId),

    #[error("course {course} lists lesson {lesson} more than once")]
    DuplicateLesson { course: CourseId, lesson: LessonId },

    #[error("course {course} has an invalid rating {rating}")]
    InvalidRating { course: CourseId, rating: String },

    #[error("course {course}: {source}")]
    Lesson {
        course: CourseId,
        #[source]
        source: LessonError,
    },
}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated course as it appears in catalog JSON.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub id: CourseId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructor: String,
    pub category: String,
    pub level: CourseLevel,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub students: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub lessons: Vec<LessonDraft>,
}

impl CourseDraft {
    /// Validate the draft and all of its lessons.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` if the title is blank, the rating is outside
    /// `0..=5`, a lesson fails validation, or two lessons share an id.
    pub fn validate(self) -> Result<Course, CourseError> {
        let id = self.id;
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(CourseError::EmptyTitle(id));
        }
        if !self.rating.is_finite() || !(0.0..=5.0).contains(&self.rating) {
            return Err(CourseError::InvalidRating {
                course: id,
                rating: self.rating.to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(self.lessons.len());
        let mut lessons = Vec::with_capacity(self.lessons.len());
        for draft in self.lessons {
            if !seen.insert(draft.id) {
                return Err(CourseError::DuplicateLesson {
                    course: id,
                    lesson: draft.id,
                });
            }
            let lesson = draft
                .validate()
                .map_err(|source| CourseError::Lesson { course: id, source })?;
            lessons.push(lesson);
        }

        Ok(Course {
            id,
            title,
            description: self.description.trim().to_owned(),
            instructor: self.instructor.trim().to_owned(),
            category: self.category.trim().to_owned(),
            level: self.level,
            rating: self.rating,
            students: self.students,
            image: self.image,
            duration: self.duration.trim().to_owned(),
            lessons,
        })
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// A titled, ordered collection of lessons with descriptive metadata.
///
/// Courses are immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    instructor: String,
    category: String,
    level: CourseLevel,
    rating: f32,
    students: u32,
    image: String,
    duration: String,
    lessons: Vec<Lesson>,
}

impl Course {
    // Accessors
    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn level(&self) -> CourseLevel {
        self.level
    }

    #[must_use]
    pub fn rating(&self) -> f32 {
        self.rating
    }

    #[must_use]
    pub fn students(&self) -> u32 {
        self.students
    }

    /// Icon glyph shown on course cards.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn lesson(&self, id: LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id() == id)
    }

    #[must_use]
    pub fn has_lesson(&self, id: LessonId) -> bool {
        self.lesson(id).is_some()
    }

    /// 1-based position of the lesson within this course.
    #[must_use]
    pub fn lesson_position(&self, id: LessonId) -> Option<usize> {
        self.lessons
            .iter()
            .position(|lesson| lesson.id() == id)
            .map(|index| index + 1)
    }

    #[must_use]
    pub fn previous_lesson(&self, id: LessonId) -> Option<&Lesson> {
        let index = self.lessons.iter().position(|lesson| lesson.id() == id)?;
        index.checked_sub(1).and_then(|prev| self.lessons.get(prev))
    }

    #[must_use]
    pub fn next_lesson(&self, id: LessonId) -> Option<&Lesson> {
        let index = self.lessons.iter().position(|lesson| lesson.id() == id)?;
        self.lessons.get(index + 1)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
