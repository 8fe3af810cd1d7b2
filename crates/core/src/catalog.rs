//! Read-only course catalog.
//!
//! Lookups never fail: an unknown or malformed identifier yields `None`.
//! All validation happens once, when the catalog is built.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Course, CourseDraft, CourseError, CourseId, Lesson, LessonId};

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("course {0} appears more than once")]
    DuplicateCourse(CourseId),

    #[error(transparent)]
    Course(#[from] CourseError),
}

/// Static collection of courses in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Build a catalog from unvalidated course drafts.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateCourse` when two courses share an id,
    /// or `CatalogError::Course` when a course fails validation.
    pub fn new(drafts: Vec<CourseDraft>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(drafts.len());
        let mut courses = Vec::with_capacity(drafts.len());
        for draft in drafts {
            if !seen.insert(draft.id) {
                return Err(CatalogError::DuplicateCourse(draft.id));
            }
            courses.push(draft.validate()?);
        }
        Ok(Self { courses })
    }

    /// Parse a catalog from a JSON array of courses.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the JSON is malformed or the content is invalid.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let drafts: Vec<CourseDraft> = serde_json::from_str(json)?;
        Self::new(drafts)
    }

    /// The curriculum compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` only if the bundled data is broken.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    #[must_use]
    pub fn get_course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == id)
    }

    /// Look up a course from untrusted text such as a route parameter.
    #[must_use]
    pub fn find_course(&self, raw_id: &str) -> Option<&Course> {
        CourseId::coerce(raw_id).and_then(|id| self.get_course(id))
    }

    #[must_use]
    pub fn get_lesson(&self, course_id: CourseId, lesson_id: LessonId) -> Option<&Lesson> {
        self.get_course(course_id)
            .and_then(|course| course.lesson(lesson_id))
    }

    /// Look up a lesson from untrusted text; the course is resolved first.
    #[must_use]
    pub fn find_lesson(&self, raw_course_id: &str, raw_lesson_id: &str) -> Option<&Lesson> {
        let course = self.find_course(raw_course_id)?;
        LessonId::coerce(raw_lesson_id).and_then(|id| course.lesson(id))
    }

    #[must_use]
    pub fn list_courses(&self) -> &[Course] {
        &self.courses
    }

    /// Distinct category names in order of first appearance.
    #[must_use]
    pub fn list_categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.courses
            .iter()
            .map(Course::category)
            .filter(|category| seen.insert(*category))
            .collect()
    }

    pub fn courses_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Course> + 'a {
        self.courses
            .iter()
            .filter(move |course| course.category() == category)
    }

    /// Case-insensitive substring search over title and description.
    ///
    /// A blank query matches every course.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Course> {
        let needle = query.trim().to_lowercase();
        self.courses
            .iter()
            .filter(|course| {
                needle.is_empty()
                    || course.title().to_lowercase().contains(&needle)
                    || course.description().to_lowercase().contains(&needle)
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
