//! Page addresses and their query parameters.
//!
//! The three pages are addressed as `index.html`, `lessons.html?course=N` and
//! `lesson.html?course=N&lesson=M`. Resolution against the catalog never
//! panics; anything that does not name a real course or lesson becomes a
//! `NavigationError` whose recovery is the home page.

use learn_core::Catalog;
use learn_core::model::{CourseId, LessonId};
use thiserror::Error;
use url::form_urlencoded;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Lessons { course: CourseId },
    Lesson { course: CourseId, lesson: LessonId },
}

impl Route {
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Route::Home => "index.html".to_owned(),
            Route::Lessons { course } => format!("lessons.html?course={course}"),
            Route::Lesson { course, lesson } => {
                format!("lesson.html?course={course}&lesson={lesson}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Lesson not found")]
    LessonNotFound,
}

impl NavigationError {
    /// Where the learner is sent after this error is reported.
    #[must_use]
    pub fn redirect(self) -> Route {
        Route::Home
    }
}

/// The three page documents, told apart by the address path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Lessons,
    Lesson,
}

impl PageKind {
    /// Unknown paths fall back to the home page.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let file = path.rsplit('/').next().unwrap_or(path);
        match file {
            "lessons.html" => PageKind::Lessons,
            "lesson.html" => PageKind::Lesson,
            _ => PageKind::Home,
        }
    }
}

/// Resolve a full address such as `lesson.html?course=1&lesson=2`.
///
/// # Errors
///
/// Returns the `NavigationError` of the addressed page when its parameters do
/// not name catalog content.
pub fn resolve_address(address: &str, catalog: &Catalog) -> Result<Route, NavigationError> {
    let address = address.trim();
    let path = address
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    RouteQuery::parse(address).resolve(PageKind::from_path(path), catalog)
}

/// Raw `course` / `lesson` parameters, untrusted until resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteQuery {
    pub course: Option<String>,
    pub lesson: Option<String>,
}

impl RouteQuery {
    /// Parse the query part of an address; a leading path and `?` are skipped.
    ///
    /// Repeated keys keep their first value. Blank values count as absent.
    #[must_use]
    pub fn parse(address: &str) -> Self {
        let query = address.split_once('?').map_or(address, |(_, rest)| rest);
        let query = query.split_once('#').map_or(query, |(head, _)| head);

        let mut parsed = RouteQuery::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let slot = match key.as_ref() {
                "course" => &mut parsed.course,
                "lesson" => &mut parsed.lesson,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.to_owned());
            }
        }
        parsed
    }

    #[must_use]
    pub fn new(course: Option<&str>, lesson: Option<&str>) -> Self {
        let keep = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
        };
        Self {
            course: keep(course),
            lesson: keep(lesson),
        }
    }

    /// Resolve the parameters for `page`.
    ///
    /// # Errors
    ///
    /// On the lessons page a missing or unknown course is `CourseNotFound`.
    /// On the lesson page any missing or unknown id is `LessonNotFound`.
    pub fn resolve(&self, page: PageKind, catalog: &Catalog) -> Result<Route, NavigationError> {
        match page {
            PageKind::Home => Ok(Route::Home),
            PageKind::Lessons => {
                let course = self
                    .course
                    .as_deref()
                    .and_then(|raw| catalog.find_course(raw))
                    .ok_or(NavigationError::CourseNotFound)?;
                Ok(Route::Lessons {
                    course: course.id(),
                })
            }
            PageKind::Lesson => {
                let (Some(raw_course), Some(raw_lesson)) =
                    (self.course.as_deref(), self.lesson.as_deref())
                else {
                    return Err(NavigationError::LessonNotFound);
                };
                let course = catalog
                    .find_course(raw_course)
                    .ok_or(NavigationError::LessonNotFound)?;
                let lesson = catalog
                    .find_lesson(raw_course, raw_lesson)
                    .ok_or(NavigationError::LessonNotFound)?;
                Ok(Route::Lesson {
                    course: course.id(),
                    lesson: lesson.id(),
                })
            }
        }
    }
}
