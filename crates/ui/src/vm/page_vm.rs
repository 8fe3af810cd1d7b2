use learn_core::Catalog;
use services::LearnerSnapshot;

use crate::routes::{NavigationError, Route};
use crate::vm::bookmarks_vm::{BookmarkRowVm, build_bookmarks};
use crate::vm::course_vm::{CourseVm, build_course};
use crate::vm::home_vm::{HomeVm, build_home};
use crate::vm::lesson_vm::{LessonVm, build_lesson};

#[derive(Clone, Debug, PartialEq)]
pub enum PageVm {
    Home {
        home: HomeVm,
        bookmarks: Vec<BookmarkRowVm>,
    },
    Lessons(CourseVm),
    Lesson(Box<LessonVm>),
}

/// A rendered page plus the message to show when navigation was redirected.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub route: Route,
    pub notice: Option<NavigationError>,
    pub vm: PageVm,
}

/// Build the page for a resolved or failed navigation.
///
/// Failures render the redirect target with the error kept as a notice.
#[must_use]
pub fn build_page(
    catalog: &Catalog,
    snapshot: &LearnerSnapshot,
    navigation: Result<Route, NavigationError>,
) -> Page {
    let (route, notice) = match navigation {
        Ok(route) => (route, None),
        Err(err) => (err.redirect(), Some(err)),
    };
    match render(catalog, snapshot, route) {
        Ok(vm) => Page { route, notice, vm },
        Err(err) => Page {
            route: err.redirect(),
            notice: Some(err),
            vm: home(catalog, snapshot),
        },
    }
}

fn render(
    catalog: &Catalog,
    snapshot: &LearnerSnapshot,
    route: Route,
) -> Result<PageVm, NavigationError> {
    match route {
        Route::Home => Ok(home(catalog, snapshot)),
        Route::Lessons { course } => {
            let course = catalog
                .get_course(course)
                .ok_or(NavigationError::CourseNotFound)?;
            Ok(PageVm::Lessons(build_course(course, snapshot)))
        }
        Route::Lesson { course, lesson } => {
            let course = catalog
                .get_course(course)
                .ok_or(NavigationError::LessonNotFound)?;
            let lesson = course
                .lesson(lesson)
                .ok_or(NavigationError::LessonNotFound)?;
            Ok(PageVm::Lesson(Box::new(build_lesson(course, lesson, snapshot))))
        }
    }
}

fn home(catalog: &Catalog, snapshot: &LearnerSnapshot) -> PageVm {
    PageVm::Home {
        home: build_home(catalog, snapshot, None, ""),
        bookmarks: build_bookmarks(catalog, snapshot),
    }
}
