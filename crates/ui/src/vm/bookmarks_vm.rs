use learn_core::Catalog;
use learn_core::model::{CourseId, LessonId};
use services::LearnerSnapshot;

use crate::routes::Route;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookmarkRowVm {
    pub course_id: CourseId,
    pub lesson_id: LessonId,
    pub course_title: String,
    pub lesson_title: String,
    pub completed: bool,
    pub route: Route,
}

/// Bookmarked lessons in the order they were added.
///
/// Bookmarks naming a course or lesson that is no longer in the catalog are
/// left out; the stored set is not touched.
#[must_use]
pub fn build_bookmarks(catalog: &Catalog, snapshot: &LearnerSnapshot) -> Vec<BookmarkRowVm> {
    snapshot
        .bookmarks()
        .iter()
        .filter_map(|bookmark| {
            let course = catalog.get_course(bookmark.course_id)?;
            let lesson = course.lesson(bookmark.lesson_id)?;
            Some(BookmarkRowVm {
                course_id: course.id(),
                lesson_id: lesson.id(),
                course_title: course.title().to_owned(),
                lesson_title: lesson.title().to_owned(),
                completed: snapshot.is_completed(course.id(), lesson.id()),
                route: Route::Lesson {
                    course: course.id(),
                    lesson: lesson.id(),
                },
            })
        })
        .collect()
}
