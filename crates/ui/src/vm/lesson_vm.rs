use learn_core::model::{Course, CourseId, Lesson, LessonId};
use services::LearnerSnapshot;
use url::Url;

use crate::routes::Route;
use crate::vm::content::{lesson_html_to_markdown, sanitize_lesson_html, video_embed_url};
use crate::vm::format::round_percent;

/// Everything the lesson page shows, including the course sidebar summary.
#[derive(Clone, Debug, PartialEq)]
pub struct LessonVm {
    pub course_id: CourseId,
    pub course_title: String,
    pub lesson_id: LessonId,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub number_label: String,
    pub content_html: String,
    pub content_markdown: String,
    pub video_url: Option<Url>,
    pub previous: Option<Route>,
    pub next: Option<Route>,
    pub back: Route,
    pub completed: bool,
    pub bookmarked: bool,
    pub progress_percent: f64,
    pub progress_label: String,
}

impl LessonVm {
    #[must_use]
    pub fn complete_button_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Mark as Complete" }
    }

    #[must_use]
    pub fn bookmark_button_label(&self) -> &'static str {
        if self.bookmarked { "Bookmarked" } else { "Bookmark" }
    }
}

#[must_use]
pub fn build_lesson(course: &Course, lesson: &Lesson, snapshot: &LearnerSnapshot) -> LessonVm {
    let course_id = course.id();
    let lesson_id = lesson.id();
    let progress = snapshot.progress_for(course_id);
    let progress_percent = progress.percent_of(course);
    let to_route = |other: &Lesson| Route::Lesson {
        course: course_id,
        lesson: other.id(),
    };

    LessonVm {
        course_id,
        course_title: course.title().to_owned(),
        lesson_id,
        title: lesson.title().to_owned(),
        description: lesson.description().to_owned(),
        duration: lesson.duration().to_owned(),
        number_label: course
            .lesson_position(lesson_id)
            .map(|n| format!("Lesson {n}"))
            .unwrap_or_default(),
        content_html: sanitize_lesson_html(lesson.content()),
        content_markdown: lesson_html_to_markdown(lesson.content()),
        video_url: video_embed_url(lesson.video()),
        previous: course.previous_lesson(lesson_id).map(to_route),
        next: course.next_lesson(lesson_id).map(to_route),
        back: Route::Lessons { course: course_id },
        completed: progress.contains(lesson_id),
        bookmarked: snapshot.is_bookmarked(course_id, lesson_id),
        progress_percent,
        progress_label: format!(
            "{} of {} lessons completed ({}%)",
            progress.completed_in(course),
            course.lesson_count(),
            round_percent(progress_percent)
        ),
    }
}
