use learn_core::model::{Course, CourseId, CourseLevel, LessonId};
use services::LearnerSnapshot;

use crate::routes::Route;
use crate::vm::format::{format_count, format_rating_stars, round_percent};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonRowVm {
    pub id: LessonId,
    pub number_label: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub completed: bool,
    pub bookmarked: bool,
    pub route: Route,
}

/// Course header plus one row per lesson.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseVm {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub category: String,
    pub level: CourseLevel,
    pub rating_label: String,
    pub students_label: String,
    pub duration: String,
    pub progress_percent: f64,
    pub progress_label: String,
    pub lessons: Vec<LessonRowVm>,
}

#[must_use]
pub fn build_course(course: &Course, snapshot: &LearnerSnapshot) -> CourseVm {
    let progress = snapshot.progress_for(course.id());
    let progress_percent = progress.percent_of(course);

    let lessons = course
        .lessons()
        .iter()
        .enumerate()
        .map(|(index, lesson)| LessonRowVm {
            id: lesson.id(),
            number_label: format!("Lesson {}", index + 1),
            title: lesson.title().to_owned(),
            description: lesson.description().to_owned(),
            duration: lesson.duration().to_owned(),
            completed: progress.contains(lesson.id()),
            bookmarked: snapshot.is_bookmarked(course.id(), lesson.id()),
            route: Route::Lesson {
                course: course.id(),
                lesson: lesson.id(),
            },
        })
        .collect();

    CourseVm {
        id: course.id(),
        title: course.title().to_owned(),
        description: course.description().to_owned(),
        instructor: course.instructor().to_owned(),
        category: course.category().to_owned(),
        level: course.level(),
        rating_label: format_rating_stars(course.rating()),
        students_label: format!("{} students", format_count(course.students())),
        duration: course.duration().to_owned(),
        progress_percent,
        progress_label: format!(
            "{} of {} lessons completed ({}%)",
            progress.completed_in(course),
            course.lesson_count(),
            round_percent(progress_percent)
        ),
        lessons,
    }
}
