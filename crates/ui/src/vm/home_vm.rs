use learn_core::Catalog;
use learn_core::model::{Course, CourseId};
use services::LearnerSnapshot;

use crate::routes::Route;
use crate::vm::format::{excerpt, format_count, round_percent};

const EXCERPT_CHARS: usize = 80;

/// Label of the chip that clears the category filter.
pub const ALL_COURSES_LABEL: &str = "All Courses";

#[derive(Clone, Debug, PartialEq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub icon: String,
    pub title: String,
    pub excerpt: String,
    pub rating: f32,
    pub students_label: String,
    pub lesson_count: usize,
    pub progress_percent: f64,
    pub progress_label: String,
    pub route: Route,
}

impl CourseCardVm {
    #[must_use]
    pub fn new(course: &Course, snapshot: &LearnerSnapshot) -> Self {
        let progress_percent = snapshot.progress_for(course.id()).percent_of(course);
        Self {
            id: course.id(),
            icon: course.image().to_owned(),
            title: course.title().to_owned(),
            excerpt: excerpt(course.description(), EXCERPT_CHARS),
            rating: course.rating(),
            students_label: format!("{} students", format_count(course.students())),
            lesson_count: course.lesson_count(),
            progress_percent,
            progress_label: format!("{}% complete", round_percent(progress_percent)),
            route: Route::Lessons {
                course: course.id(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryChipVm {
    pub label: String,
    /// `None` for the "All Courses" chip.
    pub category: Option<String>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HomeVm {
    pub total_courses: usize,
    pub categories: Vec<CategoryChipVm>,
    pub cards: Vec<CourseCardVm>,
}

/// Course list, optionally narrowed by category and a search query.
#[must_use]
pub fn build_home(
    catalog: &Catalog,
    snapshot: &LearnerSnapshot,
    category: Option<&str>,
    query: &str,
) -> HomeVm {
    let mut categories = vec![CategoryChipVm {
        label: ALL_COURSES_LABEL.to_owned(),
        category: None,
        active: category.is_none(),
    }];
    categories.extend(catalog.list_categories().into_iter().map(|name| CategoryChipVm {
        label: name.to_owned(),
        category: Some(name.to_owned()),
        active: category == Some(name),
    }));

    let cards = catalog
        .search(query)
        .into_iter()
        .filter(|course| category.is_none_or(|name| course.category() == name))
        .map(|course| CourseCardVm::new(course, snapshot))
        .collect();

    HomeVm {
        total_courses: catalog.len(),
        categories,
        cards,
    }
}
