mod bookmarks_vm;
mod content;
mod course_vm;
mod format;
mod home_vm;
mod lesson_vm;
mod page_vm;

pub use bookmarks_vm::{BookmarkRowVm, build_bookmarks};
pub use content::{lesson_html_to_markdown, sanitize_lesson_html, video_embed_url};
pub use course_vm::{CourseVm, LessonRowVm, build_course};
pub use format::{excerpt, format_count, format_rating_stars, round_percent};
pub use home_vm::{ALL_COURSES_LABEL, CategoryChipVm, CourseCardVm, HomeVm, build_home};
pub use lesson_vm::{LessonVm, build_lesson};
pub use page_vm::{Page, PageVm, build_page};
