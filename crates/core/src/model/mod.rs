mod bookmark;
mod course;
mod ids;
mod lesson;
mod progress;

pub use ids::{CourseId, LessonId, ParseIdError};

pub use bookmark::{Bookmark, BookmarkSet, BookmarkToggle};
pub use course::{Course, CourseDraft, CourseError, CourseLevel};
pub use lesson::{Lesson, LessonDraft, LessonError, VideoRef};
pub use progress::CourseProgress;
