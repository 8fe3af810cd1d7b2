//! Storage key layout for learner state.

use learn_core::model::CourseId;

pub(crate) const BOOKMARKS_KEY: &str = "bookmarkedLessons";

const PROGRESS_PREFIX: &str = "course_";
const PROGRESS_SUFFIX: &str = "_progress";

pub(crate) fn progress_prefix() -> &'static str {
    PROGRESS_PREFIX
}

/// `course_<id>_progress`
pub(crate) fn progress_key(course_id: CourseId) -> String {
    format!("{PROGRESS_PREFIX}{course_id}{PROGRESS_SUFFIX}")
}

/// Inverse of [`progress_key`]; `None` for keys that are not progress records.
pub(crate) fn parse_progress_key(key: &str) -> Option<CourseId> {
    key.strip_prefix(PROGRESS_PREFIX)?
        .strip_suffix(PROGRESS_SUFFIX)?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_key_layout() {
        assert_eq!(progress_key(CourseId::new(1)), "course_1_progress");
        assert_eq!(progress_key(CourseId::new(42)), "course_42_progress");
    }

    #[test]
    fn parse_progress_key_inverts_layout() {
        assert_eq!(
            parse_progress_key("course_42_progress"),
            Some(CourseId::new(42))
        );
        assert_eq!(parse_progress_key("course_x_progress"), None);
        assert_eq!(parse_progress_key("course_4"), None);
        assert_eq!(parse_progress_key(BOOKMARKS_KEY), None);
    }
}
