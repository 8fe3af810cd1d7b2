use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a Course
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(u64);

impl CourseId {
    /// Creates a new `CourseId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Leniently coerce external input (route parameters, CLI arguments).
    ///
    /// Returns `None` when the input carries no usable number; callers treat
    /// that the same as an unknown id.
    #[must_use]
    pub fn coerce(raw: &str) -> Option<Self> {
        coerce_leading_digits(raw).map(Self)
    }
}

/// Identifier for a Lesson, unique only within its course.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(u64);

impl LessonId {
    /// Creates a new `LessonId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Leniently coerce external input, see [`CourseId::coerce`].
    #[must_use]
    pub fn coerce(raw: &str) -> Option<Self> {
        coerce_leading_digits(raw).map(Self)
    }
}

/// Takes the leading run of ASCII digits after optional whitespace and `+`.
///
/// `"12abc"` yields 12; `"abc"`, `""`, `"-3"` and values that overflow `u64`
/// yield `None`.
fn coerce_leading_digits(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }
    unsigned[..end].parse::<u64>().ok()
}

impl fmt::Debug for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CourseId({})", self.0)
    }
}

impl fmt::Debug for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for CourseId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(CourseId::new)
            .map_err(|_| ParseIdError { kind: "CourseId" })
    }
}

impl FromStr for LessonId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(LessonId::new)
            .map_err(|_| ParseIdError { kind: "LessonId" })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_display() {
        let id = CourseId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_course_id_from_str() {
        let id: CourseId = "123".parse().unwrap();
        assert_eq!(id, CourseId::new(123));
    }

    #[test]
    fn test_course_id_from_str_is_strict() {
        assert!("12abc".parse::<CourseId>().is_err());
        assert!("not-a-number".parse::<LessonId>().is_err());
    }

    #[test]
    fn test_coerce_accepts_plain_and_padded_numbers() {
        assert_eq!(CourseId::coerce("7"), Some(CourseId::new(7)));
        assert_eq!(CourseId::coerce("  7 "), Some(CourseId::new(7)));
        assert_eq!(LessonId::coerce("+3"), Some(LessonId::new(3)));
    }

    #[test]
    fn test_coerce_takes_leading_digits() {
        assert_eq!(CourseId::coerce("12abc"), Some(CourseId::new(12)));
        assert_eq!(LessonId::coerce("2.9"), Some(LessonId::new(2)));
    }

    #[test]
    fn test_coerce_rejects_non_numeric() {
        assert_eq!(CourseId::coerce("abc"), None);
        assert_eq!(CourseId::coerce(""), None);
        assert_eq!(CourseId::coerce("-1"), None);
        assert_eq!(LessonId::coerce("99999999999999999999999"), None);
    }

    #[test]
    fn test_ids_serialize_as_plain_integers() {
        let json = serde_json::to_string(&LessonId::new(5)).unwrap();
        assert_eq!(json, "5");
        let back: CourseId = serde_json::from_str("9").unwrap();
        assert_eq!(back, CourseId::new(9));
    }
}
