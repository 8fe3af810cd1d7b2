use serde::{Deserialize, Serialize};

use crate::model::ids::{CourseId, LessonId};

/// A learner-marked (course, lesson) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub course_id: CourseId,
    pub lesson_id: LessonId,
}

impl Bookmark {
    #[must_use]
    pub fn new(course_id: CourseId, lesson_id: LessonId) -> Self {
        Self {
            course_id,
            lesson_id,
        }
    }
}

/// What a toggle did to the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkToggle {
    Added,
    Removed,
}

impl BookmarkToggle {
    #[must_use]
    pub fn is_bookmarked(self) -> bool {
        matches!(self, BookmarkToggle::Added)
    }
}

/// Every bookmark of the learner, in the order they were added.
///
/// Pairs are unique. Persisted as a plain JSON array of bookmarks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Bookmark>", into = "Vec<Bookmark>")]
pub struct BookmarkSet {
    items: Vec<Bookmark>,
}

impl From<Vec<Bookmark>> for BookmarkSet {
    fn from(items: Vec<Bookmark>) -> Self {
        let mut set = BookmarkSet::default();
        for bookmark in items {
            if !set.contains(bookmark) {
                set.items.push(bookmark);
            }
        }
        set
    }
}

impl From<BookmarkSet> for Vec<Bookmark> {
    fn from(set: BookmarkSet) -> Self {
        set.items
    }
}

impl BookmarkSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, bookmark: Bookmark) -> bool {
        self.items.contains(&bookmark)
    }

    /// Remove the pair if present, add it otherwise.
    ///
    /// Applying the same toggle twice restores the previous set.
    pub fn toggle(&mut self, bookmark: Bookmark) -> BookmarkToggle {
        if let Some(index) = self.items.iter().position(|item| *item == bookmark) {
            self.items.remove(index);
            BookmarkToggle::Removed
        } else {
            self.items.push(bookmark);
            BookmarkToggle::Added
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.items.iter()
    }

    /// Bookmarks belonging to one course.
    pub fn for_course(&self, course_id: CourseId) -> impl Iterator<Item = &Bookmark> {
        self.items
            .iter()
            .filter(move |item| item.course_id == course_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bm(course: u64, lesson: u64) -> Bookmark {
        Bookmark::new(CourseId::new(course), LessonId::new(lesson))
    }

    #[test]
    fn toggle_three_times_ends_bookmarked() {
        let mut set = BookmarkSet::new();
        assert_eq!(set.toggle(bm(2, 3)), BookmarkToggle::Added);
        assert_eq!(set.toggle(bm(2, 3)), BookmarkToggle::Removed);
        assert!(!set.contains(bm(2, 3)));
        assert_eq!(set.toggle(bm(2, 3)), BookmarkToggle::Added);
        assert!(set.contains(bm(2, 3)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn pair_identity_uses_both_ids() {
        let mut set = BookmarkSet::new();
        set.toggle(bm(1, 2));
        assert!(!set.contains(bm(2, 1)));
        assert!(!set.contains(bm(1, 3)));
    }

    #[test]
    fn serializes_as_array_of_pairs() {
        let mut set = BookmarkSet::new();
        set.toggle(bm(2, 3));
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!([{ "courseId": 2, "lessonId": 3 }]));
    }

    #[test]
    fn decoding_drops_duplicate_pairs() {
        let raw = r#"[{"courseId":1,"lessonId":1},{"courseId":1,"lessonId":1},{"courseId":2,"lessonId":1}]"#;
        let set: BookmarkSet = serde_json::from_str(raw).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.for_course(CourseId::new(1)).count(), 1);
    }

    proptest! {
        #[test]
        fn toggle_is_an_involution(
            existing in proptest::collection::vec((0u64..5, 0u64..5), 0..20),
            course in 0u64..5,
            lesson in 0u64..5,
        ) {
            let set: BookmarkSet = existing
                .into_iter()
                .map(|(c, l)| bm(c, l))
                .collect::<Vec<_>>()
                .into();
            let mut toggled = set.clone();
            toggled.toggle(bm(course, lesson));
            prop_assert_ne!(toggled.contains(bm(course, lesson)), set.contains(bm(course, lesson)));
            toggled.toggle(bm(course, lesson));
            prop_assert_eq!(
                toggled.contains(bm(course, lesson)),
                set.contains(bm(course, lesson))
            );
            prop_assert_eq!(toggled.len(), set.len());
        }
    }
}
