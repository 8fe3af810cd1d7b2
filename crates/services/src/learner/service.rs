use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use learn_core::model::{Bookmark, BookmarkSet, BookmarkToggle, CourseId, CourseProgress, LessonId};
use storage::repository::{KeyValueStore, StorageError};

use super::keys::{BOOKMARKS_KEY, parse_progress_key, progress_key, progress_prefix};
use super::snapshot::LearnerSnapshot;
use crate::error::LearnerStateError;

/// Per-learner completion and bookmark state on top of a key-value store.
///
/// Reads never fail: a missing, unreadable or unreachable record reads as the
/// empty default. Writes are committed before the call returns.
#[derive(Clone)]
pub struct LearnerStateService {
    store: Arc<dyn KeyValueStore>,
}

impl LearnerStateService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Progress record for a course, or an empty one.
    pub async fn course_progress(&self, course_id: CourseId) -> CourseProgress {
        match self.load_progress(course_id).await {
            Ok(progress) => progress,
            Err(err) => {
                tracing::warn!(%course_id, error = %err, "progress read failed, showing empty progress");
                CourseProgress::new(course_id)
            }
        }
    }

    pub async fn is_lesson_completed(&self, course_id: CourseId, lesson_id: LessonId) -> bool {
        self.course_progress(course_id).await.contains(lesson_id)
    }

    /// Record a lesson as completed and persist the course record.
    ///
    /// Marking an already completed lesson leaves the set unchanged but still
    /// rewrites the record.
    ///
    /// # Errors
    ///
    /// Returns `LearnerStateError::Storage` if the existing record cannot be
    /// read from the backend or the new one cannot be committed.
    pub async fn mark_lesson_completed(
        &self,
        course_id: CourseId,
        lesson_id: LessonId,
    ) -> Result<CourseProgress, LearnerStateError> {
        let mut progress = self.load_progress(course_id).await?;
        let added = progress.mark_completed(lesson_id);
        self.write_json(&progress_key(course_id), &progress).await?;
        tracing::debug!(
            %course_id,
            %lesson_id,
            added,
            completed = progress.completed_lessons(),
            "lesson marked completed"
        );
        Ok(progress)
    }

    /// Every bookmark, in the order they were added.
    pub async fn bookmarks(&self) -> BookmarkSet {
        match self.load_bookmarks().await {
            Ok(bookmarks) => bookmarks,
            Err(err) => {
                tracing::warn!(error = %err, "bookmark read failed, showing no bookmarks");
                BookmarkSet::new()
            }
        }
    }

    pub async fn is_lesson_bookmarked(&self, course_id: CourseId, lesson_id: LessonId) -> bool {
        self.bookmarks()
            .await
            .contains(Bookmark::new(course_id, lesson_id))
    }

    /// Add the bookmark if absent, remove it if present.
    ///
    /// # Errors
    ///
    /// Returns `LearnerStateError::Storage` if the bookmark set cannot be read
    /// from the backend or the updated set cannot be committed.
    pub async fn toggle_bookmark(
        &self,
        course_id: CourseId,
        lesson_id: LessonId,
    ) -> Result<BookmarkToggle, LearnerStateError> {
        let mut bookmarks = self.load_bookmarks().await?;
        let toggle = bookmarks.toggle(Bookmark::new(course_id, lesson_id));
        self.write_json(BOOKMARKS_KEY, &bookmarks).await?;
        tracing::debug!(%course_id, %lesson_id, ?toggle, "bookmark toggled");
        Ok(toggle)
    }

    /// Read every stored progress record and the bookmark set.
    pub async fn snapshot(&self) -> LearnerSnapshot {
        let keys = match self.store.keys_with_prefix(progress_prefix()).await {
            Ok(keys) => keys,
            Err(err) => {
                tracing::warn!(error = %err, "listing progress records failed");
                Vec::new()
            }
        };

        let mut progress = Vec::with_capacity(keys.len());
        for course_id in keys.iter().filter_map(|key| parse_progress_key(key)) {
            progress.push(self.course_progress(course_id).await);
        }

        LearnerSnapshot::new(progress, self.bookmarks().await)
    }

    async fn load_progress(&self, course_id: CourseId) -> Result<CourseProgress, StorageError> {
        let key = progress_key(course_id);
        let Some(progress) = self.read_json::<CourseProgress>(&key).await? else {
            return Ok(CourseProgress::new(course_id));
        };
        if progress.course_id() != course_id {
            tracing::warn!(
                %key,
                stored = %progress.course_id(),
                "progress record names another course, re-keying"
            );
            return Ok(progress.with_course_id(course_id));
        }
        Ok(progress)
    }

    async fn load_bookmarks(&self) -> Result<BookmarkSet, StorageError> {
        Ok(self
            .read_json::<BookmarkSet>(BOOKMARKS_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Backend failures propagate; undecodable values read as absent.
    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!(%key, error = %err, "ignoring unreadable record");
                Ok(None)
            }
        }
    }

    async fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), LearnerStateError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw).await?;
        Ok(())
    }
}
