use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::LessonId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson {0} has an empty title")]
    EmptyTitle(LessonId),

    #[error("lesson {0} has an empty video reference")]
    EmptyVideo(LessonId),
}

/// Opaque identifier of an externally hosted video.
///
/// Only the presentation layer turns this into a player URL.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoRef(String);

impl VideoRef {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VideoRef({})", self.0)
    }
}

/// Unvalidated lesson as it appears in catalog JSON.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDraft {
    pub id: LessonId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub video_id: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub content: String,
}

impl LessonDraft {
    /// Validate and normalize the draft into an immutable lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` if the title or video reference is blank.
    pub fn validate(self) -> Result<Lesson, LessonError> {
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(LessonError::EmptyTitle(self.id));
        }
        let video_id = self.video_id.trim().to_owned();
        if video_id.is_empty() {
            return Err(LessonError::EmptyVideo(self.id));
        }

        Ok(Lesson {
            id: self.id,
            title,
            description: self.description.trim().to_owned(),
            video: VideoRef(video_id),
            duration: self.duration.trim().to_owned(),
            content: self.content,
        })
    }
}

/// A single unit of course content.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    description: String,
    video: VideoRef,
    duration: String,
    content: String,
}

impl Lesson {
    // Accessors
    #[must_use]
    pub fn id(&self) -> LessonId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn video(&self) -> &VideoRef {
        &self.video
    }

    /// Free-form duration label, e.g. `"12 min"`.
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Rich-text body as authored (HTML fragment).
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
