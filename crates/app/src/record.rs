//! Image-record data model.
//!
//! A session resolves to a [`SessionImageSet`]: an ordered collection of
//! [`ImageRecord`]s plus the session identity. The order of `images` is the
//! display order and is preserved end to end; nothing downstream re-sorts.

use serde::{Deserialize, Serialize};

/// A single gallery image.
///
/// `width` and `height` are informational and may be zero when the backing
/// store cannot cheaply determine them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Stable identifier, unique within its session (e.g. `img-3`).
    pub id: String,
    /// Full-resolution image location.
    pub url: String,
    /// Smaller preview location; may equal `url`.
    pub thumbnail: String,
    /// Pre-formatted display timestamp. Opaque to this crate.
    pub timestamp: String,
    /// Human-readable caption.
    pub description: String,
    pub width: u32,
    pub height: u32,
}

impl ImageRecord {
    /// Short badge label derived from the id: the segment after the first
    /// `-`, or the whole id when there is none.
    pub fn badge(&self) -> &str {
        self.id.split('-').nth(1).unwrap_or(&self.id)
    }
}

/// The resolved contents of one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionImageSet {
    /// The identifier the session was resolved under.
    pub guid: String,
    /// Pre-formatted creation timestamp for display.
    pub created_at: String,
    /// Display-ordered image records.
    pub images: Vec<ImageRecord>,
}

impl SessionImageSet {
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
