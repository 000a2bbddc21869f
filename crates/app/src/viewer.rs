//! Full-size image viewer state.

use crate::record::ImageRecord;

/// A download request derived from the open image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub url: String,
    pub filename: String,
}

/// Modal viewer over at most one image.
///
/// Hosts forward key events through [`Viewer::on_escape`]; everything else
/// is explicit open/close.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    image: Option<ImageRecord>,
}

impl Viewer {
    pub fn new() -> Self {
        Viewer::default()
    }

    /// Opens the viewer on `record`, replacing any image already shown.
    pub fn open(&mut self, record: ImageRecord) {
        self.image = Some(record);
    }

    pub fn close(&mut self) {
        self.image = None;
    }

    /// Escape closes the viewer; a no-op when nothing is open.
    pub fn on_escape(&mut self) {
        self.image = None;
    }

    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&ImageRecord> {
        self.image.as_ref()
    }

    /// The download target for the open image, if any.
    pub fn download(&self) -> Option<Download> {
        self.image.as_ref().map(|record| Download {
            url: record.url.clone(),
            filename: format!("brainstorm-{}.jpg", record.id),
        })
    }
}
