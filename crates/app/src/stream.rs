//! Stream view: the ordered list a session renders as.

use crate::record::SessionImageSet;

/// One entry in the stream, ready for display.
///
/// `key` is the record id and is what hosts should key list diffing on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamItem {
    pub key: String,
    pub badge: String,
    pub thumbnail: String,
    pub timestamp: String,
    pub description: String,
}

/// Projects a session's records into stream items, preserving order.
pub fn stream_items(set: &SessionImageSet) -> Vec<StreamItem> {
    set.images
        .iter()
        .map(|record| StreamItem {
            key: record.id.clone(),
            badge: record.badge().to_string(),
            thumbnail: record.thumbnail.clone(),
            timestamp: record.timestamp.clone(),
            description: record.description.clone(),
        })
        .collect()
}
