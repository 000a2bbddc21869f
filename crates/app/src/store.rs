//! Session store backends.
//!
//! A [`SessionStore`] turns a session identifier into its image set.
//! [`DirStore`] lists image files under a per-session directory on disk;
//! [`MockStore`] fabricates a deterministic session for demos and tests.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::SessionError;
use crate::record::{ImageRecord, SessionImageSet};

/// Resolves a session identifier to its images.
///
/// `Ok(None)` means the identifier is unknown (or the session holds no
/// images); the caller routes to the landing state. `Err` is reserved for
/// genuine backend failures.
pub trait SessionStore {
    fn resolve(&self, guid: &str) -> Result<Option<SessionImageSet>, SessionError>;
}

/// File extensions recognized as gallery images, compared case-insensitively.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// A store backed by a directory tree: `{root}/{guid}/` holds the session's
/// image files, ordered by file name.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirStore { root: root.into() }
    }

    fn is_image(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                IMAGE_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }
}

impl SessionStore for DirStore {
    fn resolve(&self, guid: &str) -> Result<Option<SessionImageSet>, SessionError> {
        // Identifiers are plain names; anything that could escape the root
        // is treated as unknown rather than touched.
        if guid.is_empty() || guid.contains(['/', '\\']) || guid.contains("..") {
            return Ok(None);
        }
        let dir = self.root.join(guid);
        if !dir.is_dir() {
            return Ok(None);
        }

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && Self::is_image(&path) {
                files.push(path);
            }
        }
        if files.is_empty() {
            return Ok(None);
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let images = files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let n = i + 1;
                let url = path.to_string_lossy().into_owned();
                let timestamp = std::fs::metadata(path)
                    .and_then(|m| m.modified())
                    .map(hhmm_utc)
                    .unwrap_or_default();
                ImageRecord {
                    id: format!("img-{n}"),
                    thumbnail: url.clone(),
                    url,
                    timestamp,
                    description: format!(
                        "Generative iteration #{n} - Phase {}",
                        n.div_ceil(3)
                    ),
                    // Unknown without decoding the files.
                    width: 0,
                    height: 0,
                }
            })
            .collect();

        Ok(Some(SessionImageSet {
            guid: guid.to_string(),
            created_at: hhmm_utc(SystemTime::now()),
            images,
        }))
    }
}

/// A store that fabricates the same ten-image session for any identifier.
#[derive(Debug, Clone, Default)]
pub struct MockStore;

impl MockStore {
    pub const IMAGE_COUNT: usize = 10;
}

impl SessionStore for MockStore {
    fn resolve(&self, guid: &str) -> Result<Option<SessionImageSet>, SessionError> {
        if guid.is_empty() {
            return Ok(None);
        }
        let salt = guid.bytes().next().unwrap_or(b'a') as usize;
        let images = (1..=Self::IMAGE_COUNT)
            .map(|n| {
                let seed = salt + n * 123;
                ImageRecord {
                    id: format!("img-{n}"),
                    url: format!("https://picsum.photos/seed/{seed}/1920/1080"),
                    thumbnail: format!("https://picsum.photos/seed/{seed}/800/600"),
                    timestamp: format!("00:{n:02}"),
                    description: format!(
                        "Generative iteration #{n} - Phase {}",
                        n.div_ceil(3)
                    ),
                    width: 1920,
                    height: 1080,
                }
            })
            .collect();
        Ok(Some(SessionImageSet {
            guid: guid.to_string(),
            created_at: "00:00".into(),
            images,
        }))
    }
}

/// Formats a system time as `hh:mm` in UTC.
fn hhmm_utc(time: SystemTime) -> String {
    let secs = time
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let of_day = secs % 86_400;
    format!("{:02}:{:02}", of_day / 3_600, (of_day % 3_600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_store_returns_ten_ordered_records() {
        let set = MockStore.resolve("abc-123").unwrap().unwrap();
        assert_eq!(set.images.len(), MockStore::IMAGE_COUNT);
        for (i, record) in set.images.iter().enumerate() {
            assert_eq!(record.id, format!("img-{}", i + 1));
        }
        assert_eq!(set.images[0].description, "Generative iteration #1 - Phase 1");
        assert_eq!(set.images[3].description, "Generative iteration #4 - Phase 2");
        assert_eq!(set.images[9].description, "Generative iteration #10 - Phase 4");
    }

    #[test]
    fn mock_store_is_deterministic_per_guid() {
        let a = MockStore.resolve("abc").unwrap().unwrap();
        let b = MockStore.resolve("abc").unwrap().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mock_store_rejects_empty_guid() {
        assert!(MockStore.resolve("").unwrap().is_none());
    }

    #[test]
    fn dir_store_unknown_guid_is_none() {
        let root = tempfile::tempdir().unwrap();
        let store = DirStore::new(root.path());
        assert!(store.resolve("missing").unwrap().is_none());
    }

    #[test]
    fn dir_store_empty_session_is_none() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("s1")).unwrap();
        let store = DirStore::new(root.path());
        assert!(store.resolve("s1").unwrap().is_none());
    }

    #[test]
    fn dir_store_lists_images_sorted_by_name() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("s1");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("b.png"), b"x").unwrap();
        std::fs::write(dir.join("a.JPG"), b"x").unwrap();
        std::fs::write(dir.join("c.webp"), b"x").unwrap();
        std::fs::write(dir.join("notes.txt"), b"x").unwrap();

        let set = DirStore::new(root.path()).resolve("s1").unwrap().unwrap();
        assert_eq!(set.images.len(), 3);
        assert!(set.images[0].url.ends_with("a.JPG"));
        assert!(set.images[1].url.ends_with("b.png"));
        assert!(set.images[2].url.ends_with("c.webp"));
        assert_eq!(set.images[0].id, "img-1");
        assert_eq!(set.images[2].id, "img-3");
    }

    #[test]
    fn dir_store_treats_traversal_attempts_as_unknown() {
        let root = tempfile::tempdir().unwrap();
        let store = DirStore::new(root.path());
        assert!(store.resolve("../etc").unwrap().is_none());
        assert!(store.resolve("a/b").unwrap().is_none());
        assert!(store.resolve("").unwrap().is_none());
    }

    #[test]
    fn timestamps_are_hh_mm() {
        let set = MockStore.resolve("g").unwrap().unwrap();
        for record in &set.images {
            assert_eq!(record.timestamp.len(), 5);
            assert_eq!(&record.timestamp[2..3], ":");
        }
    }
}
