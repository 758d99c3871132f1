//! Video Store
//! Mission: Keep video records in memory with safe concurrent CRUD

use crate::videos::models::Video;
use parking_lot::RwLock;
use tracing::{debug, info};

/// Video store failures
#[derive(Debug, PartialEq, Eq)]
pub enum VideoStoreError {
    NotFound,
}

impl std::fmt::Display for VideoStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoStoreError::NotFound => write!(f, "Video not found"),
        }
    }
}

impl std::error::Error for VideoStoreError {}

/// In-memory video registry guarded by a single lock
pub struct VideoStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    videos: Vec<Video>,
    /// Never decremented, so ids are not reused after a delete
    next_id: u64,
}

impl VideoStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                videos: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Store a new video and return it with its assigned id
    pub fn create(&self, title: &str, url: &str) -> Video {
        let mut inner = self.inner.write();

        let video = Video {
            id: format!("video{}", inner.next_id),
            title: title.to_string(),
            url: url.to_string(),
        };
        inner.next_id += 1;
        inner.videos.push(video.clone());

        info!("🎬 Created video {}", video.id);
        video
    }

    /// All videos in store order
    pub fn list(&self) -> Vec<Video> {
        self.inner.read().videos.clone()
    }

    pub fn get(&self, id: &str) -> Option<Video> {
        self.inner
            .read()
            .videos
            .iter()
            .find(|v| v.id == id)
            .cloned()
    }

    /// Replace title and url of an existing video
    pub fn update(&self, id: &str, title: &str, url: &str) -> Option<Video> {
        let mut inner = self.inner.write();

        let video = inner.videos.iter_mut().find(|v| v.id == id)?;
        video.title = title.to_string();
        video.url = url.to_string();

        debug!("Updated video {}", id);
        Some(video.clone())
    }

    /// Remove a video, keeping the order of the rest
    pub fn delete(&self, id: &str) -> Result<(), VideoStoreError> {
        let mut inner = self.inner.write();

        let index = inner
            .videos
            .iter()
            .position(|v| v.id == id)
            .ok_or(VideoStoreError::NotFound)?;
        inner.videos.remove(index);

        info!("🗑️  Deleted video {}", id);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for VideoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_create_and_get() {
        let store = VideoStore::new();

        let created = store.create("A", "u");
        assert_eq!(created.id, "video1");

        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = VideoStore::new();
        for i in 0..5 {
            store.create(&format!("title{}", i), "u");
        }

        let titles: Vec<String> = store.list().into_iter().map(|v| v.title).collect();
        assert_eq!(titles, vec!["title0", "title1", "title2", "title3", "title4"]);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_update_replaces_fields_but_not_id() {
        let store = VideoStore::new();
        let created = store.create("A", "u");

        let updated = store.update(&created.id, "B", "v").unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "B");
        assert_eq!(updated.url, "v");
        assert_eq!(store.get(&created.id).unwrap(), updated);
    }

    #[test]
    fn test_update_unknown_id_leaves_store_unchanged() {
        let store = VideoStore::new();
        store.create("A", "u");
        store.create("B", "v");
        let before = store.list();

        assert!(store.update("video42", "X", "Y").is_none());
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_delete() {
        let store = VideoStore::new();
        let a = store.create("A", "u");
        let b = store.create("B", "u");
        let c = store.create("C", "u");

        store.delete(&b.id).unwrap();

        assert_eq!(store.list(), vec![a, c]);
        assert_eq!(store.delete(&b.id), Err(VideoStoreError::NotFound));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = VideoStore::new();
        store.create("A", "u");
        let b = store.create("B", "u");
        store.create("C", "u");

        store.delete(&b.id).unwrap();
        let d = store.create("D", "u");

        let ids: HashSet<String> = store.list().into_iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(d.id, "video4");
    }

    #[test]
    fn test_concurrent_creates_get_unique_ids() {
        let store = Arc::new(VideoStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..25 {
                        store.create(&format!("t{}-{}", t, i), "u");
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        let ids: HashSet<String> = store.list().into_iter().map(|v| v.id).collect();
        assert_eq!(store.len(), 200);
        assert_eq!(ids.len(), 200);
    }
}
