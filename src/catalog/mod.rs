//! Video catalog: the immutable-during-session set of all known videos
//!
//! The catalog is loaded once before the session starts. Only the moderation
//! flag on individual videos is mutated afterwards, through `get_mut`.

mod loader;

pub use loader::{load_catalog, CatalogError};

use crate::model::Video;
use std::collections::HashMap;

/// Read-only lookup of videos by id, plus full enumeration
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    videos: HashMap<String, Video>,
}

impl VideoCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            videos: HashMap::new(),
        }
    }

    /// Build a catalog from pre-constructed videos (later duplicates win)
    pub fn from_videos(videos: Vec<Video>) -> Self {
        let mut catalog = Self::new();
        for video in videos {
            catalog.insert(video);
        }
        catalog
    }

    /// Add a video to the catalog
    pub fn insert(&mut self, video: Video) {
        self.videos.insert(video.id.clone(), video);
    }

    /// Get a video by id
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// Mutable access for moderation flag updates only
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.videos.get_mut(id)
    }

    /// All videos, in unspecified order
    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    /// Total number of videos, flagged ones included
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let catalog = VideoCatalog::from_videos(vec![
            Video::new("Amazing Cats", "v1", vec!["#cat".to_string()]),
            Video::new("Funny Dogs", "v2", vec!["#dog".to_string()]),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("v1").map(|v| v.title.as_str()), Some("Amazing Cats"));
        assert!(catalog.get("v3").is_none());
    }

    #[test]
    fn test_flag_mutation_through_get_mut() {
        let mut catalog =
            VideoCatalog::from_videos(vec![Video::new("Amazing Cats", "v1", Vec::new())]);

        if let Some(video) = catalog.get_mut("v1") {
            video.set_flag("spam");
        }
        assert!(catalog.get("v1").is_some_and(Video::is_flagged));
    }
}
