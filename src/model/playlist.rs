use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named, ordered, duplicate-free collection of video ids.
///
/// Insertion order is preserved; membership checks are O(1) through a
/// companion index. Display case of the name is kept exactly as given at
/// creation; lookup normalization is the registry's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name, display case preserved
    pub name: String,

    /// Member video ids in first-insertion order
    video_ids: Vec<String>,

    /// Membership index for the ids above
    members: HashSet<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            video_ids: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// Whether the playlist already contains the given video id
    pub fn contains(&self, video_id: &str) -> bool {
        self.members.contains(video_id)
    }

    /// Append a video id; returns false (and leaves the playlist unchanged)
    /// if the id is already a member
    pub fn add(&mut self, video_id: &str) -> bool {
        if !self.members.insert(video_id.to_string()) {
            return false;
        }
        self.video_ids.push(video_id.to_string());
        true
    }

    /// Remove a video id; returns false if the id was not a member
    pub fn remove(&mut self, video_id: &str) -> bool {
        if !self.members.remove(video_id) {
            return false;
        }
        self.video_ids.retain(|id| id != video_id);
        true
    }

    /// Remove all members
    pub fn clear(&mut self) {
        self.video_ids.clear();
        self.members.clear();
    }

    /// Member ids in insertion order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Number of member videos
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut playlist = Playlist::new("Mix");
        playlist.add("c");
        playlist.add("a");
        playlist.add("b");
        assert_eq!(playlist.video_ids(), ["c", "a", "b"]);
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut playlist = Playlist::new("Mix");
        assert!(playlist.add("v1"));
        assert!(!playlist.add("v1"));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order_of_rest() {
        let mut playlist = Playlist::new("Mix");
        playlist.add("a");
        playlist.add("b");
        playlist.add("c");
        assert!(playlist.remove("b"));
        assert!(!playlist.remove("b"));
        assert_eq!(playlist.video_ids(), ["a", "c"]);
        assert!(!playlist.contains("b"));
    }

    #[test]
    fn test_clear_empties_membership() {
        let mut playlist = Playlist::new("Mix");
        playlist.add("a");
        playlist.add("b");
        playlist.clear();
        assert!(playlist.is_empty());
        assert!(!playlist.contains("a"));
        assert!(playlist.add("a"));
    }
}
