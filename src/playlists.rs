//! Playlist registry
//!
//! Owns every playlist in the session. Names are unique and looked up
//! case-insensitively; the display case from creation time is preserved.
//! Membership changes validate against the catalog first, in a fixed order:
//! playlist existence, then video existence, then flag state, then
//! membership.

use crate::catalog::VideoCatalog;
use crate::model::Playlist;
use crate::outcome::{Outcome, OutcomeKind};
use std::collections::HashMap;

/// Session-lifetime store of named playlists, keyed by lowercased name
#[derive(Debug, Default)]
pub struct PlaylistRegistry {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a playlist with this name exists (case-insensitive)
    pub fn exists(&self, name: &str) -> bool {
        self.playlists.contains_key(&name.to_lowercase())
    }

    /// Look up a playlist by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&name.to_lowercase())
    }

    /// Create an empty playlist, preserving the given display case
    pub fn create(&mut self, name: &str) -> Outcome {
        let key = name.to_lowercase();
        if self.playlists.contains_key(&key) {
            return Outcome::new(
                OutcomeKind::DuplicateName,
                "Cannot create playlist: A playlist with the same name already exists",
            );
        }

        log::debug!("playlists: creating {name:?}");
        self.playlists.insert(key, Playlist::new(name));
        Outcome::ok(format!("Successfully created new playlist: {name}"))
    }

    /// Append a video to a playlist.
    ///
    /// Checks in order: playlist exists, video exists, video unflagged,
    /// video not already a member.
    pub fn add_video(&mut self, catalog: &VideoCatalog, name: &str, video_id: &str) -> Outcome {
        let Some(playlist) = self.playlists.get_mut(&name.to_lowercase()) else {
            return Outcome::new(
                OutcomeKind::NotFound,
                format!("Cannot add video to {name}: Playlist does not exist"),
            );
        };
        let Some(video) = catalog.get(video_id) else {
            return Outcome::new(
                OutcomeKind::NotFound,
                format!("Cannot add video to {name}: Video does not exist"),
            );
        };
        if let Some(reason) = video.flag_reason() {
            return Outcome::new(
                OutcomeKind::Flagged,
                format!(
                    "Cannot add video to {name}: Video is currently flagged (reason: {reason})"
                ),
            );
        }
        if !playlist.add(video_id) {
            return Outcome::new(
                OutcomeKind::AlreadyInPlaylist,
                format!("Cannot add video to {name}: Video already added"),
            );
        }

        Outcome::ok(format!("Added video to {name}: {}", video.title))
    }

    /// Remove a video from a playlist
    pub fn remove_video(&mut self, catalog: &VideoCatalog, name: &str, video_id: &str) -> Outcome {
        let Some(playlist) = self.playlists.get_mut(&name.to_lowercase()) else {
            return Outcome::new(
                OutcomeKind::NotFound,
                format!("Cannot remove video from {name}: Playlist does not exist"),
            );
        };
        let Some(video) = catalog.get(video_id) else {
            return Outcome::new(
                OutcomeKind::NotFound,
                format!("Cannot remove video from {name}: Video does not exist"),
            );
        };
        if !playlist.remove(video_id) {
            return Outcome::new(
                OutcomeKind::NotInPlaylist,
                format!("Cannot remove video from {name}: Video is not in playlist"),
            );
        }

        Outcome::ok(format!("Removed video from {name}: {}", video.title))
    }

    /// Remove every video from a playlist; succeeds even when already empty
    pub fn clear(&mut self, name: &str) -> Outcome {
        let Some(playlist) = self.playlists.get_mut(&name.to_lowercase()) else {
            return Outcome::new(
                OutcomeKind::NotFound,
                format!("Cannot clear playlist {name}: Playlist does not exist"),
            );
        };

        playlist.clear();
        Outcome::ok(format!("Successfully removed all videos from {name}"))
    }

    /// Delete a playlist entirely
    pub fn delete(&mut self, name: &str) -> Outcome {
        if self.playlists.remove(&name.to_lowercase()).is_none() {
            return Outcome::new(
                OutcomeKind::NotFound,
                format!("Cannot delete playlist {name}: Playlist does not exist"),
            );
        }

        log::debug!("playlists: deleted {name:?}");
        Outcome::ok(format!("Deleted playlist: {name}"))
    }

    /// All playlist display names, sorted lexicographically ascending
    pub fn list_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .playlists
            .values()
            .map(|playlist| playlist.name.clone())
            .collect();
        names.sort();
        names
    }

    /// Describe a playlist's members in insertion order
    pub fn show(&self, catalog: &VideoCatalog, name: &str) -> Outcome {
        let Some(playlist) = self.get(name) else {
            return Outcome::new(
                OutcomeKind::NotFound,
                format!("Cannot show playlist {name}: Playlist does not exist"),
            );
        };

        let mut lines = vec![format!("Showing playlist: {name}")];
        if playlist.is_empty() {
            lines.push("No videos here yet".to_string());
        } else {
            for video_id in playlist.video_ids() {
                if let Some(video) = catalog.get(video_id) {
                    lines.push(video.annotated());
                }
            }
        }
        Outcome::ok_lines(lines)
    }
}
