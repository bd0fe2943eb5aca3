//! Console facade
//!
//! `MediaConsole` owns the session state (catalog, playlist registry,
//! playback session) and exposes one request/response method per operation.
//! It never prints; every method returns a structured [`Outcome`] for the
//! caller to present. Interactive concerns (the numbered pick after a
//! search) stay with the caller, which hands a single optional ordinal back
//! through [`MediaConsole::resolve_search_choice`].

use crate::catalog::VideoCatalog;
use crate::moderation;
use crate::outcome::Outcome;
use crate::playback::PlaybackSession;
use crate::playlists::PlaylistRegistry;
use crate::search::{self, SearchHit};

/// Outcome of a search plus the hits needed for ordinal resolution
#[derive(Debug, Clone)]
pub struct SearchResponse {
    pub outcome: Outcome,
    pub hits: Vec<SearchHit>,
}

/// Single-user session over a fixed catalog
pub struct MediaConsole {
    catalog: VideoCatalog,
    playlists: PlaylistRegistry,
    playback: PlaybackSession,
}

impl MediaConsole {
    /// Start a fresh session over the given catalog
    pub fn new(catalog: VideoCatalog) -> Self {
        Self {
            catalog,
            playlists: PlaylistRegistry::new(),
            playback: PlaybackSession::new(),
        }
    }

    /// The catalog backing this session
    pub fn catalog(&self) -> &VideoCatalog {
        &self.catalog
    }

    /// The playback session (read access, mainly for assertions)
    pub fn playback(&self) -> &PlaybackSession {
        &self.playback
    }

    // --- catalog-wide queries ---

    /// Report the total catalog size, flagged videos included
    pub fn number_of_videos(&self) -> Outcome {
        Outcome::ok(format!("{} videos in the library", self.catalog.len()))
    }

    /// List every video sorted by title; flagged entries carry their reason
    pub fn show_all_videos(&self) -> Outcome {
        let mut videos: Vec<_> = self.catalog.videos().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));

        let mut lines = vec!["Here's a list of all available videos:".to_string()];
        lines.extend(videos.iter().map(|video| video.annotated()));
        Outcome::ok_lines(lines)
    }

    // --- playback ---

    pub fn play(&mut self, video_id: &str) -> Outcome {
        self.playback.play(&self.catalog, video_id)
    }

    pub fn play_random(&mut self) -> Outcome {
        self.playback.play_random(&self.catalog)
    }

    pub fn stop(&mut self) -> Outcome {
        self.playback.stop(&self.catalog)
    }

    pub fn pause(&mut self) -> Outcome {
        self.playback.pause(&self.catalog)
    }

    pub fn resume(&mut self) -> Outcome {
        self.playback.resume(&self.catalog)
    }

    pub fn show_playing(&self) -> Outcome {
        self.playback.current_status(&self.catalog)
    }

    // --- playlists ---

    pub fn create_playlist(&mut self, name: &str) -> Outcome {
        self.playlists.create(name)
    }

    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Outcome {
        self.playlists.add_video(&self.catalog, name, video_id)
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Outcome {
        self.playlists.remove_video(&self.catalog, name, video_id)
    }

    pub fn clear_playlist(&mut self, name: &str) -> Outcome {
        self.playlists.clear(name)
    }

    pub fn delete_playlist(&mut self, name: &str) -> Outcome {
        self.playlists.delete(name)
    }

    pub fn show_playlist(&self, name: &str) -> Outcome {
        self.playlists.show(&self.catalog, name)
    }

    /// All playlist names, sorted; distinct message when none exist
    pub fn show_all_playlists(&self) -> Outcome {
        let names = self.playlists.list_names();
        if names.is_empty() {
            return Outcome::ok("No playlists exist yet");
        }

        let mut lines = vec!["Showing all playlists:".to_string()];
        lines.extend(names);
        Outcome::ok_lines(lines)
    }

    // --- search ---

    pub fn search_videos(&self, term: &str) -> SearchResponse {
        Self::search_response(term, search::search_by_title(&self.catalog, term))
    }

    pub fn search_videos_with_tag(&self, tag: &str) -> SearchResponse {
        Self::search_response(tag, search::search_by_tag(&self.catalog, tag))
    }

    /// Play the hit picked by a 1-based ordinal; out-of-range or absent
    /// ordinals are a silent decline
    pub fn resolve_search_choice(
        &mut self,
        hits: &[SearchHit],
        choice: Option<usize>,
    ) -> Option<Outcome> {
        let video_id = search::resolve_choice(hits, choice)?.to_string();
        Some(self.play(&video_id))
    }

    fn search_response(term: &str, hits: Vec<SearchHit>) -> SearchResponse {
        if hits.is_empty() {
            return SearchResponse {
                outcome: Outcome::ok(format!("No search results for {term}")),
                hits,
            };
        }

        let mut lines = vec![format!("Here are the results for {term}:")];
        lines.extend(
            hits.iter()
                .enumerate()
                .map(|(index, hit)| format!("{}) {}", index + 1, hit.display)),
        );
        SearchResponse {
            outcome: Outcome::ok_lines(lines),
            hits,
        }
    }

    // --- moderation ---

    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> Outcome {
        moderation::flag_video(&mut self.catalog, &mut self.playback, video_id, reason)
    }

    pub fn allow_video(&mut self, video_id: &str) -> Outcome {
        moderation::allow_video(&mut self.catalog, video_id)
    }
}
