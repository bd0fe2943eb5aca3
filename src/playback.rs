//! Playback session state machine
//!
//! At most one video plays at a time. The session moves between `Stopped`,
//! `Playing`, and `Paused`; the current video is held as a non-owning id
//! into the catalog and resolved at call time, so flag changes are always
//! observed. Invariant: a paused session always has a current video.

use crate::catalog::VideoCatalog;
use crate::model::Video;
use crate::outcome::{Outcome, OutcomeKind};
use rand::seq::IndexedRandom;

/// Session-lifetime playback state: current video id plus paused flag
#[derive(Debug, Default)]
pub struct PlaybackSession {
    current: Option<String>,
    paused: bool,
}

impl PlaybackSession {
    /// Create a stopped session
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the current video, if any
    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether playback is paused (meaningful only while a video is current)
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_video<'a>(&self, catalog: &'a VideoCatalog) -> Option<&'a Video> {
        self.current.as_deref().and_then(|id| catalog.get(id))
    }

    /// Start playing a video, stopping whatever was playing before.
    ///
    /// Unknown and flagged videos leave the session untouched. Replaying the
    /// id that is already current still stops and restarts it.
    pub fn play(&mut self, catalog: &VideoCatalog, video_id: &str) -> Outcome {
        let Some(video) = catalog.get(video_id) else {
            return Outcome::new(
                OutcomeKind::NotFound,
                "Cannot play video: Video does not exist",
            );
        };
        if let Some(reason) = video.flag_reason() {
            return Outcome::new(
                OutcomeKind::Flagged,
                format!("Cannot play video: Video is currently flagged (reason: {reason})"),
            );
        }

        let mut lines = Vec::new();
        if let Some(previous) = self.current_video(catalog) {
            lines.push(format!("Stopping video: {}", previous.title));
        }

        log::debug!("playback: playing {video_id}");
        self.current = Some(video_id.to_string());
        self.paused = false;
        lines.push(format!("Playing video: {}", video.title));
        Outcome::ok_lines(lines)
    }

    /// Stop the current video, if any
    pub fn stop(&mut self, catalog: &VideoCatalog) -> Outcome {
        let Some(video) = self.current_video(catalog) else {
            return Outcome::no_op("Cannot stop video: No video is currently playing");
        };
        let title = video.title.clone();

        log::debug!("playback: stopping {:?}", self.current);
        self.current = None;
        self.paused = false;
        Outcome::ok(format!("Stopping video: {title}"))
    }

    /// Pause the current video; pausing twice is a reported no-op
    pub fn pause(&mut self, catalog: &VideoCatalog) -> Outcome {
        let Some(video) = self.current_video(catalog) else {
            return Outcome::no_op("Cannot pause video: No video is currently playing");
        };
        if self.paused {
            return Outcome::no_op(format!("Video already paused: {}", video.title));
        }

        self.paused = true;
        Outcome::ok(format!("Pausing video: {}", video.title))
    }

    /// Resume a paused video; resuming while playing is a reported no-op
    pub fn resume(&mut self, catalog: &VideoCatalog) -> Outcome {
        let Some(video) = self.current_video(catalog) else {
            return Outcome::no_op("Cannot continue video: No video is currently playing");
        };
        if !self.paused {
            return Outcome::no_op("Cannot continue video: Video is not paused");
        }

        self.paused = false;
        Outcome::ok(format!("Continuing video: {}", video.title))
    }

    /// Play a uniformly random non-flagged video
    pub fn play_random(&mut self, catalog: &VideoCatalog) -> Outcome {
        let candidates: Vec<&Video> = catalog.videos().filter(|v| !v.is_flagged()).collect();
        let Some(pick) = candidates.choose(&mut rand::rng()) else {
            return Outcome::no_op("No videos available");
        };

        let video_id = pick.id.clone();
        self.play(catalog, &video_id)
    }

    /// Describe what is playing, with a paused indicator
    pub fn current_status(&self, catalog: &VideoCatalog) -> Outcome {
        match self.current_video(catalog) {
            None => Outcome::no_op("No video is currently playing"),
            Some(video) if self.paused => {
                Outcome::ok(format!("Currently playing: {video} - PAUSED"))
            }
            Some(video) => Outcome::ok(format!("Currently playing: {video}")),
        }
    }

    /// Stop only if the given video is current. Invoked as a consequence of
    /// flagging, so flag state is deliberately not re-checked here.
    pub fn force_stop_if_current(
        &mut self,
        catalog: &VideoCatalog,
        video_id: &str,
    ) -> Option<Outcome> {
        if self.current.as_deref() == Some(video_id) {
            Some(self.stop(catalog))
        } else {
            None
        }
    }
}
