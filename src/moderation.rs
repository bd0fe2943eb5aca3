//! Moderation flagging
//!
//! Flagging excludes a video from playback, search, and playlist insertion,
//! and force-stops it if it is the one currently playing. The coupling to
//! playback is the narrow `force_stop_if_current` call, so the stop notice
//! precedes the flag confirmation in the outcome.

use crate::catalog::VideoCatalog;
use crate::outcome::{Outcome, OutcomeKind};
use crate::playback::PlaybackSession;

/// Reason recorded when the caller supplies none
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Flag a video, stopping it first if it is currently playing
pub fn flag_video(
    catalog: &mut VideoCatalog,
    playback: &mut PlaybackSession,
    video_id: &str,
    reason: Option<&str>,
) -> Outcome {
    let Some(video) = catalog.get(video_id) else {
        return Outcome::new(
            OutcomeKind::NotFound,
            "Cannot flag video: Video does not exist",
        );
    };
    if video.is_flagged() {
        return Outcome::new(
            OutcomeKind::AlreadyFlagged,
            "Cannot flag video: Video is already flagged",
        );
    }

    let title = video.title.clone();
    let reason = reason.unwrap_or(DEFAULT_FLAG_REASON).to_string();
    if let Some(video) = catalog.get_mut(video_id) {
        video.set_flag(&reason);
    }
    log::info!("moderation: flagged {video_id} (reason: {reason})");

    let mut lines = Vec::new();
    if let Some(stopped) = playback.force_stop_if_current(catalog, video_id) {
        lines.extend(stopped.lines);
    }
    lines.push(format!(
        "Successfully flagged video: {title} (reason: {reason})"
    ));
    Outcome::ok_lines(lines)
}

/// Remove a video's moderation flag
pub fn allow_video(catalog: &mut VideoCatalog, video_id: &str) -> Outcome {
    let Some(video) = catalog.get_mut(video_id) else {
        return Outcome::new(
            OutcomeKind::NotFound,
            "Cannot remove flag from video: Video does not exist",
        );
    };
    if !video.is_flagged() {
        return Outcome::new(
            OutcomeKind::NotFlagged,
            "Cannot remove flag from video: Video is not flagged",
        );
    }

    video.clear_flag();
    log::info!("moderation: unflagged {video_id}");
    Outcome::ok(format!(
        "Successfully removed flag from video: {}",
        video.title
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Video;

    fn test_catalog() -> VideoCatalog {
        VideoCatalog::from_videos(vec![
            Video::new("Amazing Cats", "v1", vec!["#cat".to_string()]),
            Video::new("Funny Dogs", "v2", vec!["#dog".to_string()]),
        ])
    }

    #[test]
    fn test_flag_uses_default_reason() {
        let mut catalog = test_catalog();
        let mut playback = PlaybackSession::new();

        let outcome = flag_video(&mut catalog, &mut playback, "v1", None);
        assert!(outcome.succeeded());
        assert_eq!(
            outcome.message(),
            "Successfully flagged video: Amazing Cats (reason: Not supplied)"
        );
        assert_eq!(catalog.get("v1").unwrap().flag_reason(), Some("Not supplied"));
    }

    #[test]
    fn test_flag_twice_is_rejected() {
        let mut catalog = test_catalog();
        let mut playback = PlaybackSession::new();

        flag_video(&mut catalog, &mut playback, "v1", Some("spam"));
        let outcome = flag_video(&mut catalog, &mut playback, "v1", Some("again"));
        assert_eq!(outcome.kind, OutcomeKind::AlreadyFlagged);
        assert_eq!(catalog.get("v1").unwrap().flag_reason(), Some("spam"));
    }

    #[test]
    fn test_flag_unknown_video() {
        let mut catalog = test_catalog();
        let mut playback = PlaybackSession::new();

        let outcome = flag_video(&mut catalog, &mut playback, "nope", None);
        assert_eq!(outcome.kind, OutcomeKind::NotFound);
        assert_eq!(outcome.message(), "Cannot flag video: Video does not exist");
    }

    #[test]
    fn test_flagging_current_video_stops_playback() {
        let mut catalog = test_catalog();
        let mut playback = PlaybackSession::new();
        playback.play(&catalog, "v1");

        let outcome = flag_video(&mut catalog, &mut playback, "v1", Some("dont_like_it"));
        assert_eq!(
            outcome.lines,
            [
                "Stopping video: Amazing Cats",
                "Successfully flagged video: Amazing Cats (reason: dont_like_it)"
            ]
        );
        assert_eq!(playback.current_id(), None);
    }

    #[test]
    fn test_flagging_other_video_leaves_playback_alone() {
        let mut catalog = test_catalog();
        let mut playback = PlaybackSession::new();
        playback.play(&catalog, "v2");
        playback.pause(&catalog);

        flag_video(&mut catalog, &mut playback, "v1", Some("spam"));
        assert_eq!(playback.current_id(), Some("v2"));
        assert!(playback.is_paused());
    }

    #[test]
    fn test_allow_clears_flag() {
        let mut catalog = test_catalog();
        let mut playback = PlaybackSession::new();
        flag_video(&mut catalog, &mut playback, "v1", Some("spam"));

        let outcome = allow_video(&mut catalog, "v1");
        assert_eq!(
            outcome.message(),
            "Successfully removed flag from video: Amazing Cats"
        );
        assert!(!catalog.get("v1").unwrap().is_flagged());

        let outcome = allow_video(&mut catalog, "v1");
        assert_eq!(outcome.kind, OutcomeKind::NotFlagged);

        let outcome = allow_video(&mut catalog, "nope");
        assert_eq!(outcome.kind, OutcomeKind::NotFound);
    }
}
