//! Domain entities for the video catalog browser
//!
//! These types carry identity and display data only; the session-level
//! behavior lives in the playback, playlist, and moderation modules.

mod playlist;
mod video;

pub use playlist::Playlist;
pub use video::Video;
