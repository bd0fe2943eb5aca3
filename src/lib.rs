//! vidbox - single-user, in-process video catalog browser
//!
//! Tracks a fixed catalog of videos, organizes them into named playlists,
//! plays at most one video at a time with pause/resume semantics, and lets
//! videos be moderation-flagged to exclude them from playback, search, and
//! playlist insertion. Everything runs synchronously on the calling thread;
//! there is no persistence beyond the session.

pub mod catalog;
pub mod console;
pub mod model;
pub mod moderation;
pub mod outcome;
pub mod playback;
pub mod playlists;
pub mod search;

pub use catalog::{load_catalog, CatalogError, VideoCatalog};
pub use console::{MediaConsole, SearchResponse};
pub use outcome::{Outcome, OutcomeKind};
