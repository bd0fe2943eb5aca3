//! Structured operation results
//!
//! Every console operation returns an [`Outcome`] instead of printing or
//! raising: a named kind plus one or more human-readable message lines.
//! Expected conditions (unknown video, duplicate playlist name, flagged
//! video, no-op transitions) are outcome kinds, never panics or errors.

/// Named result kind for one console operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// Operation succeeded and changed or reported state
    Ok,
    /// Unknown video id or playlist name
    NotFound,
    /// Playlist name already taken (case-insensitive)
    DuplicateName,
    /// Video is already a member of the playlist
    AlreadyInPlaylist,
    /// Video is not a member of the playlist
    NotInPlaylist,
    /// Video is moderation-flagged
    Flagged,
    /// Video is already flagged
    AlreadyFlagged,
    /// Video carries no flag to remove
    NotFlagged,
    /// Valid request that changes nothing (pause while paused, stop while
    /// stopped, ...)
    NoOp,
}

/// Result of one console operation: a kind plus ordered message lines.
///
/// Multi-line because a single operation can emit several notices, e.g.
/// playing over a running video produces a stop notice followed by a play
/// notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub lines: Vec<String>,
}

impl Outcome {
    /// Build an outcome with a single message line
    pub fn new(kind: OutcomeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            lines: vec![message.into()],
        }
    }

    /// Successful outcome with a single message line
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Ok, message)
    }

    /// No-op outcome with a single message line
    pub fn no_op(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::NoOp, message)
    }

    /// Successful outcome carrying several lines in display order
    pub fn ok_lines(lines: Vec<String>) -> Self {
        Self {
            kind: OutcomeKind::Ok,
            lines,
        }
    }

    /// Whether this outcome is a success
    pub fn succeeded(&self) -> bool {
        self.kind == OutcomeKind::Ok
    }

    /// All lines joined for single-string presentation
    pub fn message(&self) -> String {
        self.lines.join("\n")
    }
}
