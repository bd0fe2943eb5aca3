use serde::{Deserialize, Serialize};
use std::fmt;

/// A single video in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier, assigned by the catalog
    pub id: String,

    /// Video title
    pub title: String,

    /// Tags (fixed at creation, order preserved)
    pub tags: Vec<String>,

    /// Moderation flag reason; `Some` iff the video is flagged
    flag: Option<String>,
}

impl Video {
    /// Create a new unflagged video
    pub fn new(
        title: impl Into<String>,
        id: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
            flag: None,
        }
    }

    /// Whether the video is currently flagged
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// Flag reason, if the video is flagged
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    /// Mark the video as flagged with the given reason
    pub fn set_flag(&mut self, reason: impl Into<String>) {
        self.flag = Some(reason.into());
    }

    /// Remove the moderation flag
    pub fn clear_flag(&mut self) {
        self.flag = None;
    }

    /// Display form with the flag annotation used by the catalog-wide listing
    pub fn annotated(&self) -> String {
        match self.flag_reason() {
            Some(reason) => format!("{} - FLAGGED (reason: {})", self, reason),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for Video {
    /// Formats as `Title (video_id) [tag1 tag2]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let video = Video::new(
            "Amazing Cats",
            "v1",
            vec!["#cat".to_string(), "#animal".to_string()],
        );
        assert_eq!(video.to_string(), "Amazing Cats (v1) [#cat #animal]");
    }

    #[test]
    fn test_display_no_tags() {
        let video = Video::new("Untagged", "v9", Vec::new());
        assert_eq!(video.to_string(), "Untagged (v9) []");
    }

    #[test]
    fn test_flag_lifecycle() {
        let mut video = Video::new("Funny Dogs", "v2", vec!["#dog".to_string()]);
        assert!(!video.is_flagged());
        assert_eq!(video.flag_reason(), None);

        video.set_flag("spam");
        assert!(video.is_flagged());
        assert_eq!(video.flag_reason(), Some("spam"));
        assert_eq!(
            video.annotated(),
            "Funny Dogs (v2) [#dog] - FLAGGED (reason: spam)"
        );

        video.clear_flag();
        assert!(!video.is_flagged());
        assert_eq!(video.annotated(), "Funny Dogs (v2) [#dog]");
    }
}
