//! Catalog search
//!
//! Filters the catalog to non-flagged videos matching a title substring or
//! an exact tag (both case-insensitive), sorted ascending by title. The
//! caller presents the hits as a 1-based numbered list and may hand a single
//! ordinal back to [`resolve_choice`]; anything out of range means the user
//! declined.

use crate::catalog::VideoCatalog;
use crate::model::Video;

/// One search result: the playable id plus its display line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub video_id: String,
    pub display: String,
}

/// Videos whose title contains `term`, case-insensitively
pub fn search_by_title(catalog: &VideoCatalog, term: &str) -> Vec<SearchHit> {
    let needle = term.to_lowercase();
    collect_hits(catalog, |video| {
        video.title.to_lowercase().contains(&needle)
    })
}

/// Videos carrying `tag` (case-insensitive exact match)
pub fn search_by_tag(catalog: &VideoCatalog, tag: &str) -> Vec<SearchHit> {
    let needle = tag.to_lowercase();
    collect_hits(catalog, |video| {
        video.tags.iter().any(|t| t.to_lowercase() == needle)
    })
}

/// Resolve the user's 1-based pick against the last result list.
///
/// `None` or an out-of-range ordinal means no selection was made.
pub fn resolve_choice(hits: &[SearchHit], choice: Option<usize>) -> Option<&str> {
    let choice = choice?;
    if (1..=hits.len()).contains(&choice) {
        Some(&hits[choice - 1].video_id)
    } else {
        None
    }
}

fn collect_hits<F>(catalog: &VideoCatalog, predicate: F) -> Vec<SearchHit>
where
    F: Fn(&Video) -> bool,
{
    let mut matches: Vec<&Video> = catalog
        .videos()
        .filter(|video| !video.is_flagged())
        .filter(|video| predicate(video))
        .collect();
    matches.sort_by(|a, b| a.title.cmp(&b.title));

    log::debug!("search: {} hits", matches.len());
    matches
        .into_iter()
        .map(|video| SearchHit {
            video_id: video.id.clone(),
            display: video.to_string(),
        })
        .collect()
}
