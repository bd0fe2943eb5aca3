//! Plain-text catalog file parser
//!
//! One video per line: `Title | video_id | tag1,tag2`. Fields are
//! pipe-separated with surrounding whitespace trimmed; the tag field is
//! comma-separated and may be empty. Blank lines are skipped.

use super::VideoCatalog;
use crate::model::Video;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Catalog file loading failures
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog line {line}: expected 'Title|video_id|tags', got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("duplicate video id {id:?} on line {line}")]
    DuplicateId { id: String, line: usize },
}

/// Parse a catalog file and build the in-memory catalog
pub fn load_catalog(path: &Path) -> Result<VideoCatalog, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut catalog = VideoCatalog::new();

    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let video = parse_line(line, index + 1)?;
        if catalog.get(&video.id).is_some() {
            return Err(CatalogError::DuplicateId {
                id: video.id,
                line: index + 1,
            });
        }
        catalog.insert(video);
    }

    log::info!("Loaded {} videos from catalog {:?}", catalog.len(), path);
    Ok(catalog)
}

/// Convert one catalog line to a video
fn parse_line(line: &str, line_number: usize) -> Result<Video, CatalogError> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() < 2 || fields[0].is_empty() || fields[1].is_empty() {
        return Err(CatalogError::MalformedLine {
            line: line_number,
            content: line.to_string(),
        });
    }

    let tags = fields
        .get(2)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Ok(Video::new(fields[0], fields[1], tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_well_formed_catalog() {
        let file = write_catalog(
            "Amazing Cats | amazing_cats_video_id | #cat,#animal\n\
             Another Cat Video | another_cat_video_id | #cat,#animal\n\
             \n\
             Video about nothing | nothing_video_id |\n",
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);

        let cats = catalog.get("amazing_cats_video_id").unwrap();
        assert_eq!(cats.title, "Amazing Cats");
        assert_eq!(cats.tags, ["#cat", "#animal"]);

        let nothing = catalog.get("nothing_video_id").unwrap();
        assert!(nothing.tags.is_empty());
    }

    #[test]
    fn test_malformed_line_is_rejected() {
        let file = write_catalog("Amazing Cats | v1 | #cat\njust a title\n");

        match load_catalog(file.path()) {
            Err(CatalogError::MalformedLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let file = write_catalog("Amazing Cats | v1 | #cat\nFunny Dogs | v1 | #dog\n");

        match load_catalog(file.path()) {
            Err(CatalogError::DuplicateId { id, line }) => {
                assert_eq!(id, "v1");
                assert_eq!(line, 2);
            }
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_catalog(Path::new("/nonexistent/videos.txt"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
