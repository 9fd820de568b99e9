//! # Data Sources
//!
//! The collection comes from exactly one read-only JSON document: an ordered array of
//! record objects. The [`DataSource`] trait hides where that document lives.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: a file on disk (relative paths resolve against a base directory)
//! - [`http::HttpSource`]: an `http://` or `https://` URL fetched with a blocking GET
//! - [`memory::InMemorySource`]: fixed records or a fixed failure, for testing
//!
//! ## Failure
//!
//! Any problem getting the document, a non-success HTTP status, or a body that is
//! not an array of records surfaces as [`ValorError::Load`]. Nothing is retried.
//! Individual records are not validated beyond what deserialization tolerates.

use crate::error::{Result, ValorError};
use crate::model::Record;
use std::path::Path;

pub mod fs;
pub mod http;
pub mod memory;

/// Abstract interface over the one document holding the collection.
pub trait DataSource {
    /// Fetch and parse the whole collection, in document order.
    fn fetch(&self) -> Result<Vec<Record>>;

    /// Human readable location, used in messages and logs.
    fn location(&self) -> String;
}

/// The sources a location string can name.
#[derive(Debug, Clone)]
pub enum Source {
    File(fs::FileSource),
    Http(http::HttpSource),
}

impl Source {
    /// Picks the source kind from the location: URLs go over HTTP, anything else
    /// is a file path, relative to `base_dir` when not absolute.
    pub fn from_location(location: &str, base_dir: &Path) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            Source::Http(http::HttpSource::new(location))
        } else {
            Source::File(fs::FileSource::new(base_dir.join(location)))
        }
    }
}

impl DataSource for Source {
    fn fetch(&self) -> Result<Vec<Record>> {
        match self {
            Source::File(s) => s.fetch(),
            Source::Http(s) => s.fetch(),
        }
    }

    fn location(&self) -> String {
        match self {
            Source::File(s) => s.location(),
            Source::Http(s) => s.location(),
        }
    }
}

/// Parses a document body into records, mapping failure to a load error.
pub(crate) fn parse_records(location: &str, body: &str) -> Result<Vec<Record>> {
    serde_json::from_str(body).map_err(|e| ValorError::load(location, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn urls_use_http() {
        let source = Source::from_location("https://example.org/data/heroes.json", Path::new("/tmp"));
        assert!(matches!(source, Source::Http(_)));
        assert_eq!(source.location(), "https://example.org/data/heroes.json");
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let source = Source::from_location("data/heroes.json", Path::new("/srv/site"));
        match source {
            Source::File(f) => assert_eq!(f.path(), PathBuf::from("/srv/site/data/heroes.json")),
            Source::Http(_) => panic!("expected a file source"),
        }
    }

    #[test]
    fn absolute_paths_are_kept() {
        let source = Source::from_location("/var/data.json", Path::new("/srv/site"));
        match source {
            Source::File(f) => assert_eq!(f.path(), PathBuf::from("/var/data.json")),
            Source::Http(_) => panic!("expected a file source"),
        }
    }

    #[test]
    fn non_array_body_is_a_load_error() {
        let err = parse_records("x.json", r#"{"id": 1}"#).unwrap_err();
        assert!(err.is_load_error());
        let err = parse_records("x.json", "not json").unwrap_err();
        assert!(err.is_load_error());
    }

    #[test]
    fn array_body_keeps_document_order() {
        let records = parse_records(
            "x.json",
            r#"[{"id": 2, "name": "B"}, {"id": 1, "name": "A"}, {"id": "3", "name": "C"}]"#,
        )
        .unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }
}
