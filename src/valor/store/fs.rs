use super::{parse_records, DataSource};
use crate::error::{Result, ValorError};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the collection from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn fetch(&self) -> Result<Vec<Record>> {
        let location = self.location();
        debug!(path = %location, "reading record file");
        let body = fs::read_to_string(&self.path).map_err(|e| ValorError::load(&location, e))?;
        parse_records(&location, &body)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_records_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("heroes.json");
        fs::write(
            &path,
            r#"[{"id": 1, "name": "John Basilone", "war": "WWII", "state": "NJ"}]"#,
        )
        .unwrap();

        let records = FileSource::new(&path).fetch().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "John Basilone");
        assert_eq!(records[0].id, "1");
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempdir().unwrap();
        let err = FileSource::new(dir.path().join("nope.json"))
            .fetch()
            .unwrap_err();
        assert!(err.is_load_error());
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn malformed_file_is_a_load_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[{\"id\": 1,").unwrap();

        let err = FileSource::new(&path).fetch().unwrap_err();
        assert!(matches!(err, ValorError::Load { .. }));
    }

    #[test]
    fn empty_array_is_a_valid_collection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "[]").unwrap();

        assert!(FileSource::new(&path).fetch().unwrap().is_empty());
    }
}
