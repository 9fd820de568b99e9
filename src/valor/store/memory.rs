use super::DataSource;
use crate::error::{Result, ValorError};
use crate::model::Record;

/// Fixed in-memory collection for testing and development.
///
/// Can also be set up to fail every fetch, to exercise the error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<Record>,
    failure: Option<String>,
}

impl InMemorySource {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            failure: None,
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(reason.into()),
        }
    }
}

impl DataSource for InMemorySource {
    fn fetch(&self) -> Result<Vec<Record>> {
        match &self.failure {
            Some(reason) => Err(ValorError::load(self.location(), reason)),
            None => Ok(self.records.clone()),
        }
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_records_in_order() {
        let source = InMemorySource::new(vec![Record::new("b", "B"), Record::new("a", "A")]);
        let ids: Vec<_> = source.fetch().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn failing_source_reports_load_error() {
        let err = InMemorySource::failing("offline").fetch().unwrap_err();
        assert!(err.is_load_error());
        assert!(err.to_string().contains("offline"));
    }
}
