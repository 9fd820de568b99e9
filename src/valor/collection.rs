use crate::error::{Result, ValorError};
use crate::filter::{self, FilterCriteria, FilteredView};
use crate::model::Record;
use crate::store::DataSource;
use crate::vocabulary::Vocabulary;
use tracing::{info, warn};

/// The full, read-only collection plus the vocabularies taken from it.
///
/// Built once per load. The vocabulary is extracted here and nowhere else, so it
/// always reflects every record rather than whatever is currently filtered.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    records: Vec<Record>,
    vocabulary: Vocabulary,
}

impl Collection {
    pub fn from_records(records: Vec<Record>) -> Self {
        let vocabulary = Vocabulary::extract(&records);
        Self {
            records,
            vocabulary,
        }
    }

    /// Fetches the whole collection from a source.
    pub fn load<S: DataSource>(source: &S) -> Result<Self> {
        match source.fetch() {
            Ok(records) => {
                info!(
                    location = %source.location(),
                    count = records.len(),
                    "loaded record collection"
                );
                Ok(Self::from_records(records))
            }
            Err(e) => {
                warn!(location = %source.location(), error = %e, "failed to load record collection");
                Err(e)
            }
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> FilteredView {
        filter::apply(&self.records, criteria)
    }

    /// Finds the record with exactly this id. An empty id never matches.
    pub fn find(&self, id: &str) -> Result<&Record> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ValorError::RecordNotFound(String::new()));
        }
        self.records
            .iter()
            .find(|r| r.has_id(id))
            .ok_or_else(|| ValorError::RecordNotFound(id.to_string()))
    }
}
