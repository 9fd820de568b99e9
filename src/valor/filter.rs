//! # Filter and Search Engine
//!
//! Given the full collection and the current [`FilterCriteria`], [`apply`] produces the
//! [`FilteredView`]: the records accepted by every active predicate.
//!
//! ## Predicates
//!
//! - **Search**: the trimmed term, lowercased, must be a substring of the lowercased
//!   name, short story or full story. An empty or whitespace-only term accepts everything.
//! - **War / State / Award**: exact equality with the record's field. Unset accepts
//!   everything.
//!
//! A record is in the view iff all four accept it. There is no ranking.
//!
//! ## Recomputation
//!
//! The view is always rebuilt from the full collection, never from a previous view,
//! and keeps the collection's order. Clearing the criteria therefore gives back the
//! whole collection in its original order.

use crate::model::Record;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The categorical dimensions a view can be narrowed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    War,
    State,
    Award,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::War, Category::State, Category::Award];

    pub fn value_of<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Category::War => &record.war,
            Category::State => &record.state,
            Category::Award => &record.award,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::War => "war",
            Category::State => "state",
            Category::Award => "award",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "war" => Ok(Category::War),
            "state" => Ok(Category::State),
            "award" => Ok(Category::Award),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// The active search term and category selections.
///
/// Lives only for the session that owns it. An empty selection is the same as
/// no selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    search: String,
    war: Option<String>,
    state: Option<String>,
    award: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.set_search(term);
        self
    }

    pub fn with(mut self, category: Category, value: impl Into<String>) -> Self {
        self.set(category, Some(value.into()));
        self
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set(&mut self, category: Category, value: Option<String>) {
        let value = value.filter(|v| !v.is_empty());
        match category {
            Category::War => self.war = value,
            Category::State => self.state = value,
            Category::Award => self.award = value,
        }
    }

    pub fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::War => self.war.as_deref(),
            Category::State => self.state.as_deref(),
            Category::Award => self.award.as_deref(),
        }
    }

    /// The search text as typed.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The normalized search term, or `None` when search is effectively unset.
    pub fn search_term(&self) -> Option<String> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_unset(&self) -> bool {
        self.search_term().is_none() && Category::ALL.iter().all(|c| self.get(*c).is_none())
    }
}

/// Indices into the full collection of the records that passed every predicate,
/// in collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView {
    indices: Vec<usize>,
    total: usize,
}

impl FilteredView {
    /// A view holding every record of a collection of `total` records.
    pub fn everything(total: usize) -> Self {
        Self {
            indices: (0..total).collect(),
            total,
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Size of the collection the view was taken from.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Resolves the view against the collection it was computed from.
    pub fn records<'a>(&'a self, all: &'a [Record]) -> impl Iterator<Item = &'a Record> + 'a {
        self.indices.iter().filter_map(move |&i| all.get(i))
    }
}

/// Rebuilds the filtered view from the full collection.
pub fn apply(records: &[Record], criteria: &FilterCriteria) -> FilteredView {
    let term = criteria.search_term();
    let indices = records
        .iter()
        .enumerate()
        .filter(|(_, record)| accepts(record, criteria, term.as_deref()))
        .map(|(i, _)| i)
        .collect();

    FilteredView {
        indices,
        total: records.len(),
    }
}

fn accepts(record: &Record, criteria: &FilterCriteria, term: Option<&str>) -> bool {
    let matches_search = match term {
        None => true,
        Some(term) => {
            record.name.to_lowercase().contains(term)
                || record.short_story.to_lowercase().contains(term)
                || record.full_story.to_lowercase().contains(term)
        }
    };

    matches_search
        && Category::ALL.iter().all(|category| match criteria.get(*category) {
            None => true,
            Some(wanted) => category.value_of(record) == wanted,
        })
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::Record;

    pub fn record(id: &str, name: &str, war: &str, state: &str, short_story: &str) -> Record {
        let mut r = Record::new(id, name);
        r.war = war.to_string();
        r.state = state.to_string();
        r.award = "Medal of Honor".to_string();
        r.short_story = short_story.to_string();
        r.full_story = "...".to_string();
        r
    }

    /// Basilone and York: the two-record collection most tests reason about.
    pub fn sample_records() -> Vec<Record> {
        vec![
            record("1", "John Basilone", "WWII", "NJ", "machine gunner"),
            record("2", "Alvin York", "WWI", "TN", "captured soldiers"),
        ]
    }

    pub fn wider_records() -> Vec<Record> {
        let mut records = sample_records();
        let mut murphy = record("3", "Audie Murphy", "WWII", "TX", "held off a company alone");
        murphy.award = "Distinguished Service Cross".to_string();
        murphy.full_story = "Climbed onto a burning tank destroyer.".to_string();
        records.push(murphy);
        records.push(record("4", "Sgt. Henry Johnson", "WWI", "NY", "fought off a raid"));
        let mut doss = record("5", "Desmond Doss", "WWII", "VA", "medic who carried 75 men");
        doss.full_story = "Refused to carry a weapon; SOLDIERS owed him their lives.".to_string();
        records.push(doss);
        records
    }
}
