//! Distinct category values used to populate filter choices.
//!
//! A vocabulary is taken once over the full collection, right after it is
//! loaded. It never follows the filtered view: every value present in the data
//! stays selectable no matter what the current criteria are.

use crate::filter::Category;
use crate::model::Record;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    pub wars: Vec<String>,
    pub states: Vec<String>,
    pub awards: Vec<String>,
}

impl Vocabulary {
    pub fn extract(records: &[Record]) -> Self {
        Self {
            wars: distinct(records, Category::War),
            states: distinct(records, Category::State),
            awards: distinct(records, Category::Award),
        }
    }

    pub fn values(&self, category: Category) -> &[String] {
        match category {
            Category::War => &self.wars,
            Category::State => &self.states,
            Category::Award => &self.awards,
        }
    }

    pub fn contains(&self, category: Category, value: &str) -> bool {
        self.values(category)
            .binary_search_by(|v| v.as_str().cmp(value))
            .is_ok()
    }
}

fn distinct(records: &[Record], category: Category) -> Vec<String> {
    records
        .iter()
        .map(|r| category.value_of(r))
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
