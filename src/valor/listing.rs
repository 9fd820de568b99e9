//! # Listing Session
//!
//! [`ListingSession`] is the state object behind a listing page. It owns the loaded
//! collection, the current criteria and the current view; the filter engine updates
//! it and renderers only read it.
//!
//! ## Lifecycle
//!
//! ```text
//! new() ──► Loading ──finish_load(Ok)──► Ready ──set_* / clear──► Ready
//!                  └──finish_load(Err)─► Failed
//! ```
//!
//! The page [`ListingStatus`] is derived from that: `Loading`, `Failed`,
//! `NoResults` or `Results`. Being an enum, exactly one of them holds at a time.
//!
//! Every change to the criteria recomputes the view from the full collection.
//! Criteria changes made before the load finishes are kept and applied once it does.

use crate::collection::Collection;
use crate::error::{Result, ValorError};
use crate::filter::{Category, FilterCriteria, FilteredView};
use crate::model::Record;
use crate::vocabulary::Vocabulary;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Loading,
    Failed,
    NoResults,
    Results,
}

#[derive(Debug)]
enum Phase {
    Loading,
    Failed(ValorError),
    Ready {
        collection: Collection,
        view: FilteredView,
    },
}

#[derive(Debug)]
pub struct ListingSession {
    phase: Phase,
    criteria: FilterCriteria,
    recomputations: usize,
}

impl Default for ListingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            criteria: FilterCriteria::new(),
            recomputations: 0,
        }
    }

    /// A session whose load already succeeded.
    pub fn ready(collection: Collection) -> Self {
        let mut session = Self::new();
        session.finish_load(Ok(collection));
        session
    }

    /// Ends the loading phase. Only the first call has any effect: a load is not
    /// retried within a session.
    pub fn finish_load(&mut self, outcome: Result<Collection>) {
        if !matches!(self.phase, Phase::Loading) {
            return;
        }
        self.phase = match outcome {
            Ok(collection) => {
                let view = collection.filter(&self.criteria);
                Phase::Ready { collection, view }
            }
            Err(e) => Phase::Failed(e),
        };
    }

    pub fn status(&self) -> ListingStatus {
        match &self.phase {
            Phase::Loading => ListingStatus::Loading,
            Phase::Failed(_) => ListingStatus::Failed,
            Phase::Ready { view, .. } if view.is_empty() => ListingStatus::NoResults,
            Phase::Ready { .. } => ListingStatus::Results,
        }
    }

    pub fn error(&self) -> Option<&ValorError> {
        match &self.phase {
            Phase::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn collection(&self) -> Option<&Collection> {
        match &self.phase {
            Phase::Ready { collection, .. } => Some(collection),
            _ => None,
        }
    }

    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.collection().map(Collection::vocabulary)
    }

    pub fn view(&self) -> Option<&FilteredView> {
        match &self.phase {
            Phase::Ready { view, .. } => Some(view),
            _ => None,
        }
    }

    /// The records currently in view, in collection order.
    pub fn visible(&self) -> Vec<&Record> {
        match &self.phase {
            Phase::Ready { collection, view } => view.records(collection.records()).collect(),
            _ => Vec::new(),
        }
    }

    /// `(matched, total)` once loaded.
    pub fn counts(&self) -> Option<(usize, usize)> {
        self.view().map(|v| (v.len(), v.total()))
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// How many times the view has been rebuilt after the initial load.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.set_search(term);
        self.recompute();
    }

    pub fn set_category(&mut self, category: Category, value: Option<String>) {
        self.criteria.set(category, value);
        self.recompute();
    }

    pub fn clear(&mut self) {
        self.criteria.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        if let Phase::Ready { collection, view } = &mut self.phase {
            *view = collection.filter(&self.criteria);
            self.recomputations += 1;
            debug!(
                search = %self.criteria.search(),
                war = ?self.criteria.get(Category::War),
                state = ?self.criteria.get(Category::State),
                award = ?self.criteria.get(Category::Award),
                matched = view.len(),
                total = view.total(),
                "recomputed filtered view"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::fixtures::{sample_records, wider_records};

    fn ids(session: &ListingSession) -> Vec<String> {
        session.visible().iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn starts_loading() {
        let session = ListingSession::new();
        assert_eq!(session.status(), ListingStatus::Loading);
        assert!(session.view().is_none());
        assert!(session.visible().is_empty());
    }

    #[test]
    fn successful_load_shows_everything() {
        let session = ListingSession::ready(Collection::from_records(sample_records()));
        assert_eq!(session.status(), ListingStatus::Results);
        assert_eq!(ids(&session), vec!["1", "2"]);
        assert_eq!(session.counts(), Some((2, 2)));
    }

    #[test]
    fn failed_load_is_its_own_state() {
        let mut session = ListingSession::new();
        session.finish_load(Err(ValorError::load("x", "HTTP error! status: 500")));
        assert_eq!(session.status(), ListingStatus::Failed);
        assert!(session.error().unwrap().is_load_error());

        // Filtering a failed session changes nothing and is not an error.
        session.set_search("york");
        assert_eq!(session.status(), ListingStatus::Failed);
        assert_eq!(session.recomputations(), 0);
    }

    #[test]
    fn load_is_not_retried() {
        let mut session = ListingSession::new();
        session.finish_load(Err(ValorError::load("x", "offline")));
        session.finish_load(Ok(Collection::from_records(sample_records())));
        assert_eq!(session.status(), ListingStatus::Failed);
    }

    #[test]
    fn empty_result_is_distinct_from_failure() {
        let mut session = ListingSession::ready(Collection::from_records(sample_records()));
        session.set_category(Category::War, Some("WWII".into()));
        session.set_search("soldiers");
        assert_eq!(session.status(), ListingStatus::NoResults);
        assert!(session.error().is_none());
        assert_eq!(session.counts(), Some((0, 2)));
    }

    #[test]
    fn empty_collection_has_no_results() {
        let session = ListingSession::ready(Collection::from_records(Vec::new()));
        assert_eq!(session.status(), ListingStatus::NoResults);
    }

    #[test]
    fn each_change_recomputes_from_the_full_collection() {
        let mut session = ListingSession::ready(Collection::from_records(wider_records()));
        session.set_category(Category::War, Some("WWI".into()));
        assert_eq!(ids(&session), vec!["2", "4"]);

        // Switching war must not be filtered against the previous WWI subset.
        session.set_category(Category::War, Some("WWII".into()));
        assert_eq!(ids(&session), vec!["1", "3", "5"]);

        session.set_category(Category::War, None);
        assert_eq!(ids(&session), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(session.recomputations(), 3);
    }

    #[test]
    fn clear_round_trips_to_the_original_view() {
        let mut session = ListingSession::ready(Collection::from_records(wider_records()));
        let original: Vec<String> = ids(&session);

        session.set_search("o");
        session.set_category(Category::State, Some("TX".into()));
        session.set_category(Category::Award, Some("Medal of Honor".into()));
        session.set_search("zzz");
        assert_eq!(session.status(), ListingStatus::NoResults);

        session.clear();
        assert_eq!(ids(&session), original);
        assert!(session.criteria().is_unset());
        assert_eq!(session.status(), ListingStatus::Results);
    }

    #[test]
    fn criteria_set_while_loading_apply_after_load() {
        let mut session = ListingSession::new();
        session.set_search("york");
        session.finish_load(Ok(Collection::from_records(sample_records())));
        assert_eq!(ids(&session), vec!["2"]);
    }

    #[test]
    fn vocabulary_reflects_the_whole_collection() {
        let mut session = ListingSession::ready(Collection::from_records(sample_records()));
        session.set_category(Category::War, Some("WWII".into()));
        let vocab = session.vocabulary().unwrap();
        assert_eq!(vocab.wars, vec!["WWI", "WWII"]);
        assert_eq!(vocab.states, vec!["NJ", "TN"]);
    }
}
