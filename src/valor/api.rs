//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for every valor operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Loads** the collection from its [`DataSource`] once per call ("page load")
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! The listing and detail entry points share nothing at runtime: each loads the
//! collection for itself.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`, `filter.rs` and `listing.rs`
//! - **I/O to the user**: No stdout, stderr, or terminal formatting
//!
//! ## Generic Over DataSource
//!
//! `ValorApi<S: DataSource>` works with any source:
//! - Production: `ValorApi<Source>` (file or HTTP)
//! - Testing: `ValorApi<InMemorySource>`

use crate::collection::Collection;
use crate::commands;
use crate::config::ValorConfig;
use crate::error::Result;
use crate::filter::{Category, FilterCriteria};
use crate::listing::ListingSession;
use crate::store::DataSource;

/// The main API facade for valor operations.
pub struct ValorApi<S: DataSource> {
    source: S,
    config: ValorConfig,
    paths: commands::ValorPaths,
}

impl<S: DataSource> ValorApi<S> {
    pub fn new(source: S, config: ValorConfig, paths: commands::ValorPaths) -> Self {
        Self {
            source,
            config,
            paths,
        }
    }

    /// One-shot listing with the given criteria applied.
    pub fn list(&self, criteria: &FilterCriteria) -> Result<commands::CmdResult> {
        let collection = Collection::load(&self.source)?;
        let mut session = ListingSession::ready(collection);
        apply_criteria(&mut session, criteria);
        Ok(commands::list::run(&session))
    }

    /// Detail view for one record id.
    pub fn view(&self, id: &str) -> Result<commands::CmdResult> {
        let collection = Collection::load(&self.source)?;
        commands::view::run(&collection, id, &self.config.images())
    }

    pub fn filters(&self) -> Result<commands::CmdResult> {
        let collection = Collection::load(&self.source)?;
        Ok(commands::filters::run(&collection))
    }

    /// Starts an interactive listing session. A failed load does not error here;
    /// the session comes back in its failed state for the UI to show.
    pub fn browse(&self) -> ListingSession {
        let mut session = ListingSession::new();
        session.finish_load(Collection::load(&self.source));
        session
    }

    pub fn config(
        &self,
        scope: commands::Scope,
        action: ConfigAction,
    ) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

fn apply_criteria(session: &mut ListingSession, criteria: &FilterCriteria) {
    if !criteria.search().is_empty() {
        session.set_search(criteria.search());
    }
    for category in Category::ALL {
        if let Some(value) = criteria.get(category) {
            session.set_category(category, Some(value.to_string()));
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, Scope, ValorPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::fixtures::sample_records;
    use crate::listing::ListingStatus;
    use crate::store::memory::InMemorySource;

    fn api_with(source: InMemorySource) -> ValorApi<InMemorySource> {
        let paths = ValorPaths {
            project: None,
            global: std::env::temp_dir(),
        };
        ValorApi::new(source, ValorConfig::default(), paths)
    }

    #[test]
    fn list_applies_criteria() {
        let api = api_with(InMemorySource::new(sample_records()));
        let result = api
            .list(&FilterCriteria::new().with(Category::War, "WWII"))
            .unwrap();
        assert_eq!(result.status, Some(ListingStatus::Results));
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].id, "1");
        assert_eq!(result.total, 2);
    }

    #[test]
    fn list_propagates_load_errors() {
        let api = api_with(InMemorySource::failing("HTTP error! status: 503"));
        let err = api.list(&FilterCriteria::new()).unwrap_err();
        assert!(err.is_load_error());
    }

    #[test]
    fn view_dispatches_to_detail() {
        let api = api_with(InMemorySource::new(sample_records()));
        let result = api.view("2").unwrap();
        assert_eq!(result.detail.unwrap().name, "Alvin York");
        assert!(api.view("99").unwrap_err().is_load_error());
    }

    #[test]
    fn filters_returns_vocabulary() {
        let api = api_with(InMemorySource::new(sample_records()));
        let vocab = api.filters().unwrap().vocabulary.unwrap();
        assert_eq!(vocab.states, vec!["NJ", "TN"]);
    }

    #[test]
    fn browse_returns_failed_session_instead_of_error() {
        let api = api_with(InMemorySource::failing("offline"));
        assert_eq!(api.browse().status(), ListingStatus::Failed);

        let api = api_with(InMemorySource::new(sample_records()));
        assert_eq!(api.browse().status(), ListingStatus::Results);
    }
}
