//! # Valor Architecture
//!
//! Valor is a **UI-agnostic record browsing library**: it loads a fixed collection of
//! biographical records, narrows it with a search term and category selections, and
//! projects single records onto a detail view. The `valor` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards, runs the browse loop    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads the collection once per call                       │
//! │  - Dispatches to commands, returns `Result<CmdResult>`      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (filter.rs, listing.rs, vocabulary.rs, detail.rs,     │
//! │        debounce.rs, commands/*.rs)                          │
//! │  - Pure logic over in-memory records                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Source Layer (store/)                                 │
//! │  - `DataSource` trait: file, HTTP, in-memory                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! `raw collection → vocabulary extraction → criteria → predicate evaluation →
//! filtered view → render`
//!
//! Nothing here keeps ambient state. A [`listing::ListingSession`] owns the collection,
//! the criteria and the current view for as long as a listing is on screen.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the process
//! and never reads a clock on its own ([`debounce::Debouncer`] is handed the time).
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Per-operation logic producing `CmdResult`s
//! - [`filter`]: Criteria, predicates and the filtered view
//! - [`listing`]: The listing state object and its page status
//! - [`vocabulary`]: Distinct war/state/award values
//! - [`debounce`]: Quiescence-window coalescing of search input
//! - [`detail`]: Record → detail view projection
//! - [`collection`]: The loaded collection
//! - [`store`]: Data sources
//! - [`model`]: The `Record` type
//! - [`images`]: Image reference resolution
//! - [`config`], [`init`]: Configuration and context setup
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod detail;
pub mod error;
pub mod filter;
pub mod images;
pub mod init;
pub mod listing;
pub mod model;
pub mod store;
pub mod vocabulary;
