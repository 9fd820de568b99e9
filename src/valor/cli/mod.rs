//! # CLI Behavior
//!
//! This is **one possible UI client** for valor, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the `valor` library.
//!
//! ### Naked Execution (`valor`)
//!
//! Running `valor` with no arguments defaults to `valor list`: every record, in
//! collection order, with the "Showing N of M records" line above the cards.
//!
//! ### One-shot and Interactive
//!
//! - `valor list --search soldiers --war WWI`: one listing, then exit.
//! - `valor browse`: each line typed is the new search, applied once typing settles.
//! - `valor view 12`: one record in full. An unknown id is an error (exit 1).
//!
//! ### Pages and Regions
//!
//! Output is assembled on a page made of regions (loading, error, no-results, count,
//! grid, detail, messages). Renderers ask the page whether a region exists before
//! writing; `--no-count` or `show-count = false` builds the listing page without its
//! count region.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print
//! - `browse`: The interactive loop and its debounced search
//! - `render`: Card grid, detail, panels and messages
//! - `setup`: Argument parsing via clap, help text
//! - `surface`: Pages and their regions
//! - `styles` / `theme`: Named terminal styles and the template `style` filter
//! - `templates`: Output templates

mod browse;
mod commands;
mod render;
pub mod setup;
mod styles;
mod surface;
mod templates;
mod theme;

pub use commands::run;
pub use render::render_error;
