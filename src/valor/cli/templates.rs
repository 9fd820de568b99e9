//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as stand-alone files in
//! `templates/` and embedded here as string constants.
//!
//! Layout math (widths, wrapping, padding, column splitting) happens in Rust, because
//! it needs Unicode-aware width handling. Templates only arrange the pre-computed
//! pieces and pick styles by name through the `style` filter.
//!
//! Line breaks are explicit: loop tags eat the newline that follows them (`-%}`) and
//! each body line carries its own trailing newline, so what a loop emits is exactly
//! what its body shows. `-%}` also eats leading spaces, so a loop whose body is
//! indented starts that body on the tag's own line: `{% for v in vs %}  {{ v }}`.

pub const CARD_GRID_TEMPLATE: &str = include_str!("templates/card_grid.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const VOCABULARY_TEMPLATE: &str = include_str!("templates/vocabulary.tmp");
pub const PANEL_TEMPLATE: &str = include_str!("templates/panel.tmp");
pub const COUNT_TEMPLATE: &str = include_str!("templates/count.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
