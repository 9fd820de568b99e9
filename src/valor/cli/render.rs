//! # Rendering Module
//!
//! Turns `CmdResult`s and listing sessions into terminal text through the templates
//! in `templates/` and the named styles in `styles.rs`.
//!
//! ## Design Philosophy
//!
//! Layout calculations (card width, wrapping, column count, padding) stay in Rust
//! because they need Unicode-aware width handling. Templates handle presentation:
//! - Style selection by name
//! - Row/section separators
//! - Optional hint lines

use super::styles::{names, VALOR_THEME};
use super::surface::{Region, Surface};
use super::templates::{
    CARD_GRID_TEMPLATE, CONFIG_TEMPLATE, COUNT_TEMPLATE, DETAIL_TEMPLATE, MESSAGES_TEMPLATE,
    PANEL_TEMPLATE, VOCABULARY_TEMPLATE,
};
use super::theme::{colors_supported, render_with_color};
use console::Term;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use valor::api::{CmdMessage, CmdResult, MessageLevel};
use valor::config::ValorConfig;
use valor::detail::DetailView;
use valor::error::ValorError;
use valor::filter::Category;
use valor::images::ImageResolver;
use valor::listing::ListingStatus;
use valor::model::Record;
use valor::vocabulary::Vocabulary;

pub const CARD_WIDTH: usize = 36;
pub const GUTTER: &str = "   ";
pub const MAX_COLUMNS: usize = 3;
pub const DEFAULT_WIDTH: usize = 100;
pub const STORY_LINES: usize = 4;
pub const DETAIL_WIDTH: usize = 76;
const LABEL_WIDTH: usize = 18;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub use_color: bool,
    pub width: usize,
}

impl RenderOptions {
    /// Colour and width as the attached terminal reports them.
    pub fn detect() -> Self {
        let width = Term::stdout()
            .size_checked()
            .map(|(_, cols)| cols as usize)
            .unwrap_or(DEFAULT_WIDTH);
        Self {
            use_color: colors_supported(),
            width,
        }
    }

    pub fn plain(width: usize) -> Self {
        Self {
            use_color: false,
            width,
        }
    }
}

#[derive(Serialize)]
struct Cell {
    text: String,
    pad: String,
    style: &'static str,
}

#[derive(Serialize)]
struct GridRow {
    lines: Vec<Vec<Cell>>,
}

#[derive(Serialize)]
struct GridData {
    rows: Vec<GridRow>,
    gutter: &'static str,
}

#[derive(Serialize)]
struct PanelData {
    headline: String,
    style: &'static str,
    hint: Option<String>,
}

#[derive(Serialize)]
struct CountData {
    summary: String,
}

#[derive(Serialize)]
struct Slot {
    label: String,
    pad: String,
    value: String,
}

#[derive(Serialize)]
struct Section {
    heading: &'static str,
    slots: Vec<Slot>,
}

#[derive(Serialize)]
struct DetailData {
    title: String,
    name: String,
    rank_line: String,
    award: String,
    image: String,
    sections: Vec<Section>,
    biography: Vec<String>,
}

#[derive(Serialize)]
struct VocabularyGroup {
    heading: &'static str,
    values: Vec<String>,
}

#[derive(Serialize)]
struct VocabularyData {
    groups: Vec<VocabularyGroup>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    pad: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

/// Number of card columns that fit in `width`.
pub fn columns_for(width: usize) -> usize {
    let per_card = CARD_WIDTH + GUTTER.width();
    ((width + GUTTER.width()) / per_card).clamp(1, MAX_COLUMNS)
}

pub fn count_summary(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "record" } else { "records" };
    format!("Showing {} of {} {}", shown, total, noun)
}

/// Fills a listing page from a listing result.
///
/// Exactly one of the grid, no-results and error regions ends up filled. The count
/// is written only if the page has a count region and the collection loaded.
pub fn render_listing<S: Surface>(
    surface: &mut S,
    result: &CmdResult,
    images: &ImageResolver,
    opts: RenderOptions,
) {
    let warnings: Vec<CmdMessage> = result
        .messages
        .iter()
        .filter(|m| matches!(m.level, MessageLevel::Warning))
        .cloned()
        .collect();
    if warnings.is_empty() {
        surface.clear(Region::Messages);
    } else {
        surface.write(Region::Messages, render_messages(&warnings, opts));
    }

    match result.status {
        Some(ListingStatus::Failed) => {
            let reason = result
                .messages
                .iter()
                .find(|m| matches!(m.level, MessageLevel::Error))
                .map(|m| m.content.clone())
                .unwrap_or_else(|| "Failed to load records.".to_string());
            surface.show_state(
                Region::Error,
                panel(
                    &format!("✖ Error: {}", reason),
                    names::ERROR,
                    Some("Please try again later.".to_string()),
                    opts,
                ),
            );
            surface.clear(Region::Count);
            return;
        }
        Some(ListingStatus::Loading) | None => {
            surface.show_state(Region::Loading, panel("Loading records…", names::MUTED, None, opts));
            surface.clear(Region::Count);
            return;
        }
        Some(ListingStatus::NoResults) => {
            let hint = result
                .messages
                .iter()
                .find(|m| matches!(m.level, MessageLevel::Info))
                .map(|m| m.content.clone());
            surface.show_state(
                Region::NoResults,
                panel("No records found.", names::WARNING, hint, opts),
            );
        }
        Some(ListingStatus::Results) => {
            surface.show_state(Region::Grid, render_cards(&result.listed, images, opts));
        }
    }

    if surface.has_region(Region::Count) {
        surface.write(
            Region::Count,
            render_template(
                COUNT_TEMPLATE,
                &CountData {
                    summary: count_summary(result.listed.len(), result.total),
                },
                opts,
            ),
        );
    }
}

/// Loading indicator for a listing or detail page.
pub fn render_loading<S: Surface>(surface: &mut S, location: &str, opts: RenderOptions) {
    surface.show_state(
        Region::Loading,
        panel(&format!("Loading records from {}…", location), names::MUTED, None, opts),
    );
}

pub fn render_cards(records: &[Record], images: &ImageResolver, opts: RenderOptions) -> String {
    let columns = columns_for(opts.width);
    let rows = records
        .chunks(columns)
        .map(|chunk| {
            let cards: Vec<Vec<(String, &'static str)>> =
                chunk.iter().map(|r| card_lines(r, images)).collect();
            let height = cards.iter().map(Vec::len).max().unwrap_or(0);
            let lines = (0..height)
                .map(|i| {
                    cards
                        .iter()
                        .map(|card| {
                            let (text, style) = card
                                .get(i)
                                .cloned()
                                .unwrap_or_else(|| (String::new(), names::FIELD));
                            let pad = " ".repeat(CARD_WIDTH.saturating_sub(text.width()));
                            Cell { text, pad, style }
                        })
                        .collect::<Vec<Cell>>()
                })
                .collect::<Vec<_>>();
            GridRow { lines }
        })
        .collect();

    render_template(
        CARD_GRID_TEMPLATE,
        &GridData {
            rows,
            gutter: GUTTER,
        },
        opts,
    )
}

fn card_lines(record: &Record, images: &ImageResolver) -> Vec<(String, &'static str)> {
    let w = CARD_WIDTH;
    let mut lines = vec![
        (truncate_to_width(&record.name, w), names::CARD_TITLE),
        (truncate_to_width(&record.year, w), names::MUTED),
        (truncate_to_width(&format!("State: {}", record.state), w), names::FIELD),
        (truncate_to_width(&format!("War: {}", record.war), w), names::FIELD),
        (truncate_to_width(&format!("Regiment: {}", record.regiment), w), names::FIELD),
        (truncate_to_width(&format!("★ {}", record.award), w), names::AWARD),
        (String::new(), names::FIELD),
    ];

    let mut story = wrap_to_width(&record.short_story, w);
    if story.len() > STORY_LINES {
        story.truncate(STORY_LINES);
        if let Some(last) = story.last_mut() {
            *last = truncate_to_width(&format!("{}…", last), w);
        }
    }
    lines.extend(story.into_iter().map(|l| (l, names::STORY)));

    lines.push((String::new(), names::FIELD));
    lines.push((truncate_to_width(&images.resolve(record), w), names::MUTED));
    lines.push((truncate_to_width(&format!("→ valor view {}", record.id), w), names::LINK));
    lines.push(("─".repeat(w), names::RULE));
    lines
}

pub fn render_detail(detail: &DetailView, opts: RenderOptions) -> String {
    let slot = |label: &str, value: &str| Slot {
        label: label.to_string(),
        pad: " ".repeat(LABEL_WIDTH.saturating_sub(label.width())),
        value: value.to_string(),
    };

    let data = DetailData {
        title: detail.title.clone(),
        name: detail.name.clone(),
        rank_line: detail.rank_line.clone(),
        award: format!("★ {}", detail.award),
        image: detail.image.clone(),
        sections: vec![
            Section {
                heading: "Personal Details",
                slots: vec![
                    slot("Born", &detail.born),
                    slot("Died", &detail.died),
                    slot("Age", &detail.age),
                    slot("Hometown", &detail.hometown),
                    slot("State", &detail.state),
                    slot("Regiment", &detail.regiment),
                ],
            },
            Section {
                heading: "Service",
                slots: vec![
                    slot("War", &detail.war),
                    slot("Battle location", &detail.battle_location),
                    slot("Year", &detail.year),
                ],
            },
            Section {
                heading: "Additional Information",
                slots: vec![
                    slot("Family", &detail.family),
                    slot("Education", &detail.education),
                    slot("Motto", &detail.motto),
                ],
            },
        ],
        biography: wrap_to_width(&detail.biography, DETAIL_WIDTH.min(opts.width.max(20))),
    };

    render_template(DETAIL_TEMPLATE, &data, opts)
}

pub fn render_vocabulary(vocabulary: &Vocabulary, opts: RenderOptions) -> String {
    let data = VocabularyData {
        groups: Category::ALL
            .into_iter()
            .map(|category| VocabularyGroup {
                heading: match category {
                    Category::War => "Wars",
                    Category::State => "States",
                    Category::Award => "Awards",
                },
                values: vocabulary.values(category).to_vec(),
            })
            .collect(),
    };
    render_template(VOCABULARY_TEMPLATE, &data, opts)
}

pub fn render_config(config: &ValorConfig, opts: RenderOptions) -> String {
    let entries = config.entries();
    let key_width = entries.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let data = ConfigData {
        entries: entries
            .into_iter()
            .map(|(key, value)| ConfigEntry {
                pad: " ".repeat(key_width.saturating_sub(key.width())),
                key,
                value,
            })
            .collect(),
    };
    render_template(CONFIG_TEMPLATE, &data, opts)
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], opts: RenderOptions) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_with_color(MESSAGES_TEMPLATE, &data, &VALOR_THEME, opts.use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// The error panel, styled for stderr.
pub fn render_error(err: &ValorError) -> String {
    let opts = RenderOptions {
        use_color: Term::stderr().features().colors_supported(),
        width: DEFAULT_WIDTH,
    };
    render_error_with(err, opts)
}

pub fn render_error_with(err: &ValorError, opts: RenderOptions) -> String {
    let hint = match err {
        ValorError::RecordNotFound(_) => Some("Use `valor list` to find a record id.".to_string()),
        ValorError::Load { .. } => Some("Please try again later.".to_string()),
        _ => None,
    };
    let mut out = panel(&format!("✖ Error: {}", err), names::ERROR, hint, opts);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn panel(headline: &str, style: &'static str, hint: Option<String>, opts: RenderOptions) -> String {
    render_template(
        PANEL_TEMPLATE,
        &PanelData {
            headline: headline.to_string(),
            style,
            hint,
        },
        opts,
    )
}

fn render_template<T: Serialize>(template: &str, data: &T, opts: RenderOptions) -> String {
    render_with_color(template, data, &VALOR_THEME, opts.use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Greedy word wrap by display width. Words wider than a line are truncated.
pub fn wrap_to_width(s: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in s.split_whitespace() {
        let word = truncate_to_width(word, max_width);
        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= max_width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
