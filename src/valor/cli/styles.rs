use super::theme::Theme;
use console::Style;
use once_cell::sync::Lazy;

/// Style names used by the templates.
pub mod names {
    pub const CARD_TITLE: &str = "card_title";
    pub const FIELD: &str = "field";
    pub const AWARD: &str = "award";
    pub const STORY: &str = "story";
    pub const MUTED: &str = "muted";
    pub const LINK: &str = "link";
    pub const RULE: &str = "rule";
    pub const HEADING: &str = "heading";
    pub const LABEL: &str = "label";
    pub const COUNT: &str = "count";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static VALOR_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::CARD_TITLE, Style::new().bold())
        .add(names::FIELD, Style::new())
        .add(names::AWARD, Style::new().yellow().bold())
        .add(names::STORY, Style::new().italic())
        .add(names::MUTED, Style::new().color256(246))
        .add(names::LINK, Style::new().cyan())
        .add(names::RULE, Style::new().color256(240))
        .add(names::HEADING, Style::new().bold().underlined())
        .add(names::LABEL, Style::new().color256(246))
        .add(names::COUNT, Style::new().dim())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red().bold())
});
