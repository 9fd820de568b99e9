//! Named styles applied from templates.
//!
//! Templates never carry ANSI codes. They name a style with the `style` filter,
//! `{{ record.name | style("card_title") }}`, and the [`Theme`] decides what that looks
//! like. When colour is off the filter passes text through unchanged, except that an
//! unknown style name is flagged with [`MISSING_STYLE_INDICATOR`] so typos show up in
//! plain output too.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, replacing any previous one with that name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

/// Whether stdout can show colour right now.
pub fn colors_supported() -> bool {
    Term::stdout().features().colors_supported()
}

/// Renders a template with explicit colour control.
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    let styles = theme.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles.apply(&name, &value.to_string(), use_color)
    });

    env.add_template_owned("_inline".to_string(), template.to_string())?;
    env.get_template("_inline")?.render(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Data {
        message: String,
    }

    #[test]
    fn plain_output_has_no_ansi() {
        let theme = Theme::new().add("ok", Style::new().green());
        let out = render_with_color(
            r#"{{ message | style("ok") }}"#,
            &Data {
                message: "fine".into(),
            },
            &theme,
            false,
        )
        .unwrap();
        assert_eq!(out, "fine");
    }

    #[test]
    fn colored_output_has_ansi() {
        let theme = Theme::new().add("ok", Style::new().green().force_styling(true));
        let out = render_with_color(
            r#"{{ message | style("ok") }}"#,
            &Data {
                message: "fine".into(),
            },
            &theme,
            true,
        )
        .unwrap();
        assert!(out.contains("fine"));
        assert!(out.contains("\x1b["));
    }

    #[test]
    fn unknown_style_is_flagged_even_without_color() {
        let theme = Theme::new();
        let out = render_with_color(
            r#"{{ message | style("nope") }}"#,
            &Data {
                message: "hi".into(),
            },
            &theme,
            false,
        )
        .unwrap();
        assert_eq!(out, "(!?) hi");
    }

    #[test]
    fn add_replaces_and_has_reports() {
        let theme = Theme::new().add("ok", Style::new()).add("ok", Style::new().red());
        assert!(theme.has("ok"));
        assert!(!theme.has("nope"));
    }

    #[test]
    fn syntax_errors_surface() {
        let out = render_with_color(
            "{{ unclosed",
            &Data {
                message: String::new(),
            },
            &Theme::new(),
            false,
        );
        assert!(out.is_err());
    }
}
