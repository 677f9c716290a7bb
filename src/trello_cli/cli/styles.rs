//! Styles for trello-cli output.
//!
//! Templates never name colors. They name what a piece of text *is* (a table
//! title, the id column, a success message) through the `style` filter, and
//! the theme below maps those names to `console::Style`s. Changing the look
//! of the CLI means editing this file only.
//!
//! Unknown style names are flagged with [`MISSING_STYLE_INDICATOR`] so a typo
//! in a template shows up in the output instead of silently rendering plain.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Semantic style names used by the templates.
pub mod names {
    pub const TITLE: &str = "title";
    pub const HEADER: &str = "header";
    pub const BORDER: &str = "border";

    /// Table cells are styled by column position.
    pub const COLUMNS: [&str; 3] = ["col_primary", "col_secondary", "col_tertiary"];

    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";

    pub fn column(index: usize) -> &'static str {
        COLUMNS[index % COLUMNS.len()]
    }
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Applies the named style. Styling is forced since the caller already
    /// decided colors are wanted.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    /// Same lookup as [`Theme::apply`] without ANSI codes.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.has(name) {
            text.to_string()
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }
}

pub static TRELLO_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::HEADER, Style::new().bold())
        .add(names::BORDER, Style::new().dim())
        .add(names::COLUMNS[0], Style::new().cyan())
        .add(names::COLUMNS[1], Style::new().magenta())
        .add(names::COLUMNS[2], Style::new().green())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_covers_every_semantic_name() {
        let mut all = vec![
            names::TITLE,
            names::HEADER,
            names::BORDER,
            names::INFO,
            names::SUCCESS,
            names::WARNING,
        ];
        all.extend(names::COLUMNS);
        for name in all {
            assert!(TRELLO_THEME.has(name), "missing style {}", name);
        }
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(TRELLO_THEME.apply_plain("nope", "text"), "(!?) text");
        assert_eq!(TRELLO_THEME.apply_plain(names::INFO, "text"), "text");
    }

    #[test]
    fn apply_emits_ansi() {
        let styled = TRELLO_THEME.apply(names::WARNING, "boom");
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("boom"));
    }

    #[test]
    fn columns_wrap_around() {
        assert_eq!(names::column(0), "col_primary");
        assert_eq!(names::column(3), "col_primary");
    }
}
