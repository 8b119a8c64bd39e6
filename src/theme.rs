//! Built-in theme preambles.
//!
//! A theme is ordinary map source (styles, symbol geometry and raw
//! definitions) prepended to the user's lines before compiling.

use std::fmt;

/// Name of the theme used when nothing else is requested.
pub const DEFAULT_THEME: &str = "tag-and-tally";

const TAG_AND_TALLY: &str = include_str!("../themes/tag-and-tally.txt");

/// A built-in theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Pastel terrain fills, iconography and dashed roads.
    #[default]
    TagAndTally,
    /// No preamble at all.
    Plain,
}

impl Theme {
    pub fn all() -> [Theme; 2] {
        [Theme::TagAndTally, Theme::Plain]
    }

    /// Look up a theme by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Theme> {
        match name.trim().to_lowercase().as_str() {
            "tag-and-tally" => Some(Theme::TagAndTally),
            "plain" | "none" => Some(Theme::Plain),
            _ => None,
        }
    }

    /// Like [`from_name`](Self::from_name) but falls back to the default
    /// theme for unknown names.
    pub fn resolve(name: &str) -> Theme {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme = name, "unknown theme, using {DEFAULT_THEME}");
            Theme::default()
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::TagAndTally => "tag-and-tally",
            Theme::Plain => "plain",
        }
    }

    /// The theme's source text.
    pub fn preamble(self) -> &'static str {
        match self {
            Theme::TagAndTally => TAG_AND_TALLY,
            Theme::Plain => "",
        }
    }

    /// The theme's source split into lines.
    pub fn lines(self) -> impl Iterator<Item = &'static str> {
        self.preamble().lines()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
