//! Terminal status output for the hexmap CLI.
//!
//! Status lines look like Cargo's: a right-aligned coloured verb followed by
//! a message. They go to stderr so stdout stays clean for SVG and JSON.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width of the verb column.
const VERB_WIDTH: usize = 12;

/// Colour of a status verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Progress,
    Info,
    Warning,
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Progress => GREEN,
            Tone::Info => CYAN,
            Tone::Warning => YELLOW,
        }
    }
}

/// Status printer; colour is on when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::with_color(io::stderr().is_terminal())
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// e.g. "   Rendering valley (12 regions)"
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Tone::Info, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Tone::Warning, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// One formatted status line, without the trailing newline.
    pub fn line(&self, tone: Tone, verb: &str, message: &str) -> String {
        if self.color {
            format!("{BOLD}{}{verb:>VERB_WIDTH$}{RESET} {message}", tone.code())
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }

    fn emit(&self, tone: Tone, verb: &str, message: &str) {
        let _ = writeln!(io::stderr().lock(), "{}", self.line(tone, verb, message));
    }
}

/// Pluralize a count: `plural(1, "map", "maps")` → "1 map".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { pluralized })
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    let Ok(cwd) = std::env::current_dir() else {
        return path.display().to_string();
    };
    match path.strip_prefix(&cwd) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
