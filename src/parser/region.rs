//! Hex region line parsing.
//!
//! ```text
//! 0101 forest
//! 010203 mountain "Old Peak" 20 snow
//! ```
//!
//! Two-digit x and y, an optional two-digit variant, then any number of
//! quoted labels (each with an optional size) and the type tags.

use crate::geometry::Hex;
use crate::types::Region;

use super::spline::parse_step;

fn two_digits(line: &str, at: usize) -> Option<i32> {
    let digits = line.get(at..at + 2)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// A quoted label found in the rest of a region line.
struct LabelMatch {
    text: String,
    size: Option<String>,
    /// Byte range to cut out of the line.
    start: usize,
    end: usize,
}

/// Find the first `"text"` (optionally followed by a size) in `s`.
fn find_label(s: &str) -> Option<LabelMatch> {
    let mut search_from = 0;
    loop {
        let open = search_from + s[search_from..].find('"')?;
        let close = open + 1 + s[open + 1..].find('"')?;
        if close == open + 1 {
            // Empty quotes are not a label
            search_from = close + 1;
            continue;
        }

        let text = s[open + 1..close].to_string();
        let mut end = close + 1;

        let after = &s[end..];
        let trimmed = after.trim_start();
        let token_len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let token = &trimmed[..token_len];
        let size = if is_size(token) {
            end += after.len() - trimmed.len() + token_len;
            Some(token.to_string())
        } else {
            None
        };

        return Some(LabelMatch {
            text,
            size,
            start: open,
            end,
        });
    }
}

/// A font size: digits with an optional fraction and unit (`20`, `1.5em`).
fn is_size(token: &str) -> bool {
    let unit_start = token
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(token.len());
    let (number, unit) = token.split_at(unit_start);
    number.starts_with(|c: char| c.is_ascii_digit())
        && number.parse::<f64>().is_ok()
        && unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%')
}

/// Parse a hex region line. Returns `None` if the line is not a region.
///
/// A line whose tags include a point segment (`0101 road 0102`) describes
/// a path and is left for the path recognizer.
pub fn parse_region(line: &str) -> Option<Region> {
    let x = two_digits(line, 0)?;
    let y = two_digits(line, 2)?;

    let mut region = Region::new(Hex::new(x, y));
    let mut pos = 4;
    if two_digits(line, 4).is_some() {
        region.variant = line[4..6].to_string();
        pos = 6;
    }

    let mut rest = line[pos..].to_string();
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    while let Some(found) = find_label(&rest) {
        region.label = Some(found.text);
        region.size = found.size;
        rest.replace_range(found.start..found.end, " ");
    }

    region.types = rest.split_whitespace().map(str::to_string).collect();

    if region.types.iter().any(|t| parse_step(t).is_some()) {
        return None;
    }

    Some(region)
}
