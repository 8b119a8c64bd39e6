//! Path line parsing.
//!
//! A path starts at a hex and walks a sequence of point segments. Segments
//! can be chained onto the start with dashes or follow the header:
//!
//! ```text
//! 0101-0102-0203 road
//! 0101 road 0102
//! 0305 river "Silver Run" right 30% se2 s1 0608
//! ```
//!
//! A segment is either an absolute hex (`0102`) or a compass move with a
//! distance (`se2`).

use crate::geometry::{Direction, Hex};
use crate::types::{Side, Step};

/// The parts of a path line, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSpline {
    pub kind: String,
    pub label: Option<String>,
    pub side: Option<Side>,
    pub label_start: Option<String>,
    pub start: Hex,
    pub steps: Vec<Step>,
}

/// Parse a four-digit `XXYY` hex token.
pub fn parse_hex(token: &str) -> Option<Hex> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let x = token[..2].parse().ok()?;
    let y = token[2..].parse().ok()?;
    Some(Hex::new(x, y))
}

/// Parse a single point segment token.
pub fn parse_step(token: &str) -> Option<Step> {
    if let Some(hex) = parse_hex(token) {
        return Some(Step::To(hex));
    }

    let split = token.find(|c: char| c.is_ascii_digit())?;
    let (abbrev, digits) = token.split_at(split);
    let direction = Direction::from_abbrev(abbrev)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let distance = digits.parse().ok()?;
    Some(Step::Toward {
        direction,
        distance,
    })
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

/// Split the next segment off the front of `s`.
///
/// Leading whitespace and one dash are skipped. Returns `None` when the
/// front of `s` is not a segment.
pub fn split_segment(s: &str) -> Option<(Step, &str)> {
    let s = s.trim_start();
    let s = s.strip_prefix('-').unwrap_or(s);
    let end = s.find(is_separator).unwrap_or(s.len());
    let step = parse_step(&s[..end])?;
    Some((step, &s[end..]))
}

/// Split off the first whitespace-delimited token.
fn next_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    (&s[..end], &s[end..])
}

/// Parse a path line. Returns `None` if the line is not a path.
pub fn parse_spline(line: &str) -> Option<ParsedSpline> {
    let start = parse_hex(line.get(..4)?)?;
    let mut rest = &line[4..];
    let mut steps = Vec::new();

    // Segments chained directly onto the start: 0101-0102-0203
    while let Some(after_dash) = rest.strip_prefix('-') {
        let end = after_dash.find(is_separator).unwrap_or(after_dash.len());
        steps.push(parse_step(&after_dash[..end])?);
        rest = &after_dash[end..];
    }

    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let (kind, after_kind) = next_token(rest);
    if kind.is_empty() || kind.starts_with('"') {
        return None;
    }
    rest = after_kind;

    let mut label = None;
    if let Some(quoted) = rest.trim_start().strip_prefix('"') {
        if let Some(close) = quoted.find('"') {
            if close > 0 {
                label = Some(quoted[..close].to_string());
            }
            rest = &quoted[close + 1..];
        }
    }

    let mut side = None;
    let (token, after) = next_token(rest);
    if let Some(s) = Side::from_keyword(token) {
        side = Some(s);
        rest = after;
    }

    let mut label_start = None;
    let (token, after) = next_token(rest);
    if is_percentage(token) {
        label_start = Some(token.to_string());
        rest = after;
    }

    while let Some((step, remainder)) = split_segment(rest) {
        steps.push(step);
        rest = remainder;
    }

    if steps.is_empty() {
        return None;
    }

    Some(ParsedSpline {
        kind: kind.to_string(),
        label,
        side,
        label_start,
        start,
        steps,
    })
}

fn is_percentage(token: &str) -> bool {
    token
        .strip_suffix('%')
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}
