//! `option` line interpretation.
//!
//! Options are read in a pass of their own before anything else, because
//! they decide the grid geometry every other line is placed on.
//!
//! ```text
//! option horizontal
//! option swap-even-odd
//! option coordinates-format {X}.{Y}
//! option centered-at 0402
//! option centered-at 5 10
//! ```

use crate::geometry::Hex;
use crate::types::OptionDirective;

/// Return the argument text of an `option` line.
pub fn option_directive(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("option")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim())
}

/// Interpret the argument text of an `option` line.
///
/// Unknown keys yield `None` and are ignored by the caller.
pub fn parse_option(args: &str) -> Option<OptionDirective> {
    let mut tokens = args.split_whitespace();
    let key = tokens.next()?;
    let rest: Vec<&str> = tokens.collect();

    match key {
        "horizontal" => Some(OptionDirective::Horizontal),
        "swap-even-odd" => Some(OptionDirective::SwapEvenOdd),
        "global" => Some(OptionDirective::Global),
        "coordinates-format" => Some(OptionDirective::CoordinatesFormat(rest.join(" "))),
        "centered-at" => Some(OptionDirective::CenteredAt(parse_centered_at(&rest))),
        "theme" => rest
            .first()
            .map(|name| OptionDirective::Theme(name.to_lowercase())),
        "zoom" => Some(OptionDirective::Zoom(parse_zoom(&rest))),
        _ => None,
    }
}

/// Accepts `XXYY` as a single token or `X Y` as two tokens.
fn parse_centered_at(tokens: &[&str]) -> Option<Hex> {
    let first = tokens.first()?;

    if first.len() == 4 && first.bytes().all(|b| b.is_ascii_digit()) {
        let x = first[..2].parse().ok()?;
        let y = first[2..].parse().ok()?;
        return Some(Hex::new(x, y));
    }

    if let [x, y, ..] = tokens {
        let x = x.parse().ok()?;
        let y = y.parse().ok()?;
        return Some(Hex::new(x, y));
    }

    None
}

fn parse_zoom(tokens: &[&str]) -> Option<f64> {
    let zoom: f64 = tokens.first()?.parse().ok()?;
    (zoom.is_finite() && zoom > 0.0).then_some(zoom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_directive() {
        assert_eq!(option_directive("option horizontal"), Some("horizontal"));
        assert_eq!(option_directive("option   global  "), Some("global"));
        assert_eq!(option_directive("optional thing"), None);
        assert_eq!(option_directive("0101 option"), None);
    }

    #[test]
    fn test_flags() {
        assert_eq!(parse_option("horizontal"), Some(OptionDirective::Horizontal));
        assert_eq!(parse_option("swap-even-odd"), Some(OptionDirective::SwapEvenOdd));
        assert_eq!(parse_option("global"), Some(OptionDirective::Global));
    }

    #[test]
    fn test_coordinates_format_takes_rest_of_line() {
        assert_eq!(
            parse_option("coordinates-format {X} / {Y}"),
            Some(OptionDirective::CoordinatesFormat("{X} / {Y}".to_string()))
        );
    }

    #[test]
    fn test_centered_at_four_digits() {
        assert_eq!(
            parse_option("centered-at 0402"),
            Some(OptionDirective::CenteredAt(Some(Hex::new(4, 2))))
        );
    }

    #[test]
    fn test_centered_at_two_tokens() {
        assert_eq!(
            parse_option("centered-at 5 10"),
            Some(OptionDirective::CenteredAt(Some(Hex::new(5, 10))))
        );
    }

    #[test]
    fn test_centered_at_malformed() {
        assert_eq!(
            parse_option("centered-at 04x2"),
            Some(OptionDirective::CenteredAt(None))
        );
        assert_eq!(
            parse_option("centered-at a b"),
            Some(OptionDirective::CenteredAt(None))
        );
        assert_eq!(
            parse_option("centered-at"),
            Some(OptionDirective::CenteredAt(None))
        );
    }

    #[test]
    fn test_theme_is_lowercased() {
        assert_eq!(
            parse_option("theme Tag-And-Tally"),
            Some(OptionDirective::Theme("tag-and-tally".to_string()))
        );
        assert_eq!(parse_option("theme"), None);
    }

    #[test]
    fn test_zoom() {
        assert_eq!(parse_option("zoom 1.5"), Some(OptionDirective::Zoom(Some(1.5))));
        assert_eq!(parse_option("zoom -2"), Some(OptionDirective::Zoom(None)));
        assert_eq!(parse_option("zoom big"), Some(OptionDirective::Zoom(None)));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(parse_option("sparkles on"), None);
        assert_eq!(parse_option(""), None);
    }
}
