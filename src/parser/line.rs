//! Line shape recognition.
//!
//! Every non-option line is tried against the shapes below in a fixed
//! order; the first that matches wins. Lines matching nothing are dropped.

use crate::types::{Attributes, Region};

use super::attributes::parse_attributes;
use super::region::parse_region;
use super::spline::{parse_spline, ParsedSpline};

/// One recognized map line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    /// `0101 forest "Label" 12`
    Region(Region),
    /// `0101-0102 road` or `0101 road 0102`
    Spline(ParsedSpline),
    /// `plains attributes fill="green"`
    Attributes {
        name: &'a str,
        attributes: Attributes,
    },
    /// `<circle id="dot" r="5"/>`
    Definition(&'a str),
    /// `road path attributes stroke="black"`
    PathAttributes {
        name: &'a str,
        attributes: Attributes,
    },
    /// `tree path M 0,0 l 10,10 z`
    Path { name: &'a str, geometry: &'a str },
    /// `text font-size="20pt"`
    Text(Attributes),
    /// `glow stroke="white"`
    Glow(Attributes),
    /// `label font-size="20pt"`
    Label(Attributes),
}

/// Lines starting with `#` are comments.
pub fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// Split a leading keyword off a line; the keyword must be followed by
/// whitespace or end the line.
fn keyword<'a>(line: &'a str, word: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(word)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Split `name <word> rest` where `name` is the first token.
fn named<'a>(line: &'a str, word: &str) -> Option<(&'a str, &'a str)> {
    let end = line.find(char::is_whitespace)?;
    let name = &line[..end];
    if name.is_empty() {
        return None;
    }
    let rest = keyword(line[end..].trim_start(), word)?;
    Some((name, rest))
}

impl<'a> Line<'a> {
    /// Recognize the shape of a line.
    pub fn recognize(line: &'a str) -> Option<Line<'a>> {
        if let Some(region) = parse_region(line) {
            return Some(Line::Region(region));
        }

        if let Some(spline) = parse_spline(line) {
            return Some(Line::Spline(spline));
        }

        if let Some((name, rest)) = named(line, "attributes") {
            return Some(Line::Attributes {
                name,
                attributes: parse_attributes(rest),
            });
        }

        if line.starts_with('<') {
            return Some(Line::Definition(line));
        }

        if let Some((name, rest)) = named(line, "path") {
            if let Some(attrs) = keyword(rest, "attributes") {
                return Some(Line::PathAttributes {
                    name,
                    attributes: parse_attributes(attrs),
                });
            }
            return Some(Line::Path {
                name,
                geometry: rest,
            });
        }

        if let Some(rest) = keyword(line, "text") {
            return Some(Line::Text(parse_attributes(rest)));
        }

        if let Some(rest) = keyword(line, "glow") {
            return Some(Line::Glow(parse_attributes(rest)));
        }

        if let Some(rest) = keyword(line, "label") {
            return Some(Line::Label(parse_attributes(rest)));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Hex;

    #[test]
    fn test_region_line() {
        let Some(Line::Region(region)) = Line::recognize("0101 forest") else {
            panic!("expected region");
        };
        assert_eq!(region.hex, Hex::new(1, 1));
    }

    #[test]
    fn test_spline_line() {
        let Some(Line::Spline(spline)) = Line::recognize("0101 road 0102") else {
            panic!("expected spline");
        };
        assert_eq!(spline.kind, "road");
    }

    #[test]
    fn test_attributes_line() {
        let line = Line::recognize(r##"plains attributes fill="#D6E6B8""##);
        assert_eq!(
            line,
            Some(Line::Attributes {
                name: "plains",
                attributes: Attributes::new().with("fill", "#D6E6B8"),
            })
        );
    }

    #[test]
    fn test_definition_line() {
        let source = r#"<circle id="level" r="15"/>"#;
        assert_eq!(Line::recognize(source), Some(Line::Definition(source)));
    }

    #[test]
    fn test_path_attributes_before_path() {
        let line = Line::recognize(r##"road path attributes stroke="#666""##);
        assert!(matches!(
            line,
            Some(Line::PathAttributes { name: "road", .. })
        ));
    }

    #[test]
    fn test_path_geometry() {
        let line = Line::recognize("hill path M -10,0 l 20,0 z");
        assert_eq!(
            line,
            Some(Line::Path {
                name: "hill",
                geometry: "M -10,0 l 20,0 z",
            })
        );
    }

    #[test]
    fn test_style_lines() {
        assert!(matches!(
            Line::recognize(r#"text font-size="20pt""#),
            Some(Line::Text(_))
        ));
        assert!(matches!(
            Line::recognize(r#"glow stroke="white""#),
            Some(Line::Glow(_))
        ));
        assert!(matches!(
            Line::recognize(r#"label font-size="20pt" dy="5px""#),
            Some(Line::Label(_))
        ));
    }

    #[test]
    fn test_named_attributes_take_priority_over_style_keywords() {
        assert!(matches!(
            Line::recognize(r#"text attributes fill="red""#),
            Some(Line::Attributes { name: "text", .. })
        ));
    }

    #[test]
    fn test_unmatched_lines() {
        assert_eq!(Line::recognize("/* Districts */"), None);
        assert_eq!(Line::recognize("option horizontal"), None);
        assert_eq!(Line::recognize("  0101 forest"), None);
        assert_eq!(Line::recognize("textual nonsense"), None);
        assert_eq!(Line::recognize(""), None);
    }

    #[test]
    fn test_comment() {
        assert!(is_comment("# Tag and Tally"));
        assert!(!is_comment("0101 forest # not a comment"));
    }
}
