//! Attribute list scanning.

use crate::types::Attributes;

/// Collect every `name="value"` pair from an attribute list.
///
/// Text that is not part of a pair is ignored, so stray words and
/// unbalanced quotes never fail the line. Later keys overwrite earlier ones.
pub fn parse_attributes(s: &str) -> Attributes {
    let mut attributes = Attributes::new();
    let mut rest = s;

    while let Some(eq) = rest.find("=\"") {
        let before = &rest[..eq];
        let name = if before.ends_with(char::is_whitespace) {
            ""
        } else {
            before.split_whitespace().last().unwrap_or("")
        };

        let after = &rest[eq + 2..];
        let Some(close) = after.find('"') else {
            break;
        };

        if !name.is_empty() {
            attributes.set(name, &after[..close]);
        }
        rest = &after[close + 1..];
    }

    attributes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_pairs() {
        let attrs = parse_attributes(r##"fill="none" stroke="#ccc" stroke-width="3""##);

        let entries: Vec<_> = attrs.iter().collect();
        assert_eq!(
            entries,
            vec![("fill", "none"), ("stroke", "#ccc"), ("stroke-width", "3")]
        );
    }

    #[test]
    fn test_values_may_contain_spaces() {
        let attrs = parse_attributes(r#"stroke-dasharray="10 10" transform="translate(0,20)""#);

        assert_eq!(attrs.get("stroke-dasharray"), Some("10 10"));
        assert_eq!(attrs.get("transform"), Some("translate(0,20)"));
    }

    #[test]
    fn test_empty_value() {
        let attrs = parse_attributes(r#"class="""#);
        assert_eq!(attrs.get("class"), Some(""));
    }

    #[test]
    fn test_later_keys_overwrite() {
        let attrs = parse_attributes(r#"fill="red" fill="blue""#);

        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("fill"), Some("blue"));
    }

    #[test]
    fn test_ignores_noise() {
        let attrs = parse_attributes(r#"junk fill="red" ="orphan" open="unterminated"#);

        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("fill"), Some("red"));
    }

    #[test]
    fn test_adjacent_pairs() {
        let attrs = parse_attributes(r#"a="1"b="2""#);

        assert_eq!(attrs.get("a"), Some("1"));
        assert_eq!(attrs.get("b"), Some("2"));
    }

    #[test]
    fn test_nothing_to_parse() {
        assert!(parse_attributes("").is_empty());
        assert!(parse_attributes("no pairs here").is_empty());
    }
}
