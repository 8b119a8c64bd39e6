//! Map-wide options set with `option` lines.

use crate::geometry::{Hex, Layout, Orientation};

/// Default template for per-region coordinate labels.
pub const DEFAULT_COORDINATES_FORMAT: &str = "{X}{Y}";

/// A single parsed `option` line.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionDirective {
    Horizontal,
    SwapEvenOdd,
    Global,
    CoordinatesFormat(String),
    /// `None` when the argument was malformed.
    CenteredAt(Option<Hex>),
    Theme(String),
    /// `None` when the argument was not a positive number.
    Zoom(Option<f64>),
}

/// Resolved map options.
///
/// Populated only while the option pass runs; read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub horizontal: bool,
    pub swap_even_odd: bool,
    /// Disables per-instance id namespacing.
    pub global: bool,
    pub coordinates_format: String,
    pub centered_at: Option<Hex>,
    pub theme: Option<String>,
    pub zoom: Option<f64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            horizontal: false,
            swap_even_odd: false,
            global: false,
            coordinates_format: DEFAULT_COORDINATES_FORMAT.to_string(),
            centered_at: None,
            theme: None,
            zoom: None,
        }
    }
}

impl Options {
    /// Apply one option directive, later directives overriding earlier ones.
    pub fn apply(&mut self, directive: OptionDirective) {
        match directive {
            OptionDirective::Horizontal => self.horizontal = true,
            OptionDirective::SwapEvenOdd => self.swap_even_odd = true,
            OptionDirective::Global => self.global = true,
            OptionDirective::CoordinatesFormat(format) => self.coordinates_format = format,
            OptionDirective::CenteredAt(hex) => self.centered_at = hex,
            OptionDirective::Theme(name) => self.theme = Some(name),
            OptionDirective::Zoom(zoom) => self.zoom = zoom,
        }
    }

    pub fn layout(&self) -> Layout {
        if self.horizontal {
            Layout::Horizontal
        } else {
            Layout::Vertical
        }
    }

    /// Build the grid geometry these options describe.
    pub fn orientation(&self) -> Orientation {
        Orientation::new(self.layout(), self.swap_even_odd)
    }

    /// Fill the coordinate template for a cell.
    pub fn format_coordinates(&self, hex: Hex) -> String {
        self.coordinates_format
            .replace("{X}", &format!("{:02}", hex.x))
            .replace("{Y}", &format!("{:02}", hex.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();

        assert!(!options.horizontal);
        assert!(!options.swap_even_odd);
        assert!(!options.global);
        assert_eq!(options.coordinates_format, "{X}{Y}");
        assert_eq!(options.centered_at, None);
        assert_eq!(options.layout(), Layout::Vertical);
    }

    #[test]
    fn test_apply_overrides() {
        let mut options = Options::default();
        options.apply(OptionDirective::Horizontal);
        options.apply(OptionDirective::CoordinatesFormat("{X}.{Y}".to_string()));
        options.apply(OptionDirective::CenteredAt(Some(Hex::new(4, 2))));

        assert_eq!(options.layout(), Layout::Horizontal);
        assert_eq!(options.coordinates_format, "{X}.{Y}");
        assert_eq!(options.centered_at, Some(Hex::new(4, 2)));
    }

    #[test]
    fn test_malformed_centered_at_clears() {
        let mut options = Options::default();
        options.apply(OptionDirective::CenteredAt(Some(Hex::new(4, 2))));
        options.apply(OptionDirective::CenteredAt(None));

        assert_eq!(options.centered_at, None);
    }

    #[test]
    fn test_format_coordinates() {
        let mut options = Options::default();
        assert_eq!(options.format_coordinates(Hex::new(3, 12)), "0312");

        options.coordinates_format = "{Y}/{X}".to_string();
        assert_eq!(options.format_coordinates(Hex::new(3, 12)), "12/03");
    }
}
