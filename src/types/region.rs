//! A single hex cell parsed from a map line.

use crate::geometry::Hex;

/// Variant code used when a region line gives none.
pub const DEFAULT_VARIANT: &str = "00";

/// One hex cell: coordinates, optional label and its type tags.
///
/// Regions are kept in source order. Two lines naming the same cell produce
/// two regions which both render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub hex: Hex,
    /// Two-digit elevation/variant code.
    pub variant: String,
    pub label: Option<String>,
    /// Font size for the label, paired with it.
    pub size: Option<String>,
    /// Type tags in source order.
    pub types: Vec<String>,
}

impl Region {
    pub fn new(hex: Hex) -> Self {
        Self {
            hex,
            variant: DEFAULT_VARIANT.to_string(),
            label: None,
            size: None,
            types: Vec::new(),
        }
    }

    /// Identifier for the region's outline shape, before namespacing.
    pub fn id(&self) -> String {
        format!("hex.{}.{}", self.hex.x, self.hex.y)
    }
}
