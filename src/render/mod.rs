//! Scene assembly for compiled maps.
//!
//! Regions and paths render themselves into [`Element`] fragments given a
//! [`RenderContext`]; [`SceneBuilder`] stacks those fragments into the
//! layered SVG document.

mod element;
mod namespace;
mod region;
mod scene;
mod spline;

pub use element::{escape_xml, Element, Node};
pub use namespace::{collapse_whitespace, references, Namespace, Reference, ReferenceKind};
pub use scene::{SceneBuilder, Viewport, LAYERS};

use crate::geometry::{Orientation, Point};
use crate::types::{Options, StyleTables};

/// Everything a region or path needs to render itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub orientation: &'a Orientation,
    pub options: &'a Options,
    pub styles: &'a StyleTables,
    pub namespace: &'a Namespace,
}

/// Format a pixel coordinate for an SVG attribute.
pub(crate) fn coord(value: f64) -> String {
    format!("{value:.1}")
}

/// Space separated point list for `points` attributes.
pub(crate) fn point_list<'p>(points: impl IntoIterator<Item = &'p Point>) -> String {
    points
        .into_iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
