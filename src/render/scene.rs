//! Layered SVG scene assembly.
//!
//! The document is built in a fixed order, later layers drawing over
//! earlier ones:
//!
//! 1. header: root `<svg>` viewport and the white background rectangle
//! 2. defs: raw definitions and one symbol group per type
//! 3. backgrounds, paths, things, coordinates, regions, path labels and
//!    labels, each a namespaced `<g>` layer

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Point};
use crate::types::{Region, Spline};

use super::{coord, point_list, Element, RenderContext};

/// Layer group ids, in drawing order.
pub const LAYERS: [&str; 7] = [
    "backgrounds",
    "paths",
    "things",
    "coordinates",
    "regions",
    "path-labels",
    "labels",
];

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Logical size of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `viewBox` value for a window of this size centred on `centre`.
    pub fn view_box(&self, centre: Point) -> String {
        format!(
            "{} {} {} {}",
            coord(centre.x - self.width / 2.0),
            coord(centre.y - self.height / 2.0),
            coord(self.width),
            coord(self.height)
        )
    }
}

/// Builds the scene tree for one compiled map.
pub struct SceneBuilder<'a> {
    ctx: RenderContext<'a>,
    regions: &'a [Region],
    splines: &'a [Spline],
    definitions: &'a [String],
}

impl<'a> SceneBuilder<'a> {
    pub fn new(
        ctx: RenderContext<'a>,
        regions: &'a [Region],
        splines: &'a [Spline],
        definitions: &'a [String],
    ) -> Self {
        Self {
            ctx,
            regions,
            splines,
            definitions,
        }
    }

    /// Every distinct type used by a region or path, sorted.
    pub fn types(&self) -> BTreeSet<&'a str> {
        self.regions
            .iter()
            .flat_map(|r| r.types.iter().map(String::as_str))
            .chain(self.splines.iter().map(|s| s.kind.as_str()))
            .collect()
    }

    /// Assemble the full document.
    pub fn build(&self, viewport: Viewport, centre: Point, bounds: Option<Bounds>) -> Element {
        let mut svg = self.header(viewport, centre, bounds);
        svg.push(self.defs());
        svg.push(self.layer("backgrounds", self.regions.iter().flat_map(|r| r.backgrounds(&self.ctx))));
        svg.push(self.layer("paths", self.splines.iter().filter_map(|s| s.connector(&self.ctx))));
        svg.push(self.layer("things", self.regions.iter().flat_map(|r| r.things(&self.ctx))));
        svg.push(self.layer("coordinates", self.regions.iter().map(|r| r.coordinates(&self.ctx))));
        svg.push(self.layer("regions", self.regions.iter().map(|r| r.outline(&self.ctx))));
        svg.push(self.layer(
            "path-labels",
            self.splines.iter().filter_map(|s| s.label_element(&self.ctx)),
        ));
        svg.push(self.layer("labels", self.regions.iter().filter_map(|r| r.label_element(&self.ctx))));
        svg
    }

    fn header(&self, viewport: Viewport, centre: Point, bounds: Option<Bounds>) -> Element {
        let mut svg = Element::new("svg")
            .attr("xmlns", SVG_NS)
            .attr("xmlns:xlink", XLINK_NS)
            .attr("viewBox", viewport.view_box(centre))
            .attr("class", "textmapper-svg");

        if let Some(bounds) = bounds {
            svg.push(
                Element::new("rect")
                    .attr("x", format!("{:.0}", bounds.min_x))
                    .attr("y", format!("{:.0}", bounds.min_y))
                    .attr("width", format!("{:.0}", bounds.width()))
                    .attr("height", format!("{:.0}", bounds.height()))
                    .attr("fill", "white"),
            );
        }
        svg
    }

    fn defs(&self) -> Element {
        let mut defs = Element::new("defs");
        for markup in self.definitions {
            defs = defs.raw(markup.as_str());
        }
        for kind in self.types() {
            defs.extend(self.symbol(kind));
        }
        defs
    }

    /// The symbol group for one type: glow halo, fill polygon, then the
    /// stroked geometry, each only when the type defines what it needs.
    ///
    /// Types with neither fill nor geometry get no group, so a raw
    /// definition of the same name stays the one their `<use>` finds.
    fn symbol(&self, kind: &str) -> Option<Element> {
        let styles = self.ctx.styles;
        let fill = styles.attributes.get(kind);
        let geometry = styles.paths.get(kind);
        if fill.is_none() && geometry.is_none() {
            return None;
        }

        let mut group = Element::new("g").attr("id", self.ctx.namespace.apply(kind));

        if let (Some(d), None) = (geometry, fill) {
            group.push(Element::new("path").attrs(&styles.glow).attr("d", d.as_str()));
        }

        if let Some(attributes) = fill {
            group.push(
                Element::new("polygon")
                    .attrs(attributes)
                    .attr("points", point_list(&self.ctx.orientation.hex_corners())),
            );
        }

        if let Some(d) = geometry {
            let mut path = Element::new("path");
            if let Some(attributes) = styles.path_attributes.get(kind) {
                path = path.attrs(attributes);
            }
            group.push(path.attr("d", d.as_str()));
        }

        Some(group)
    }

    fn layer(&self, name: &str, children: impl IntoIterator<Item = Element>) -> Element {
        let mut group = Element::new("g").attr("id", self.ctx.namespace.apply(name));
        group.extend(children);
        group
    }
}
