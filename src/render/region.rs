//! Rendering of a single hex region across the scene layers.

use crate::geometry::Point;
use crate::types::{Attributes, Region};

use super::{coord, point_list, Element, RenderContext};

impl Region {
    /// Pixel centre of this region.
    pub fn centre(&self, ctx: &RenderContext<'_>) -> Point {
        ctx.orientation.pixels(self.hex)
    }

    /// Symbol references for the types that have fill attributes.
    pub fn backgrounds(&self, ctx: &RenderContext<'_>) -> Vec<Element> {
        self.symbols(ctx, |kind| ctx.styles.is_background(kind))
    }

    /// Symbol references for the types drawn on top of the backgrounds.
    pub fn things(&self, ctx: &RenderContext<'_>) -> Vec<Element> {
        self.symbols(ctx, |kind| !ctx.styles.is_background(kind))
    }

    fn symbols(&self, ctx: &RenderContext<'_>, keep: impl Fn(&str) -> bool) -> Vec<Element> {
        let centre = self.centre(ctx);
        self.types
            .iter()
            .filter(|kind| keep(kind))
            .map(|kind| {
                Element::new("use")
                    .attr("x", coord(centre.x))
                    .attr("y", coord(centre.y))
                    .attr("href", ctx.namespace.href(kind))
            })
            .collect()
    }

    /// The coordinate label above the centre.
    pub fn coordinates(&self, ctx: &RenderContext<'_>) -> Element {
        let at = self.centre(ctx).offset(0.0, -ctx.orientation.text_offset());
        Element::new("text")
            .attr("text-anchor", "middle")
            .attr("x", coord(at.x))
            .attr("y", coord(at.y))
            .attrs(&ctx.styles.text)
            .text(ctx.options.format_coordinates(self.hex))
    }

    /// The hex outline drawn with the `default` attributes.
    pub fn outline(&self, ctx: &RenderContext<'_>) -> Element {
        let centre = self.centre(ctx);
        let corners: Vec<Point> = ctx
            .orientation
            .hex_corners()
            .iter()
            .map(|c| centre.offset(c.x, c.y))
            .collect();

        let mut polygon = Element::new("polygon").attr("id", ctx.namespace.apply(&self.id()));
        if let Some(attributes) = ctx.styles.default_attributes() {
            polygon = polygon.attrs(attributes);
        }
        polygon.attr("points", point_list(&corners))
    }

    /// The name label below the centre, with its glow backdrop.
    pub fn label_element(&self, ctx: &RenderContext<'_>) -> Option<Element> {
        let label = self.label.as_deref()?;
        let at = self.centre(ctx).offset(0.0, ctx.orientation.text_offset());

        let text = |extra: Option<&Attributes>| {
            let mut e = Element::new("text")
                .attr("text-anchor", "middle")
                .attr("x", coord(at.x))
                .attr("y", coord(at.y))
                .attrs(&ctx.styles.label);
            if let Some(extra) = extra {
                e = e.attrs(extra);
            }
            if let Some(size) = &self.size {
                e = e.attr("font-size", size.as_str());
            }
            e.text(label)
        };

        let mut group = Element::new("g");
        if !ctx.styles.glow.is_empty() {
            group.push(text(Some(&ctx.styles.glow)));
        }
        group.push(text(None));
        Some(group)
    }
}
