//! Rendering of paths: the smoothed connector and its label.

use std::fmt::Write;

use crate::geometry::Point;
use crate::types::{Attributes, Side, Spline};

use super::{Element, RenderContext};

/// Build the `d` string of a smooth curve through the given points.
///
/// Each segment bends through the point 30% of the way along it and passes
/// its midpoint. Open paths end with a short straight stub into the last
/// point; closed loops (first point equals last) curve back into the start.
pub fn smooth_path(points: &[Point]) -> Option<String> {
    let (first, last) = (points.first()?, points.last()?);
    if points.len() < 2 {
        return None;
    }

    let closed = first == last && points.len() > 2;
    let mut d = String::new();

    for (i, pair) in points.windows(2).enumerate() {
        let (current, next) = (pair[0], pair[1]);
        let a = current.partway(next, 0.3);
        let b = current.partway(next, 0.5);

        if i > 0 {
            let _ = write!(d, " S{a} {b}");
        } else if closed {
            let before = points[points.len() - 2];
            let c = before.partway(current, 0.7);
            let start = before.partway(current, 0.5);
            let _ = write!(d, "M{start} C{c} {a} {b}");
        } else {
            let _ = write!(d, "M{current} C{a} {a} {b}");
        }
    }

    if !closed {
        let _ = write!(d, " L{last}");
    }

    Some(d)
}

impl Spline {
    /// Pixel centres of the hexes this path walks through.
    pub fn points(&self, ctx: &RenderContext<'_>) -> Vec<Point> {
        self.hexes(ctx.orientation)
            .into_iter()
            .map(|hex| ctx.orientation.pixels(hex))
            .collect()
    }

    /// The connector, styled by the path attributes of its type.
    ///
    /// A walk that never leaves its start hex draws nothing.
    pub fn connector(&self, ctx: &RenderContext<'_>) -> Option<Element> {
        let Some(d) = smooth_path(&self.points(ctx)) else {
            tracing::trace!(path = %self.id, "path has a single point, not drawn");
            return None;
        };

        let mut path = Element::new("path").attr("id", self.id.as_str());
        if let Some(attributes) = ctx.styles.path_attributes.get(&self.kind) {
            path = path.attrs(attributes);
        }
        Some(path.attr("d", d))
    }

    /// The label set along the connector, with its glow backdrop.
    ///
    /// Labels go on the right side when asked to, or when the path heads
    /// leftward so the text is not upside down.
    pub fn label_element(&self, ctx: &RenderContext<'_>) -> Option<Element> {
        let label = self.label.as_deref()?;
        let points = self.points(ctx);
        if points.len() < 2 {
            return None;
        }

        let right = match self.side {
            Some(side) => side == Side::Right,
            None => points[0].x > points[1].x,
        };

        let text = |extra: Option<&Attributes>| {
            let mut text = Element::new("text").attrs(&ctx.styles.label);
            if let Some(extra) = extra {
                text = text.attrs(extra);
            }
            let mut text_path = Element::new("textPath").attr("href", format!("#{}", self.id));
            if right {
                text_path = text_path.attr("side", "right");
            }
            if let Some(start) = &self.label_start {
                text_path = text_path.attr("startOffset", start.as_str());
            }
            text.child(text_path.text(label))
        };

        let mut group = Element::new("g");
        if !ctx.styles.glow.is_empty() {
            group.push(text(Some(&ctx.styles.glow)));
        }
        group.push(text(None));
        Some(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Hex, Orientation};
    use crate::render::Namespace;
    use crate::types::{Options, Step, StyleTables};
    use insta::assert_snapshot;

    fn spline(steps: &[(i32, i32)]) -> Spline {
        Spline {
            id: "path-1-t".to_string(),
            kind: "road".to_string(),
            label: None,
            side: None,
            label_start: None,
            start: Hex::new(1, 1),
            steps: steps.iter().map(|&(x, y)| Step::To(Hex::new(x, y))).collect(),
        }
    }

    fn with_ctx<R>(styles: StyleTables, f: impl FnOnce(&RenderContext<'_>) -> R) -> R {
        let orientation = Orientation::default();
        let options = Options::default();
        let namespace = Namespace::new("t", false);
        f(&RenderContext {
            orientation: &orientation,
            options: &options,
            styles: &styles,
            namespace: &namespace,
        })
    }

    #[test]
    fn test_smooth_path_open() {
        let points = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        assert_snapshot!(
            smooth_path(&points).unwrap(),
            @"M0.0,0.0 C30.0,0.0 30.0,0.0 50.0,0.0 L100.0,0.0"
        );
    }

    #[test]
    fn test_smooth_path_continues_with_s() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ];
        assert_snapshot!(
            smooth_path(&points).unwrap(),
            @"M0.0,0.0 C30.0,0.0 30.0,0.0 50.0,0.0 S100.0,30.0 100.0,50.0 L100.0,100.0"
        );
    }

    #[test]
    fn test_smooth_path_closed_loop() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 0.0),
        ];
        let d = smooth_path(&points).unwrap();

        assert!(d.starts_with("M50.0,50.0 C30.0,30.0 30.0,0.0 50.0,0.0"));
        assert!(!d.contains('L'));
    }

    #[test]
    fn test_smooth_path_single_point() {
        assert_eq!(smooth_path(&[Point::new(1.0, 1.0)]), None);
        assert_eq!(smooth_path(&[]), None);
    }

    #[test]
    fn test_connector_uses_path_attributes() {
        let mut styles = StyleTables::new();
        styles.path_attributes.insert(
            "road".to_string(),
            Attributes::new()
                .with("stroke", "black")
                .with("stroke-dasharray", "20 20"),
        );

        let path = with_ctx(styles, |ctx| spline(&[(1, 2)]).connector(ctx)).unwrap();

        assert_eq!(path.id(), Some("path-1-t"));
        assert_eq!(path.attributes.get("stroke-dasharray"), Some("20 20"));
        assert!(path.attributes.get("d").unwrap_or_default().starts_with("M150.0,86.6 C"));
    }

    #[test]
    fn test_label_side() {
        let mut leftward = spline(&[(0, 1)]);
        leftward.label = Some("Old Road".to_string());

        let group = with_ctx(StyleTables::new(), |ctx| leftward.label_element(ctx)).unwrap();
        let text_path = &group.descendants_named("textPath")[0];
        assert_eq!(text_path.attributes.get("side"), Some("right"));
        assert_eq!(text_path.attributes.get("href"), Some("#path-1-t"));

        leftward.side = Some(Side::Left);
        let group = with_ctx(StyleTables::new(), |ctx| leftward.label_element(ctx)).unwrap();
        assert_eq!(group.descendants_named("textPath")[0].attributes.get("side"), None);
    }

    #[test]
    fn test_label_glow_and_start_offset() {
        let mut styles = StyleTables::new();
        styles.glow = Attributes::new().with("stroke", "white");
        let mut s = spline(&[(2, 1)]);
        s.label = Some("Silver Run".to_string());
        s.label_start = Some("30%".to_string());

        let group = with_ctx(styles, |ctx| s.label_element(ctx)).unwrap();

        assert_eq!(group.elements().count(), 2);
        let text_paths = group.descendants_named("textPath");
        assert_eq!(text_paths.len(), 2);
        assert_eq!(text_paths[0].attributes.get("startOffset"), Some("30%"));
        assert_eq!(text_paths[1].text_content(), "Silver Run");
    }

    #[test]
    fn test_unlabelled() {
        let s = spline(&[(1, 2)]);
        assert!(with_ctx(StyleTables::new(), |ctx| s.label_element(ctx)).is_none());
    }
}
