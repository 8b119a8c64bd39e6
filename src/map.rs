//! The map compiler.
//!
//! [`HexMap::compile`] reads a list of source lines in two passes. The
//! first pass resolves `option` lines; the grid geometry is fixed from the
//! resolved options before the second pass reads regions, paths, styles
//! and raw definitions. The compiled map owns everything it parsed and
//! answers the geometry queries used to frame the initial view.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::geometry::{Bounds, Hex, Orientation, Point};
use crate::parser::{is_comment, option_directive, parse_option, Line, ParsedSpline};
use crate::render::{Element, Namespace, RenderContext, SceneBuilder, Viewport};
use crate::types::{Options, Region, Spline, StyleTables};

/// A compiled hex map.
#[derive(Debug, Clone)]
pub struct HexMap {
    instance: String,
    options: Options,
    orientation: Orientation,
    namespace: Namespace,
    regions: Vec<Region>,
    splines: Vec<Spline>,
    styles: StyleTables,
    definitions: Vec<String>,
}

/// Mutable state for the second pass.
struct Compiler {
    namespace: Namespace,
    regions: Vec<Region>,
    splines: Vec<Spline>,
    styles: StyleTables,
    definitions: Vec<String>,
}

impl Compiler {
    fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            regions: Vec::new(),
            splines: Vec::new(),
            styles: StyleTables::new(),
            definitions: Vec::new(),
        }
    }

    fn add_spline(&mut self, parsed: ParsedSpline) {
        let id = self
            .namespace
            .apply(&format!("path-{}", self.splines.len() + 1));
        self.splines.push(Spline {
            id,
            kind: parsed.kind,
            label: parsed.label,
            side: parsed.side,
            label_start: parsed.label_start,
            start: parsed.start,
            steps: parsed.steps,
        });
    }

    fn apply(&mut self, line: Line<'_>) {
        match line {
            Line::Region(region) => self.regions.push(region),
            Line::Spline(parsed) => self.add_spline(parsed),
            Line::Attributes { name, attributes } => {
                self.styles.attributes.insert(name.to_string(), attributes);
            }
            Line::Definition(markup) => {
                self.definitions.push(self.namespace.rewrite_markup(markup));
            }
            Line::PathAttributes { name, attributes } => {
                self.styles
                    .path_attributes
                    .insert(name.to_string(), attributes);
            }
            Line::Path { name, geometry } => {
                self.styles
                    .paths
                    .insert(name.to_string(), geometry.to_string());
            }
            Line::Text(attributes) => self.styles.text = attributes,
            Line::Glow(attributes) => self.styles.glow = attributes,
            Line::Label(attributes) => self.styles.label = attributes,
        }
    }
}

/// Resolve every `option` line, in source order.
pub fn read_options<S: AsRef<str>>(lines: &[S]) -> Options {
    let mut options = Options::default();
    for line in lines.iter().map(|l| l.as_ref().trim_end()) {
        if is_comment(line) {
            continue;
        }
        let Some(args) = option_directive(line) else {
            continue;
        };
        match parse_option(args) {
            Some(directive) => {
                debug!(?directive, "option");
                options.apply(directive);
            }
            None => trace!(option = args, "unknown option ignored"),
        }
    }
    options
}

impl HexMap {
    /// Compile map source lines.
    ///
    /// `instance` is appended to every identifier the map emits so several
    /// maps can share a page; `option global` turns that off. Compiling
    /// never fails: lines that match nothing are skipped.
    pub fn compile<S: AsRef<str>>(instance: &str, lines: &[S]) -> Self {
        let options = read_options(lines);
        let orientation = options.orientation();
        let namespace = Namespace::new(instance, options.global);

        let mut compiler = Compiler::new(namespace);
        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref().trim_end();
            if line.is_empty() || is_comment(line) || option_directive(line).is_some() {
                continue;
            }
            match Line::recognize(line) {
                Some(recognized) => compiler.apply(recognized),
                None => trace!(line = index + 1, text = line, "line not recognized"),
            }
        }

        debug!(
            instance,
            global = compiler.namespace.is_global(),
            layout = ?orientation.layout(),
            regions = compiler.regions.len(),
            paths = compiler.splines.len(),
            definitions = compiler.definitions.len(),
            "compiled map"
        );

        Self {
            instance: instance.to_string(),
            options,
            orientation,
            namespace: compiler.namespace,
            regions: compiler.regions,
            splines: compiler.splines,
            styles: compiler.styles,
            definitions: compiler.definitions,
        }
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Regions in source order, duplicates included.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn splines(&self) -> &[Spline] {
        &self.splines
    }

    pub fn styles(&self) -> &StyleTables {
        &self.styles
    }

    /// Raw definitions, already namespaced.
    pub fn definitions(&self) -> &[String] {
        &self.definitions
    }

    /// Bounding box of every region's hex, or `None` for a map without
    /// regions.
    pub fn content_bounds(&self) -> Option<Bounds> {
        self.orientation
            .viewbox(self.regions.iter().map(|r| r.hex))
    }

    /// Where the view should be centred when first shown.
    ///
    /// An explicit `centered-at` wins, then the origin cell if the map has
    /// one, then the first region. A map without regions centres on the
    /// origin.
    pub fn initial_center(&self) -> Point {
        let hex = self
            .options
            .centered_at
            .or_else(|| {
                self.regions
                    .iter()
                    .find(|r| r.hex == Hex::ORIGIN)
                    .map(|r| r.hex)
            })
            .or_else(|| self.regions.first().map(|r| r.hex))
            .unwrap_or(Hex::ORIGIN);
        self.orientation.pixels(hex)
    }

    /// Initial zoom factor requested with `option zoom`.
    pub fn initial_zoom(&self) -> Option<f64> {
        self.options.zoom
    }

    /// Distinct types used by regions and paths, sorted.
    pub fn types(&self) -> Vec<&str> {
        let types: BTreeSet<&str> = self.scene_builder().types();
        types.into_iter().collect()
    }

    fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            orientation: &self.orientation,
            options: &self.options,
            styles: &self.styles,
            namespace: &self.namespace,
        }
    }

    fn scene_builder(&self) -> SceneBuilder<'_> {
        SceneBuilder::new(
            self.render_context(),
            &self.regions,
            &self.splines,
            &self.definitions,
        )
    }

    /// Build the layered scene for a viewport.
    pub fn scene(&self, viewport: Viewport) -> Element {
        self.scene_builder()
            .build(viewport, self.initial_center(), self.content_bounds())
    }

    /// Serialize the scene with the default viewport.
    pub fn to_svg(&self) -> String {
        self.scene(Viewport::default()).to_svg()
    }
}
