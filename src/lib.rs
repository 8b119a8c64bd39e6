//! hexmap - text hex map compiler
//!
//! A library for compiling a line-oriented hex map language into layered
//! SVG scenes: hex regions, smoothed paths between them, per-type symbols
//! and styling, with every identifier namespaced per compile.
//!
//! ```
//! use hexmap::HexMap;
//!
//! let map = HexMap::compile("valley", &["0101 forest", "0101-0102 road"]);
//! assert_eq!(map.regions().len(), 1);
//! assert!(map.content_bounds().is_some());
//! let svg = map.to_svg();
//! assert!(svg.contains("hex.1.1-valley"));
//! ```

pub mod cli;
pub mod discovery;
pub mod document;
pub mod error;
pub mod geometry;
pub mod map;
pub mod output;
pub mod parser;
pub mod render;
pub mod theme;
pub mod types;

pub use discovery::{discover, discover_paths, DiscoveryResult, MapSource, Manifest, ScanResult};
pub use document::{compile_source, extract_blocks, MapBlock};
pub use error::{HexMapError, Result};
pub use geometry::{Bounds, Direction, Hex, Layout, Orientation, Point};
pub use map::HexMap;
pub use render::{Element, Namespace, Viewport};
pub use theme::Theme;
pub use types::{
    Attributes, OptionDirective, Options, Region, Side, Spline, Step, StyleTables, MAX_RUN,
};
