//! Core data model for compiled maps.
//!
//! - `Options` - map-wide settings from `option` lines
//! - `Region` - one hex cell with its type tags
//! - `Spline` - a path walked across hexes
//! - `StyleTables` / `Attributes` - styling collected from directives

mod options;
mod region;
mod spline;
mod style;

pub use options::{OptionDirective, Options, DEFAULT_COORDINATES_FORMAT};
pub use region::{Region, DEFAULT_VARIANT};
pub use spline::{Side, Spline, Step, MAX_RUN};
pub use style::{Attributes, StyleTables};
