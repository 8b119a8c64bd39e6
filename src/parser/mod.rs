//! Line grammar for text map sources.
//!
//! A map source is a list of lines. Each line is one of:
//!
//! - an `option` directive, read in a first pass
//! - a hex region, a path, or a styling/definition directive, read in a
//!   second pass
//! - a `#` comment or anything unrecognized, which is skipped
//!
//! Nothing here can fail: an unrecognized line is simply not part of the
//! map, so a half-edited document still yields whatever is well formed.

mod attributes;
mod line;
mod option;
mod region;
mod spline;

pub use attributes::parse_attributes;
pub use line::{is_comment, Line};
pub use option::{option_directive, parse_option};
pub use region::parse_region;
pub use spline::{parse_hex, parse_spline, parse_step, split_segment, ParsedSpline};
