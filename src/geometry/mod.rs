//! Hex grid geometry: grid coordinates, pixel positions and layouts.

mod orientation;
mod point;

pub use orientation::{Layout, Orientation};
pub use point::{Bounds, Direction, Hex, Point};
