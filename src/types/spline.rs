//! Paths connecting hexes: roads, rivers, borders and the like.

use std::fmt;

use crate::geometry::{Direction, Hex, Orientation};

/// Longest directional run a single step walks; no coordinate system a
/// map can address is wider than this.
pub const MAX_RUN: u32 = 999;

/// Which side of its path a label sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Side::Left),
            "right" => Some(Side::Right),
            _ => None,
        }
    }
}

/// One segment of a path walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Continue to an absolute cell (`0102`).
    To(Hex),
    /// Move `distance` cells in a compass direction (`se2`).
    Toward { direction: Direction, distance: u32 },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::To(hex) => write!(f, "{hex}"),
            Step::Toward { direction, distance } => write!(f, "{direction}{distance}"),
        }
    }
}

/// A connector walked from a start hex through a list of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spline {
    /// Namespaced element id (`path-N`), used by label text paths.
    pub id: String,
    /// The type tag, looked up in the path attribute table.
    pub kind: String,
    pub label: Option<String>,
    pub side: Option<Side>,
    /// Label start offset along the path, e.g. `30%`.
    pub label_start: Option<String>,
    pub start: Hex,
    pub steps: Vec<Step>,
}

impl Spline {
    /// Resolve the walk into the cells it passes through, start included.
    ///
    /// Directional moves that are not a hex side in this orientation do
    /// not move. A run longer than [`MAX_RUN`] stops there.
    pub fn hexes(&self, orientation: &Orientation) -> Vec<Hex> {
        let mut current = self.start;
        let mut hexes = vec![current];

        for step in &self.steps {
            match *step {
                Step::To(hex) => {
                    current = hex;
                    hexes.push(current);
                }
                Step::Toward { direction, distance } => {
                    if distance > MAX_RUN {
                        tracing::trace!(path = %self.id, distance, "directional run truncated");
                    }
                    for _ in 0..distance.min(MAX_RUN) {
                        let Some(next) = orientation.neighbor(current, direction) else {
                            tracing::trace!(
                                path = %self.id,
                                %direction,
                                "direction is not a hex side in this layout"
                            );
                            break;
                        };
                        current = next;
                        hexes.push(current);
                    }
                }
            }
        }

        hexes
    }
}
