//! Grid and pixel coordinates.

use std::fmt;

use serde::Serialize;

/// Integer coordinates of a cell on the hex grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Hex {
    pub x: i32,
    pub y: i32,
}

impl Hex {
    pub const ORIGIN: Hex = Hex { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.x, self.y)
    }
}

/// A position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by an offset.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The point a fraction `q` of the way from `self` to `other`.
    pub fn partway(self, other: Point, q: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * q,
            self.y + (other.y - self.y) * q,
        )
    }
}

/// Formats as `x,y` with one decimal, the form used in SVG point lists.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1},{:.1}", self.x, self.y)
    }
}

/// An axis-aligned bounding box in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// A degenerate box containing a single point.
    pub fn at(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Grow the box to contain `point`.
    pub fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The box as `[min_x, min_y, max_x, max_y]`.
    pub fn to_array(self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

/// One of the eight compass directions a path step can take.
///
/// Only six of them are adjacent in any given layout; see
/// [`Orientation::neighbor`](super::Orientation::neighbor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Parse a compass abbreviation (`n`, `ne`, `e`, ...).
    pub fn from_abbrev(s: &str) -> Option<Self> {
        Some(match s {
            "n" => Direction::North,
            "ne" => Direction::NorthEast,
            "e" => Direction::East,
            "se" => Direction::SouthEast,
            "s" => Direction::South,
            "sw" => Direction::SouthWest,
            "w" => Direction::West,
            "nw" => Direction::NorthWest,
            _ => return None,
        })
    }

    /// Unit vector of the direction in screen space (y grows southward).
    pub fn heading(self) -> (f64, f64) {
        let d = std::f64::consts::FRAC_1_SQRT_2;
        match self {
            Direction::North => (0.0, -1.0),
            Direction::NorthEast => (d, -d),
            Direction::East => (1.0, 0.0),
            Direction::SouthEast => (d, d),
            Direction::South => (0.0, 1.0),
            Direction::SouthWest => (-d, d),
            Direction::West => (-1.0, 0.0),
            Direction::NorthWest => (-d, -d),
        }
    }

    pub fn abbrev(self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::NorthEast => "ne",
            Direction::East => "e",
            Direction::SouthEast => "se",
            Direction::South => "s",
            Direction::SouthWest => "sw",
            Direction::West => "w",
            Direction::NorthWest => "nw",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}
