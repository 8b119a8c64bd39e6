//! Hex grid layout conventions.
//!
//! Text maps address cells with offset coordinates: every other column (or
//! row) is pushed half a cell out of line so the hexes tessellate. The
//! [`Orientation`] captures which axis is staggered and which parity
//! receives the offset, and hands the grid math to `hexx`: offset cells are
//! converted to axial hexes, laid out with a [`HexLayout`] and mapped back.

use hexx::{EdgeDirection, HexLayout, HexOrientation, OffsetHexMode, Vec2};

use super::point::{Bounds, Direction, Hex, Point};

/// Circumradius of a hex, in pixels.
const SIZE: f64 = 100.0;

/// A neighbour counts as lying in a compass direction when the two are at
/// most 20 degrees apart. Hex sides are 60 degrees apart, so at most one
/// side matches, and none when a direction falls between two sides.
const ALIGNED: f64 = 0.94;

/// Which axis the grid is staggered along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Flat-topped hexes in columns; odd columns sit half a cell higher.
    #[default]
    Vertical,
    /// Pointy-topped hexes in rows; odd rows sit half a cell to the left.
    Horizontal,
}

/// Immutable geometry for one compiled map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    layout: Layout,
    swap_even_odd: bool,
}

impl Orientation {
    pub fn new(layout: Layout, swap_even_odd: bool) -> Self {
        Self {
            layout,
            swap_even_odd,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn swap_even_odd(&self) -> bool {
        self.swap_even_odd
    }

    fn hex_orientation(&self) -> HexOrientation {
        match self.layout {
            Layout::Vertical => HexOrientation::Flat,
            Layout::Horizontal => HexOrientation::Pointy,
        }
    }

    fn offset_mode(&self) -> OffsetHexMode {
        if self.swap_even_odd {
            OffsetHexMode::Odd
        } else {
            OffsetHexMode::Even
        }
    }

    /// Pixel layout with y pointing down, as in SVG.
    fn hex_layout(&self) -> HexLayout {
        // Swapped grids stagger the even lines instead, which moves line
        // zero half a cell along the stagger axis.
        let half = (SIZE * 3f64.sqrt() / 2.0) as f32;
        let origin = match (self.swap_even_odd, self.layout) {
            (false, _) => Vec2::ZERO,
            (true, Layout::Vertical) => Vec2::new(0.0, -half),
            (true, Layout::Horizontal) => Vec2::new(-half, 0.0),
        };
        HexLayout {
            orientation: self.hex_orientation(),
            origin,
            scale: Vec2::splat(SIZE as f32),
            ..Default::default()
        }
    }

    fn axial(&self, hex: Hex) -> hexx::Hex {
        hexx::Hex::from_offset_coordinates(
            [hex.x, hex.y],
            self.offset_mode(),
            self.hex_orientation(),
        )
    }

    fn offset(&self, hex: hexx::Hex) -> Hex {
        let [x, y] = hex.to_offset_coordinates(self.offset_mode(), self.hex_orientation());
        Hex::new(x, y)
    }

    /// Corner offsets of a hex centred on the origin.
    pub fn hex_corners(&self) -> [Point; 6] {
        let corners = self.hex_layout().center_aligned_hex_corners();
        std::array::from_fn(|i| to_point(corners[i]))
    }

    /// Pixel centre of a grid cell.
    pub fn pixels(&self, hex: Hex) -> Point {
        to_point(self.hex_layout().hex_to_world_pos(self.axial(hex)))
    }

    /// Distance from a hex centre to where its coordinate and name labels
    /// are placed (above and below respectively).
    pub fn text_offset(&self) -> f64 {
        let half_height = match self.layout {
            Layout::Vertical => SIZE * 3f64.sqrt() / 2.0,
            Layout::Horizontal => SIZE,
        };
        half_height * 0.8
    }

    /// The adjacent cell in a direction, if that direction is one of the
    /// six hex sides in this layout.
    pub fn neighbor(&self, hex: Hex, direction: Direction) -> Option<Hex> {
        let layout = self.hex_layout();
        let (east, south) = direction.heading();
        let from = self.axial(hex);
        let centre = layout.hex_to_world_pos(from);

        EdgeDirection::ALL_DIRECTIONS
            .into_iter()
            .map(|edge| from.neighbor(edge))
            .find(|next| {
                let step = (layout.hex_to_world_pos(*next) - centre).normalize();
                f64::from(step.x) * east + f64::from(step.y) * south > ALIGNED
            })
            .map(|next| self.offset(next))
    }

    /// Tight bounding box over the hex polygons of every given cell.
    ///
    /// Returns `None` for an empty set.
    pub fn viewbox<I>(&self, hexes: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = Hex>,
    {
        let corners = self.hex_corners();
        let mut bounds: Option<Bounds> = None;

        for hex in hexes {
            let centre = self.pixels(hex);
            for corner in &corners {
                let point = centre.offset(corner.x, corner.y);
                match bounds.as_mut() {
                    Some(b) => b.include(point),
                    None => bounds = Some(Bounds::at(point)),
                }
            }
        }

        bounds
    }
}

fn to_point(v: Vec2) -> Point {
    Point::new(settle(v.x), settle(v.y))
}

/// Drop f32 noise below a thousandth of a pixel, negative zero included.
fn settle(v: f32) -> f64 {
    (f64::from(v) * 1000.0).round() / 1000.0 + 0.0
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(Layout::default(), false)
    }
}
