//! The [`Cell`] type: one terrain sample of a digital elevation model.

use crate::geom::Point;

/// A terrain cell: a fixed grid position plus its elevation and the cost of
/// travelling through it.
///
/// Cells are created once when a [`Grid`](crate::Grid) is built and never
/// change afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub elevation: f64,
    pub traversal_cost: f64,
}

impl Cell {
    /// Create a cell at `pos`.
    #[inline]
    pub const fn new(pos: Point, elevation: f64, traversal_cost: f64) -> Self {
        Self {
            pos,
            elevation,
            traversal_cost,
        }
    }

    /// Flat, unit-cost terrain at `pos`.
    #[inline]
    pub const fn flat(pos: Point) -> Self {
        Self::new(pos, 0.0, 1.0)
    }

    /// Whether this cell is impassable under the threshold `max_cost`.
    ///
    /// A NaN cost is never passable.
    #[inline]
    pub fn exceeds(&self, max_cost: f64) -> bool {
        self.traversal_cost.is_nan() || self.traversal_cost > max_cost
    }

    /// Absolute elevation difference to `other`.
    #[inline]
    pub fn climb_to(&self, other: &Cell) -> f64 {
        (other.elevation - self.elevation).abs()
    }
}
