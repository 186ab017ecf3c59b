//! The [`Grid`] type: an immutable 2D terrain map of [`Cell`]s.
//!
//! Coordinates follow the map-loader convention: `x` indexes rows and lies in
//! `[0, rows)`, `y` indexes columns and lies in `[0, cols)`. Cells are stored
//! flat at `x * cols + y`.
//!
//! A `Grid` has no interior mutability and no setters: once built it can be
//! shared by reference (or behind an `Arc`) between any number of threads.

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// Default traversal-cost threshold. A cell whose cost is strictly greater
/// is impassable.
pub const MAX_COST: f64 = 100.0;

/// An immutable terrain grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridLayers", into = "GridLayers")
)]
pub struct Grid {
    rows: usize,
    cols: usize,
    max_cost: f64,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a flat grid (elevation 0, traversal cost 1) of `rows × cols`.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::from_fn(rows, cols, |_| (0.0, 1.0))
    }

    /// Create a grid whose `(elevation, traversal_cost)` at each point is
    /// produced by `terrain`.
    pub fn from_fn(rows: i32, cols: i32, mut terrain: impl FnMut(Point) -> (f64, f64)) -> Self {
        let r = rows.max(0) as usize;
        let c = cols.max(0) as usize;
        let mut cells = Vec::with_capacity(r * c);
        for p in Range::new(0, 0, r as i32, c as i32) {
            let (elevation, traversal_cost) = terrain(p);
            cells.push(Cell::new(p, elevation, traversal_cost));
        }
        Self {
            rows: r,
            cols: c,
            max_cost: MAX_COST,
            cells,
        }
    }

    /// Build a grid from flat elevation and cost layers, both laid out at
    /// `x * cols + y`.
    pub fn from_layers(
        rows: i32,
        cols: i32,
        elevation: Vec<f64>,
        cost: Vec<f64>,
    ) -> Result<Self, GridError> {
        let expected = rows.max(0) as usize * cols.max(0) as usize;
        for layer in [&elevation, &cost] {
            if layer.len() != expected {
                return Err(GridError::DimensionMismatch {
                    expected,
                    found: layer.len(),
                });
            }
        }
        let c = cols.max(0) as usize;
        Ok(Self::from_fn(rows, cols, |p| {
            let i = p.x as usize * c + p.y as usize;
            (elevation[i], cost[i])
        }))
    }

    /// Replace the impassability threshold (builder).
    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = max_cost;
        self
    }

    /// Number of rows (extent of the `x` axis).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (extent of the `y` axis).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The valid coordinate rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.rows as i32, self.cols as i32)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The impassability threshold.
    #[inline]
    pub fn max_cost(&self) -> f64 {
        self.max_cost
    }

    /// Whether `p` is a valid coordinate.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.x as usize * self.cols + p.y as usize)
    }

    /// Point stored at flat index `idx`.
    #[inline]
    pub fn point_of(&self, idx: usize) -> Point {
        Point::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// The cell at `p`.
    pub fn cell_at(&self, p: Point) -> Result<&Cell, GridError> {
        self.get(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds(),
        })
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&Cell> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// All cells in storage order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over all cells in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Whether `p` is impassable. Out-of-bounds points count as blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.get(p).is_none_or(|c| c.exceeds(self.max_cost))
    }

    /// Whether `p` is in bounds and passable.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        !self.is_blocked(p)
    }

    /// The in-bounds 8-neighbours of `p`. Blocked neighbours are skipped
    /// unless `include_blocked` is set.
    ///
    /// The returned iterator borrows the grid only; it holds no state shared
    /// with other calls.
    pub fn neighbors(&self, p: Point, include_blocked: bool) -> impl Iterator<Item = &Cell> + '_ {
        p.neighbors_8()
            .into_iter()
            .filter_map(move |n| self.get(n))
            .filter(move |c| include_blocked || !c.exceeds(self.max_cost))
    }

    /// Whether moving from `from` to the diagonal neighbour `to` would slip
    /// between two blocked cells touching only at a corner.
    pub fn is_squeeze(&self, from: Point, to: Point) -> bool {
        from.is_diagonal_to(to)
            && self.is_blocked(Point::new(to.x, from.y))
            && self.is_blocked(Point::new(from.x, to.y))
    }
}

/// Serialized layout of a [`Grid`]: dimensions plus flat terrain layers.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridLayers {
    rows: i32,
    cols: i32,
    max_cost: f64,
    elevation: Vec<f64>,
    cost: Vec<f64>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridLayers {
    fn from(g: Grid) -> Self {
        Self {
            rows: g.rows as i32,
            cols: g.cols as i32,
            max_cost: g.max_cost,
            elevation: g.cells.iter().map(|c| c.elevation).collect(),
            cost: g.cells.iter().map(|c| c.traversal_cost).collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridLayers> for Grid {
    type Error = GridError;

    fn try_from(l: GridLayers) -> Result<Self, GridError> {
        Ok(Grid::from_layers(l.rows, l.cols, l.elevation, l.cost)?.with_max_cost(l.max_cost))
    }
}
