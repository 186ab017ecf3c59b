//! Line of sight between cell centres.
//!
//! [`Supercover`] walks every cell the straight segment between two cell
//! centres passes through. When the segment crosses exactly through a cell
//! corner it also reports the two side cells meeting at that corner: a pair
//! of blocked side cells forms a gap no body can slip through, so such a
//! segment has no line of sight. This matches [`Grid::is_squeeze`], so every
//! grid step a search is allowed to take also has line of sight.

use terra_core::{Grid, Point};

use crate::cost::CostModel;

/// One step of a supercover walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trace {
    /// The segment passes through the interior of this cell.
    Enter(Point),
    /// The segment passes exactly through the corner shared by these two
    /// cells; the next step enters the diagonal cell.
    Corner(Point, Point),
}

/// Integer supercover rasterisation of the segment between two cells.
///
/// The walk always runs from the smaller endpoint (by [`Point`] order) to the
/// larger, so `Supercover::new(a, b)` and `Supercover::new(b, a)` yield the
/// same sequence.
#[derive(Debug, Clone)]
pub struct Supercover {
    cur: Point,
    step: Point,
    n: (i64, i64),
    i: (i64, i64),
    pending: Option<Trace>,
}

impl Supercover {
    pub fn new(a: Point, b: Point) -> Self {
        let (from, to) = if b < a { (b, a) } else { (a, b) };
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        Self {
            cur: from,
            step: Point::new(dx.signum(), dy.signum()),
            n: (i64::from(dx.abs()), i64::from(dy.abs())),
            i: (0, 0),
            pending: Some(Trace::Enter(from)),
        }
    }
}

impl Iterator for Supercover {
    type Item = Trace;

    fn next(&mut self) -> Option<Trace> {
        if let Some(t) = self.pending.take() {
            return Some(t);
        }
        let (nx, ny) = self.n;
        let (ix, iy) = self.i;
        if ix >= nx && iy >= ny {
            return None;
        }
        // Compare where the segment leaves the current cell: through the
        // x-side (< 0), the y-side (> 0), or exactly through the corner.
        let decision = (1 + 2 * ix) * ny - (1 + 2 * iy) * nx;
        if decision == 0 {
            let side_x = self.cur.shift(self.step.x, 0);
            let side_y = self.cur.shift(0, self.step.y);
            self.cur = self.cur.shift(self.step.x, self.step.y);
            self.i = (ix + 1, iy + 1);
            self.pending = Some(Trace::Enter(self.cur));
            return Some(Trace::Corner(side_x, side_y));
        }
        if decision < 0 {
            self.cur.x += self.step.x;
            self.i.0 += 1;
        } else {
            self.cur.y += self.step.y;
            self.i.1 += 1;
        }
        Some(Trace::Enter(self.cur))
    }
}

/// Whether the straight segment between the centres of `a` and `b` is clear
/// of blocked cells. Symmetric in its arguments; a cell always sees itself.
pub fn line_of_sight(grid: &Grid, a: Point, b: Point) -> bool {
    if a == b {
        return true;
    }
    Supercover::new(a, b).all(|t| match t {
        Trace::Enter(p) => grid.is_passable(p),
        Trace::Corner(p, q) => !(grid.is_blocked(p) && grid.is_blocked(q)),
    })
}

/// Terrain multiplier for travelling straight from `from` to `to`: the
/// largest terrain factor among the cells the segment enters, not counting
/// `from` itself. Always 1 when `model` ignores terrain.
pub fn cost_scale(grid: &Grid, model: CostModel, from: Point, to: Point) -> f64 {
    if !model.uses_terrain() {
        return 1.0;
    }
    Supercover::new(from, to)
        .filter_map(|t| match t {
            Trace::Enter(p) if p != from => grid.get(p),
            _ => None,
        })
        .map(|c| model.terrain_factor(c))
        .fold(1.0, f64::max)
}
