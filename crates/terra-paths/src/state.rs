//! Per-search bookkeeping, kept apart from the immutable terrain grid.

use terra_core::{Grid, Point};

/// Lifecycle of a cell within one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Unvisited,
    /// In the frontier.
    Open,
    /// Expanded; its cost is final unless reopening is allowed.
    Closed,
}

#[derive(Debug, Clone)]
struct Node {
    g: f64,
    h: f64,
    parent: Option<usize>,
    generation: u32,
    status: Status,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            h: 0.0,
            parent: None,
            generation: 0,
            status: Status::Unvisited,
        }
    }
}

/// Tentative costs, parent links and status of every cell for one search.
///
/// Entries are invalidated lazily: [`reset`](Self::reset) bumps a generation
/// counter instead of touching every node, and a node written in an older
/// generation reads as unvisited.
///
/// An unvisited cell has `g = +∞` and no parent. A visited cell with no
/// parent is the start.
#[derive(Debug, Clone)]
pub struct SearchState {
    nodes: Vec<Node>,
    cols: usize,
    generation: u32,
}

impl SearchState {
    /// Create empty state sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            nodes: vec![Node::default(); grid.len()],
            cols: grid.cols(),
            generation: 1,
        }
    }

    /// Forget everything recorded so far.
    pub(crate) fn reset(&mut self) {
        if self.generation == u32::MAX {
            self.nodes.fill(Node::default());
            self.generation = 1;
        } else {
            self.generation += 1;
        }
    }

    #[inline]
    fn node(&self, idx: usize) -> Option<&Node> {
        self.nodes
            .get(idx)
            .filter(|n| n.generation == self.generation)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.y as usize >= self.cols {
            return None;
        }
        let i = p.x as usize * self.cols + p.y as usize;
        (i < self.nodes.len()).then_some(i)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    // -----------------------------------------------------------------------
    // Index-keyed access used by the search loop
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn status_of(&self, idx: usize) -> Status {
        self.node(idx).map_or(Status::Unvisited, |n| n.status)
    }

    #[inline]
    pub(crate) fn g_of(&self, idx: usize) -> f64 {
        self.node(idx).map_or(f64::INFINITY, |n| n.g)
    }

    #[inline]
    pub(crate) fn h_of(&self, idx: usize) -> Option<f64> {
        self.node(idx).map(|n| n.h)
    }

    #[inline]
    pub(crate) fn parent_of(&self, idx: usize) -> Option<usize> {
        self.node(idx).and_then(|n| n.parent)
    }

    /// Record a (better) route to `idx` and mark it open.
    pub(crate) fn open(&mut self, idx: usize, g: f64, h: f64, parent: Option<usize>) {
        let generation = self.generation;
        let n = &mut self.nodes[idx];
        n.generation = generation;
        n.g = g;
        n.h = h;
        n.parent = parent;
        n.status = Status::Open;
    }

    pub(crate) fn close(&mut self, idx: usize) {
        if let Some(n) = self.nodes.get_mut(idx) {
            if n.generation == self.generation {
                n.status = Status::Closed;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate-keyed inspection
    // -----------------------------------------------------------------------

    /// Status of the cell at `p` (unvisited when out of bounds).
    pub fn status(&self, p: Point) -> Status {
        self.idx(p).map_or(Status::Unvisited, |i| self.status_of(i))
    }

    /// Best known cost from the start to `p`; `+∞` if unvisited.
    pub fn g(&self, p: Point) -> f64 {
        self.idx(p).map_or(f64::INFINITY, |i| self.g_of(i))
    }

    /// Heuristic estimate recorded for `p`, if visited.
    pub fn h(&self, p: Point) -> Option<f64> {
        self.idx(p).and_then(|i| self.h_of(i))
    }

    /// `g + h` for `p`, if visited.
    pub fn f(&self, p: Point) -> Option<f64> {
        self.idx(p)
            .and_then(|i| self.node(i))
            .map(|n| n.g + n.h)
    }

    /// Parent of `p` on its best known route, `None` for the start or an
    /// unvisited cell.
    pub fn parent(&self, p: Point) -> Option<Point> {
        self.idx(p)
            .and_then(|i| self.parent_of(i))
            .map(|i| self.point(i))
    }

    /// Points visited in the current generation, with their status.
    pub fn visited(&self) -> impl Iterator<Item = (Point, Status)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.generation == self.generation)
            .map(|(i, n)| (self.point(i), n.status))
    }
}
