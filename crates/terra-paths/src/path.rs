//! Search results.

use std::fmt;

use terra_core::{Cell, Grid, GridError, Point};

use crate::cost::CostModel;
use crate::los::cost_scale;

/// An ordered list of waypoints from start to goal with its total cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Point>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(points: Vec<Point>, cost: f64) -> Self {
        Self { points, cost }
    }

    /// Waypoints, start first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Total cost as accumulated by the search.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of waypoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Terrain cells of the waypoints, looked up in `grid`.
    /// Points outside the grid are skipped.
    pub fn cells<'a, 'g: 'a>(&'a self, grid: &'g Grid) -> impl Iterator<Item = &'g Cell> + 'a {
        self.points.iter().filter_map(move |&p| grid.get(p))
    }

    /// Consecutive waypoint pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Whether every pair of consecutive waypoints are 8-neighbours.
    pub fn is_grid_connected(&self) -> bool {
        self.segments().all(|(a, b)| a.is_adjacent(b))
    }

    /// Recompute the cost of this path on `grid` under `model`, charging each
    /// segment as a straight any-angle move.
    pub fn recompute_cost(&self, grid: &Grid, model: CostModel) -> Result<f64, GridError> {
        let mut total = 0.0;
        for (a, b) in self.segments() {
            let from = grid.cell_at(a)?;
            let to = grid.cell_at(b)?;
            total += model.segment_cost(from, to, cost_scale(grid, model, a, b));
        }
        Ok(total)
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    PathFound(Path),
    /// The frontier ran dry before reaching the goal.
    NoPathFound,
    /// A cancel token, timeout or expansion limit stopped the search.
    Cancelled,
}

impl Outcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::PathFound(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathFound(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::PathFound(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathFound(p) => write!(
                f,
                "path found ({} waypoints, cost {:.3})",
                p.len(),
                p.cost()
            ),
            Self::NoPathFound => f.write_str("no path found"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}
