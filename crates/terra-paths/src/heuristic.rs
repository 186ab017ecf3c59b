//! Distance estimates between grid cells.

use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use terra_core::{Cell, Point};
use thiserror::Error;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    (dx + dy) as f64
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    dx.max(dy) as f64
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    (dx as f64).hypot(dy as f64)
}

/// Octile distance: the exact 8-connected path length with unit orthogonal
/// and √2 diagonal steps.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let (dx, dy) = a.abs_delta(b);
    let (lo, hi) = (dx.min(dy) as f64, dx.max(dy) as f64);
    hi + (SQRT_2 - 1.0) * lo
}

/// Estimate of the remaining cost from a cell to the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Always 0: the search degenerates to Dijkstra.
    Zero,
    Manhattan,
    Chebyshev,
    Euclidean,
    #[default]
    Octile,
}

impl Heuristic {
    pub const ALL: [Heuristic; 5] = [
        Self::Zero,
        Self::Manhattan,
        Self::Chebyshev,
        Self::Euclidean,
        Self::Octile,
    ];

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Manhattan => "manhattan",
            Self::Chebyshev => "chebyshev",
            Self::Euclidean => "euclidean",
            Self::Octile => "octile",
        }
    }

    /// Planar term of the estimate.
    #[inline]
    pub fn planar(self, a: Point, b: Point) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Manhattan => manhattan(a, b),
            Self::Chebyshev => chebyshev(a, b),
            Self::Euclidean => euclidean(a, b),
            Self::Octile => octile(a, b),
        }
    }

    /// Full estimate from `from` to `to`.
    ///
    /// With `with_altitude` the elevation difference is added at the minimum
    /// per-unit climb cost (1), which never exceeds the climb any real path
    /// pays. `Zero` stays 0 regardless.
    #[inline]
    pub fn estimate(self, from: &Cell, to: &Cell, with_altitude: bool) -> f64 {
        let planar = self.planar(from.pos, to.pos);
        if with_altitude && self != Self::Zero {
            planar + from.climb_to(to)
        } else {
            planar
        }
    }

    /// Whether the estimate satisfies the triangle inequality over
    /// 8-connected steps. Manhattan charges 2 for a diagonal step that costs
    /// √2, so it can overestimate and closed cells may need reopening.
    #[inline]
    pub fn is_consistent(self) -> bool {
        !matches!(self, Self::Manhattan)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown heuristic name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heuristic {0:?}")]
pub struct ParseHeuristicError(pub String);

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseHeuristicError(s.to_string()))
    }
}
