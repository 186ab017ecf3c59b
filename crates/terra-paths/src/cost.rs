//! Per-step cost models.

use terra_core::Cell;

use crate::heuristic::euclidean;

/// How the cost of moving between cells is computed.
///
/// Every variant starts from the planar length of the move (1 orthogonal,
/// √2 diagonal, the Euclidean length for an any-angle segment):
///
/// | Variant | Cost |
/// |---|---|
/// | `Flat` | planar |
/// | `TerrainWeighted` | planar × terrain factor |
/// | `AltitudeWeighted` | planar + \|Δelevation\| |
/// | `Both` | planar × terrain factor + \|Δelevation\| |
///
/// The terrain factor of a cell is its traversal cost clamped to at least 1,
/// so a step never costs less than its planar length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostModel {
    #[default]
    Flat,
    AltitudeWeighted,
    TerrainWeighted,
    Both,
}

impl CostModel {
    /// Map the pair of "use altitude" / "use cost" switches to a model.
    pub fn from_flags(use_altitude: bool, use_cost: bool) -> Self {
        match (use_altitude, use_cost) {
            (false, false) => Self::Flat,
            (true, false) => Self::AltitudeWeighted,
            (false, true) => Self::TerrainWeighted,
            (true, true) => Self::Both,
        }
    }

    #[inline]
    pub fn uses_altitude(self) -> bool {
        matches!(self, Self::AltitudeWeighted | Self::Both)
    }

    #[inline]
    pub fn uses_terrain(self) -> bool {
        matches!(self, Self::TerrainWeighted | Self::Both)
    }

    /// Multiplier applied to planar length when entering `cell`.
    #[inline]
    pub fn terrain_factor(self, cell: &Cell) -> f64 {
        if self.uses_terrain() {
            cell.traversal_cost.max(1.0)
        } else {
            1.0
        }
    }

    /// Cost of one grid step from `from` into the adjacent `to`.
    #[inline]
    pub fn step_cost(self, from: &Cell, to: &Cell) -> f64 {
        self.segment_cost(from, to, self.terrain_factor(to))
    }

    /// Cost of a straight segment between two cells whose crossed terrain has
    /// the multiplier `scale` (ignored unless terrain weighting is on).
    ///
    /// The climb charged is the elevation difference between the two
    /// endpoints only. Cells crossed in between add to `scale` but never to
    /// the climb, so a segment over a ridge between two cells at equal
    /// elevation pays no altitude cost.
    #[inline]
    pub fn segment_cost(self, from: &Cell, to: &Cell, scale: f64) -> f64 {
        let mut cost = euclidean(from.pos, to.pos);
        if self.uses_terrain() {
            cost *= scale;
        }
        if self.uses_altitude() {
            cost += from.climb_to(to);
        }
        cost
    }
}
