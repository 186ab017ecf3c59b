//! Edge relaxation strategies.
//!
//! The search loop is shared; only the rule that proposes a parent and cost
//! for a successor differs between the grid-constrained and any-angle
//! variants.

use terra_core::Grid;

use crate::cost::CostModel;
use crate::los::{cost_scale, line_of_sight};
use crate::state::SearchState;

/// Tolerance used when comparing accumulated costs.
pub const EPSILON: f64 = 1e-9;

/// A proposed route to a successor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    pub parent: usize,
    pub g: f64,
    /// The parent is the expanded cell's own parent.
    pub shortcut: bool,
}

/// Proposes how to reach `succ` while expanding `current`.
pub(crate) trait Relaxation {
    fn candidate(
        &self,
        grid: &Grid,
        model: CostModel,
        state: &SearchState,
        current: usize,
        succ: usize,
    ) -> Candidate;
}

/// Plain A*: always go through the expanded cell.
pub(crate) struct GridStep;

impl Relaxation for GridStep {
    #[inline]
    fn candidate(
        &self,
        grid: &Grid,
        model: CostModel,
        state: &SearchState,
        current: usize,
        succ: usize,
    ) -> Candidate {
        let cells = grid.cells();
        Candidate {
            parent: current,
            g: state.g_of(current) + model.step_cost(&cells[current], &cells[succ]),
            shortcut: false,
        }
    }
}

/// Theta*: link `succ` straight to the expanded cell's parent when the two
/// see each other, else fall back to [`GridStep`].
///
/// Shortcuts are priced with [`CostModel::segment_cost`], so under altitude
/// weighting a shortcut pays only the climb between its endpoints. Line of
/// sight looks at passability alone; a ridge of passable cells between the
/// grandparent and `succ` does not stop the shortcut.
pub(crate) struct AnyAngle;

impl Relaxation for AnyAngle {
    fn candidate(
        &self,
        grid: &Grid,
        model: CostModel,
        state: &SearchState,
        current: usize,
        succ: usize,
    ) -> Candidate {
        let through = GridStep.candidate(grid, model, state, current, succ);
        let Some(gp) = state.parent_of(current) else {
            return through;
        };
        let cells = grid.cells();
        let (from, to) = (&cells[gp], &cells[succ]);
        if !line_of_sight(grid, from.pos, to.pos) {
            return through;
        }
        let scale = cost_scale(grid, model, from.pos, to.pos);
        let g = state.g_of(gp) + model.segment_cost(from, to, scale);
        // Unweighted, the straight segment is never longer; with terrain
        // weighting it can be, and then the grid step wins.
        if g <= through.g + EPSILON {
            Candidate {
                parent: gp,
                g,
                shortcut: true,
            }
        } else {
            through
        }
    }
}
