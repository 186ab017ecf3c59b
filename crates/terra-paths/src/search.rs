//! The search driver shared by A* and Theta*.

use std::time::{Duration, Instant};

use terra_core::{Grid, GridError, Point};

use crate::cancel::CancelToken;
use crate::config::{SearchConfig, Variant};
use crate::cost::CostModel;
use crate::error::{EndpointReason, EndpointRole, SearchError};
use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::path::{Outcome, Path};
use crate::relax::{AnyAngle, EPSILON, GridStep, Relaxation};
use crate::state::{SearchState, Status};

/// Counters collected by the most recent [`PathSearch::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped and expanded (the goal pop is not counted).
    pub expanded: usize,
    /// Frontier insertions, including the start.
    pub pushed: usize,
    /// Decrease-key operations on cells already in the frontier.
    pub improved: usize,
    /// Closed cells pushed back to the frontier.
    pub reopened: usize,
    /// Relaxations that linked a cell to its grandparent (Theta* only).
    pub shortcuts: usize,
    pub elapsed: Duration,
}

/// One shortest-path query over a shared, read-only [`Grid`].
///
/// The search owns its [`SearchState`] and [`Frontier`]; the grid is only
/// borrowed, so many searches can run over the same grid at once.
///
/// ```
/// use terra_core::{Grid, Point};
/// use terra_paths::{PathSearch, SearchConfig};
///
/// let grid = Grid::new(5, 5);
/// let mut search =
///     PathSearch::new(&grid, Point::new(0, 0), Point::new(4, 4), SearchConfig::default())?;
/// let path = search.run().into_path().expect("open grid");
/// assert_eq!(path.len(), 5);
/// # Ok::<(), terra_paths::SearchError>(())
/// ```
#[derive(Debug)]
pub struct PathSearch<'g> {
    grid: &'g Grid,
    start: usize,
    goal: usize,
    config: SearchConfig,
    state: SearchState,
    frontier: Frontier,
    stats: SearchStats,
    cancel: Option<CancelToken>,
}

impl<'g> PathSearch<'g> {
    /// Prepare a search from `start` to `goal`.
    ///
    /// Fails with [`SearchError::InvalidEndpoint`] if either endpoint is
    /// outside the grid or impassable.
    pub fn new(
        grid: &'g Grid,
        start: Point,
        goal: Point,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        let start = endpoint(grid, start, EndpointRole::Start)?;
        let goal = endpoint(grid, goal, EndpointRole::Goal)?;
        Ok(Self {
            grid,
            start,
            goal,
            config,
            state: SearchState::new(grid),
            frontier: Frontier::new(grid.len()),
            stats: SearchStats::default(),
            cancel: None,
        })
    }

    /// Prepare a search from a heuristic and the altitude / terrain-cost
    /// switches, with every other setting at its default.
    pub fn with_flags(
        grid: &'g Grid,
        start: Point,
        goal: Point,
        heuristic: Heuristic,
        use_altitude: bool,
        use_cost: bool,
        variant: Variant,
    ) -> Result<Self, SearchError> {
        let config = SearchConfig::new()
            .with_heuristic(heuristic)
            .with_cost_model(CostModel::from_flags(use_altitude, use_cost))
            .with_variant(variant);
        Self::new(grid, start, goal, config)
    }

    /// Attach a cancellation token (builder).
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.grid.point_of(self.start)
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.grid.point_of(self.goal)
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the last run.
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Per-cell state left by the last run.
    #[inline]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Run the search to completion on the calling thread.
    ///
    /// May be called again; every call starts from a clean state.
    pub fn run(&mut self) -> Outcome {
        let started = Instant::now();
        let outcome = match self.config.variant {
            Variant::AStar => self.run_with(&GridStep, started),
            Variant::ThetaStar => self.run_with(&AnyAngle, started),
        };
        self.stats.elapsed = started.elapsed();
        log::debug!(
            "{} {} -> {}: {} ({} expanded, {} pushed, {} reopened, {:?})",
            self.config.variant,
            self.start(),
            self.goal(),
            outcome,
            self.stats.expanded,
            self.stats.pushed,
            self.stats.reopened,
            self.stats.elapsed,
        );
        outcome
    }

    fn run_with<R: Relaxation>(&mut self, relax: &R, started: Instant) -> Outcome {
        let grid = self.grid;
        let cells = grid.cells();
        let model = self.config.cost_model;
        let reopen = self.config.reopen.allows(self.config.heuristic);
        let deadline = self.config.timeout.map(|t| started + t);

        self.state.reset();
        self.frontier.clear();
        self.stats = SearchStats::default();

        let h0 = self.estimate(self.start);
        self.state.open(self.start, 0.0, h0, None);
        self.frontier.push(self.start, h0, h0);
        self.stats.pushed += 1;

        loop {
            if self.interrupted(deadline) {
                return Outcome::Cancelled;
            }
            let Ok(current) = self.frontier.pop_min() else {
                return Outcome::NoPathFound;
            };
            if current == self.goal {
                return Outcome::PathFound(self.trace_back(self.goal));
            }
            self.state.close(current);
            self.stats.expanded += 1;

            let cur_pos = cells[current].pos;
            log::trace!("expand {cur_pos} g={:.3}", self.state.g_of(current));

            for next in grid.neighbors(cur_pos, false) {
                if grid.is_squeeze(cur_pos, next.pos) {
                    continue;
                }
                let Some(succ) = grid.index_of(next.pos) else {
                    continue;
                };
                let status = self.state.status_of(succ);
                if status == Status::Closed && !reopen {
                    continue;
                }
                let cand = relax.candidate(grid, model, &self.state, current, succ);
                if cand.g + EPSILON >= self.state.g_of(succ) {
                    continue;
                }
                let h = match self.state.h_of(succ) {
                    Some(h) => h,
                    None => self.estimate(succ),
                };
                self.state.open(succ, cand.g, h, Some(cand.parent));
                if cand.shortcut {
                    self.stats.shortcuts += 1;
                    log::trace!("shortcut {} -> {}", cells[cand.parent].pos, next.pos);
                }
                match status {
                    Status::Open => {
                        self.frontier.decrease_key(succ, cand.g + h);
                        self.stats.improved += 1;
                    }
                    Status::Closed => {
                        self.frontier.push(succ, cand.g + h, h);
                        self.stats.pushed += 1;
                        self.stats.reopened += 1;
                    }
                    Status::Unvisited => {
                        self.frontier.push(succ, cand.g + h, h);
                        self.stats.pushed += 1;
                    }
                }
            }
        }
    }

    /// Checked once per pop: cancel token, deadline, expansion budget.
    fn interrupted(&self, deadline: Option<Instant>) -> bool {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            log::warn!("search {} -> {} cancelled", self.start(), self.goal());
            return true;
        }
        if deadline.is_some_and(|d| Instant::now() >= d) {
            log::warn!("search {} -> {} timed out", self.start(), self.goal());
            return true;
        }
        if self
            .config
            .max_expansions
            .is_some_and(|max| self.stats.expanded >= max)
        {
            log::warn!(
                "search {} -> {} hit the expansion limit ({})",
                self.start(),
                self.goal(),
                self.stats.expanded
            );
            return true;
        }
        false
    }

    #[inline]
    fn estimate(&self, idx: usize) -> f64 {
        let cells = self.grid.cells();
        self.config.heuristic.estimate(
            &cells[idx],
            &cells[self.goal],
            self.config.cost_model.uses_altitude(),
        )
    }

    /// The route from the start to `p` recorded by the last run, or `None`
    /// if the run never reached `p`.
    ///
    /// Useful after a [`Heuristic::Zero`] search, whose closed cells all
    /// carry exact costs.
    pub fn path_to(&self, p: Point) -> Result<Option<Path>, SearchError> {
        let idx = self.grid.index_of(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.grid.bounds(),
        })?;
        if self.state.status_of(idx) == Status::Unvisited {
            return Ok(None);
        }
        Ok(Some(self.trace_back(idx)))
    }

    /// Follow parent links back from `to`. The chain is acyclic, so it ends
    /// at the start within `grid.len()` links.
    fn trace_back(&self, to: usize) -> Path {
        let mut points: Vec<Point> =
            std::iter::successors(Some(to), |&i| self.state.parent_of(i))
                .take(self.grid.len())
                .map(|i| self.grid.point_of(i))
                .collect();
        points.reverse();
        debug_assert_eq!(points.first(), Some(&self.start()));
        Path::new(points, self.state.g_of(to))
    }
}

fn endpoint(grid: &Grid, p: Point, role: EndpointRole) -> Result<usize, SearchError> {
    let invalid = |reason| SearchError::InvalidEndpoint {
        role,
        pos: p,
        reason,
    };
    let idx = grid
        .index_of(p)
        .ok_or_else(|| invalid(EndpointReason::OutOfBounds))?;
    if grid.is_blocked(p) {
        return Err(invalid(EndpointReason::Blocked));
    }
    Ok(idx)
}
