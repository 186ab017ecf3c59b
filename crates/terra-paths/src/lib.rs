//! Shortest-path search over elevation-aware terrain grids.
//!
//! This crate plans routes across a [`terra_core::Grid`] with two variants of
//! informed search that share one driver:
//!
//! - **A\*** ([`Variant::AStar`]): grid-constrained, every path edge joins
//!   8-neighbours.
//! - **Theta\*** ([`Variant::ThetaStar`]): any-angle, a cell links straight
//!   to its grandparent when the segment between them has
//!   [line of sight](line_of_sight), so paths are not limited to 45° turns.
//!
//! Both are parameterised by a [`Heuristic`] and a [`CostModel`] (planar
//! distance, optionally weighted by terrain cost and/or elevation change).
//!
//! A [`PathSearch`] borrows the grid immutably and owns its own
//! [`SearchState`] and [`Frontier`], so several searches may run over the same
//! grid on different threads without locking.
//!
//! # Outcomes
//!
//! | Situation | Result |
//! |---|---|
//! | Start/goal outside the grid or blocked | `Err(`[`SearchError::InvalidEndpoint`]`)` from [`PathSearch::new`] |
//! | Goal reached | [`Outcome::PathFound`] |
//! | Frontier exhausted | [`Outcome::NoPathFound`] |
//! | Cancel token, timeout or expansion limit | [`Outcome::Cancelled`] |

mod cancel;
mod config;
mod cost;
mod error;
mod frontier;
mod heuristic;
mod los;
mod path;
mod relax;
mod search;
mod state;

pub use cancel::CancelToken;
pub use config::{ReopenPolicy, SearchConfig, Variant};
pub use cost::CostModel;
pub use error::{EndpointReason, EndpointRole, SearchError};
pub use frontier::Frontier;
pub use heuristic::{Heuristic, ParseHeuristicError, chebyshev, euclidean, manhattan, octile};
pub use los::{Supercover, Trace, cost_scale, line_of_sight};
pub use path::{Outcome, Path};
pub use relax::EPSILON;
pub use search::{PathSearch, SearchStats};
pub use state::{SearchState, Status};
