//! Error taxonomy for search construction and frontier access.
//!
//! Exhausting the frontier or being cancelled is not an error: those are
//! [`Outcome`](crate::Outcome) variants.

use std::fmt;

use terra_core::{GridError, Point};
use thiserror::Error;

/// Which end of the requested path an [`SearchError::InvalidEndpoint`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointRole {
    Start,
    Goal,
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Goal => "goal",
        })
    }
}

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointReason {
    OutOfBounds,
    Blocked,
}

impl fmt::Display for EndpointReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OutOfBounds => "outside the grid",
            Self::Blocked => "on an impassable cell",
        })
    }
}

/// Errors produced while setting up or driving a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Start or goal is out of bounds or blocked. Raised before any expansion.
    #[error("invalid {role} {pos}: {reason}")]
    InvalidEndpoint {
        role: EndpointRole,
        pos: Point,
        reason: EndpointReason,
    },
    /// A coordinate access escaped the grid.
    #[error(transparent)]
    OutOfBounds(#[from] GridError),
    /// `pop_min` was called on an empty frontier.
    #[error("frontier is empty")]
    EmptyFrontier,
}
