//! **terra-core**: terrain model for grid path planning (core types).
//!
//! This crate provides the foundational types shared by the *terra* search
//! crates: integer geometry primitives and an immutable terrain [`Grid`] of
//! [`Cell`]s carrying elevation and traversal cost (a digital elevation
//! model). It contains no search logic; a loaded `Grid` is read-only and can
//! be shared by any number of concurrent searches.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use error::GridError;
pub use geom::{Point, Range, RangeIter};
pub use grid::{Grid, MAX_COST};
