//! Core domain types for the board
//!
//! This module contains the grid, positions, traced paths, and the dice used to
//! roll boards. Everything here is pure and immutable once constructed.

mod dice;
mod grid;
mod path;

pub use dice::{DiceSet, STANDARD_DICE};
pub use grid::{Grid, GridError, Position, adjacent_positions};
pub use path::Path;
