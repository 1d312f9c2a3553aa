//! Traced paths on a grid
//!
//! A Path is the ordered trail of tile positions visited to spell a word.

use super::{Grid, Position};

/// Ordered trail of distinct, adjacent tile positions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    trail: Vec<Position>,
}

impl Path {
    /// Create a path from an ordered trail
    #[must_use]
    pub const fn new(trail: Vec<Position>) -> Self {
        Self { trail }
    }

    /// Positions in traversal order
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.trail
    }

    /// Number of tiles consumed
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.trail.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Check whether the path visits `pos`
    #[inline]
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.trail.contains(&pos)
    }

    /// Step index at which `pos` is visited, if at all
    #[must_use]
    pub fn step_of(&self, pos: Position) -> Option<usize> {
        self.trail.iter().position(|&p| p == pos)
    }

    /// Concatenate the tile letters along the trail
    ///
    /// # Examples
    /// ```
    /// use boggle_engine::core::{Grid, Path};
    ///
    /// let grid = Grid::parse("qu a t s").unwrap();
    /// let path = Path::new(vec![0, 1, 2]);
    /// assert_eq!(path.spelled(&grid), "QUAT");
    /// ```
    #[must_use]
    pub fn spelled(&self, grid: &Grid) -> String {
        self.trail.iter().map(|&pos| grid.tile(pos)).collect()
    }

    /// Check that no position repeats and every step moves to a neighbour
    #[must_use]
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        let distinct = self
            .trail
            .iter()
            .enumerate()
            .all(|(i, pos)| !self.trail[..i].contains(pos));
        let in_bounds = self.trail.iter().all(|&pos| pos < grid.len());
        let adjacent = self
            .trail
            .windows(2)
            .all(|step| grid.neighbors(step[0]).any(|n| n == step[1]));

        distinct && in_bounds && adjacent
    }
}
