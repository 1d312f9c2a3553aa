//! Square letter grid
//!
//! A Grid stores N×N tiles in row-major order. Each tile is a non-empty
//! uppercase letter string, usually one letter but possibly a cluster like "QU"
//! that is matched as a single unit.

use std::fmt;

/// Index of a tile on the grid, row-major in `[0, N²)`
pub type Position = usize;

/// Error type for invalid grids and search input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    NotSquare(usize),
    TooSmall(usize),
    EmptyTile(Position),
    InvalidTile(String),
    EmptyWord,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare(count) => {
                write!(f, "Grid must have a perfect-square number of tiles, got {count}")
            }
            Self::TooSmall(dim) => write!(f, "Grid must be at least 2x2, got {dim}x{dim}"),
            Self::EmptyTile(pos) => write!(f, "Tile at position {pos} is empty"),
            Self::InvalidTile(text) => {
                write!(f, "Tile '{text}' must contain only ASCII letters")
            }
            Self::EmptyWord => write!(f, "Cannot search for an empty word"),
        }
    }
}

impl std::error::Error for GridError {}

/// An immutable N×N board of letter tiles
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dim: usize,
    tiles: Vec<String>,
}

impl Grid {
    /// Create a grid from row-major tiles
    ///
    /// Tiles are uppercased. The tile count must be a perfect square of a
    /// dimension of at least 2.
    ///
    /// # Errors
    /// Returns `GridError` if:
    /// - The tile count is not a perfect square
    /// - The dimension is smaller than 2
    /// - A tile is empty or contains non-letters
    ///
    /// # Examples
    /// ```
    /// use boggle_engine::core::Grid;
    ///
    /// let grid = Grid::new(["c", "a", "t", "s"]).unwrap();
    /// assert_eq!(grid.dim(), 2);
    /// assert_eq!(grid.tile(1), "A");
    ///
    /// assert!(Grid::new(["a", "b", "c"]).is_err());
    /// ```
    pub fn new<I, S>(tiles: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tiles: Vec<String> = tiles
            .into_iter()
            .map(|tile| tile.into().trim().to_uppercase())
            .collect();

        let dim = tiles.len().isqrt();
        if dim * dim != tiles.len() {
            return Err(GridError::NotSquare(tiles.len()));
        }
        if dim < 2 {
            return Err(GridError::TooSmall(dim));
        }

        for (pos, tile) in tiles.iter().enumerate() {
            if tile.is_empty() {
                return Err(GridError::EmptyTile(pos));
            }
            if !tile.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(GridError::InvalidTile(tile.clone()));
            }
        }

        Ok(Self { dim, tiles })
    }

    /// Parse a grid from text
    ///
    /// Accepts separated tiles (`"C A T S"`, `"c,a,qu,s"`) or a compact run of
    /// letters (`"CATQUS..."`) where a `Q` followed by `U` forms one `QU` tile.
    ///
    /// # Errors
    /// Returns `GridError` under the same conditions as [`Grid::new`].
    ///
    /// # Examples
    /// ```
    /// use boggle_engine::core::Grid;
    ///
    /// let spaced = Grid::parse("QU I T E").unwrap();
    /// let compact = Grid::parse("quite").unwrap();
    /// assert_eq!(spaced, compact);
    /// assert_eq!(compact.tile(0), "QU");
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.len() > 1 {
            return Self::new(tokens);
        }

        let mut tiles = Vec::new();
        let mut chars = text.trim().chars().map(|c| c.to_ascii_uppercase()).peekable();
        while let Some(c) = chars.next() {
            if c == 'Q' && chars.peek() == Some(&'U') {
                chars.next();
                tiles.push("QU".to_string());
            } else {
                tiles.push(c.to_string());
            }
        }

        Self::new(tiles)
    }

    /// Side length N of the grid
    #[inline]
    #[must_use]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// Number of tiles (N²)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed grid
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Letters on the tile at `pos`
    ///
    /// # Panics
    /// Panics if `pos` is outside the grid
    #[inline]
    #[must_use]
    pub fn tile(&self, pos: Position) -> &str {
        &self.tiles[pos]
    }

    /// All tiles in row-major order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    /// Rows of tiles, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.tiles.chunks(self.dim)
    }

    /// Positions adjacent to `pos`, including diagonals
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> {
        adjacent_positions(pos, self.dim)
    }
}

/// Positions 8-directionally adjacent to `pos` on a `dim`×`dim` grid
///
/// Grid edges clip the neighbour set; there is no wraparound. Positions come
/// out in row-major order. A zero `dim` has no neighbours at all.
///
/// # Examples
/// ```
/// use boggle_engine::core::adjacent_positions;
///
/// let corner: Vec<usize> = adjacent_positions(0, 4).collect();
/// assert_eq!(corner, vec![1, 4, 5]);
/// ```
pub fn adjacent_positions(pos: Position, dim: usize) -> impl Iterator<Item = Position> {
    let (row, col) = if dim == 0 { (0, 0) } else { (pos / dim, pos % dim) };
    let span = move |i: usize| i.saturating_sub(1)..(i + 2).min(dim);

    span(row)
        .flat_map(move |r| span(col).map(move |c| (r, c)))
        .filter(move |&cell| cell != (row, col))
        .map(move |(r, c)| r * dim + c)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|tile| format!("{tile:<3}")).collect();
            write!(f, "{}", cells.join("").trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_neighbors(pos: Position, dim: usize) -> Vec<Position> {
        let mut neighbors: Vec<Position> = adjacent_positions(pos, dim).collect();
        neighbors.sort_unstable();
        neighbors
    }

    #[test]
    fn grid_creation_valid() {
        let grid = Grid::new(["a", "b", "c", "d"]).unwrap();
        assert_eq!(grid.dim(), 2);
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.tiles(), &["A", "B", "C", "D"]);
    }

    #[test]
    fn grid_creation_not_square() {
        assert_eq!(Grid::new(["a", "b", "c"]), Err(GridError::NotSquare(3)));
        assert_eq!(Grid::new(vec!["a"; 15]), Err(GridError::NotSquare(15)));
    }

    #[test]
    fn grid_creation_too_small() {
        assert_eq!(Grid::new(["a"]), Err(GridError::TooSmall(1)));
        assert_eq!(Grid::new(Vec::<String>::new()), Err(GridError::TooSmall(0)));
    }

    #[test]
    fn grid_creation_invalid_tiles() {
        assert_eq!(
            Grid::new(["a", "", "c", "d"]),
            Err(GridError::EmptyTile(1))
        );
        assert!(matches!(
            Grid::new(["a", "b", "c", "4"]),
            Err(GridError::InvalidTile(_))
        ));
    }

    #[test]
    fn parse_separated_tiles() {
        let grid = Grid::parse("c a t s\nd o g e\nqu i t e\nr a i n").unwrap();
        assert_eq!(grid.dim(), 4);
        assert_eq!(grid.tile(8), "QU");
        assert_eq!(grid.tile(15), "N");
    }

    #[test]
    fn parse_compact_letters() {
        let grid = Grid::parse("CATSDOGEQUITERAIN").unwrap();
        assert_eq!(grid.dim(), 4);
        assert_eq!(grid.tile(8), "QU");
        assert_eq!(grid.tile(9), "I");
    }

    #[test]
    fn parse_lone_q_stays_single() {
        let grid = Grid::parse("QATS").unwrap();
        assert_eq!(grid.tile(0), "Q");
    }

    #[test]
    fn parse_rejects_bad_counts() {
        assert!(Grid::parse("abcde").is_err());
        assert!(Grid::parse("a b c").is_err());
    }

    #[test]
    fn corner_has_three_neighbors() {
        assert_eq!(sorted_neighbors(0, 4), vec![1, 4, 5]);
        // Position 3 is the top-right corner on a 4x4 grid
        assert_eq!(sorted_neighbors(3, 4), vec![2, 6, 7]);
        assert_eq!(sorted_neighbors(15, 4), vec![10, 11, 14]);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(sorted_neighbors(5, 4), vec![0, 1, 2, 4, 6, 8, 9, 10]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(sorted_neighbors(1, 4), vec![0, 2, 4, 5, 6]);
        assert_eq!(sorted_neighbors(4, 4), vec![0, 1, 5, 8, 9]);
        assert_eq!(sorted_neighbors(7, 4).len(), 5);
    }

    #[test]
    fn every_tile_of_two_by_two_touches_the_rest() {
        for pos in 0..4 {
            assert_eq!(sorted_neighbors(pos, 2).len(), 3);
        }
    }

    #[test]
    fn no_wraparound_between_rows() {
        // Right edge of row 0 must not touch left edge of row 1
        assert!(!sorted_neighbors(3, 4).contains(&4));
        assert!(!sorted_neighbors(4, 4).contains(&3));
    }

    #[test]
    fn neighbors_are_symmetric() {
        for dim in 2..=5 {
            for a in 0..dim * dim {
                for b in adjacent_positions(a, dim) {
                    assert!(adjacent_positions(b, dim).any(|n| n == a));
                }
            }
        }
    }

    #[test]
    fn neighbors_in_row_major_order() {
        let neighbors: Vec<Position> = adjacent_positions(5, 4).collect();
        assert_eq!(neighbors, vec![0, 1, 2, 4, 6, 8, 9, 10]);
        assert_eq!(sorted_neighbors(15, 4), vec![10, 11, 14]);
    }

    #[test]
    fn zero_dimension_has_no_neighbors() {
        assert_eq!(adjacent_positions(0, 0).count(), 0);
        assert_eq!(adjacent_positions(3, 0).count(), 0);
    }

    #[test]
    fn grid_display() {
        let grid = Grid::parse("qu a t s").unwrap();
        assert_eq!(format!("{grid}"), "QU A\nT  S");
    }
}
