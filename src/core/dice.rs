//! Letter dice and board rolling
//!
//! A board is rolled by shuffling the dice into grid positions and showing one
//! random face of each die.

use super::Grid;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// The classic 16-die set for a 4×4 board
pub const STANDARD_DICE: [[&str; 6]; 16] = [
    ["Z", "L", "R", "H", "N", "N"],
    ["E", "V", "L", "R", "D", "Y"],
    ["B", "O", "A", "J", "O", "B"],
    ["D", "S", "Y", "I", "T", "T"],
    ["S", "I", "E", "N", "E", "U"],
    ["P", "O", "H", "C", "A", "S"],
    ["C", "T", "U", "I", "O", "M"],
    ["QU", "N", "M", "I", "H", "U"],
    ["T", "H", "R", "V", "W", "E"],
    ["G", "A", "E", "A", "N", "E"],
    ["W", "E", "G", "H", "N", "E"],
    ["K", "A", "F", "P", "F", "S"],
    ["E", "D", "L", "X", "I", "R"],
    ["T", "L", "R", "Y", "E", "T"],
    ["T", "S", "E", "I", "S", "O"],
    ["O", "A", "T", "T", "O", "W"],
];

/// A set of dice, one per grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceSet {
    dice: Vec<Vec<String>>,
}

impl DiceSet {
    /// Build a dice set from face lists
    ///
    /// Returns `None` if the die count is not a perfect square of at least 4,
    /// or if any die has no faces or a face that is not all letters.
    #[must_use]
    pub fn new(dice: Vec<Vec<String>>) -> Option<Self> {
        let dim = dice.len().isqrt();
        let square = dim * dim == dice.len() && dim >= 2;
        let faces_present = dice.iter().all(|faces| {
            !faces.is_empty()
                && faces
                    .iter()
                    .all(|face| !face.is_empty() && face.chars().all(|c| c.is_ascii_alphabetic()))
        });

        (square && faces_present).then_some(Self { dice })
    }

    /// The standard 16-die set
    #[must_use]
    pub fn standard() -> Self {
        let dice = STANDARD_DICE
            .iter()
            .map(|faces| faces.iter().map(|&face| face.to_string()).collect())
            .collect();
        Self { dice }
    }

    /// Side length of the boards this set rolls
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dice.len().isqrt()
    }

    /// Faces of every die
    #[must_use]
    pub fn dice(&self) -> &[Vec<String>] {
        &self.dice
    }

    /// Roll a fresh board
    ///
    /// # Panics
    /// Will not panic - the die count and faces are validated on construction.
    ///
    /// # Examples
    /// ```
    /// use boggle_engine::core::DiceSet;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let grid = DiceSet::standard().roll(&mut rng);
    /// assert_eq!(grid.dim(), 4);
    /// ```
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        let mut order: Vec<&Vec<String>> = self.dice.iter().collect();
        order.shuffle(rng);

        let faces: Vec<&str> = order
            .iter()
            .filter_map(|faces| faces.choose(&mut *rng))
            .map(String::as_str)
            .collect();

        Grid::new(faces).expect("dice set validated as a square of non-empty dice")
    }
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn standard_set_is_four_by_four() {
        let dice = DiceSet::standard();
        assert_eq!(dice.dim(), 4);
        assert_eq!(dice.dice().len(), 16);
        assert!(dice.dice().iter().all(|faces| faces.len() == 6));
    }

    #[test]
    fn roll_shows_faces_of_the_dice() {
        let dice = DiceSet::standard();
        let mut rng = StdRng::seed_from_u64(42);
        let grid = dice.roll(&mut rng);

        assert_eq!(grid.len(), 16);

        for tile in grid.tiles() {
            assert!(
                dice.dice().iter().any(|faces| faces.contains(tile)),
                "tile {tile} is not a face of any die"
            );
        }
    }

    #[test]
    fn roll_is_deterministic_for_seed() {
        let dice = DiceSet::standard();
        let a = dice.roll(&mut StdRng::seed_from_u64(9));
        let b = dice.roll(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn custom_set_validation() {
        let die = vec!["A".to_string(), "B".to_string()];
        assert!(DiceSet::new(vec![die.clone(); 4]).is_some());
        assert!(DiceSet::new(vec![die.clone(); 3]).is_none());
        assert!(DiceSet::new(vec![die; 1]).is_none());
        assert!(DiceSet::new(vec![Vec::new(); 4]).is_none());
        assert!(DiceSet::new(vec![vec!["4".to_string()]; 4]).is_none());
    }

    #[test]
    fn custom_set_rolls_its_dimension() {
        let dice = DiceSet::new(vec![vec!["E".to_string()]; 9]).unwrap();
        let grid = dice.roll(&mut StdRng::seed_from_u64(1));
        assert_eq!(grid.dim(), 3);
        assert!(grid.tiles().iter().all(|tile| tile == "E"));
    }
}
