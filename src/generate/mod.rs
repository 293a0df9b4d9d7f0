//! Random board deals.
//!
//! Boards are dealt from a bag of lettered dice: the bag is shuffled,
//! each die lands on one face, and the faces fill the grid row-major.
//! The classic sixteen-die English set ships built in; custom sets
//! cover other grid shapes and alphabets.
//!
//! Deals draw from a [`BoardRng`], so the same seed always deals the
//! same board.
//!
//! ## Usage
//!
//! ```
//! use boggle_engine::core::BoardRng;
//! use boggle_engine::generate::BoardGenerator;
//!
//! let generator = BoardGenerator::classic();
//! let mut rng = BoardRng::new(42);
//! let board = generator.generate(&mut rng);
//!
//! assert_eq!((board.rows(), board.cols()), (4, 4));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Board, BoardRng};

/// The sixteen dice of the classic English set. The fifteenth die
/// carries the two-letter "QU" face.
const CLASSIC_DICE: [[&str; 6]; 16] = [
    ["A", "A", "E", "E", "G", "N"],
    ["A", "B", "B", "J", "O", "O"],
    ["A", "C", "H", "O", "P", "S"],
    ["A", "F", "F", "K", "P", "S"],
    ["A", "O", "O", "T", "T", "W"],
    ["C", "I", "M", "O", "T", "U"],
    ["D", "E", "I", "L", "R", "X"],
    ["D", "E", "L", "R", "V", "Y"],
    ["D", "I", "S", "T", "T", "Y"],
    ["E", "E", "G", "H", "N", "W"],
    ["E", "E", "I", "N", "S", "U"],
    ["E", "H", "R", "T", "V", "W"],
    ["E", "I", "O", "S", "S", "T"],
    ["E", "L", "R", "T", "T", "Y"],
    ["H", "I", "M", "N", "QU", "U"],
    ["H", "L", "N", "N", "R", "Z"],
];

/// One lettered die. A face may carry more than one letter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    faces: Vec<String>,
}

impl Die {
    /// Build a die from its faces.
    pub fn new<I, S>(faces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            faces: faces.into_iter().map(Into::into).collect(),
        }
    }

    /// The faces of this die.
    #[must_use]
    pub fn faces(&self) -> &[String] {
        &self.faces
    }

    /// Roll the die. Requires at least one face.
    fn roll(&self, rng: &mut BoardRng) -> Option<&str> {
        rng.choose(&self.faces).map(String::as_str)
    }
}

/// Why a dice set cannot deal the requested grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    /// The set has the wrong number of dice for the grid.
    DiceCount {
        /// Dice needed to fill the grid.
        expected: usize,
        /// Dice supplied.
        found: usize,
    },
    /// A die has no faces to land on.
    EmptyDie {
        /// Position of the offending die in the set.
        index: usize,
    },
    /// A die has a face with no letters on it.
    BlankFace {
        /// Position of the offending die in the set.
        index: usize,
    },
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DiceCount { expected, found } => {
                write!(f, "grid needs {expected} dice, set has {found}")
            }
            Self::EmptyDie { index } => write!(f, "die {index} has no faces"),
            Self::BlankFace { index } => write!(f, "die {index} has a blank face"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Deals boards of a fixed shape from a fixed dice set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGenerator {
    rows: usize,
    cols: usize,
    dice: Vec<Die>,
}

impl BoardGenerator {
    /// Build a generator. The set must hold exactly `rows * cols`
    /// dice, and every die must have at least one non-blank face.
    pub fn new(rows: usize, cols: usize, dice: Vec<Die>) -> Result<Self, GeneratorError> {
        let expected = rows * cols;
        if dice.len() != expected {
            return Err(GeneratorError::DiceCount {
                expected,
                found: dice.len(),
            });
        }
        for (index, die) in dice.iter().enumerate() {
            if die.faces.is_empty() {
                return Err(GeneratorError::EmptyDie { index });
            }
            if die.faces.iter().any(String::is_empty) {
                return Err(GeneratorError::BlankFace { index });
            }
        }
        Ok(Self { rows, cols, dice })
    }

    /// The classic sixteen-die English set on a 4x4 grid.
    #[must_use]
    pub fn classic() -> Self {
        let dice = CLASSIC_DICE.into_iter().map(Die::new).collect();
        Self {
            rows: 4,
            cols: 4,
            dice,
        }
    }

    /// Grid height in rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width in columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The dice set in bag order.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Deal a board: shuffle the bag, roll each die, fill row-major.
    #[must_use]
    pub fn generate(&self, rng: &mut BoardRng) -> Board {
        let mut order: Vec<usize> = (0..self.dice.len()).collect();
        rng.shuffle(&mut order);

        let tiles: Vec<Vec<String>> = order
            .chunks(self.cols.max(1))
            .map(|row| {
                row.iter()
                    .map(|&index| {
                        self.dice[index]
                            .roll(rng)
                            .expect("validated dice have faces")
                            .to_string()
                    })
                    .collect()
            })
            .collect();

        Board::from_rows(tiles).expect("validated dice deal rectangular non-blank tiles")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_set() -> Vec<Die> {
        vec![
            Die::new(["A", "B"]),
            Die::new(["C", "D"]),
            Die::new(["E", "F"]),
            Die::new(["QU", "G"]),
        ]
    }

    #[test]
    fn test_classic_shape() {
        let generator = BoardGenerator::classic();
        assert_eq!(generator.rows(), 4);
        assert_eq!(generator.cols(), 4);
        assert_eq!(generator.dice().len(), 16);
    }

    #[test]
    fn test_classic_has_qu_face() {
        let generator = BoardGenerator::classic();
        let has_qu = generator
            .dice()
            .iter()
            .any(|die| die.faces().iter().any(|face| face == "QU"));
        assert!(has_qu);
    }

    #[test]
    fn test_classic_faces_are_six_per_die() {
        let generator = BoardGenerator::classic();
        assert!(generator.dice().iter().all(|die| die.faces().len() == 6));
    }

    #[test]
    fn test_generate_fills_grid() {
        let generator = BoardGenerator::classic();
        let mut rng = BoardRng::new(7);
        let board = generator.generate(&mut rng);

        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 4);
        assert!(board.cells().all(|cell| !board[cell].is_empty()));
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let generator = BoardGenerator::classic();
        let first = generator.generate(&mut BoardRng::new(99));
        let second = generator.generate(&mut BoardRng::new(99));
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_varies_across_seeds() {
        let generator = BoardGenerator::classic();
        let boards: Vec<Board> = (0..8)
            .map(|seed| generator.generate(&mut BoardRng::new(seed)))
            .collect();
        let distinct = boards.windows(2).any(|pair| pair[0] != pair[1]);
        assert!(distinct, "eight seeds dealt identical boards");
    }

    #[test]
    fn test_custom_set() {
        let generator = BoardGenerator::new(2, 2, small_set()).unwrap();
        let mut rng = BoardRng::new(3);
        let board = generator.generate(&mut rng);

        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 2);
        for cell in board.cells() {
            let tile = &board[cell];
            assert!(
                ["A", "B", "C", "D", "E", "F", "QU", "G"].contains(&tile),
                "unexpected tile {tile:?}"
            );
        }
    }

    #[test]
    fn test_dice_count_mismatch() {
        let err = BoardGenerator::new(3, 3, small_set()).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::DiceCount {
                expected: 9,
                found: 4
            }
        );
    }

    #[test]
    fn test_empty_die_rejected() {
        let mut dice = small_set();
        dice[2] = Die::new(Vec::<String>::new());
        let err = BoardGenerator::new(2, 2, dice).unwrap_err();
        assert_eq!(err, GeneratorError::EmptyDie { index: 2 });
    }

    #[test]
    fn test_blank_face_rejected() {
        let mut dice = small_set();
        dice[1] = Die::new(["A", ""]);
        let err = BoardGenerator::new(2, 2, dice).unwrap_err();
        assert_eq!(err, GeneratorError::BlankFace { index: 1 });
    }

    #[test]
    fn test_error_messages() {
        let count = GeneratorError::DiceCount {
            expected: 16,
            found: 4,
        };
        assert_eq!(count.to_string(), "grid needs 16 dice, set has 4");

        let empty = GeneratorError::EmptyDie { index: 5 };
        assert_eq!(empty.to_string(), "die 5 has no faces");
    }

    #[test]
    fn test_serialization() {
        let generator = BoardGenerator::new(2, 2, small_set()).unwrap();
        let json = serde_json::to_string(&generator).unwrap();
        let deserialized: BoardGenerator = serde_json::from_str(&json).unwrap();
        assert_eq!(generator, deserialized);
    }
}
