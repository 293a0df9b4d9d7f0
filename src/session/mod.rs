//! Interactive play sessions.
//!
//! A [`GameSession`] wraps one board and one dictionary with the
//! bookkeeping an interactive shell needs: it computes the score ceiling
//! up front, validates each traced path, enforces the once-per-word
//! rule, accumulates the score, and answers the end-of-game questions
//! ("found everything?", "hit the maximum?").
//!
//! Session state lives in persistent collections, so cloning a session
//! is O(1); a shell can snapshot before a submission and keep the
//! snapshot for undo or replay.
//!
//! ## Usage
//!
//! ```
//! use boggle_engine::core::{Board, Cell, Path};
//! use boggle_engine::dictionary::Dictionary;
//! use boggle_engine::session::GameSession;
//!
//! let board = Board::from_letters(&["CA", "TS"]).unwrap();
//! let dict = Dictionary::from_words(["CAT", "CATS", "AT"]);
//! let mut session = GameSession::new(board, dict);
//!
//! assert_eq!(session.max_score(), 29);
//!
//! let cat = Path::from_cells([Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]);
//! let accepted = session.submit(&cat).unwrap();
//! assert_eq!(accepted.word, "CAT");
//! assert_eq!(session.score(), 9);
//! ```

use im::{HashSet as ImHashSet, Vector};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Path};
use crate::dictionary::Dictionary;
use crate::solver::{max_score_paths, Solution};
use crate::validate::{validate_path, PathError};

/// One accepted submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acceptance {
    /// The word the path spells.
    pub word: String,
    /// The traced path.
    pub path: Path,
    /// Points earned: path length squared.
    pub score: u32,
}

/// Why a submission was not accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The path failed validation.
    Rejected(PathError),
    /// The word was already accepted this session; each word counts
    /// once no matter how many paths spell it.
    AlreadyFound {
        /// The repeated word.
        word: String,
    },
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(err) => write!(f, "{err}"),
            Self::AlreadyFound { word } => {
                write!(f, "{word:?} was already found this session")
            }
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected(err) => Some(err),
            Self::AlreadyFound { .. } => None,
        }
    }
}

impl From<PathError> for SubmitError {
    fn from(err: PathError) -> Self {
        Self::Rejected(err)
    }
}

/// A play session over one board.
///
/// Every valid submission's word is necessarily in the precomputed
/// solution: a path that validates is a repeat-free chain of board
/// cells spelling a dictionary word, which is exactly what the
/// max-score sweep enumerates. The accepted set therefore only ever
/// grows toward the solution's word set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    dictionary: Dictionary,
    solution: Solution,
    accepted: ImHashSet<String>,
    history: Vector<Acceptance>,
    score: u64,
}

impl GameSession {
    /// Start a session: computes the full solution for the board up
    /// front, which is the expensive part of session setup.
    #[must_use]
    pub fn new(board: Board, dictionary: Dictionary) -> Self {
        let solution = max_score_paths(&board, &dictionary);
        debug!(
            "session opened: {} reachable words, ceiling {}",
            solution.len(),
            solution.total_score()
        );
        Self {
            board,
            dictionary,
            solution,
            accepted: ImHashSet::new(),
            history: Vector::new(),
            score: 0,
        }
    }

    /// The board being played.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The dictionary in force.
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The precomputed best-path-per-word solution.
    #[must_use]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Points accumulated so far.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// The score ceiling: every reachable word at its best path.
    #[must_use]
    pub fn max_score(&self) -> u64 {
        self.solution.total_score()
    }

    /// Submit a traced path.
    ///
    /// Validation failures and repeated words leave the session
    /// untouched; an accepted submission is recorded and scored.
    pub fn submit(&mut self, path: &Path) -> Result<Acceptance, SubmitError> {
        let word = validate_path(&self.board, path, &self.dictionary)?;
        if self.accepted.contains(&word) {
            return Err(SubmitError::AlreadyFound { word });
        }

        let acceptance = Acceptance {
            word: word.clone(),
            path: path.clone(),
            score: path.score(),
        };
        self.accepted.insert(word);
        self.history.push_back(acceptance.clone());
        self.score += u64::from(acceptance.score);
        debug!(
            "accepted {:?} for {} points ({} / {})",
            acceptance.word, acceptance.score, self.score, self.max_score()
        );
        Ok(acceptance)
    }

    /// Whether a word has been accepted this session.
    #[must_use]
    pub fn is_found(&self, word: &str) -> bool {
        self.accepted.contains(word)
    }

    /// Words accepted so far (unordered).
    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.accepted.iter().map(String::as_str)
    }

    /// Number of words accepted so far.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.accepted.len()
    }

    /// Accepted submissions in order.
    pub fn history(&self) -> impl Iterator<Item = &Acceptance> {
        self.history.iter()
    }

    /// Reachable words not found yet, sorted for display.
    #[must_use]
    pub fn remaining_words(&self) -> Vec<&str> {
        let mut remaining: Vec<&str> = self
            .solution
            .words()
            .filter(|word| !self.accepted.contains(*word))
            .collect();
        remaining.sort_unstable();
        remaining
    }

    /// Whether every reachable word has been found.
    #[must_use]
    pub fn found_all_words(&self) -> bool {
        self.accepted.len() == self.solution.len()
    }

    /// Whether the score ceiling has been reached.
    ///
    /// Reaching the ceiling requires finding every word along a
    /// maximum-score path. Trivially true on a board with nothing
    /// reachable.
    #[must_use]
    pub fn reached_max_score(&self) -> bool {
        self.score == self.max_score()
    }
}
