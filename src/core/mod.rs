//! Core grid types: cells, boards, paths, RNG.
//!
//! This module contains the building blocks the rest of the engine is
//! written against. Nothing here knows about dictionaries or scoring
//! sweeps; a board is just tiles and geometry.

pub mod board;
pub mod cell;
pub mod path;
pub mod rng;

pub use board::{Board, BoardError};
pub use cell::Cell;
pub use path::Path;
pub use rng::{BoardRng, BoardRngState};
