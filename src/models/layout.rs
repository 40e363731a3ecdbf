use serde::{Deserialize, Serialize};

use crate::engine::grid::Grid;

/// Direction a crossword word reads in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Across,
    Down,
}

impl Orientation {
    /// Per-letter (row, col) step for this orientation.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Orientation::Across => (0, 1),
            Orientation::Down => (1, 0),
        }
    }
}

/// A cell coordinate. Ordering is row-major: top-to-bottom, then
/// left-to-right, which is also crossword reading order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A single word's committed position within a crossword grid.
#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub cells: Vec<Position>,
    pub number: u32,
}

impl Placement {
    /// Start cell of this placement, the one its clue number belongs to.
    pub fn start(&self) -> Position {
        Position {
            row: self.row,
            col: self.col,
        }
    }
}

/// Finished crossword: cropped grid, numbered placements, and the words
/// that could not be placed.
#[derive(Debug, Clone, Serialize)]
pub struct CrosswordLayout {
    pub grid: Grid,
    pub placements: Vec<Placement>,
    pub dropped: Vec<String>,
}

/// A word's covered cells within a word-search grid.
#[derive(Debug, Clone, Serialize)]
pub struct WordSearchPlacement {
    pub word: String,
    pub cells: Vec<Position>,
}

/// Finished word search: fully populated grid plus the hidden words'
/// locations, and the words that could not be placed.
#[derive(Debug, Clone, Serialize)]
pub struct WordSearchLayout {
    pub grid: Grid,
    pub placements: Vec<WordSearchPlacement>,
    pub dropped: Vec<String>,
}
