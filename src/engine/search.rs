use rand::Rng;

use crate::engine::grid::Grid;
use crate::engine::words;
use crate::models::{
    Alphabet, Difficulty, Position, WordEntry, WordSearchLayout, WordSearchPlacement,
};
use crate::utils::letters;

/// Side length of the word-search canvas.
pub const DEFAULT_GRID_SIZE: usize = 12;
/// Random (direction, origin) attempts per word before it is dropped.
pub const DEFAULT_TRIALS_PER_WORD: usize = 100;

/// A straight line a hidden word may run along. All directions read
/// forward: left to right, top to bottom, or both at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Right,
    Down,
    DownRight,
}

impl SearchDirection {
    fn delta(self) -> (i32, i32) {
        match self {
            SearchDirection::Right => (0, 1),
            SearchDirection::Down => (1, 0),
            SearchDirection::DownRight => (1, 1),
        }
    }
}

fn active_directions(difficulty: Difficulty) -> &'static [SearchDirection] {
    match difficulty {
        Difficulty::Easy => &[SearchDirection::Right],
        Difficulty::Medium => &[SearchDirection::Right, SearchDirection::Down],
        Difficulty::Hard => &[
            SearchDirection::Right,
            SearchDirection::Down,
            SearchDirection::DownRight,
        ],
    }
}

/// Word-search placer. Words go down on a fixed-size canvas along straight
/// lines, longest first, by random trial; overlap with an earlier word is
/// fine where the letters agree. Leftover cells are filled with noise from
/// the configured alphabet. The RNG is injected so a seeded run reproduces
/// its grid exactly.
#[derive(Debug, Clone)]
pub struct WordSearchGenerator {
    grid_size: usize,
    difficulty: Difficulty,
    alphabet: Alphabet,
    trials_per_word: usize,
}

impl Default for WordSearchGenerator {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            difficulty: Difficulty::Medium,
            alphabet: Alphabet::Latin,
            trials_per_word: DEFAULT_TRIALS_PER_WORD,
        }
    }
}

impl WordSearchGenerator {
    pub fn new(grid_size: usize, difficulty: Difficulty, alphabet: Alphabet) -> Self {
        Self {
            grid_size,
            difficulty,
            alphabet,
            trials_per_word: DEFAULT_TRIALS_PER_WORD,
        }
    }

    pub fn with_trials_per_word(mut self, trials_per_word: usize) -> Self {
        self.trials_per_word = trials_per_word;
        self
    }

    pub fn generate(&self, entries: &[WordEntry], rng: &mut impl Rng) -> WordSearchLayout {
        let mut grid = Grid::new(self.grid_size, self.grid_size);
        let mut placements: Vec<WordSearchPlacement> = Vec::new();
        let mut dropped: Vec<String> = Vec::new();

        let directions = active_directions(self.difficulty);

        for entry in words::prepare(entries) {
            let letters: Vec<char> = entry.text.chars().collect();
            match self.try_place(&mut grid, &letters, directions, rng) {
                Some(cells) => placements.push(WordSearchPlacement {
                    word: entry.text,
                    cells,
                }),
                None => {
                    tracing::debug!(word = %entry.text, "trial budget exhausted, dropping word");
                    dropped.push(entry.text);
                }
            }
        }

        self.fill_noise(&mut grid, rng);

        WordSearchLayout {
            grid,
            placements,
            dropped,
        }
    }

    /// Random (direction, origin) trials until one fits or the budget runs
    /// out. The first fitting trial is committed.
    fn try_place(
        &self,
        grid: &mut Grid,
        letters: &[char],
        directions: &[SearchDirection],
        rng: &mut impl Rng,
    ) -> Option<Vec<Position>> {
        for _ in 0..self.trials_per_word {
            let direction = directions[rng.random_range(0..directions.len())];
            let row = rng.random_range(0..self.grid_size) as i32;
            let col = rng.random_range(0..self.grid_size) as i32;

            if let Some(cells) = fits(grid, letters, row, col, direction) {
                for (&letter, cell) in letters.iter().zip(&cells) {
                    grid.set(cell.row, cell.col, letter);
                }
                return Some(cells);
            }
        }
        None
    }

    fn fill_noise(&self, grid: &mut Grid, rng: &mut impl Rng) {
        let alphabet = letters::alphabet_letters(self.alphabet);
        for row in 0..self.grid_size {
            for col in 0..self.grid_size {
                if !grid.is_occupied(row as i32, col as i32) {
                    grid.set(row, col, alphabet[rng.random_range(0..alphabet.len())]);
                }
            }
        }
    }
}

/// A trial fits when every covered cell is in bounds and either empty or
/// already holding the identical letter.
fn fits(
    grid: &Grid,
    letters: &[char],
    row: i32,
    col: i32,
    direction: SearchDirection,
) -> Option<Vec<Position>> {
    let (dr, dc) = direction.delta();
    let mut cells = Vec::with_capacity(letters.len());

    for (i, &letter) in letters.iter().enumerate() {
        let r = row + dr * i as i32;
        let c = col + dc * i as i32;
        if !grid.in_bounds(r, c) {
            return None;
        }
        if let Some(existing) = grid.get(r, c) {
            if existing != letter {
                return None;
            }
        }
        cells.push(Position {
            row: r as usize,
            col: c as usize,
        });
    }

    Some(cells)
}
