use crate::engine::cropper;
use crate::engine::grid::Grid;
use crate::engine::numberer;
use crate::engine::words;
use crate::error::LayoutError;
use crate::models::{CrosswordLayout, Orientation, Placement, Position, WordEntry};

/// Side length of the oversized working canvas. Placement never resizes the
/// grid; the cropper trims the unused margin afterwards.
pub const DEFAULT_CANVAS_SIZE: usize = 40;

/// Greedy first-fit crossword placer. The first word is centered
/// horizontally; every later word must cross an already-placed word on a
/// matching letter. The first candidate position that validates is
/// committed, with no backtracking: a word that finds no candidate is
/// dropped for good.
#[derive(Debug, Clone)]
pub struct CrosswordGenerator {
    canvas_size: usize,
}

impl Default for CrosswordGenerator {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl CrosswordGenerator {
    pub fn new(canvas_size: usize) -> Self {
        Self { canvas_size }
    }

    /// Lay the words out. Returns an error only when nothing at all could
    /// be placed; individually unplaceable words land in `dropped`.
    pub fn generate(&self, entries: &[WordEntry]) -> Result<CrosswordLayout, LayoutError> {
        let mut grid = Grid::new(self.canvas_size, self.canvas_size);
        let mut placements: Vec<Placement> = Vec::new();
        let mut dropped: Vec<String> = Vec::new();

        for entry in words::prepare(entries) {
            if self.place_word(&mut grid, &mut placements, &entry) {
                continue;
            }
            tracing::debug!(word = %entry.text, "no valid crossword position, dropping word");
            dropped.push(entry.text);
        }

        let (grid, mut placements) =
            cropper::crop(&grid, placements).ok_or(LayoutError::NoWordsPlaced)?;
        numberer::assign_numbers(&mut placements);

        Ok(CrosswordLayout {
            grid,
            placements,
            dropped,
        })
    }

    fn place_word(
        &self,
        grid: &mut Grid,
        placements: &mut Vec<Placement>,
        entry: &WordEntry,
    ) -> bool {
        let letters: Vec<char> = entry.text.chars().collect();

        if placements.is_empty() {
            let center = (self.canvas_size / 2) as i32;
            let row = center;
            let col = center - letters.len() as i32 / 2;
            if !self.validate(grid, &letters, row, col, Orientation::Across, false) {
                return false;
            }
            commit(grid, placements, entry, &letters, row, col, Orientation::Across);
            return true;
        }

        // Fixed scan order: placed words in insertion order, then candidate
        // letter index, then placed-word letter index.
        for i in 0..placements.len() {
            let (p_row, p_col, p_orientation) = {
                let placed = &placements[i];
                (placed.row as i32, placed.col as i32, placed.orientation)
            };
            let placed_letters: Vec<char> = placements[i].word.chars().collect();

            for (ci, &candidate_letter) in letters.iter().enumerate() {
                for (pi, &placed_letter) in placed_letters.iter().enumerate() {
                    if candidate_letter != placed_letter {
                        continue;
                    }

                    // Cross the placed word perpendicularly at the shared letter.
                    let (row, col, orientation) = match p_orientation {
                        Orientation::Across => {
                            (p_row - ci as i32, p_col + pi as i32, Orientation::Down)
                        }
                        Orientation::Down => {
                            (p_row + pi as i32, p_col - ci as i32, Orientation::Across)
                        }
                    };

                    if self.validate(grid, &letters, row, col, orientation, true) {
                        commit(grid, placements, entry, &letters, row, col, orientation);
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Checks a candidate position:
    /// - every covered cell in bounds;
    /// - occupied cells must already hold the same letter (an intersection);
    /// - empty cells must not touch a parallel word sideways;
    /// - the cells just before and just after the word must be empty, or
    ///   the word would run into a neighbor and read as one string;
    /// - unless it is the first word, at least one intersection is required.
    fn validate(
        &self,
        grid: &Grid,
        letters: &[char],
        row: i32,
        col: i32,
        orientation: Orientation,
        require_intersection: bool,
    ) -> bool {
        let (dr, dc) = orientation.delta();
        let mut intersects = false;

        for (i, &letter) in letters.iter().enumerate() {
            let r = row + dr * i as i32;
            let c = col + dc * i as i32;
            if !grid.in_bounds(r, c) {
                return false;
            }
            match grid.get(r, c) {
                Some(existing) if existing != letter => return false,
                Some(_) => intersects = true,
                None => {
                    // Perpendicular neighbors of a fresh cell must be empty
                    if grid.is_occupied(r + dc, c + dr) || grid.is_occupied(r - dc, c - dr) {
                        return false;
                    }
                }
            }
        }

        let len = letters.len() as i32;
        if grid.is_occupied(row - dr, col - dc) || grid.is_occupied(row + dr * len, col + dc * len)
        {
            return false;
        }

        !require_intersection || intersects
    }
}

fn commit(
    grid: &mut Grid,
    placements: &mut Vec<Placement>,
    entry: &WordEntry,
    letters: &[char],
    row: i32,
    col: i32,
    orientation: Orientation,
) {
    let (dr, dc) = orientation.delta();
    let mut cells = Vec::with_capacity(letters.len());

    for (i, &letter) in letters.iter().enumerate() {
        let r = (row + dr * i as i32) as usize;
        let c = (col + dc * i as i32) as usize;
        grid.set(r, c, letter);
        cells.push(Position { row: r, col: c });
    }

    placements.push(Placement {
        word: entry.text.clone(),
        clue: entry.clue.clone(),
        row: row as usize,
        col: col as usize,
        orientation,
        cells,
        // Assigned after cropping, when coordinates are final
        number: 0,
    });
}
