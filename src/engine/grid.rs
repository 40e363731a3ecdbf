use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Bounds-checked 2D letter matrix shared by both puzzle modes. `None`
/// marks an unused cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Option<char>>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        let mut cells = Vec::with_capacity(height);
        for _ in 0..height {
            cells.push(vec![None; width]);
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Signed coordinates so callers can probe neighbors of edge cells
    /// without underflow gymnastics.
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Letter at (row, col), or `None` if the cell is unused or out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<char> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.cells[row as usize][col as usize]
    }

    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.get(row, col).is_some()
    }

    pub fn set(&mut self, row: usize, col: usize, letter: char) {
        self.cells[row][col] = Some(letter);
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.iter().map(|row| row.as_slice())
    }
}

/// Downstream renderers expect each cell as "" or a one-glyph string.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<Vec<String>> = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect();

        let mut state = serializer.serialize_struct("Grid", 3)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("cells", &rows)?;
        state.end()
    }
}
