use crate::engine::grid::Grid;
use crate::models::Placement;

/// Trim the working canvas to the tight bounding box of its occupied cells
/// and re-base every placement into the cropped coordinate frame. Returns
/// `None` when nothing was ever placed.
pub fn crop(canvas: &Grid, placements: Vec<Placement>) -> Option<(Grid, Vec<Placement>)> {
    let mut min_row = usize::MAX;
    let mut max_row = 0;
    let mut min_col = usize::MAX;
    let mut max_col = 0;

    for (r, row) in canvas.rows().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if cell.is_some() {
                min_row = min_row.min(r);
                max_row = max_row.max(r);
                min_col = min_col.min(c);
                max_col = max_col.max(c);
            }
        }
    }

    if min_row == usize::MAX {
        return None;
    }

    let mut grid = Grid::new(max_col - min_col + 1, max_row - min_row + 1);
    for r in min_row..=max_row {
        for c in min_col..=max_col {
            if let Some(letter) = canvas.get(r as i32, c as i32) {
                grid.set(r - min_row, c - min_col, letter);
            }
        }
    }

    let placements = placements
        .into_iter()
        .map(|mut placement| {
            placement.row -= min_row;
            placement.col -= min_col;
            for cell in &mut placement.cells {
                cell.row -= min_row;
                cell.col -= min_col;
            }
            placement
        })
        .collect();

    Some((grid, placements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Orientation, Position};

    #[test]
    fn test_empty_canvas_crops_to_nothing() {
        let canvas = Grid::new(10, 10);
        assert!(crop(&canvas, Vec::new()).is_none());
    }

    #[test]
    fn test_crop_rebases_grid_and_placements() {
        let mut canvas = Grid::new(10, 10);
        canvas.set(4, 3, 'H');
        canvas.set(4, 4, 'I');

        let placements = vec![Placement {
            word: "HI".to_string(),
            clue: None,
            row: 4,
            col: 3,
            orientation: Orientation::Across,
            cells: vec![Position { row: 4, col: 3 }, Position { row: 4, col: 4 }],
            number: 0,
        }];

        let (grid, placements) = crop(&canvas, placements).unwrap();

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.get(0, 0), Some('H'));
        assert_eq!(grid.get(0, 1), Some('I'));

        assert_eq!(placements[0].row, 0);
        assert_eq!(placements[0].col, 0);
        assert_eq!(placements[0].cells[1], Position { row: 0, col: 1 });
    }
}
