use std::collections::HashMap;

use crate::models::{Placement, Position};

/// Assign crossword clue numbers. Distinct start cells are numbered 1, 2,
/// 3, … in row-major reading order; an Across and a Down sharing a start
/// cell share its number.
pub fn assign_numbers(placements: &mut [Placement]) {
    let mut starts: Vec<Position> = placements.iter().map(Placement::start).collect();
    starts.sort();
    starts.dedup();

    let numbers: HashMap<Position, u32> = starts
        .into_iter()
        .enumerate()
        .map(|(i, start)| (start, i as u32 + 1))
        .collect();

    for placement in placements.iter_mut() {
        if let Some(&number) = numbers.get(&placement.start()) {
            placement.number = number;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Orientation;

    fn placement(word: &str, row: usize, col: usize, orientation: Orientation) -> Placement {
        Placement {
            word: word.to_string(),
            clue: None,
            row,
            col,
            orientation,
            cells: Vec::new(),
            number: 0,
        }
    }

    #[test]
    fn test_reading_order_numbering() {
        let mut placements = vec![
            placement("SECOND", 1, 0, Orientation::Across),
            placement("FIRST", 0, 2, Orientation::Down),
            placement("THIRD", 1, 4, Orientation::Down),
        ];

        assign_numbers(&mut placements);

        assert_eq!(placements[0].number, 2);
        assert_eq!(placements[1].number, 1);
        assert_eq!(placements[2].number, 3);
    }

    #[test]
    fn test_shared_start_shares_number() {
        let mut placements = vec![
            placement("ACROSS", 2, 2, Orientation::Across),
            placement("ADOWN", 2, 2, Orientation::Down),
            placement("LATER", 3, 0, Orientation::Across),
        ];

        assign_numbers(&mut placements);

        assert_eq!(placements[0].number, 1);
        assert_eq!(placements[1].number, 1);
        assert_eq!(placements[2].number, 2);
    }
}
