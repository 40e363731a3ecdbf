//! Grid word-placement engine: lays a word list out either as an
//! intersecting crossword or as a multi-directional word search.
//!
//! Both modes are pure, synchronous computations — one word list in, one
//! layout out, no state kept between calls. Crossword generation is fully
//! deterministic for a given input; word-search generation draws from a
//! caller-supplied [`rand::Rng`], so a seeded RNG reproduces its grid
//! exactly. Rendering, persistence and word/clue authoring belong to the
//! caller.

pub mod engine;
pub mod error;
pub mod models;
pub mod utils;

pub use engine::{CrosswordGenerator, Grid, WordSearchGenerator};
pub use error::LayoutError;
pub use models::{
    Alphabet, CrosswordLayout, Difficulty, Orientation, Placement, Position, WordEntry,
    WordSearchLayout, WordSearchPlacement,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossword_layout_wire_shape() {
        let layout = CrosswordGenerator::default()
            .generate(&[WordEntry::with_clue("cat", "feline")])
            .unwrap();

        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["grid"]["cells"][0][0], "C");
        assert_eq!(json["placements"][0]["word"], "CAT");
        assert_eq!(json["placements"][0]["clue"], "feline");
        assert_eq!(json["placements"][0]["orientation"], "across");
        assert_eq!(json["placements"][0]["number"], 1);
        assert_eq!(json["dropped"], serde_json::json!([]));
    }
}
