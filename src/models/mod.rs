pub mod layout;
pub mod word;

pub use layout::{
    // Crossword output
    CrosswordLayout, Orientation, Placement,
    // Shared coordinates
    Position,
    // Word-search output
    WordSearchLayout, WordSearchPlacement,
};
pub use word::{Alphabet, Difficulty, WordEntry};
