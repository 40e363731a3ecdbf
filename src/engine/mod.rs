// Layout engine modules

pub mod cropper;
pub mod crossword;
pub mod grid;
pub mod numberer;
pub mod search;
pub mod words;

pub use crossword::CrosswordGenerator;
pub use grid::Grid;
pub use search::WordSearchGenerator;
