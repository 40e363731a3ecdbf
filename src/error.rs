use thiserror::Error;

/// Errors the layout engine can raise. A word that fails to place is not an
/// error — it is dropped and reported in the layout's `dropped` list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Not a single word could be placed, so there is no layout to return.
    #[error("no words could be placed on the grid")]
    NoWordsPlaced,
}
