use serde::{Deserialize, Serialize};

/// A single input word with an optional clue, as supplied by the upstream
/// generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
}

impl WordEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            clue: None,
        }
    }

    pub fn with_clue(text: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            clue: Some(clue.into()),
        }
    }
}

/// Word-search difficulty. Controls which straight-line directions the
/// placer may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Horizontal only
    Easy,
    /// Horizontal and vertical
    Medium,
    /// Horizontal, vertical and diagonal
    Hard,
}

/// Letter set used for word-search noise fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    Latin,
    Cyrillic,
}
