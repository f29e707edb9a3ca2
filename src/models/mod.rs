use serde::{Deserialize, Serialize};

/// A single cell coordinate on the grid. `x` is the column, `y` the row,
/// with (0, 0) at the top-left.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

/// JLPT proficiency levels, ordered coarsest to most advanced.
/// Vocabulary is cumulative: every word available at N5 is also
/// available at N4 and above.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum JlptLevel {
    N5,
    N4,
    N3,
    N2,
    N1,
}

impl JlptLevel {
    pub const ALL: [JlptLevel; 5] = [
        JlptLevel::N5,
        JlptLevel::N4,
        JlptLevel::N3,
        JlptLevel::N2,
        JlptLevel::N1,
    ];

    /// All levels from N5 up to and including `self`.
    pub fn up_to(self) -> impl Iterator<Item = JlptLevel> {
        Self::ALL.into_iter().filter(move |lvl| *lvl <= self)
    }
}

/// Which script the player is matching words in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Blocks are kana syllables; words match on their reading.
    Hiragana,
    /// Blocks are single kanji; words match on their compound form.
    Kanji,
}

/// One vocabulary entry as stored in the bundled word lists.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct WordEntry {
    pub hiragana: String,
    pub kanji: String,
}

/// Dictionary value: the display form of a word and the level that
/// first introduces it.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct WordInfo {
    pub kanji: String,
    pub level: JlptLevel,
}

/// A detected in-grid occurrence of a dictionary word.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Match {
    /// Occupied cells in scan order (left-to-right or top-to-bottom).
    pub cells: Vec<Position>,
    /// Resolved display form of the matched word.
    pub kanji: String,
    /// Level at which the word was first defined.
    pub level: JlptLevel,
}

/// The single falling block, present only while a round is in progress
/// and a token is airborne.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Block {
    pub x: usize,
    pub y: usize,
    pub token: String,
}
