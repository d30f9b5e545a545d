//! Fixed mood palette and score mapping

use serde::{Deserialize, Serialize};

/// One of the six moods in the fixed palette, ordered worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mood {
    Awful,
    Bad,
    Worried,
    Okay,
    Good,
    Great,
}

/// Palette table: mood, emoji symbol, score 1-6
const PALETTE: [(Mood, &str, u8); 6] = [
    (Mood::Awful, "😭", 1),
    (Mood::Bad, "😞", 2),
    (Mood::Worried, "😟", 3),
    (Mood::Okay, "🙂", 4),
    (Mood::Good, "😊", 5),
    (Mood::Great, "😄", 6),
];

impl Mood {
    /// All six moods in score order
    pub const ALL: [Mood; 6] = [
        Mood::Awful,
        Mood::Bad,
        Mood::Worried,
        Mood::Okay,
        Mood::Good,
        Mood::Great,
    ];

    /// Look up a mood by its emoji symbol
    pub fn from_symbol(symbol: &str) -> Option<Mood> {
        PALETTE
            .iter()
            .find(|(_, s, _)| *s == symbol)
            .map(|(mood, _, _)| *mood)
    }

    /// Look up a mood by its score (1-6)
    pub fn from_score(score: u8) -> Option<Mood> {
        PALETTE
            .iter()
            .find(|(_, _, sc)| *sc == score)
            .map(|(mood, _, _)| *mood)
    }

    /// Score 1-6, monotonic with mood quality
    pub fn score(self) -> u8 {
        match self {
            Mood::Awful => 1,
            Mood::Bad => 2,
            Mood::Worried => 3,
            Mood::Okay => 4,
            Mood::Good => 5,
            Mood::Great => 6,
        }
    }

    /// The emoji symbol shown in the picker and stored on disk
    pub fn symbol(self) -> &'static str {
        match self {
            Mood::Awful => "😭",
            Mood::Bad => "😞",
            Mood::Worried => "😟",
            Mood::Okay => "🙂",
            Mood::Good => "😊",
            Mood::Great => "😄",
        }
    }
}
