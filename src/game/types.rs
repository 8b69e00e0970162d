use serde::{Serialize, Deserialize};

/// One of the two guessable labels an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "personA")]
    PersonA,
    #[serde(rename = "personB")]
    PersonB,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::PersonA, Category::PersonB];

    /// Wire label, as sent by the guess buttons.
    pub fn label(self) -> &'static str {
        match self {
            Category::PersonA => "personA",
            Category::PersonB => "personB",
        }
    }

    /// Parse a guess label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// A displayable image with its explicit category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageEntry {
    pub path: String,
    pub category: Category,
}

impl ImageEntry {
    pub fn new(path: impl Into<String>, category: Category) -> Self {
        Self {
            path: path.into(),
            category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Correct,
    Incorrect,
}

/// Why a session reached `GameOver`. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    WrongGuess,
    Timeout,
    PoolExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "outcome")]
pub enum Phase {
    NotStarted,
    Playing,
    AwaitingGuess,
    RoundResolved(RoundOutcome),
    GameOver,
}
