//! Classifier types and data structures

use serde::{Deserialize, Serialize};

/// Class label assigned to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    /// Unsolicited message
    Spam,
    /// Legitimate message
    Ham,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Spam => write!(f, "spam"),
            Label::Ham => write!(f, "ham"),
        }
    }
}

/// A vocabulary word ranked by how strongly it indicates one class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicativeWord {
    /// The word itself
    pub word: String,
    /// Log of the posterior-to-marginal ratio for the target class
    pub score: f64,
}
