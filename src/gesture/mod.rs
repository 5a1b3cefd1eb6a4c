//! Gesture recognition from hand skeleton data
//!
//! Classifies each frame's skeleton into one of three discrete gestures.
//! Classification is stateless; transition detection belongs to the
//! caller that remembers the previous gesture.

pub mod classifier;

use serde::{Deserialize, Serialize};

pub use classifier::GestureClassifier;

/// Discrete hand gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    /// Ambiguous reading, neither fist nor open palm
    None,
    /// Closed hand; grabs a piece
    Fist,
    /// Open hand; releases the held piece
    Palm,
}

impl Gesture {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fist => "fist",
            Self::Palm => "palm",
        }
    }

    /// Status text shown when the hand switches into this gesture
    pub fn status_label(self) -> Option<&'static str> {
        match self {
            Self::Fist => Some("Grabbing"),
            Self::Palm => Some("Release"),
            Self::None => None,
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
