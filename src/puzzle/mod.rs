//! Piece interaction
//!
//! The controller consumes one hand skeleton per frame, reacts to gesture
//! transitions by grabbing or releasing pieces, and drags the held piece
//! along with the hand cursor.
//!
//! Each piece moves through `Free -> Held -> Placed`; a piece released away
//! from its slot goes back to `Free`. `Placed` is terminal.

pub mod controller;
pub mod scene;
pub mod session;


use serde::Serialize;

use crate::gesture::Gesture;
use crate::hand::Vec2;

pub use controller::PieceController;
pub use scene::{Board, PieceScene};
pub use session::{Session, SessionSummary};

/// Observable outcome of a controller operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InteractionEvent {
    /// The classified gesture differs from the previous frame
    GestureChanged { from: Gesture, to: Gesture },
    /// A piece is now held
    Grabbed { piece: usize },
    /// The held piece was let go away from its slot
    Dropped { piece: usize, position: Vec2 },
    /// The held piece was let go close enough to snap into its slot
    Placed { piece: usize, slot: Vec2 },
    /// The hold ended because no gesture was recognized for too long
    HoldTimedOut { piece: usize },
}

impl InteractionEvent {
    /// Status text for the UI, emitted on fist/palm transitions only
    pub fn status_label(&self) -> Option<&'static str> {
        match self {
            Self::GestureChanged { to, .. } => to.status_label(),
            _ => None,
        }
    }
}
