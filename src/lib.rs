//! Gesture Puzzle
//!
//! Turns a per-frame stream of 21 hand keypoints into discrete gestures
//! (fist, open palm) and uses them to grab, drag and snap puzzle pieces
//! into their slots.

pub mod config;
pub mod gesture;
pub mod hand;
pub mod puzzle;
pub mod source;

pub use config::AppConfig;
pub use gesture::{Gesture, GestureClassifier};
pub use hand::{hand_cursor, HandSkeleton, Joint, Vec2, Vec3};
pub use puzzle::{Board, InteractionEvent, PieceController, PieceScene, Session};
pub use source::{Frame, JsonLinesSource, KeypointSource};
