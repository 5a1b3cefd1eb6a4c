//! Hand keypoint data model
//!
//! Provides the 21-joint skeleton snapshot produced by the hand-pose
//! pipeline, the vector types it is expressed in, and the hand cursor
//! derived from it.

pub mod cursor;
pub mod joint;
pub mod math;
pub mod skeleton;

pub use cursor::hand_cursor;
pub use joint::{Joint, JOINT_COUNT};
pub use math::{Vec2, Vec3};
pub use skeleton::{HandSkeleton, SkeletonError};

#[cfg(test)]
pub(crate) mod fixtures;
