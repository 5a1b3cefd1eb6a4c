//! Hand joint identifiers
//!
//! The 21 landmarks follow the hand-pose pipeline's output order: the
//! wrist first, then four segments per finger from base to tip.

use serde::{Deserialize, Serialize};

/// Number of joints in one hand skeleton
pub const JOINT_COUNT: usize = 21;

/// One of the 21 tracked hand landmarks
///
/// Segment 1 is the joint closest to the palm, segment 4 is the fingertip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Joint {
    Wrist,
    Thumb1,
    Thumb2,
    Thumb3,
    Thumb4,
    Index1,
    Index2,
    Index3,
    Index4,
    Middle1,
    Middle2,
    Middle3,
    Middle4,
    Ring1,
    Ring2,
    Ring3,
    Ring4,
    Pinky1,
    Pinky2,
    Pinky3,
    Pinky4,
}

impl Joint {
    /// All joints in pipeline order
    pub const ALL: [Joint; JOINT_COUNT] = [
        Joint::Wrist,
        Joint::Thumb1,
        Joint::Thumb2,
        Joint::Thumb3,
        Joint::Thumb4,
        Joint::Index1,
        Joint::Index2,
        Joint::Index3,
        Joint::Index4,
        Joint::Middle1,
        Joint::Middle2,
        Joint::Middle3,
        Joint::Middle4,
        Joint::Ring1,
        Joint::Ring2,
        Joint::Ring3,
        Joint::Ring4,
        Joint::Pinky1,
        Joint::Pinky2,
        Joint::Pinky3,
        Joint::Pinky4,
    ];

    /// Position of this joint in the pipeline's keypoint array (0-20)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wrist => "wrist",
            Self::Thumb1 => "thumb-1",
            Self::Thumb2 => "thumb-2",
            Self::Thumb3 => "thumb-3",
            Self::Thumb4 => "thumb-4",
            Self::Index1 => "index-1",
            Self::Index2 => "index-2",
            Self::Index3 => "index-3",
            Self::Index4 => "index-4",
            Self::Middle1 => "middle-1",
            Self::Middle2 => "middle-2",
            Self::Middle3 => "middle-3",
            Self::Middle4 => "middle-4",
            Self::Ring1 => "ring-1",
            Self::Ring2 => "ring-2",
            Self::Ring3 => "ring-3",
            Self::Ring4 => "ring-4",
            Self::Pinky1 => "pinky-1",
            Self::Pinky2 => "pinky-2",
            Self::Pinky3 => "pinky-3",
            Self::Pinky4 => "pinky-4",
        }
    }

    /// Fingertip joints, thumb first
    pub fn fingertips() -> [Joint; 5] {
        [
            Self::Thumb4,
            Self::Index4,
            Self::Middle4,
            Self::Ring4,
            Self::Pinky4,
        ]
    }
}

impl std::fmt::Display for Joint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
