//! Per-frame hand skeleton snapshot

use thiserror::Error;

use super::joint::{Joint, JOINT_COUNT};
use super::math::Vec3;

/// Errors raised when building a skeleton from raw pipeline output
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SkeletonError {
    #[error("expected 21 joints, got {0}")]
    JointCount(usize),

    #[error("joint {joint} has a non-finite coordinate")]
    NonFinite { joint: Joint },
}

/// Positions of all 21 joints for a single frame
///
/// Immutable once built; the keypoint source produces a fresh snapshot
/// every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSkeleton {
    joints: [Vec3; JOINT_COUNT],
}

impl HandSkeleton {
    pub fn new(joints: [Vec3; JOINT_COUNT]) -> Self {
        Self { joints }
    }

    /// Build a skeleton from raw `[x, y, z]` triples in pipeline order
    pub fn from_points(points: &[[f32; 3]]) -> Result<Self, SkeletonError> {
        if points.len() != JOINT_COUNT {
            return Err(SkeletonError::JointCount(points.len()));
        }

        let mut joints = [Vec3::ZERO; JOINT_COUNT];
        for (joint, point) in Joint::ALL.iter().zip(points) {
            let position = Vec3::from(*point);
            if !position.is_finite() {
                return Err(SkeletonError::NonFinite { joint: *joint });
            }
            joints[joint.index()] = position;
        }

        Ok(Self { joints })
    }

    pub fn joint(&self, joint: Joint) -> Vec3 {
        self.joints[joint.index()]
    }

    /// 3D distance between two joints
    pub fn distance(&self, a: Joint, b: Joint) -> f32 {
        self.joint(a).distance(self.joint(b))
    }

    /// Same skeleton with every joint shifted by `offset`
    pub fn translated(&self, offset: Vec3) -> Self {
        let mut joints = self.joints;
        for position in &mut joints {
            *position = *position + offset;
        }
        Self { joints }
    }

    pub fn joints(&self) -> &[Vec3; JOINT_COUNT] {
        &self.joints
    }
}

impl std::ops::Index<Joint> for HandSkeleton {
    type Output = Vec3;

    fn index(&self, joint: Joint) -> &Vec3 {
        &self.joints[joint.index()]
    }
}
