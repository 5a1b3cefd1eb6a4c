//! Hand cursor estimation

use super::joint::Joint;
use super::math::Vec2;
use super::skeleton::HandSkeleton;

/// 2D reference point used to drag pieces
///
/// Midpoint of the wrist and the base of the middle finger, projected onto
/// the XY plane. Fingertips jitter too much to drive a held piece directly.
pub fn hand_cursor(skeleton: &HandSkeleton) -> Vec2 {
    let wrist = skeleton.joint(Joint::Wrist);
    let middle = skeleton.joint(Joint::Middle1);

    Vec2::new((wrist.x + middle.x) / 2.0, (wrist.y + middle.y) / 2.0)
}
