//! Canned skeletons for unit tests

use super::{hand_cursor, HandSkeleton, Joint, Vec2, Vec3, JOINT_COUNT};

fn build(points: [[f32; 3]; JOINT_COUNT]) -> HandSkeleton {
    HandSkeleton::new(points.map(Vec3::from))
}

/// Fully opened hand, fingers pointing up, wrist at the origin
pub fn open_palm() -> HandSkeleton {
    build([
        [0.0, 0.0, 0.0],
        // thumb
        [-0.05, 0.05, 0.0],
        [-0.10, 0.10, 0.0],
        [-0.15, 0.15, 0.0],
        [-0.20, 0.20, 0.0],
        // index
        [-0.05, 0.15, 0.0],
        [-0.05, 0.25, 0.0],
        [-0.05, 0.35, 0.0],
        [-0.05, 0.45, 0.0],
        // middle
        [0.0, 0.15, 0.0],
        [0.0, 0.27, 0.0],
        [0.0, 0.39, 0.0],
        [0.0, 0.50, 0.0],
        // ring
        [0.05, 0.15, 0.0],
        [0.05, 0.25, 0.0],
        [0.05, 0.35, 0.0],
        [0.05, 0.45, 0.0],
        // pinky
        [0.10, 0.13, 0.0],
        [0.10, 0.20, 0.0],
        [0.10, 0.28, 0.0],
        [0.10, 0.35, 0.0],
    ])
}

/// Closed fist, wrist at the origin
pub fn fist() -> HandSkeleton {
    build([
        [0.0, 0.0, 0.0],
        // thumb wraps over index and middle
        [-0.05, 0.05, 0.0],
        [-0.08, 0.10, 0.03],
        [-0.05, 0.17, 0.07],
        [0.0, 0.17, 0.07],
        // index
        [-0.05, 0.15, 0.0],
        [-0.05, 0.20, 0.02],
        [-0.05, 0.18, 0.05],
        [-0.05, 0.15, 0.05],
        // middle
        [0.0, 0.15, 0.0],
        [0.0, 0.20, 0.02],
        [0.0, 0.18, 0.05],
        [0.0, 0.15, 0.05],
        // ring
        [0.05, 0.15, 0.0],
        [0.05, 0.20, 0.02],
        [0.05, 0.18, 0.05],
        [0.05, 0.15, 0.05],
        // pinky
        [0.10, 0.13, 0.0],
        [0.10, 0.17, 0.02],
        [0.10, 0.16, 0.04],
        [0.10, 0.13, 0.05],
    ])
}

/// Fist whose wrist sits far enough away that every palm reach also holds
pub fn fist_with_long_palm() -> HandSkeleton {
    let mut joints = *fist().joints();
    joints[Joint::Wrist.index()] = Vec3::new(0.0, -0.5, 0.0);
    HandSkeleton::new(joints)
}

/// Fist with the index finger extended: neither fist nor palm
pub fn pointing() -> HandSkeleton {
    let mut joints = *fist().joints();
    joints[Joint::Index2.index()] = Vec3::new(-0.05, 0.25, 0.0);
    joints[Joint::Index3.index()] = Vec3::new(-0.05, 0.35, 0.0);
    joints[Joint::Index4.index()] = Vec3::new(-0.05, 0.45, 0.0);
    HandSkeleton::new(joints)
}

/// Move `skeleton` so that its hand cursor lands on `cursor`
pub fn at(skeleton: HandSkeleton, cursor: Vec2) -> HandSkeleton {
    let current = hand_cursor(&skeleton);
    skeleton.translated(Vec3::new(cursor.x - current.x, cursor.y - current.y, 0.0))
}
