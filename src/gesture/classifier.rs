//! Fist / palm classifier
//!
//! A fist is detected when every curled-finger joint pair is close
//! together; an open palm when every fingertip reaches far enough from the
//! wrist. The fist test runs first and wins when both would match.

use crate::config::GestureConfig;
use crate::hand::{HandSkeleton, Joint};

use super::Gesture;

/// Joint pairs that all collapse together in a closed fist
///
/// Thumb tucked over index and middle, then each finger's base against
/// its own tip.
const FIST_PAIRS: [(Joint, Joint); 6] = [
    (Joint::Index3, Joint::Thumb3),
    (Joint::Middle3, Joint::Thumb4),
    (Joint::Index1, Joint::Index4),
    (Joint::Middle1, Joint::Middle4),
    (Joint::Ring1, Joint::Ring4),
    (Joint::Pinky1, Joint::Pinky4),
];

/// Stateless gesture classifier with configurable thresholds
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    config: GestureConfig,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Classify one frame
    pub fn classify(&self, skeleton: &HandSkeleton) -> Gesture {
        if self.is_fist(skeleton) {
            return Gesture::Fist;
        }
        if self.is_palm(skeleton) {
            return Gesture::Palm;
        }
        Gesture::None
    }

    /// All fist pairs strictly closer than `fist_tolerance`
    pub fn is_fist(&self, skeleton: &HandSkeleton) -> bool {
        FIST_PAIRS
            .iter()
            .all(|&(a, b)| skeleton.distance(a, b) < self.config.fist_tolerance)
    }

    /// Every fingertip at least its palm threshold away from the wrist
    pub fn is_palm(&self, skeleton: &HandSkeleton) -> bool {
        self.palm_reach()
            .iter()
            .all(|&(tip, min)| skeleton.distance(Joint::Wrist, tip) >= min)
    }

    fn palm_reach(&self) -> [(Joint, f32); 5] {
        let palm = &self.config.palm;
        [
            (Joint::Thumb4, palm.thumb),
            (Joint::Index4, palm.index),
            (Joint::Middle4, palm.middle),
            (Joint::Ring4, palm.ring),
            (Joint::Pinky4, palm.pinky),
        ]
    }
}
