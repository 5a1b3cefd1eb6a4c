//! Piece interaction state machine

use tracing::{debug, info, trace};

use crate::config::{
    AppConfig, GrabSelection, InteractionConfig, MissingHandPolicy, NoneGesturePolicy,
};
use crate::gesture::{Gesture, GestureClassifier};
use crate::hand::{hand_cursor, HandSkeleton, Vec2};

use super::scene::PieceScene;
use super::InteractionEvent;

/// Grab/drag/release controller for one hand and one set of pieces
///
/// Holds at most one piece at a time. A placed piece is never grabbed
/// again. All state is owned here, so independent sessions can run side
/// by side.
#[derive(Debug, Clone)]
pub struct PieceController {
    classifier: GestureClassifier,
    interaction: InteractionConfig,
    missing_hand: MissingHandPolicy,
    current_gesture: Gesture,
    held: Option<usize>,
    placed: Vec<bool>,
    last_seen: Option<HandSkeleton>,
    none_streak: u32,
}

impl PieceController {
    /// Create a controller for `piece_count` pieces
    ///
    /// Starts out assuming an open hand so the first frame cannot fire a
    /// spurious release-to-grab transition.
    pub fn new(
        classifier: GestureClassifier,
        interaction: InteractionConfig,
        piece_count: usize,
    ) -> Self {
        Self {
            classifier,
            interaction,
            missing_hand: MissingHandPolicy::default(),
            current_gesture: Gesture::Palm,
            held: None,
            placed: vec![false; piece_count],
            last_seen: None,
            none_streak: 0,
        }
    }

    pub fn from_config(config: &AppConfig, piece_count: usize) -> Self {
        Self::new(
            GestureClassifier::new(config.gesture),
            config.interaction,
            piece_count,
        )
        .with_missing_hand(config.tracking.missing_hand)
    }

    pub fn with_missing_hand(mut self, policy: MissingHandPolicy) -> Self {
        self.missing_hand = policy;
        self
    }

    /// Process one frame
    ///
    /// `frame` is `None` when the keypoint source found no hand. On a
    /// gesture change the transition is dispatched first; afterwards the
    /// held piece (if any) follows the hand cursor.
    pub fn on_frame<S: PieceScene + ?Sized>(
        &mut self,
        frame: Option<&HandSkeleton>,
        scene: &mut S,
    ) -> Vec<InteractionEvent> {
        let Some(skeleton) = self.resolve_frame(frame) else {
            trace!("No hand in frame, skipping");
            return Vec::new();
        };

        let mut events = Vec::new();

        let gesture = self.classifier.classify(&skeleton);
        if gesture != self.current_gesture {
            let from = self.current_gesture;
            self.current_gesture = gesture;
            debug!(%from, to = %gesture, "Gesture changed");

            events.push(InteractionEvent::GestureChanged { from, to: gesture });
            events.extend(self.on_gesture_changed(gesture, &skeleton, scene));
        }

        let follow = self.apply_none_policy(gesture, scene, &mut events);

        if let (true, Some(piece)) = (follow, self.held) {
            scene.set_piece_position(piece, hand_cursor(&skeleton));
        }

        events
    }

    /// React to a gesture transition
    ///
    /// Fist grabs, palm releases, and an ambiguous reading changes nothing.
    pub fn on_gesture_changed<S: PieceScene + ?Sized>(
        &mut self,
        gesture: Gesture,
        skeleton: &HandSkeleton,
        scene: &mut S,
    ) -> Vec<InteractionEvent> {
        match gesture {
            Gesture::Fist => self.try_grab(skeleton, scene),
            Gesture::Palm => self.release(scene).into_iter().collect(),
            Gesture::None => Vec::new(),
        }
    }

    /// Release whatever is held, then pick up a piece near the hand cursor
    ///
    /// The release step may place the previously held piece. Placed pieces
    /// are skipped by the scan.
    pub fn try_grab<S: PieceScene + ?Sized>(
        &mut self,
        skeleton: &HandSkeleton,
        scene: &mut S,
    ) -> Vec<InteractionEvent> {
        let mut events: Vec<InteractionEvent> = self.release(scene).into_iter().collect();

        let cursor = hand_cursor(skeleton);
        match self.grab_candidate(cursor, scene) {
            Some(piece) => {
                self.held = Some(piece);
                debug!(piece, %cursor, "Grabbed piece");
                events.push(InteractionEvent::Grabbed { piece });
            }
            None => trace!(%cursor, "No piece within reach"),
        }

        events
    }

    /// Let go of the held piece
    ///
    /// Snaps it onto its slot and marks it placed when close enough,
    /// otherwise leaves it where it is. No-op when nothing is held.
    pub fn release<S: PieceScene + ?Sized>(&mut self, scene: &mut S) -> Option<InteractionEvent> {
        let piece = self.held.take()?;

        let position = scene.piece_position(piece);
        let slot = scene.slot_position(piece);

        if position.distance(slot) <= self.interaction.snap_tolerance {
            scene.set_piece_position(piece, slot);
            self.placed[piece] = true;
            info!(
                piece,
                %slot,
                placed = self.placed_count(),
                total = self.placed.len(),
                "Piece placed"
            );
            if self.is_complete() {
                info!("Puzzle complete");
            }
            Some(InteractionEvent::Placed { piece, slot })
        } else {
            debug!(piece, %position, "Piece dropped");
            Some(InteractionEvent::Dropped { piece, position })
        }
    }

    pub fn held_piece(&self) -> Option<usize> {
        self.held
    }

    pub fn is_placed(&self, piece: usize) -> bool {
        self.placed.get(piece).copied().unwrap_or(false)
    }

    pub fn placed_count(&self) -> usize {
        self.placed.iter().filter(|p| **p).count()
    }

    pub fn piece_count(&self) -> usize {
        self.placed.len()
    }

    /// Every piece sits in its slot
    pub fn is_complete(&self) -> bool {
        self.placed.iter().all(|p| *p)
    }

    pub fn current_gesture(&self) -> Gesture {
        self.current_gesture
    }

    fn resolve_frame(&mut self, frame: Option<&HandSkeleton>) -> Option<HandSkeleton> {
        match (frame, self.missing_hand) {
            (Some(skeleton), MissingHandPolicy::ReuseLast) => {
                self.last_seen = Some(*skeleton);
                Some(*skeleton)
            }
            (Some(skeleton), MissingHandPolicy::Skip) => Some(*skeleton),
            (None, MissingHandPolicy::ReuseLast) => self.last_seen,
            (None, MissingHandPolicy::Skip) => None,
        }
    }

    fn grab_candidate<S: PieceScene + ?Sized>(&self, cursor: Vec2, scene: &S) -> Option<usize> {
        let reach = self.interaction.grab_tolerance;
        let count = self.placed.len().min(scene.piece_count());

        let mut in_reach = (0..count)
            .filter(|&piece| !self.placed[piece])
            .map(|piece| (piece, scene.piece_position(piece).distance(cursor)))
            .filter(|&(_, distance)| distance <= reach);

        match self.interaction.grab_selection {
            GrabSelection::FirstMatch => in_reach.next().map(|(piece, _)| piece),
            GrabSelection::Nearest => in_reach
                .fold(None, |best: Option<(usize, f32)>, (piece, distance)| match best {
                    Some((_, best_distance)) if best_distance <= distance => best,
                    _ => Some((piece, distance)),
                })
                .map(|(piece, _)| piece),
        }
    }

    /// Returns whether the held piece should follow the cursor this frame
    fn apply_none_policy<S: PieceScene + ?Sized>(
        &mut self,
        gesture: Gesture,
        scene: &mut S,
        events: &mut Vec<InteractionEvent>,
    ) -> bool {
        if gesture != Gesture::None {
            self.none_streak = 0;
            return true;
        }

        match self.interaction.none_gesture {
            NoneGesturePolicy::Ignore => true,
            NoneGesturePolicy::FreezeDrag => false,
            NoneGesturePolicy::ReleaseAfter { frames } => {
                let Some(piece) = self.held else {
                    self.none_streak = 0;
                    return true;
                };

                self.none_streak = self.none_streak.saturating_add(1);
                if self.none_streak >= frames {
                    debug!(piece, frames, "Hold timed out without a gesture");
                    self.none_streak = 0;
                    events.push(InteractionEvent::HoldTimedOut { piece });
                    events.extend(self.release(scene));
                }
                true
            }
        }
    }
}
