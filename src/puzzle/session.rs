//! One interaction session: a controller bound to its scene

use serde::Serialize;

use crate::config::AppConfig;
use crate::hand::HandSkeleton;

use super::controller::PieceController;
use super::scene::{Board, PieceScene};
use super::InteractionEvent;

/// Owns a controller and the scene it drives
///
/// The frame loop calls [`Session::tick`] exactly once per frame.
#[derive(Debug, Clone)]
pub struct Session<S: PieceScene = Board> {
    controller: PieceController,
    scene: S,
    frames: u64,
    frames_with_hand: u64,
}

/// Snapshot of session progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub frames: u64,
    pub frames_with_hand: u64,
    pub placed: usize,
    pub total: usize,
    pub solved: bool,
}

impl Session<Board> {
    /// Session over the board described by `config.puzzle`
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config, Board::from_config(&config.puzzle))
    }
}

impl<S: PieceScene> Session<S> {
    pub fn new(config: &AppConfig, scene: S) -> Self {
        Self {
            controller: PieceController::from_config(config, scene.piece_count()),
            scene,
            frames: 0,
            frames_with_hand: 0,
        }
    }

    /// Advance by one frame
    pub fn tick(&mut self, frame: Option<&HandSkeleton>) -> Vec<InteractionEvent> {
        self.frames += 1;
        if frame.is_some() {
            self.frames_with_hand += 1;
        }
        self.controller.on_frame(frame, &mut self.scene)
    }

    pub fn controller(&self) -> &PieceController {
        &self.controller
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            frames: self.frames,
            frames_with_hand: self.frames_with_hand,
            placed: self.controller.placed_count(),
            total: self.controller.piece_count(),
            solved: self.controller.is_complete(),
        }
    }
}
