//! Scene seam for piece and slot positions

use crate::config::PuzzleConfig;
use crate::hand::Vec2;

/// Positions of the draggable pieces and their target slots
///
/// Implemented by whatever owns the pieces on screen. Indices run from
/// `0` to `piece_count() - 1`; piece `i` belongs in slot `i`.
pub trait PieceScene {
    fn piece_count(&self) -> usize;

    fn piece_position(&self, piece: usize) -> Vec2;

    fn set_piece_position(&mut self, piece: usize, position: Vec2);

    fn slot_position(&self, piece: usize) -> Vec2;
}

/// In-memory scene
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pieces: Vec<Vec2>,
    slots: Vec<Vec2>,
}

impl Board {
    /// Build from `(start, slot)` pairs
    pub fn new(layout: impl IntoIterator<Item = (Vec2, Vec2)>) -> Self {
        let (pieces, slots) = layout.into_iter().unzip();
        Self { pieces, slots }
    }

    pub fn from_config(config: &PuzzleConfig) -> Self {
        Self::new(config.pieces.iter().map(|p| (p.start, p.slot)))
    }

    pub fn pieces(&self) -> &[Vec2] {
        &self.pieces
    }
}

impl PieceScene for Board {
    fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    fn piece_position(&self, piece: usize) -> Vec2 {
        self.pieces[piece]
    }

    fn set_piece_position(&mut self, piece: usize, position: Vec2) {
        self.pieces[piece] = position;
    }

    fn slot_position(&self, piece: usize) -> Vec2 {
        self.slots[piece]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_default_config() {
        let board = Board::from_config(&PuzzleConfig::default());
        assert_eq!(board.piece_count(), 4);
        assert_eq!(board.piece_position(0), Vec2::new(0.15, 0.35));
        assert_eq!(board.slot_position(3), Vec2::new(0.85, -0.15));
    }

    #[test]
    fn test_set_piece_position_leaves_slot() {
        let mut board = Board::new([(Vec2::ZERO, Vec2::new(1.0, 1.0))]);
        board.set_piece_position(0, Vec2::new(0.5, 0.5));
        assert_eq!(board.piece_position(0), Vec2::new(0.5, 0.5));
        assert_eq!(board.slot_position(0), Vec2::new(1.0, 1.0));
    }
}
