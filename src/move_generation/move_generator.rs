use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::moves::move_descriptions::LegalMove;

/// Produces the legal moves of one side on a board snapshot.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<LegalMove>;
}
