use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_attacks_square;
use crate::moves::rook_moves::rook_attacks_square;

/// Rook lines or bishop diagonals.
#[inline]
pub fn queen_attacks_square(board: &Board, from: Square, target: Square) -> bool {
    rook_attacks_square(board, from, target) || bishop_attacks_square(board, from, target)
}
