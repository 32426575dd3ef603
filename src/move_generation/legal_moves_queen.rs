use crate::chess_move::ChessMove;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Rook lines first, then bishop diagonals.
pub fn generate_queen_moves(board: &Board, from: Square, color: Color, out: &mut Vec<ChessMove>) {
    generate_rook_moves(board, from, color, out);
    generate_bishop_moves(board, from, color, out);
}
