use crate::chess_move::ChessMove;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<ChessMove>) {
    generate_sliding_moves(board, from, color, &BISHOP_DIRECTIONS, out);
}
