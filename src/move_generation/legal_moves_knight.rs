use crate::chess_move::ChessMove;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::step_move;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<ChessMove>) {
    out.extend(knight_targets(from).filter_map(|to| step_move(board, from, to, color)));
}
