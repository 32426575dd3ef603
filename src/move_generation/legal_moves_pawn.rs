use crate::chess_move::ChessMove;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::pawn_capture_targets;

/// Pushes, then diagonal captures (lower file first), then en passant.
pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<ChessMove>) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.push(ChessMove::quiet(from, one_step));

            if from.row() == color.pawn_home_row() {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(ChessMove::quiet(from, two_step));
                    }
                }
            }
        }
    }

    for to in pawn_capture_targets(color, from) {
        if let Some(target) = board.piece_at(to) {
            if target.color != color && target.kind != PieceKind::King {
                out.push(ChessMove::capture(from, to, target));
            }
        }
    }

    if let Some(mv) = en_passant_move(board, from, color) {
        out.push(mv);
    }
}

fn en_passant_move(board: &Board, from: Square, color: Color) -> Option<ChessMove> {
    let target = board.en_passant_target()?;
    if from.row() != color.en_passant_row() {
        return None;
    }

    let d_row = target.row() as i8 - from.row() as i8;
    let d_col = target.col() as i8 - from.col() as i8;
    if d_row != color.forward() || d_col.abs() != 1 {
        return None;
    }

    // Whatever stands beside the mover, behind the target, is reported as taken.
    let victim_square = Square::new(from.row(), target.col())?;
    Some(ChessMove::en_passant(from, target, board.piece_at(victim_square)))
}
