use crate::chess_move::ChessMove;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::rook_moves::trace_ray;

/// Move from `from` onto `to` if the destination is empty or holds an enemy
/// piece other than the king.
#[inline]
pub fn step_move(board: &Board, from: Square, to: Square, color: Color) -> Option<ChessMove> {
    match board.piece_at(to) {
        None => Some(ChessMove::quiet(from, to)),
        Some(target) if target.color != color && target.kind != PieceKind::King => {
            Some(ChessMove::capture(from, to, target))
        }
        Some(_) => None,
    }
}

/// Ray-cast along each direction in turn, stopping at the first occupied
/// square.
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        for to in trace_ray(board, from, d_row, d_col) {
            if let Some(mv) = step_move(board, from, to, color) {
                out.push(mv);
            }
        }
    }
}
