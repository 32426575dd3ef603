use crate::chess_move::ChessMove;
use crate::game_state::board::Board;

/// Copy of `board` with the piece on `mv.from` moved to `mv.to` and the
/// origin cleared.
///
/// Only the primary piece moves: the castling rook stays put and an en-passant
/// victim is not removed. Whatever stood on `mv.to` is overwritten.
pub fn apply_relocation(board: &Board, mv: &ChessMove) -> Board {
    let mut next = board.clone();
    let moving = next.piece_at(mv.from);
    next.set(mv.from, None);
    next.set(mv.to, moving);
    next
}
