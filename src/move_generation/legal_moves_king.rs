use crate::chess_move::ChessMove;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::step_move;
use crate::moves::king_moves::king_targets;

const KING_HOME_COL: u8 = 4;

/// Adjacent steps onto squares the enemy does not attack right now, then
/// kingside castling, then queenside castling. Castling looks only at the
/// FEN flags, the rook, and the squares the king crosses; the king's own
/// square is not tested.
pub fn generate_king_moves(board: &Board, from: Square, color: Color, out: &mut Vec<ChessMove>) {
    let enemy = color.opposite();
    for to in king_targets(from) {
        if let Some(mv) = step_move(board, from, to, color) {
            if !board.is_square_attacked(to, enemy) {
                out.push(mv);
            }
        }
    }

    generate_castling_moves(board, from, color, out);
}

fn generate_castling_moves(board: &Board, king_from: Square, color: Color, out: &mut Vec<ChessMove>) {
    let enemy = color.opposite();
    if king_from.row() != color.back_row() || king_from.col() != KING_HOME_COL {
        return;
    }

    if board.has_castling_right(kingside_right(color))
        && path_is_clear(board, king_from, &[1, 2], &[1, 2], enemy)
        && own_rook_at(board, king_from, 3, color)
    {
        if let Some(to) = king_from.offset(0, 2) {
            out.push(ChessMove::castling(king_from, to));
        }
    }

    if board.has_castling_right(queenside_right(color))
        && path_is_clear(board, king_from, &[-1, -2, -3], &[-1, -2], enemy)
        && own_rook_at(board, king_from, -4, color)
    {
        if let Some(to) = king_from.offset(0, -2) {
            out.push(ChessMove::castling(king_from, to));
        }
    }
}

/// `empty_cols` must be vacant and `safe_cols` unattacked, both as column
/// offsets from the king.
fn path_is_clear(board: &Board, king: Square, empty_cols: &[i8], safe_cols: &[i8], enemy: Color) -> bool {
    let all_empty = empty_cols
        .iter()
        .all(|&d_col| king.offset(0, d_col).is_some_and(|sq| board.is_empty(sq)));
    let all_safe = safe_cols.iter().all(|&d_col| {
        king.offset(0, d_col)
            .is_some_and(|sq| !board.is_square_attacked(sq, enemy))
    });
    all_empty && all_safe
}

fn own_rook_at(board: &Board, king: Square, d_col: i8, color: Color) -> bool {
    king.offset(0, d_col)
        .and_then(|sq| board.piece_at(sq))
        .is_some_and(|piece| piece == Piece::new(PieceKind::Rook, color))
}
