use crate::chess_move::ChessMove;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_relocation;
use crate::moves::bishop_moves::bishop_attacks_square;
use crate::moves::king_moves::king_attacks_square;
use crate::moves::knight_moves::knight_attacks_square;
use crate::moves::pawn_moves::pawn_attacks_square;
use crate::moves::queen_moves::queen_attacks_square;
use crate::moves::rook_moves::rook_attacks_square;

/// Whether `piece` standing on `from` threatens `target`.
///
/// Purely geometric: the occupant of `target` is never inspected, so a king
/// on the target square is attacked like any other piece.
pub fn piece_attacks_square(piece: Piece, from: Square, target: Square, board: &Board) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks_square(piece.color, from, target),
        PieceKind::Knight => knight_attacks_square(from, target),
        PieceKind::Bishop => bishop_attacks_square(board, from, target),
        PieceKind::Rook => rook_attacks_square(board, from, target),
        PieceKind::Queen => queen_attacks_square(board, from, target),
        PieceKind::King => king_attacks_square(from, target),
    }
}

/// Relocate the moving piece on a copy of `board` and test whether `color`'s
/// king is attacked afterwards.
pub fn move_leaves_king_in_check(board: &Board, mv: &ChessMove, color: Color) -> bool {
    apply_relocation(board, mv).is_king_in_check(color)
}
