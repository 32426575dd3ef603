use crate::game_state::chess_types::{Color, Square};

/// Column deltas of pawn captures, in generation order.
pub const PAWN_CAPTURE_FILES: [i8; 2] = [-1, 1];

/// Diagonal squares a pawn of `color` on `from` threatens.
#[inline]
pub fn pawn_capture_targets(color: Color, from: Square) -> impl Iterator<Item = Square> {
    PAWN_CAPTURE_FILES
        .into_iter()
        .filter_map(move |d_col| from.offset(color.forward(), d_col))
}

#[inline]
pub fn pawn_attacks_square(color: Color, from: Square, target: Square) -> bool {
    let d_row = target.row() as i8 - from.row() as i8;
    let d_col = (target.col() as i8 - from.col() as i8).abs();
    d_row == color.forward() && d_col == 1
}
