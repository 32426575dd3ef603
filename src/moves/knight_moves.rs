use crate::game_state::chess_types::Square;

/// Knight jumps as (row, col) deltas, in generation order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board knight destinations from `from`, in generation order.
#[inline]
pub fn knight_targets(from: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

#[inline]
pub fn knight_attacks_square(from: Square, target: Square) -> bool {
    let d_row = (target.row() as i8 - from.row() as i8).abs();
    let d_col = (target.col() as i8 - from.col() as i8).abs();
    (d_row == 1 && d_col == 2) || (d_row == 2 && d_col == 1)
}
