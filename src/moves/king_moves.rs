use crate::game_state::chess_types::Square;

/// One-step king moves as (row, col) deltas, in generation order.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
];

#[inline]
pub fn king_targets(from: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

#[inline]
pub fn king_attacks_square(from: Square, target: Square) -> bool {
    let d_row = (target.row() as i8 - from.row() as i8).abs();
    let d_col = (target.col() as i8 - from.col() as i8).abs();
    from != target && d_row <= 1 && d_col <= 1
}
