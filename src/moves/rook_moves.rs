use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

/// Orthogonal ray directions as (row, col) steps, in generation order.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Squares reached walking from `from` along one direction, up to and
/// including the first occupied square.
pub fn trace_ray(board: &Board, from: Square, d_row: i8, d_col: i8) -> Vec<Square> {
    let mut ray = Vec::with_capacity(7);
    let mut current = from;

    while let Some(next) = current.offset(d_row, d_col) {
        ray.push(next);
        if !board.is_empty(next) {
            break;
        }
        current = next;
    }

    ray
}

/// True when some ray in `directions` from `from` reaches `target` with every
/// square in between empty. The target's own occupant is not inspected.
pub fn ray_reaches(board: &Board, from: Square, target: Square, directions: &[(i8, i8)]) -> bool {
    directions.iter().any(|&(d_row, d_col)| {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            if next == target {
                return true;
            }
            if !board.is_empty(next) {
                return false;
            }
            current = next;
        }
        false
    })
}

#[inline]
pub fn rook_attacks_square(board: &Board, from: Square, target: Square) -> bool {
    ray_reaches(board, from, target, &ROOK_DIRECTIONS)
}
