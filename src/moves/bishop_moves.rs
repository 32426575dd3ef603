use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::rook_moves::ray_reaches;

/// Diagonal ray directions as (row, col) steps, in generation order.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_attacks_square(board: &Board, from: Square, target: Square) -> bool {
    ray_reaches(board, from, target, &BISHOP_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks_square;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn bishop_attacks_along_open_diagonal() {
        let mut board = Board::default();
        assert!(bishop_attacks_square(&board, sq("c1"), sq("h6")));

        board.set(sq("e3"), Some(Piece::new(PieceKind::Knight, Color::White)));
        assert!(bishop_attacks_square(&board, sq("c1"), sq("e3")));
        assert!(!bishop_attacks_square(&board, sq("c1"), sq("h6")));
        assert!(!bishop_attacks_square(&board, sq("c1"), sq("c2")));
    }
}
