//! Mailbox board snapshot.
//!
//! `Board` owns an 8x8 grid of optional pieces plus the en-passant target and
//! castling flags read from FEN. A snapshot is never edited after it is built;
//! trying a move produces a fresh copy (see
//! [`apply_relocation`](crate::move_generation::legal_move_apply::apply_relocation)).

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::piece_attacks_square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    en_passant_target: Option<Square>,
    castling_rights: CastlingRights,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [[None; 8]; 8],
            en_passant_target: None,
            castling_rights: 0,
        }
    }
}

impl Board {
    pub fn new(
        squares: [[Option<Piece>; 8]; 8],
        en_passant_target: Option<Square>,
        castling_rights: CastlingRights,
    ) -> Self {
        Self {
            squares,
            en_passant_target,
            castling_rights,
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// True when `square` holds a piece of the side opposing `color`.
    #[inline]
    pub fn is_enemy_piece(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|piece| piece.color != color)
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    /// Occupied squares with their pieces, in scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn count_pieces(&self, color: Color, kind: PieceKind) -> u32 {
        self.pieces()
            .filter(|(_, piece)| piece.color == color && piece.kind == kind)
            .count() as u32
    }

    /// First king of `color` in scan order.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Whether any piece of `attacker` threatens `square` on this snapshot.
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        self.pieces().any(|(from, piece)| {
            piece.color == attacker && piece_attacks_square(piece, from, square, self)
        })
    }

    /// A side without a king counts as in check; validated positions always
    /// have exactly one.
    pub fn is_king_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opposite()),
            None => true,
        }
    }

    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn starting_board_queries() {
        let position = Position::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let board = position.board();

        assert!(board.is_empty(sq("e4")));
        assert!(board.is_enemy_piece(sq("a8"), Color::White));
        assert!(!board.is_enemy_piece(sq("a1"), Color::White));
        assert!(!board.is_enemy_piece(sq("e4"), Color::White));
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
        assert_eq!(board.count_pieces(Color::Black, PieceKind::Pawn), 8);
        assert!(board.has_castling_right(CASTLE_BLACK_QUEENSIDE));
        assert!(board.en_passant_target().is_none());
    }

    #[test]
    fn black_queen_square_is_not_attacked_at_start() {
        let position = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
            .expect("placement-only FEN should parse");
        assert!(!position.board().is_square_attacked(sq("d8"), Color::White));
        assert!(position.board().is_square_attacked(sq("f3"), Color::White));
        assert!(!position.board().is_king_in_check(Color::White));
    }
}
