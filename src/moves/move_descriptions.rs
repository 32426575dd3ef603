//! Human-readable move descriptions.
//!
//! Format: `<piece> from <square> to <square>`, then ` (capturing <piece>)`
//! when something is taken, then ` (castling)` or ` (en-passant)` for the
//! special move kinds. Piece names are lowercase English words.

use std::fmt;

use crate::chess_move::ChessMove;
use crate::game_state::chess_types::{MoveKind, Piece};

/// A move that survived the legality filter, together with the piece making it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalMove {
    pub piece: Piece,
    pub chess_move: ChessMove,
}

impl LegalMove {
    #[inline]
    pub const fn new(piece: Piece, chess_move: ChessMove) -> Self {
        Self { piece, chess_move }
    }

    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mv = &self.chess_move;
        write!(f, "{} from {} to {}", self.piece.kind, mv.from, mv.to)?;

        if let Some(captured) = mv.captured {
            write!(f, " (capturing {})", captured.kind)?;
        }

        match mv.kind {
            MoveKind::Normal => Ok(()),
            MoveKind::Castling => f.write_str(" (castling)"),
            MoveKind::EnPassant => f.write_str(" (en-passant)"),
        }
    }
}

/// Descriptions of `moves`, in the same order.
pub fn describe_moves(moves: &[LegalMove]) -> Vec<String> {
    moves.iter().map(LegalMove::description).collect()
}

#[cfg(test)]
mod tests {
    use super::LegalMove;
    use crate::chess_move::ChessMove;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn quiet_move_description() {
        let mv = LegalMove::new(
            Piece::new(PieceKind::Knight, Color::White),
            ChessMove::quiet(sq("g1"), sq("f3")),
        );
        assert_eq!(mv.description(), "knight from g1 to f3");
    }

    #[test]
    fn capture_and_special_suffixes() {
        let capture = LegalMove::new(
            Piece::new(PieceKind::Rook, Color::White),
            ChessMove::capture(sq("h1"), sq("h8"), Piece::new(PieceKind::Rook, Color::Black)),
        );
        assert_eq!(capture.description(), "rook from h1 to h8 (capturing rook)");

        let castle = LegalMove::new(
            Piece::new(PieceKind::King, Color::Black),
            ChessMove::castling(sq("e8"), sq("c8")),
        );
        assert_eq!(castle.description(), "king from e8 to c8 (castling)");

        let en_passant = LegalMove::new(
            Piece::new(PieceKind::Pawn, Color::White),
            ChessMove::en_passant(sq("f5"), sq("e6"), Some(Piece::new(PieceKind::Pawn, Color::Black))),
        );
        assert_eq!(
            en_passant.description(),
            "pawn from f5 to e6 (capturing pawn) (en-passant)"
        );
    }
}
