//! Move value produced by the per-piece generators.

use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::{MoveKind, Piece, Square};

/// A single relocation of one piece, optionally tagged as castling or en
/// passant.
///
/// `captured` is descriptive metadata only: board updates are derived from the
/// occupancy of `to`, never from this field. Equality and hashing consider
/// `from`, `to` and `kind` alone, so two moves differing only in the captured
/// piece compare equal.
#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    pub captured: Option<Piece>,
}

impl ChessMove {
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Normal,
            captured: None,
        }
    }

    #[inline]
    pub const fn capture(from: Square, to: Square, captured: Piece) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Normal,
            captured: Some(captured),
        }
    }

    #[inline]
    pub const fn castling(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Castling,
            captured: None,
        }
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square, captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::EnPassant,
            captured,
        }
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.kind == other.kind
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.kind.hash(state);
    }
}
