//! Material sanity rules applied to a parsed placement.
//!
//! A side may hold surplus queens, rooks, bishops or knights only when enough
//! of its pawns are missing to have promoted into them.

use crate::chess_errors::{FenError, FenResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{MAX_PAIRED_PIECES, MAX_PAWNS_PER_SIDE, MAX_PIECES_PER_SIDE};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceCounts {
    counts: [u32; 6],
}

impl PieceCounts {
    pub fn for_color(board: &Board, color: Color) -> Self {
        let mut counts = [0u32; 6];
        for (_, piece) in board.pieces().filter(|(_, piece)| piece.color == color) {
            counts[piece.kind.index()] += 1;
        }
        Self { counts }
    }

    #[inline]
    pub fn get(&self, kind: PieceKind) -> u32 {
        self.counts[kind.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn missing_pawns(&self) -> u32 {
        MAX_PAWNS_PER_SIDE.saturating_sub(self.get(PieceKind::Pawn))
    }

    /// Pieces beyond the starting set that must have come from promotion.
    pub fn promoted_surplus(&self) -> u32 {
        let over = |kind: PieceKind, start: u32| self.get(kind) as i64 - start as i64;
        let surplus = over(PieceKind::Queen, 1)
            + over(PieceKind::Rook, MAX_PAIRED_PIECES)
            + over(PieceKind::Bishop, MAX_PAIRED_PIECES)
            + over(PieceKind::Knight, MAX_PAIRED_PIECES);
        surplus.max(0) as u32
    }
}

/// Check every material rule for `color`, stopping at the first violation.
pub fn validate_piece_counts(board: &Board, color: Color) -> FenResult<()> {
    let counts = PieceCounts::for_color(board, color);

    let kings = counts.get(PieceKind::King);
    if kings != 1 {
        return Err(FenError::InvalidNumberOfKings { color, count: kings });
    }

    let pawns = counts.get(PieceKind::Pawn);
    if pawns > MAX_PAWNS_PER_SIDE {
        return Err(FenError::TooManyPawns { color, count: pawns });
    }

    let total = counts.total();
    if total > MAX_PIECES_PER_SIDE {
        return Err(FenError::TooManyPieces { color, count: total });
    }

    for kind in [PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop] {
        let count = counts.get(kind);
        if count > MAX_PAIRED_PIECES {
            return Err(FenError::TooManyOfKind { kind, color, count });
        }
    }

    let queens = counts.get(PieceKind::Queen);
    if queens > 1 && queens - 1 > counts.missing_pawns() {
        return Err(FenError::TooManyQueens { color, count: queens });
    }

    let surplus = counts.promoted_surplus();
    if surplus > counts.missing_pawns() {
        return Err(FenError::TooManyPromotedPieces { color, count: surplus });
    }

    Ok(())
}
