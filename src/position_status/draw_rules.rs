//! Automatic draws decided from the FEN snapshot alone.
//!
//! None of these rules depends on whose turn it is.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{FIFTY_MOVE_THRESHOLD, MAX_PAWNS_PER_SIDE};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    OnlyKingsLeft,
    DeadPosition,
    FiftyMoveRule,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DrawReason::OnlyKingsLeft => "only kings left",
            DrawReason::DeadPosition => "dead position",
            DrawReason::FiftyMoveRule => "fifty-move rule",
        };
        f.write_str(text)
    }
}

/// First draw rule that holds, checked in declaration order of `DrawReason`.
pub fn detect_draw(position: &Position) -> Option<DrawReason> {
    let board = position.board();
    if is_only_kings_left(board) {
        Some(DrawReason::OnlyKingsLeft)
    } else if is_dead_position(board) {
        Some(DrawReason::DeadPosition)
    } else if is_fifty_move_draw(position) {
        Some(DrawReason::FiftyMoveRule)
    } else {
        None
    }
}

pub fn is_only_kings_left(board: &Board) -> bool {
    board.pieces().all(|(_, piece)| piece.kind == PieceKind::King)
}

/// King plus at most one bishop or knight on each side, nothing else.
pub fn is_dead_position(board: &Board) -> bool {
    Color::ALL.iter().all(|&color| {
        let mut minors = 0;
        for (_, piece) in board.pieces().filter(|(_, piece)| piece.color == color) {
            match piece.kind {
                PieceKind::King => {}
                kind if kind.is_minor() => minors += 1,
                _ => return false,
            }
        }
        minors <= 1
    })
}

/// Every pawn still on its home rank and both clocks present and at the
/// threshold.
pub fn is_fifty_move_draw(position: &Position) -> bool {
    let board = position.board();
    let pawns_home = Color::ALL.iter().all(|&color| {
        let home_pawns = board
            .pieces()
            .filter(|&(square, piece)| {
                piece == Piece::new(PieceKind::Pawn, color) && square.row() == color.pawn_home_row()
            })
            .count() as u32;
        home_pawns == MAX_PAWNS_PER_SIDE
    });

    let clocks_reached = matches!(
        (position.halfmove_clock(), position.fullmove_number()),
        (Some(halfmove), Some(fullmove))
            if halfmove >= FIFTY_MOVE_THRESHOLD && fullmove >= FIFTY_MOVE_THRESHOLD
    );

    pawns_home && clocks_reached
}

#[cfg(test)]
mod tests {
    use super::{detect_draw, DrawReason};
    use crate::game_state::position::Position;

    fn draw_of(fen: &str) -> Option<DrawReason> {
        let position = Position::from_fen(fen).expect("draw fixture should parse");
        detect_draw(&position)
    }

    #[test]
    fn bare_kings_are_drawn() {
        assert_eq!(draw_of("7k/8/8/8/8/8/8/7K w - - 0 1"), Some(DrawReason::OnlyKingsLeft));
    }

    #[test]
    fn single_minor_pieces_are_dead() {
        assert_eq!(draw_of("7K/8/8/8/8/8/7B/7k w - - 0 1"), Some(DrawReason::DeadPosition));
        assert_eq!(draw_of("6nK/8/8/8/8/8/7B/7k w - - 0 1"), Some(DrawReason::DeadPosition));
        assert_eq!(draw_of("7K/8/8/8/8/8/8/BB5k w - - 0 1"), None);
        assert_eq!(draw_of("7K/8/8/8/8/8/7R/k7 w - - 0 1"), None);
    }

    #[test]
    fn fifty_move_rule_needs_home_pawns_and_both_clocks() {
        let placement = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
        assert_eq!(
            draw_of(&format!("{placement} w - - 50 100")),
            Some(DrawReason::FiftyMoveRule)
        );
        assert_eq!(draw_of(&format!("{placement} w - - 0 1")), None);
        assert_eq!(draw_of(&format!("{placement} w - - 50")), None);
        assert_eq!(
            draw_of("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR w - - 50 100"),
            None
        );
    }

    #[test]
    fn reasons_read_as_plain_text() {
        assert_eq!(DrawReason::OnlyKingsLeft.to_string(), "only kings left");
        assert_eq!(DrawReason::FiftyMoveRule.to_string(), "fifty-move rule");
    }
}
