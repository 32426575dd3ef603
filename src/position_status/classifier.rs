//! Terminal-state classification for one side.
//!
//! Draws take precedence over move enumeration; an empty move list is
//! checkmate when the side's king is attacked and stalemate otherwise.

use crate::game_state::chess_rules::{AUTOMATIC_DRAW, CHECKMATE, STALEMATE};
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::moves::move_descriptions::{describe_moves, LegalMove};
use crate::position_status::draw_rules::{detect_draw, DrawReason};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionStatus {
    Moves(Vec<LegalMove>),
    Checkmate,
    Stalemate,
    Draw(DrawReason),
}

impl PositionStatus {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PositionStatus::Moves(_))
    }

    /// `Checkmate`, `Stalemate` or `Draw` for terminal states.
    pub fn sentinel(&self) -> Option<&'static str> {
        match self {
            PositionStatus::Moves(_) => None,
            PositionStatus::Checkmate => Some(CHECKMATE),
            PositionStatus::Stalemate => Some(STALEMATE),
            PositionStatus::Draw(_) => Some(AUTOMATIC_DRAW),
        }
    }

    pub fn descriptions(&self) -> Vec<String> {
        match self {
            PositionStatus::Moves(moves) => describe_moves(moves),
            terminal => terminal.sentinel().map(str::to_owned).into_iter().collect(),
        }
    }
}

pub fn classify(position: &Position, color: Color) -> PositionStatus {
    if let Some(reason) = detect_draw(position) {
        return PositionStatus::Draw(reason);
    }

    let moves = position.legal_moves(color);
    if !moves.is_empty() {
        PositionStatus::Moves(moves)
    } else if position.board().is_king_in_check(color) {
        PositionStatus::Checkmate
    } else {
        PositionStatus::Stalemate
    }
}
