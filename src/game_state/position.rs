//! Validated position: a board snapshot plus the FEN side metadata.
//!
//! A `Position` only exists once every validation rule has passed, so the
//! query methods here cannot fail.

use crate::chess_errors::FenResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::LegalMove;
use crate::position_status::classifier::{classify, PositionStatus};
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,

    // --- Raw FEN fields ---
    pub(crate) piece_placement: String,
    pub(crate) en_passant: String,

    // --- Side metadata; `None` when the field was absent ---
    pub(crate) active_color: Option<Color>,
    pub(crate) halfmove_clock: Option<u32>,
    pub(crate) fullmove_number: Option<u32>,

    pub(crate) full_mode: bool,
}

impl Position {
    pub fn from_fen(fen: &str) -> FenResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_placement(&self) -> &str {
        &self.piece_placement
    }

    pub fn active_color(&self) -> Option<Color> {
        self.active_color
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.board.castling_rights()
    }

    /// En-passant field exactly as written, `-` when absent.
    pub fn en_passant(&self) -> &str {
        &self.en_passant
    }

    pub fn halfmove_clock(&self) -> Option<u32> {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> Option<u32> {
        self.fullmove_number
    }

    /// True when any field beyond the piece placement carried a value.
    pub fn is_full_mode(&self) -> bool {
        self.full_mode
    }

    pub fn legal_moves(&self, color: Color) -> Vec<LegalMove> {
        LegalMoveGenerator.generate_legal_moves(&self.board, color)
    }

    pub fn status(&self, color: Color) -> PositionStatus {
        classify(self, color)
    }

    /// Move descriptions for `color`, or a single `Checkmate`, `Stalemate` or
    /// `Draw` entry when the side has nothing to play.
    pub fn move_descriptions(&self, color: Color) -> Vec<String> {
        self.status(color).descriptions()
    }

    /// The side whose king alone is in check, when exactly one is.
    pub fn inferred_active_color(&self) -> Option<Color> {
        let white = self.board.is_king_in_check(Color::White);
        let black = self.board.is_king_in_check(Color::Black);
        match (white, black) {
            (true, false) => Some(Color::White),
            (false, true) => Some(Color::Black),
            _ => None,
        }
    }

    /// Sides whose moves should be listed: the explicit active color, else the
    /// side in check, else both (white first).
    pub fn colors_to_report(&self) -> Vec<Color> {
        match self.active_color.or_else(|| self.inferred_active_color()) {
            Some(color) => vec![color],
            None => Color::ALL.to_vec(),
        }
    }
}
