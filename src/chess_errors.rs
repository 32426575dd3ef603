//! Errors produced while turning FEN text into a position.
//!
//! Validation is fail-fast: the first broken rule aborts parsing and no
//! partial position is ever handed back. Every `FenError` variant is one
//! rejection reason, and its `Display` text is the message shown to users.
//! Move generation and classification have no failure modes of their own once
//! a position exists, so this is the only error family of the crate.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind};

/// Reason a FEN string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    /// Nothing but whitespace was supplied.
    #[error("FEN string is incomplete.")]
    Incomplete,

    /// The placement field did not split into exactly 8 ranks on `/`.
    #[error("Incorrect number of ranks. Expected 8 ranks separated by '/'.")]
    IncorrectNumberOfRanks,

    /// Two digits followed each other inside one rank, e.g. `44`.
    ///
    /// Payload: chess rank number (8 for the first FEN rank).
    #[error("Invalid FEN: Multiple consecutive digits in rank {0}")]
    ConsecutiveDigitsInRank(u8),

    /// A rank kept going after its eighth file was already filled.
    #[error("Too many squares in rank {0}")]
    TooManySquaresInRank(u8),

    /// A rank described fewer or more than 8 files in total.
    #[error("Incorrect number of squares in rank {0}")]
    IncorrectNumberOfSquaresInRank(u8),

    /// An empty-square digit outside `1..=8`.
    #[error("Invalid number of empty squares: {0}")]
    InvalidNumberOfEmptySquares(char),

    /// A placement character that is neither a digit nor a piece letter.
    #[error("Invalid piece type: {0}")]
    InvalidPieceType(char),

    #[error("Invalid number of kings for {color}: {count}")]
    InvalidNumberOfKings { color: Color, count: u32 },

    #[error("Too many pawns for {color}: {count}")]
    TooManyPawns { color: Color, count: u32 },

    #[error("Too many pieces for {color}: {count}")]
    TooManyPieces { color: Color, count: u32 },

    /// More than two rooks, knights or bishops on one side.
    #[error("Too many {kind}s for {color}: {count}")]
    TooManyOfKind {
        kind: PieceKind,
        color: Color,
        count: u32,
    },

    /// More extra queens than missing pawns could have promoted into.
    #[error("Too many queens for {color}: {count}")]
    TooManyQueens { color: Color, count: u32 },

    /// Combined surplus over the starting set exceeds the missing pawns.
    #[error("Too many promoted pieces for {color}: {count}")]
    TooManyPromotedPieces { color: Color, count: u32 },

    #[error("Invalid active color: {0}")]
    InvalidActiveColor(String),

    #[error("Invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    /// No side to move was given and both kings stand in check.
    #[error("Invalid FEN: Both kings are in check.")]
    BothKingsInCheck,

    /// The side that just moved left its own king in check.
    #[error("Invalid FEN: The non-active player's king is in check.")]
    NonActiveKingInCheck,
}

pub type FenResult<T> = Result<T, FenError>;

/// Reason an algebraic square such as `e4` could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("Invalid square length: {0}, expected 2")]
    InvalidLength(usize),
    #[error("Invalid file character: '{0}', expected 'a'-'h'")]
    InvalidFile(char),
    #[error("Invalid rank character: '{0}', expected '1'-'8'")]
    InvalidRank(char),
}
