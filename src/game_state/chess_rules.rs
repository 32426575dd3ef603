//! Canonical chess-rule constants.
//!
//! Literals shared by FEN validation, draw detection and the console report.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Placeholder FEN uses for an omitted or empty optional field.
pub const ABSENT_FIELD: &str = "-";

/// Both clocks must reach this value for the FEN-snapshot fifty-move draw.
pub const FIFTY_MOVE_THRESHOLD: u32 = 50;

pub const MAX_PIECES_PER_SIDE: u32 = 16;
pub const MAX_PAWNS_PER_SIDE: u32 = 8;

/// Starting count of rooks, knights and bishops; also the hard cap per side.
pub const MAX_PAIRED_PIECES: u32 = 2;

pub const CHECKMATE: &str = "Checkmate";
pub const STALEMATE: &str = "Stalemate";
pub const AUTOMATIC_DRAW: &str = "Draw";
