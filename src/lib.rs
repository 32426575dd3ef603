//! Crate root module declarations for the Plum move calculator.
//!
//! Exposes the FEN validator, board model, per-piece move generation,
//! terminal-state classification and console helpers so the binary, tests
//! and benches can import stable module paths.

pub mod chess_errors;
pub mod chess_move;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
}

pub mod position_status {
    pub mod classifier;
    pub mod draw_rules;
}

pub mod utils {
    pub mod fen_parser;
    pub mod fen_piece_counts;
    pub mod render_board;
    pub mod report;
}
