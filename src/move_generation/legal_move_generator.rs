//! Full legal move generation pipeline.
//!
//! Walks the board in scan order, asks each piece of the requested side for
//! its pseudo-legal moves, and drops every candidate whose bare relocation
//! leaves that side's king attacked. Output order is scan order of the moving
//! piece, then the piece's own generation order.

use crate::chess_move::ChessMove;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::move_leaves_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::LegalMove;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<LegalMove> {
        generate_legal_moves(board, color)
    }
}

/// Pseudo-legal moves of `piece` standing on `from`.
pub fn generate_piece_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<ChessMove>) {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, color, out),
        PieceKind::Knight => generate_knight_moves(board, from, color, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, color, out),
        PieceKind::Rook => generate_rook_moves(board, from, color, out),
        PieceKind::Queen => generate_queen_moves(board, from, color, out),
        PieceKind::King => generate_king_moves(board, from, color, out),
    }
}

pub fn generate_legal_moves(board: &Board, color: Color) -> Vec<LegalMove> {
    let mut pseudo = Vec::<ChessMove>::with_capacity(32);
    let mut legal = Vec::<LegalMove>::with_capacity(64);

    for (from, piece) in board.pieces().filter(|(_, piece)| piece.color == color) {
        pseudo.clear();
        generate_piece_moves(board, from, piece, &mut pseudo);

        legal.extend(
            pseudo
                .iter()
                .filter(|mv| !move_leaves_king_in_check(board, mv, color))
                .map(|mv| LegalMove::new(piece, *mv)),
        );
    }

    legal
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{generate_legal_moves, LegalMoveGenerator};
    use crate::game_state::board::Board;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::move_generation::legal_move_apply::apply_relocation;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::moves::move_descriptions::describe_moves;

    fn descriptions(fen: &str, color: Color) -> Vec<String> {
        let position = Position::from_fen(fen).expect("fixture FEN should parse");
        describe_moves(&generate_legal_moves(position.board(), color))
    }

    #[test]
    fn starting_position_has_twenty_moves_per_side() {
        let position = Position::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        for color in Color::ALL {
            assert_eq!(
                LegalMoveGenerator
                    .generate_legal_moves(position.board(), color)
                    .len(),
                20
            );
        }
    }

    #[test]
    fn moves_follow_scan_order() {
        let moves = descriptions(STARTING_POSITION_FEN, Color::White);
        assert_eq!(moves[0], "pawn from a2 to a3");
        assert_eq!(moves[1], "pawn from a2 to a4");
        assert_eq!(moves[16], "knight from b1 to a3");
        assert_eq!(moves[17], "knight from b1 to c3");
        assert_eq!(moves[19], "knight from g1 to h3");
    }

    #[test]
    fn en_passant_and_castling_descriptions() {
        let fen = "rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPP1PPP/R3K2R w KQkq e6 0 3";
        let moves = descriptions(fen, Color::White);
        assert!(moves.contains(&"pawn from f5 to e6 (capturing pawn) (en-passant)".to_string()));
        assert!(moves.contains(&"king from e1 to g1 (castling)".to_string()));
        assert!(moves.contains(&"king from e1 to c1 (castling)".to_string()));

        let plain = descriptions(
            "rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPP1PPP/R3K2R w - - 0 3",
            Color::White,
        );
        assert!(!plain.iter().any(|d| d.ends_with("(en-passant)")));
        assert!(!plain.iter().any(|d| d.ends_with("(castling)")));
    }

    #[test]
    fn rook_captures_along_open_file() {
        let moves = descriptions(
            "rnbqkbnr/ppppppp1/8/8/8/4P3/PPP1P1P1/RNBQKBNR w KQkq - 0 1",
            Color::White,
        );
        assert!(moves.contains(&"rook from h1 to h8 (capturing rook)".to_string()));
    }

    #[test]
    fn both_sides_see_mutual_captures() {
        let fen = "5r2/pp3k2/5r2/q1p2Q2/3P4/6R1/PPP2PP1/1K6";
        let white = descriptions(fen, Color::White);
        assert!(white.contains(&"queen from f5 to c5 (capturing pawn)".to_string()));
        assert!(white.contains(&"pawn from d4 to c5 (capturing pawn)".to_string()));

        let black = descriptions(fen, Color::Black);
        assert!(black.contains(&"rook from f6 to f5 (capturing queen)".to_string()));
        assert!(black.contains(&"pawn from c5 to d4 (capturing pawn)".to_string()));
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        let moves = descriptions("bnrbkn1r/pppppppp/8/8/1q6/8/PPPPPPPP/BNRBKNQR", Color::White);
        assert!(!moves.contains(&"pawn from d2 to d3".to_string()));
        assert!(!moves.contains(&"pawn from d2 to d4".to_string()));
        assert!(moves.contains(&"pawn from c2 to c3".to_string()));
    }

    #[test]
    fn single_escape_square() {
        let moves = descriptions("QRRBBK2/PPPPPP2/7q/8/8/8/8/7k w", Color::White);
        assert_eq!(moves, vec!["king from f8 to g8".to_string()]);
    }

    fn random_board(rng: &mut StdRng) -> Board {
        let mut board = Board::default();
        let mut free: Vec<Square> = Square::all().collect();

        for color in Color::ALL {
            let idx = rng.random_range(0..free.len());
            board.set(free.swap_remove(idx), Some(Piece::new(PieceKind::King, color)));
        }

        let extras = rng.random_range(0..12);
        for _ in 0..extras {
            let idx = rng.random_range(0..free.len());
            let square = free.swap_remove(idx);
            let kind = [
                PieceKind::Queen,
                PieceKind::Rook,
                PieceKind::Bishop,
                PieceKind::Knight,
                PieceKind::Pawn,
            ][rng.random_range(0..5)];
            if kind == PieceKind::Pawn && (square.row() == 0 || square.row() == 7) {
                continue;
            }
            let color = Color::ALL[rng.random_range(0..2)];
            board.set(square, Some(Piece::new(kind, color)));
        }

        board
    }

    #[test]
    fn legal_moves_never_leave_own_king_attacked() {
        let mut rng = StdRng::seed_from_u64(0x5eed_c4e5);
        for _ in 0..300 {
            let board = random_board(&mut rng);
            for color in Color::ALL {
                for legal in generate_legal_moves(&board, color) {
                    let next = apply_relocation(&board, &legal.chess_move);
                    assert!(
                        !next.is_king_in_check(color),
                        "{} leaves the {color} king attacked",
                        legal.description()
                    );
                }
            }
        }
    }
}
