//! FEN-to-Position parser and validator.
//!
//! Single forward pass, fail-fast. Only the piece placement is mandatory;
//! every later field may be omitted and then reads as `-`. Validation order:
//! placement syntax, per-side material (white first), active color, castling
//! flags, clocks, and finally check consistency on the finished board.

use crate::chess_errors::{FenError, FenResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::ABSENT_FIELD;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::utils::fen_piece_counts::validate_piece_counts;

const RANK_COUNT: usize = 8;
const FILE_COUNT: usize = 8;

pub fn parse_fen(fen: &str) -> FenResult<Position> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let Some(&placement) = fields.first() else {
        return Err(FenError::Incomplete);
    };
    let field = |idx: usize| fields.get(idx).copied().unwrap_or(ABSENT_FIELD);

    let active_part = field(1);
    let castling_part = field(2);
    let en_passant_part = field(3);
    let halfmove_part = field(4);
    let fullmove_part = field(5);

    let squares = parse_placement(placement)?;
    let material = Board::new(squares, None, 0);
    for color in Color::ALL {
        validate_piece_counts(&material, color)?;
    }

    let active_color = parse_active_color(active_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = en_passant_part.parse::<Square>().ok();
    let halfmove_clock = parse_lenient_number(halfmove_part);
    let fullmove_number = parse_lenient_number(fullmove_part);

    let full_mode = fields.len() > 1
        && [
            active_part,
            castling_part,
            en_passant_part,
            halfmove_part,
            fullmove_part,
        ]
        .iter()
        .any(|part| *part != ABSENT_FIELD);

    let board = Board::new(squares, en_passant_target, castling_rights);
    validate_check_consistency(&board, active_color)?;

    Ok(Position {
        board,
        piece_placement: placement.to_owned(),
        active_color,
        en_passant: en_passant_part.to_owned(),
        halfmove_clock,
        fullmove_number,
        full_mode,
    })
}

fn parse_placement(placement: &str) -> FenResult<[[Option<Piece>; 8]; 8]> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != RANK_COUNT {
        return Err(FenError::IncorrectNumberOfRanks);
    }

    let mut squares = [[None; 8]; 8];
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank_number = (RANK_COUNT - row) as u8;
        let mut file = 0usize;
        let mut previous_was_digit = false;

        for ch in rank_str.chars() {
            if file >= FILE_COUNT {
                return Err(FenError::TooManySquaresInRank(rank_number));
            }

            if let Some(empty_count) = ch.to_digit(10) {
                if previous_was_digit {
                    return Err(FenError::ConsecutiveDigitsInRank(rank_number));
                }
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidNumberOfEmptySquares(ch));
                }
                file += empty_count as usize;
                previous_was_digit = true;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(FenError::InvalidPieceType(ch))?;
            squares[row][file] = Some(piece);
            file += 1;
            previous_was_digit = false;
        }

        if file != FILE_COUNT {
            return Err(FenError::IncorrectNumberOfSquaresInRank(rank_number));
        }
    }

    Ok(squares)
}

fn parse_active_color(part: &str) -> FenResult<Option<Color>> {
    match part.to_ascii_lowercase().as_str() {
        "w" => Ok(Some(Color::White)),
        "b" => Ok(Some(Color::Black)),
        ABSENT_FIELD => Ok(None),
        _ => Err(FenError::InvalidActiveColor(part.to_owned())),
    }
}

fn parse_castling_rights(part: &str) -> FenResult<CastlingRights> {
    let mut rights = 0;
    for ch in part.chars() {
        rights |= match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            '-' => 0,
            _ => return Err(FenError::InvalidCastlingRights(part.to_owned())),
        };
    }
    Ok(rights)
}

/// Keeps only the ASCII digits of `part`; nothing left means absent.
/// Values too large for `u32` saturate.
fn parse_lenient_number(part: &str) -> Option<u32> {
    let digits: String = part.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

fn validate_check_consistency(board: &Board, active_color: Option<Color>) -> FenResult<()> {
    match active_color {
        None => {
            if Color::ALL.iter().all(|&color| board.is_king_in_check(color)) {
                return Err(FenError::BothKingsInCheck);
            }
        }
        Some(active) => {
            if board.is_king_in_check(active.opposite()) {
                return Err(FenError::NonActiveKingInCheck);
            }
        }
    }
    Ok(())
}
