//! Core value types shared by the board, the FEN parser and move generation.
//!
//! Everything here is a small `Copy` value. Pieces carry no identity: two
//! pieces of the same kind and color are interchangeable, and a board snapshot
//! locates its kings by scanning rather than by reference.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::SquareParseError;

/// Side owning a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step for this side (rows grow towards rank 1).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this side's pawns before they move.
    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row holding this side's king and rooks before they move.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row a pawn must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_row(self) -> u8 {
        match self {
            Color::White => 3,
            Color::Black => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
            PieceKind::Pawn => 5,
        }
    }

    /// Lowercase English name used in move descriptions.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }

    /// Unicode chess glyph for the given side.
    pub const fn glyph(self, color: Color) -> char {
        match (color, self) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }

    #[inline]
    pub const fn is_minor(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Knight)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Parse a FEN piece letter; uppercase is white, lowercase black.
    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        let kind = match ch.to_ascii_uppercase() {
            'K' => PieceKind::King,
            'Q' => PieceKind::Queen,
            'R' => PieceKind::Rook,
            'B' => PieceKind::Bishop,
            'N' => PieceKind::Knight,
            'P' => PieceKind::Pawn,
            _ => return None,
        };

        Some(Self { kind, color })
    }

    #[inline]
    pub const fn glyph(self) -> char {
        self.kind.glyph(self.color)
    }
}

/// Board coordinate. Row 0 is rank 8 and row 7 is rank 1, matching the order
/// FEN lists ranks in; column 0 is file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Returns `None` when either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Chess rank number, 1..=8.
    #[inline]
    pub const fn rank(self) -> u8 {
        8 - self.row
    }

    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Square reached by stepping `d_row` rows and `d_col` columns, if any.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in scan order: row 0 to 7, column 0 to 7 within a row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareParseError::InvalidLength(s.chars().count()));
        }

        let file = bytes[0];
        let rank = bytes[1];

        if !(b'a'..=b'h').contains(&file) {
            return Err(SquareParseError::InvalidFile(file as char));
        }
        if !(b'1'..=b'8').contains(&rank) {
            return Err(SquareParseError::InvalidRank(rank as char));
        }

        Ok(Self {
            row: b'8' - rank,
            col: file - b'a',
        })
    }
}

/// How a move relocates pieces beyond the mover itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Castling,
    EnPassant,
}

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
/// Castling rights as read from FEN, one bit per `K`, `Q`, `k`, `q` flag.
pub type CastlingRights = u8;

#[inline]
pub const fn kingside_right(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE,
    }
}

#[inline]
pub const fn queenside_right(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_QUEENSIDE,
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Piece, PieceKind, Square};

    #[test]
    fn opposite_color_is_an_involution() {
        for color in Color::ALL {
            assert_ne!(color, color.opposite());
            assert_eq!(color, color.opposite().opposite());
        }
    }

    #[test]
    fn squares_follow_fen_row_order() {
        let a8 = Square::new(0, 0).expect("a8 is on the board");
        let h1 = Square::new(7, 7).expect("h1 is on the board");
        assert_eq!(a8.to_string(), "a8");
        assert_eq!(h1.to_string(), "h1");
        assert_eq!("e6".parse::<Square>().expect("e6 should parse"), Square::new(2, 4).unwrap());
        assert!("e9".parse::<Square>().is_err());
        assert!("i1".parse::<Square>().is_err());
        assert!("-".parse::<Square>().is_err());
        assert!(Square::new(8, 0).is_none());
    }

    #[test]
    fn offsets_stop_at_the_edge() {
        let a1 = Square::new(7, 0).unwrap();
        assert!(a1.offset(1, 0).is_none());
        assert!(a1.offset(0, -1).is_none());
        assert_eq!(a1.offset(-1, 1).map(|sq| sq.to_string()).as_deref(), Some("b2"));
    }

    #[test]
    fn scan_order_covers_board_top_down() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_string(), "a8");
        assert_eq!(squares[63].to_string(), "h1");
    }

    #[test]
    fn fen_letters_map_to_colored_pieces() {
        let knight = Piece::from_fen_char('n').expect("n is a piece");
        assert_eq!(knight, Piece::new(PieceKind::Knight, Color::Black));
        assert_eq!(Piece::from_fen_char('Q').map(|p| p.color), Some(Color::White));
        assert!(Piece::from_fen_char('x').is_none());
        assert!(Piece::from_fen_char('3').is_none());
    }
}
