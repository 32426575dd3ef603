//! Terminal-oriented Unicode board renderer.
//!
//! Rank 8 is printed first. Files are labelled above and below the grid,
//! ranks on both sides; every cell is followed by a `|` separator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

/// Placeholder for an empty cell, as wide as a chess glyph.
const EMPTY_CELL: char = '\u{2003}';
const CELL_SEPARATOR: char = '|';

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    push_file_labels(&mut out);

    for row in 0..8u8 {
        let rank = 8 - row;
        out.push_str(&format!(" {rank} {CELL_SEPARATOR}"));

        for col in 0..8u8 {
            let cell = Square::new(row, col)
                .and_then(|square| board.piece_at(square))
                .map_or(EMPTY_CELL, |piece| piece.glyph());
            out.push(cell);
            out.push(CELL_SEPARATOR);
        }

        out.push_str(&format!(" {rank} \n"));
    }

    push_file_labels(&mut out);
    out
}

fn push_file_labels(out: &mut String) {
    out.push_str("    ");
    for (idx, file) in ('a'..='h').enumerate() {
        if idx > 0 {
            out.push(EMPTY_CELL);
        }
        out.push(file);
    }
    out.push('\n');
}
