//! Console report for a validated position.
//!
//! Builds the text the command-line front end prints: the placement line,
//! the settings block (full mode only), an optional board diagram and one
//! result section per reported side.

use tracing::debug;

use crate::game_state::chess_rules::ABSENT_FIELD;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::position_status::classifier::PositionStatus;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub show_board: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { show_board: true }
    }
}

/// Flags held by `color`, as FEN letters joined with " and ", or `-`.
pub fn castling_summary(rights: CastlingRights, color: Color) -> String {
    let (kingside, queenside) = match color {
        Color::White => ("K", "Q"),
        Color::Black => ("k", "q"),
    };

    let mut held = Vec::with_capacity(2);
    if rights & kingside_right(color) != 0 {
        held.push(kingside);
    }
    if rights & queenside_right(color) != 0 {
        held.push(queenside);
    }

    if held.is_empty() {
        ABSENT_FIELD.to_owned()
    } else {
        held.join(" and ")
    }
}

fn optional_number(value: Option<u32>) -> String {
    value.map_or_else(|| ABSENT_FIELD.to_owned(), |v| v.to_string())
}

pub fn settings_block(position: &Position) -> String {
    let active = position
        .active_color()
        .map_or(ABSENT_FIELD, Color::name);
    let rights = position.castling_rights();

    let lines = [
        format!("Active player: {active}"),
        "Castling side availabilities:".to_owned(),
        format!("    For white: {}", castling_summary(rights, Color::White)),
        format!("    For black: {}", castling_summary(rights, Color::Black)),
        format!(
            "Possible target for an en passant capture: {}",
            position.en_passant()
        ),
        format!(
            "Moves since last pawn advance or piece capture: {}",
            optional_number(position.halfmove_clock())
        ),
        format!(
            "Number of completed turns: {}",
            optional_number(position.fullmove_number())
        ),
    ];

    let mut out = String::new();
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Result section for one side.
pub fn status_section(color: Color, status: &PositionStatus) -> String {
    match status.sentinel() {
        Some(sentinel) => format!("No possible moves for {color}: {sentinel}\n"),
        None => {
            let descriptions = status.descriptions();
            format!(
                "Possible moves for {color}: {}.\nTotal moves: {}\n",
                descriptions.join(", "),
                descriptions.len()
            )
        }
    }
}

pub fn render_report(position: &Position, colors: &[Color], options: ReportOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Piece placement by ranks: {}\n",
        position.piece_placement()
    ));
    if position.is_full_mode() {
        out.push_str(&settings_block(position));
    }

    if options.show_board {
        out.push_str("\nCurrent Board:\n\n");
        out.push_str(&render_board(position.board()));
    }

    for &color in colors {
        let status = position.status(color);
        match &status {
            PositionStatus::Draw(reason) => debug!(%color, %reason, "automatic draw"),
            terminal if terminal.is_terminal() => debug!(%color, status = ?terminal, "no legal moves"),
            _ => {}
        }
        out.push('\n');
        out.push_str(&status_section(color, &status));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{castling_summary, render_report, settings_block, status_section, ReportOptions};
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::position_status::classifier::PositionStatus;

    #[test]
    fn castling_summary_joins_flags() {
        let rights = CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_QUEENSIDE;
        assert_eq!(castling_summary(rights, Color::White), "K and Q");
        assert_eq!(castling_summary(rights, Color::Black), "q");
        assert_eq!(castling_summary(0, Color::Black), "-");
    }

    #[test]
    fn settings_show_absent_fields_as_dash() {
        let position = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQ")
            .expect("partial FEN should parse");
        let block = settings_block(&position);
        assert!(block.contains("Active player: white\n"));
        assert!(block.contains("    For white: K and Q\n"));
        assert!(block.contains("    For black: -\n"));
        assert!(block.contains("en passant capture: -\n"));
        assert!(block.contains("Number of completed turns: -\n"));
    }

    #[test]
    fn status_sections() {
        assert_eq!(
            status_section(Color::Black, &PositionStatus::Checkmate),
            "No possible moves for black: Checkmate\n"
        );

        let position = Position::from_fen("QRRBBK2/PPPPPP2/7q/8/8/8/8/7k w")
            .expect("single move fixture should parse");
        let section = status_section(Color::White, &position.status(Color::White));
        assert_eq!(
            section,
            "Possible moves for white: king from f8 to g8.\nTotal moves: 1\n"
        );
    }

    #[test]
    fn placement_only_report_skips_settings() {
        let position = Position::from_fen("7k/8/8/8/8/8/8/7K").expect("kings-only FEN should parse");
        let report = render_report(
            &position,
            &position.colors_to_report(),
            ReportOptions { show_board: false },
        );
        assert!(report.starts_with("Piece placement by ranks: 7k/8/8/8/8/8/8/7K\n"));
        assert!(!report.contains("Active player"));
        assert!(!report.contains("Current Board"));
        assert!(report.contains("No possible moves for white: Draw\n"));
        assert!(report.contains("No possible moves for black: Draw\n"));
    }
}
