use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use plum_movecalc::game_state::chess_types::Color;
use plum_movecalc::game_state::position::Position;
use plum_movecalc::utils::report::{render_report, ReportOptions};

/// List every legal move in a chess position given as FEN.
#[derive(Debug, Parser)]
#[command(name = "plum_movecalc", version, about)]
struct Cli {
    /// Position in Forsyth-Edwards Notation; quote it so the shell keeps the
    /// spaces. Only the piece placement is required.
    fen: String,

    /// Report this side instead of the active or checked one.
    #[arg(long, value_enum)]
    color: Option<SideArg>,

    /// Do not print the board diagram.
    #[arg(long)]
    no_board: bool,

    /// Emit debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    White,
    Black,
}

impl From<SideArg> for Color {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::White => Color::White,
            SideArg::Black => Color::Black,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let position = match Position::from_fen(&cli.fen) {
        Ok(position) => position,
        Err(err) => {
            error!("Invalid FEN code: {err}");
            error!("Please ensure the FEN code is correct. For help, use -h or --help.");
            return ExitCode::FAILURE;
        }
    };

    debug!(
        placement = position.piece_placement(),
        active = ?position.active_color(),
        en_passant = position.en_passant(),
        halfmove = ?position.halfmove_clock(),
        fullmove = ?position.fullmove_number(),
        full_mode = position.is_full_mode(),
        "parsed position"
    );

    let colors = match cli.color {
        Some(side) => vec![Color::from(side)],
        None => position.colors_to_report(),
    };
    debug!(?colors, "reporting sides");

    let options = ReportOptions {
        show_board: !cli.no_board,
    };
    print!("{}", render_report(&position, &colors, options));

    ExitCode::SUCCESS
}
