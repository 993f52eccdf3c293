//! Gomoku terminal game
//!
//! Plays Gomoku against the search engine, against another human, or lets
//! two engines play each other.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use gomoku::board::{Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use gomoku::config::{parse_color, GameConfig};
use gomoku::ui::{prompt_parse, run_game};
use gomoku::{GameMode, GameState, Strategy};

/// Gomoku (five in a row) against a minimax engine
#[derive(Parser)]
#[command(name = "gomoku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length; prompted for when omitted
    #[arg(short, long)]
    size: Option<usize>,

    /// Search depth limit in plies; prompted for when omitted
    #[arg(short, long)]
    depth: Option<u8>,

    /// Search strategy: minimax or alphabeta
    #[arg(long, default_value = "alphabeta")]
    strategy: Strategy,

    /// Game mode: pve, pvp or eve
    #[arg(short, long, default_value = "pve")]
    mode: GameMode,

    /// Color played by the human in pve mode
    #[arg(long, default_value = "black", value_parser = parse_color)]
    human_color: Stone,

    /// Show engine hints in pvp mode
    #[arg(long)]
    hints: bool,

    /// Log search details (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let Some(config) = build_config(&cli, &mut input, &mut output)? else {
        return Ok(());
    };
    log::info!(
        "starting {}x{} game, {}, {} depth {}",
        config.board_size,
        config.board_size,
        config.mode,
        config.strategy,
        config.depth_limit
    );

    let mut game = GameState::new(config);
    run_game(&mut game, &mut input, &mut output).context("game aborted")?;
    Ok(())
}

/// Merge flags and interactive answers into a validated config.
///
/// Returns `None` if input closes before the prompts are answered.
fn build_config<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    output: &mut W,
) -> Result<Option<GameConfig>> {
    let board_size = match cli.size {
        Some(size) => size,
        None => {
            let prompt = format!("Enter board size ({MIN_BOARD_SIZE}-{MAX_BOARD_SIZE}, e.g. 7): ");
            match prompt_parse(input, output, &prompt).context("reading board size")? {
                Some(size) => size,
                None => return Ok(None),
            }
        }
    };

    let depth_limit = match cli.depth {
        Some(depth) => depth,
        None => match prompt_parse(input, output, "Enter search depth limit (e.g., 2 or 3): ")
            .context("reading depth limit")?
        {
            Some(depth) => depth,
            None => return Ok(None),
        },
    };

    let mode = match cli.mode {
        GameMode::PvP { .. } => GameMode::PvP {
            show_suggestions: cli.hints,
        },
        other => other.with_human_color(cli.human_color),
    };

    let config = GameConfig {
        board_size,
        depth_limit,
        strategy: cli.strategy,
        mode,
    }
    .validated()
    .context("invalid game configuration")?;

    Ok(Some(config))
}
