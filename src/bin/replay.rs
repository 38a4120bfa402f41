use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use drop_four::config::AppConfig;
use drop_four::moves::{describe_move, parse_move_list, play_all, render_text, summarize};

/// Replay a scripted Connect Four game and report every move.
#[derive(Parser)]
#[command(name = "replay", about = "Replay a list of Connect Four moves")]
struct Cli {
    /// Columns to drop into, 0-based, separated by commas or spaces
    #[arg(long)]
    moves: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "drop-four.toml")]
    config: PathBuf,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Emit one JSON object per move instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    config.validate().context("invalid board size")?;

    let columns = parse_move_list(&cli.moves).context("parsing --moves")?;
    let mut game = config.new_game();
    let results = play_all(&mut game, &columns);

    for (i, result) in results.iter().enumerate() {
        if cli.json {
            println!("{}", serde_json::to_string(result)?);
        } else {
            println!("{:>3}: {}", i + 1, describe_move(&game, result));
        }
    }

    if !cli.json {
        println!();
        print!("{}", render_text(game.board()));
        println!("{} moves, {}", game.move_count(), summarize(&game));
    }

    Ok(())
}
