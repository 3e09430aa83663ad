use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use minegrid_core::{BoardConfig, ClickOutcome, Coord, Game};

mod command;
mod storage;

use command::Command;

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,

    #[command(flatten)]
    board: BoardArgs,

    /// Force a seed instead of random
    #[arg(short, long, conflicts_with = "load")]
    seed: Option<u64>,

    /// Resume a board saved with --save instead of generating one
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Write the board record here when the session ends
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct BoardArgs {
    /// Number of columns
    #[arg(
        long,
        default_value_t = BoardConfig::default().width,
        allow_negative_numbers = true,
        conflicts_with = "load"
    )]
    width: Coord,

    /// Number of rows
    #[arg(
        long,
        default_value_t = BoardConfig::default().height,
        allow_negative_numbers = true,
        conflicts_with = "load"
    )]
    height: Coord,

    /// Chance of each cell being a mine
    #[arg(
        short,
        long,
        default_value_t = BoardConfig::default().probability,
        conflicts_with = "load"
    )]
    probability: f64,
}

impl BoardArgs {
    fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.width, self.height, self.probability)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let mut game = match &args.load {
        Some(path) => Game::new(storage::load(path)?),
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            log::info!("seed: {seed}");
            Game::generate(args.board.config(), seed)?
        }
    };

    play(&mut game, io::stdin().lock(), io::stdout().lock())?;

    if let Some(path) = &args.save {
        storage::save(path, game.board())?;
    }
    Ok(())
}

fn play(game: &mut Game, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let (width, height) = game.board().size();
    writeln!(out, "{width}x{height} board, enter `x y` to uncover a cell, `q` to quit")?;
    write!(out, "{}", game.overlay())?;

    let mut moves = 0u32;
    for line in input.lines() {
        let command = match Command::parse(&line?) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err:#}")?;
                continue;
            }
        };

        let coords = match command {
            Command::Quit => break,
            Command::Show => {
                write!(out, "{}", game.overlay())?;
                continue;
            }
            Command::Click(coords) => coords,
        };

        let outcome = game.click(coords)?;
        if outcome.has_update() {
            moves += 1;
        }

        match outcome {
            ClickOutcome::NoChange => writeln!(out, "Nothing to uncover at {coords:?}")?,
            ClickOutcome::Revealed => write!(out, "{}", game.overlay())?,
            ClickOutcome::HitMine => {
                writeln!(out, "Boom! {coords:?} was a mine, after {moves} moves")?;
                write!(out, "{}", game.board())?;
                break;
            }
            ClickOutcome::Won => {
                write!(out, "{}", game.overlay())?;
                writeln!(out, "Cleared in {moves} moves! You won")?;
                break;
            }
        }
    }

    out.flush()?;
    Ok(())
}
