use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use salvo::{
    init_logging, Board, Coordinate, Position, Report, TargetingEngine, BOARD_SIZE, COLUMN_LETTERS,
};
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play automated matches and print one JSON summary per match.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible matches (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long, help = "Include every shot report in the output")]
        shots: bool,
    },
    /// Generate a board and print it.
    Board {
        #[arg(long, help = "Fix RNG seed for a reproducible layout")]
        seed: Option<u64>,
        #[arg(long, help = "Show the board as the opponent sees it")]
        hidden: bool,
    },
}

#[derive(Serialize)]
struct ShotRecord {
    shooter: &'static str,
    target: Position,
    report: Report,
}

#[derive(Serialize)]
struct MatchSummary {
    game: u32,
    first: &'static str,
    winner: &'static str,
    turns: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    shots: Option<Vec<ShotRecord>>,
}

const SIDES: [&str; 2] = ["player1", "player2"];

fn make_rng(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn play_match(game: u32, rng: &mut SmallRng, keep_shots: bool) -> anyhow::Result<MatchSummary> {
    let mut boards = [
        Board::new(SIDES[0], false, rng).map_err(|e| anyhow::anyhow!(e))?,
        Board::new(SIDES[1], true, rng).map_err(|e| anyhow::anyhow!(e))?,
    ];
    let mut engines = [TargetingEngine::new(), TargetingEngine::new()];
    let first = rng.random_range(0..2usize);
    let mut shooter = first;
    let mut shots = Vec::new();
    let mut turns = 0;

    loop {
        let target = &mut boards[1 - shooter];
        let (position, report) = engines[shooter]
            .take_turn(target, rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        turns += 1;
        if keep_shots {
            shots.push(ShotRecord {
                shooter: SIDES[shooter],
                target: position,
                report,
            });
        }
        if report == Report::Destroyed && target.are_all_ships_destroyed() {
            break;
        }
        shooter = 1 - shooter;
    }

    info!("game {}: {} wins after {} turns", game, SIDES[shooter], turns);
    Ok(MatchSummary {
        game,
        first: SIDES[first],
        winner: SIDES[shooter],
        turns,
        shots: keep_shots.then_some(shots),
    })
}

fn print_board(board: &Board) {
    println!("{}", board.name());
    print!("    ");
    for letter in COLUMN_LETTERS.chars() {
        print!(" {}", letter);
    }
    println!();
    for c in Coordinate::all() {
        if c.col() == 0 {
            print!("{:>3} ", c.row() + 1);
        }
        print!("|{}", board.visible(c));
        if c.col() == BOARD_SIZE - 1 {
            println!("|");
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sim { seed, games, shots } => {
            if let Some(s) = seed {
                info!("using fixed seed {}", s);
            }
            for game in 0..games {
                let mut rng = make_rng(seed, game as u64);
                let summary = play_match(game, &mut rng, shots)?;
                println!("{}", serde_json::to_string(&summary)?);
            }
        }
        Commands::Board { seed, hidden } => {
            let mut rng = make_rng(seed, 0);
            let name = if hidden { "Opponent's ships" } else { "Your ships" };
            let board = Board::new(name, hidden, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            print_board(&board);
        }
    }
    Ok(())
}
