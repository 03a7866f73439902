#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_solo::{
    init_logging,
    score::ScoreStore,
    session::{run_session, SessionOptions, DEFAULT_TOP},
    ui::render_scoreboard,
    Console, FileScoreStore, Targeting,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "scores.csv", help = "File holding name,age,score lines")]
        scores: PathBuf,
        #[arg(long, default_value_t = DEFAULT_TOP, help = "Leaderboard entries to show")]
        top: usize,
        #[arg(long, help = "Let the computer fire at cells it already tried")]
        naive_computer: bool,
    },
    /// Print the leaderboard and exit.
    Scores {
        #[arg(long, default_value = "scores.csv")]
        scores: PathBuf,
        #[arg(long, default_value_t = DEFAULT_TOP)]
        top: usize,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            scores,
            top,
            naive_computer,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let options = SessionOptions {
                top,
                targeting: if naive_computer {
                    Targeting::Naive
                } else {
                    Targeting::Fresh
                },
            };
            let mut store = FileScoreStore::new(scores);
            let mut console = Console::stdio();
            match run_session(&mut console, &mut store, &mut rng, &options) {
                Ok(games) => log::info!("session ended after {} game(s)", games.len()),
                Err(e) if is_closed_input(&e) => println!("\nInput closed, goodbye."),
                Err(e) => return Err(e),
            }
        }
        Commands::Scores { scores, top } => {
            let store = FileScoreStore::new(scores);
            let records = store
                .read_top_scores(top)
                .map_err(|e| anyhow::anyhow!(e))?;
            print!("{}", render_scoreboard(&records));
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn is_closed_input(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::UnexpectedEof)
}
