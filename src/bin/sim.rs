use battleship_solo::{play_game, AiPlayer, Difficulty, Game, GameOutcome};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [e|m|h]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let difficulty = match args.get(2) {
        None => Difficulty::Hard,
        Some(arg) => arg
            .chars()
            .next()
            .and_then(Difficulty::from_choice)
            .ok_or_else(|| anyhow::anyhow!("unknown difficulty {:?}", arg))?,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(&difficulty.config(), "sim", None, &mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let summary = play_game(&mut game, &mut p1, &mut p2, &mut rng)?;

    let winner = match summary.outcome {
        GameOutcome::PlayerWins => Some("player"),
        GameOutcome::ComputerWins => Some("computer"),
        GameOutcome::TurnsExhausted => None,
    };

    let result = json!({
        "seed": seed,
        "difficulty": difficulty,
        "summary": summary,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
