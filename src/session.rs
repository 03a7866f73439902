#![cfg(feature = "std")]

//! Outer replay loop: who is playing, one game per iteration, scores after.

use std::io::{BufRead, Write};

use rand::rngs::SmallRng;

use crate::{
    config::Difficulty,
    console::Console,
    game::{play_game, Game, GameSummary},
    player_ai::{AiPlayer, Targeting},
    player_cli::CliPlayer,
    score::{ScoreRecord, ScoreStore},
    ui::{describe_summary, render_grid, render_scoreboard, BANNER, INSTRUCTIONS},
};

/// Leaderboard length shown when none is configured.
pub const DEFAULT_TOP: usize = 10;

/// Whether the session continues after a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Replay,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Leaderboard entries to show.
    pub top: usize,
    pub targeting: Targeting,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            targeting: Targeting::default(),
        }
    }
}

/// The person at the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
}

/// Print the leaderboard. Store failures are reported, not fatal.
pub fn show_leaderboard<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &dyn ScoreStore,
    top: usize,
) -> anyhow::Result<()> {
    match store.read_top_scores(top) {
        Ok(records) => {
            console.say(&format!("\nTop {} scores:\n{}", top, render_scoreboard(&records)))?
        }
        Err(e) => {
            log::warn!("could not read scores: {}", e);
            console.say("Scoreboard unavailable.\n")?;
        }
    }
    Ok(())
}

/// Play one game for `profile`, record the score and ask about a replay.
pub fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut dyn ScoreStore,
    rng: &mut SmallRng,
    profile: &Profile,
    options: &SessionOptions,
) -> anyhow::Result<(GameSummary, SessionControl)> {
    let difficulty: Difficulty = console.read_difficulty()?;
    let config = difficulty.config();
    log::info!(
        "starting {} game for {}: {}x{} grid, {} ships, {} turns",
        difficulty,
        profile.name,
        config.rows,
        config.cols,
        config.fleet.len(),
        config.turns
    );
    let mut game = Game::new(&config, &profile.name, Some(profile.age), rng)
        .map_err(|e| anyhow::anyhow!(e))?;

    let summary = {
        let mut human = CliPlayer::new(console);
        let mut computer = AiPlayer::with_targeting(options.targeting);
        play_game(&mut game, &mut human, &mut computer, rng)?
    };

    console.say(&format!(
        "\nComputer fleet:\n{}\n{}",
        render_grid(game.computer().grid()),
        describe_summary(&summary)
    ))?;

    let record = ScoreRecord::new(profile.name.clone(), profile.age, summary.player_score);
    if let Err(e) = store.append_score(record) {
        log::warn!("could not save score: {}", e);
        console.say("Your score could not be saved.\n")?;
    }
    show_leaderboard(console, store, options.top)?;

    let control = if console.confirm_replay()? {
        SessionControl::Replay
    } else {
        SessionControl::Quit
    };
    Ok((summary, control))
}

/// Banner, leaderboard, then games until the player declines a replay.
/// Returns the summaries of every game played.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut dyn ScoreStore,
    rng: &mut SmallRng,
    options: &SessionOptions,
) -> anyhow::Result<Vec<GameSummary>> {
    console.say(BANNER)?;
    console.say(INSTRUCTIONS)?;
    show_leaderboard(console, store, options.top)?;

    let profile = Profile {
        name: console.read_name()?,
        age: console.read_age()?,
    };

    let mut played = Vec::new();
    loop {
        let (summary, control) = play_round(console, store, rng, &profile, options)?;
        played.push(summary);
        if control == SessionControl::Quit {
            break;
        }
    }
    console.say("Thanks for playing!\n")?;
    Ok(played)
}
