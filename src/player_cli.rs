#![cfg(feature = "std")]

use std::io::{BufRead, Write};

use rand::rngs::SmallRng;

use crate::console::Console;
use crate::player::{Player, PlayerView, TurnReport};
use crate::ui::{describe_report, render_grid, render_target};

/// Human side reading guesses from a [`Console`].
pub struct CliPlayer<'a, R, W> {
    console: &'a mut Console<R, W>,
}

impl<'a, R: BufRead, W: Write> CliPlayer<'a, R, W> {
    pub fn new(console: &'a mut Console<R, W>) -> Self {
        Self { console }
    }

    fn report(&mut self, report: &TurnReport) {
        let line = describe_report(report);
        if let Err(e) = self.console.say(&format!("{}\n", line)) {
            log::warn!("could not write guess result: {}", e);
        }
    }
}

/// Display the opponent grid (top) and the player's grid (bottom).
pub fn player_view_text(view: &PlayerView<'_>) -> String {
    format!(
        "\nEnemy waters ({} ships afloat):\n{}\nYour fleet:\n{}\nScore: {} | Turns left: {}\n",
        view.target.ships_afloat(),
        render_target(&view.target),
        render_grid(view.own),
        view.score,
        view.turns_left
    )
}

impl<R: BufRead, W: Write> Player for CliPlayer<'_, R, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        view: &PlayerView<'_>,
    ) -> anyhow::Result<(usize, usize)> {
        self.console.say(&player_view_text(view))?;
        let guess = self
            .console
            .read_guess(view.target.rows(), view.target.cols())?;
        Ok(guess)
    }

    fn handle_guess_result(&mut self, report: &TurnReport) {
        self.report(report);
    }

    fn handle_opponent_guess(&mut self, report: &TurnReport) {
        // computer duplicates are re-rolled silently
        if !report.result.is_duplicate() {
            self.report(report);
        }
    }
}
