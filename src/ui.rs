//! Text rendering for grids, banner, instructions and scoreboard.

use alloc::string::String;
use core::fmt::Write;

use crate::{
    common::GuessResult,
    game::{GameOutcome, GameSummary, Side},
    grid::{Cell, Grid, OpponentView},
    player::TurnReport,
    score::ScoreRecord,
};

pub const BANNER: &str = r"
  #####    ##   ##### ##### #      ######  ####  #    # # #####
  #    #  #  #    #     #   #      #      #      #    # # #    #
  #####  #    #   #     #   #      #####   ####  ###### # #    #
  #    # ######   #     #   #      #           # #    # # #####
  #    # #    #   #     #   #      #      #    # #    # # #
  #####  #    #   #     #   ###### ######  ####  #    # # #
";

pub const INSTRUCTIONS: &str = "\
-- Welcome to Battleship!
- Sink the computer's hidden fleet by guessing where its ships are.
- You have a limited number of turns; the computer fires back after each of yours.
- Each guess is reported as a hit, a miss, or a duplicate (already tried).
- Enter a guess as the row and column shown on the grid headers, e.g. `2 3`.
- Good luck!
";

fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Ship => 'S',
        Cell::Hit => 'X',
        Cell::Miss => 'o',
    }
}

fn render_cells(rows: usize, cols: usize, cell_at: impl Fn(usize, usize) -> Cell) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..cols {
        let _ = write!(out, " {:>2}", c);
    }
    out.push('\n');
    for r in 0..rows {
        let _ = write!(out, "{:>2} ", r);
        for c in 0..cols {
            let _ = write!(out, "  {}", symbol(cell_at(r, c)));
        }
        out.push('\n');
    }
    out
}

/// Render a side's own grid with its ships visible.
pub fn render_grid(grid: &Grid) -> String {
    render_cells(grid.rows(), grid.cols(), |r, c| {
        grid.cell(r, c).unwrap_or(Cell::Empty)
    })
}

/// Render the opponent grid; ships show only where hit.
pub fn render_target(view: &OpponentView<'_>) -> String {
    render_cells(view.rows(), view.cols(), |r, c| {
        view.cell(r, c).unwrap_or(Cell::Empty)
    })
}

/// One-line description of a resolved guess.
pub fn describe_report(report: &TurnReport) -> String {
    let who = match report.side {
        Side::Player => "You",
        Side::Computer => "Computer",
    };
    let (r, c) = report.coord;
    let mut line = String::new();
    let _ = match (report.result, report.ship) {
        (GuessResult::Hit { sunk: true, .. }, Some(ship)) => write!(
            line,
            "{} guessed ({}, {}): HIT! {} sunk (+{} points)",
            who,
            r,
            c,
            ship.name(),
            report.points()
        ),
        (GuessResult::Hit { .. }, Some(ship)) => write!(
            line,
            "{} guessed ({}, {}): HIT on {} (+{} points)",
            who,
            r,
            c,
            ship.name(),
            report.points()
        ),
        (GuessResult::Hit { .. }, None) => write!(line, "{} guessed ({}, {}): HIT", who, r, c),
        (GuessResult::Miss, _) => write!(line, "{} guessed ({}, {}): miss", who, r, c),
        (GuessResult::Duplicate, _) => write!(
            line,
            "{} guessed ({}, {}) again: duplicate, guess again",
            who, r, c
        ),
    };
    line
}

/// Final verdict and scores.
pub fn describe_summary(summary: &GameSummary) -> String {
    let verdict = match summary.outcome {
        GameOutcome::PlayerWins => "VICTORY! You sank the whole enemy fleet.",
        GameOutcome::ComputerWins => "DEFEAT. The computer sank all your ships.",
        GameOutcome::TurnsExhausted => "Out of turns. Neither fleet was sunk.",
    };
    let mut out = String::new();
    let _ = writeln!(out, "{}", verdict);
    let _ = writeln!(
        out,
        "{}: {} points | Computer: {} points | rounds played: {}",
        summary.player_name, summary.player_score, summary.computer_score, summary.rounds_played
    );
    out
}

/// Leaderboard table, in the order given.
pub fn render_scoreboard(records: &[ScoreRecord]) -> String {
    let mut out = String::new();
    if records.is_empty() {
        out.push_str("No scores recorded yet.\n");
        return out;
    }
    let _ = writeln!(out, "{:>3}  {:<20} {:>4} {:>6}", "#", "Name", "Age", "Score");
    for (i, rec) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<20} {:>4} {:>6}",
            i + 1,
            rec.name,
            rec.age,
            rec.score
        );
    }
    out
}
