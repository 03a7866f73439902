use rand::rngs::SmallRng;

use crate::{
    common::GuessResult,
    game::{Game, GamePhase, Side},
    grid::{Grid, OpponentView},
    ship::ShipType,
};

/// Everything a side may look at when choosing a target.
#[derive(Clone, Copy)]
pub struct PlayerView<'a> {
    /// The side's own grid, ships included.
    pub own: &'a Grid,
    /// The opponent's grid with unhit ships hidden.
    pub target: OpponentView<'a>,
    pub score: u32,
    pub turns_left: u32,
}

/// A resolved guess, as reported to both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub coord: (usize, usize),
    pub result: GuessResult,
    /// Type of the ship that was hit, if any.
    pub ship: Option<ShipType>,
    /// Phase after the guess.
    pub phase: GamePhase,
    pub turns_left: u32,
}

impl TurnReport {
    pub(crate) fn new(game: &Game, side: Side, coord: (usize, usize), result: GuessResult) -> Self {
        let ship = match result {
            GuessResult::Hit { ship, .. } => game
                .side(side.opponent())
                .grid()
                .ships()
                .get(ship)
                .map(|s| s.ship_type()),
            GuessResult::Miss | GuessResult::Duplicate => None,
        };
        Self {
            side,
            coord,
            result,
            ship,
            phase: game.phase(),
            turns_left: game.turns_left(),
        }
    }

    /// Points this guess earned.
    pub fn points(&self) -> u32 {
        self.ship.map(|s| s.points()).unwrap_or(0)
    }
}

/// Interface implemented by the human and computer sides.
pub trait Player {
    /// Choose the next target coordinate on the opponent grid.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &PlayerView<'_>,
    ) -> anyhow::Result<(usize, usize)>;

    /// Inform the player of the result of its last guess.
    fn handle_guess_result(&mut self, _report: &TurnReport) {}

    /// Inform the player of an opponent guess against its grid.
    fn handle_opponent_guess(&mut self, _report: &TurnReport) {}
}
