use alloc::string::String;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    common::{GameError, GuessResult},
    config::GameConfig,
    grid::{Grid, OpponentView},
    placement::place_fleet,
    player::{Player, PlayerView, TurnReport},
};

/// Which side is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Where the turn loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingPlayerGuess,
    AwaitingComputerGuess,
    PlayerWins,
    ComputerWins,
    TurnsExhausted,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        self.outcome().is_some()
    }

    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            GamePhase::PlayerWins => Some(GameOutcome::PlayerWins),
            GamePhase::ComputerWins => Some(GameOutcome::ComputerWins),
            GamePhase::TurnsExhausted => Some(GameOutcome::TurnsExhausted),
            _ => None,
        }
    }

    /// Side due to guess, if the game is still running.
    pub fn side_to_move(self) -> Option<Side> {
        match self {
            GamePhase::AwaitingPlayerGuess => Some(Side::Player),
            GamePhase::AwaitingComputerGuess => Some(Side::Computer),
            _ => None,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOutcome {
    PlayerWins,
    ComputerWins,
    TurnsExhausted,
}

/// One side of the game: identity, score and the grid holding its fleet.
/// Guesses made against this side are recorded on `grid`.
#[derive(Debug, Clone)]
pub struct Combatant {
    name: String,
    age: Option<u32>,
    score: u32,
    grid: Grid,
}

impl Combatant {
    pub fn new(name: impl Into<String>, age: Option<u32>, grid: Grid) -> Self {
        Self {
            name: name.into(),
            age,
            score: 0,
            grid,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

/// End-of-game figures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub outcome: GameOutcome,
    pub player_name: String,
    pub player_score: u32,
    pub computer_score: u32,
    pub rounds_played: u32,
    pub turns_left: u32,
}

/// Two grids, the scores, and the turn state machine.
#[derive(Debug, Clone)]
pub struct Game {
    player: Combatant,
    computer: Combatant,
    phase: GamePhase,
    turns: u32,
    turns_left: u32,
}

impl Game {
    /// Set up a game from `config`, placing both fleets at random.
    pub fn new<R: Rng>(
        config: &GameConfig,
        player_name: &str,
        player_age: Option<u32>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let mut player_grid = Grid::new(config.rows, config.cols);
        place_fleet(&mut player_grid, &config.fleet, rng, config.placement_attempts)?;
        let mut computer_grid = Grid::new(config.rows, config.cols);
        place_fleet(&mut computer_grid, &config.fleet, rng, config.placement_attempts)?;
        Self::from_parts(
            Combatant::new(player_name, player_age, player_grid),
            Combatant::new("Computer", None, computer_grid),
            config.turns,
        )
    }

    /// Build a game from already populated sides.
    pub fn from_parts(player: Combatant, computer: Combatant, turns: u32) -> Result<Self, GameError> {
        if turns == 0 {
            return Err(GameError::InvalidConfig("turn budget is zero"));
        }
        if player.grid.ships().is_empty() || computer.grid.ships().is_empty() {
            return Err(GameError::InvalidConfig("fleet is empty"));
        }
        Ok(Self {
            player,
            computer,
            phase: GamePhase::AwaitingPlayerGuess,
            turns,
            turns_left: turns,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.phase.outcome()
    }

    pub fn turns_left(&self) -> u32 {
        self.turns_left
    }

    /// Rounds in which both sides guessed.
    pub fn rounds_played(&self) -> u32 {
        self.turns - self.turns_left
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn computer(&self) -> &Combatant {
        &self.computer
    }

    pub fn side(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }

    /// What `side` may see when choosing a target.
    pub fn view(&self, side: Side) -> PlayerView<'_> {
        let me = self.side(side);
        PlayerView {
            own: me.grid(),
            target: OpponentView::new(self.side(side.opponent()).grid()),
            score: me.score,
            turns_left: self.turns_left,
        }
    }

    /// Player's guess against the computer's grid.
    pub fn player_guess(&mut self, row: usize, col: usize) -> Result<GuessResult, GameError> {
        self.guess(Side::Player, row, col)
    }

    /// Computer's guess against the player's grid.
    pub fn computer_guess(&mut self, row: usize, col: usize) -> Result<GuessResult, GameError> {
        self.guess(Side::Computer, row, col)
    }

    /// Resolve a guess by `side` and advance the turn state.
    ///
    /// Duplicates leave the phase untouched so the same side guesses again.
    /// Sinking the last enemy ship ends the game before the round completes.
    pub fn guess(&mut self, side: Side, row: usize, col: usize) -> Result<GuessResult, GameError> {
        match self.phase.side_to_move() {
            None => return Err(GameError::GameOver),
            Some(due) if due != side => return Err(GameError::NotYourTurn),
            Some(_) => {}
        }

        let target = self.side_mut(side.opponent());
        let result = target.grid.resolve_guess(row, col)?;
        let (points, fleet_down) = match result {
            GuessResult::Hit { ship, .. } => (
                target.grid.ships()[ship].ship_type().points(),
                target.grid.all_sunk(),
            ),
            GuessResult::Miss | GuessResult::Duplicate => (0, false),
        };
        let scorer = self.side_mut(side);
        scorer.score = scorer.score.saturating_add(points);

        if result.is_duplicate() {
            return Ok(result);
        }

        self.phase = match (side, fleet_down) {
            (Side::Player, true) => GamePhase::PlayerWins,
            (Side::Computer, true) => GamePhase::ComputerWins,
            (Side::Player, false) => GamePhase::AwaitingComputerGuess,
            (Side::Computer, false) => {
                self.turns_left -= 1;
                if self.turns_left == 0 {
                    GamePhase::TurnsExhausted
                } else {
                    GamePhase::AwaitingPlayerGuess
                }
            }
        };
        log::debug!(
            "{:?} guessed ({}, {}) -> {:?}; phase {:?}, {} turns left",
            side,
            row,
            col,
            result,
            self.phase,
            self.turns_left
        );
        Ok(result)
    }

    /// Figures for the scoreboard. `None` while the game is running.
    pub fn summary(&self) -> Option<GameSummary> {
        Some(GameSummary {
            outcome: self.outcome()?,
            player_name: self.player.name.clone(),
            player_score: self.player.score,
            computer_score: self.computer.score,
            rounds_played: self.rounds_played(),
            turns_left: self.turns_left,
        })
    }
}

/// Drive `game` to a terminal state, asking `human` and `computer` for
/// targets in turn.
pub fn play_game<'a>(
    game: &mut Game,
    human: &'a mut dyn Player,
    computer: &'a mut dyn Player,
    rng: &mut SmallRng,
) -> anyhow::Result<GameSummary> {
    while let Some(side) = game.phase().side_to_move() {
        let (attacker, defender) = match side {
            Side::Player => (&mut *human, &mut *computer),
            Side::Computer => (&mut *computer, &mut *human),
        };
        let coord = attacker.select_target(rng, &game.view(side))?;
        let result = game
            .guess(side, coord.0, coord.1)
            .map_err(|e| anyhow::anyhow!(e))?;
        let report = TurnReport::new(game, side, coord, result);
        attacker.handle_guess_result(&report);
        defender.handle_opponent_guess(&report);
    }
    game.summary()
        .ok_or_else(|| anyhow::anyhow!("game loop stopped before a terminal state"))
}
