use alloc::vec::Vec;
use core::fmt;

use crate::common::GameError;
use crate::placement::DEFAULT_PLACEMENT_ATTEMPTS;
use crate::ship::ShipType;

pub const CARRIER: ShipType = ShipType::new("Carrier", 5, 10);
pub const BATTLESHIP: ShipType = ShipType::new("Battleship", 4, 10);
pub const CRUISER: ShipType = ShipType::new("Cruiser", 3, 15);
pub const SUBMARINE: ShipType = ShipType::new("Submarine", 3, 15);
pub const DESTROYER: ShipType = ShipType::new("Destroyer", 2, 20);

const EASY_FLEET: [ShipType; 2] = [CRUISER, DESTROYER];
const MEDIUM_FLEET: [ShipType; 4] = [BATTLESHIP, CRUISER, SUBMARINE, DESTROYER];
const HARD_FLEET: [ShipType; 5] = [CARRIER, BATTLESHIP, CRUISER, SUBMARINE, DESTROYER];

/// The three fixed presets a player can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Map a single-character choice (`e`, `m`, `h`, any case) to a preset.
    /// Anything else yields `None` so the caller can ask again.
    pub fn from_choice(choice: char) -> Option<Self> {
        match choice.to_ascii_lowercase() {
            'e' => Some(Difficulty::Easy),
            'm' => Some(Difficulty::Medium),
            'h' => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Character that selects this preset.
    pub fn choice(self) -> char {
        match self {
            Difficulty::Easy => 'e',
            Difficulty::Medium => 'm',
            Difficulty::Hard => 'h',
        }
    }

    /// Grid size, fleet and turn budget for this preset.
    pub fn config(self) -> GameConfig {
        match self {
            Difficulty::Easy => GameConfig::new(5, 5, &EASY_FLEET, 15),
            Difficulty::Medium => GameConfig::new(7, 7, &MEDIUM_FLEET, 25),
            Difficulty::Hard => GameConfig::new(10, 10, &HARD_FLEET, 40),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

/// Grid dimensions, fleet composition and turn budget for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub fleet: Vec<ShipType>,
    pub turns: u32,
    pub placement_attempts: usize,
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize, fleet: &[ShipType], turns: u32) -> Self {
        Self {
            rows,
            cols,
            fleet: fleet.to_vec(),
            turns,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }

    /// Total number of ship cells in the fleet.
    pub fn fleet_size(&self) -> usize {
        self.fleet.iter().map(ShipType::length).sum()
    }

    /// Reject configurations no game can be played on.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidConfig("grid has no cells"));
        }
        if self.fleet.is_empty() {
            return Err(GameError::InvalidConfig("fleet is empty"));
        }
        if self.turns == 0 {
            return Err(GameError::InvalidConfig("turn budget is zero"));
        }
        if self.placement_attempts == 0 {
            return Err(GameError::InvalidConfig("placement attempt budget is zero"));
        }
        Ok(())
    }
}
