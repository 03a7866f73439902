//! Common types for the game: guess results and the error enums shared by the
//! grid, placement and turn loop.

/// Index of a ship within its fleet.
pub type ShipId = usize;

/// Result of resolving a guess against a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess struck a ship segment. `sunk` is set when this hit finished it.
    Hit { ship: ShipId, sunk: bool },
    /// Guess landed on open water.
    Miss,
    /// Cell was already resolved; nothing changed.
    Duplicate,
}

impl GuessResult {
    /// Whether the guess consumed game progress.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, GuessResult::Duplicate)
    }
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Ship would extend past the grid edge.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship type with zero length.
    EmptyShip,
    /// A ship cell had no owning ship recorded.
    UnknownShipHit,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::EmptyShip => write!(f, "Ship has no length"),
            BoardError::UnknownShipHit => write!(f, "Hit a ship cell with no owner"),
        }
    }
}

/// The fleet could not be laid out on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// No free slot was found for `ship` within `attempts` samples.
    NoSlot { ship: &'static str, attempts: usize },
    /// The fleet needs more cells than the grid has.
    FleetTooLarge { needed: usize, available: usize },
    /// A ship of the fleet has zero length.
    EmptyShip { ship: &'static str },
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::NoSlot { ship, attempts } => write!(
                f,
                "Unable to place {} after {} attempts; grid too small for fleet",
                ship, attempts
            ),
            PlacementError::FleetTooLarge { needed, available } => write!(
                f,
                "Fleet needs {} cells but the grid only has {}",
                needed, available
            ),
            PlacementError::EmptyShip { ship } => write!(f, "Ship {} has no length", ship),
        }
    }
}

/// Errors raised by the turn loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    Placement(PlacementError),
    /// A side tried to guess while the other side was due.
    NotYourTurn,
    /// Guess submitted after the game reached a terminal state.
    GameOver,
    /// Configuration has no turns or an empty grid.
    InvalidConfig(&'static str),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::Placement(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::Placement(e) => write!(f, "Placement error: {}", e),
            GameError::NotYourTurn => write!(f, "It is not this side's turn"),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::InvalidConfig(why) => write!(f, "Invalid configuration: {}", why),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
