//! Ship definitions and per-ship hit tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, ShipId};

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name, length and points awarded per hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
    points: u32,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize, points: u32) -> Self {
        Self {
            name,
            length,
            points,
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Points scored for each hit on this ship.
    pub fn points(&self) -> u32 {
        self.points
    }
}

/// A ship placed on a grid, tracking how many of its cells were hit.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    ship_type: ShipType,
    orientation: Orientation,
    row: usize,
    col: usize,
    cells: Vec<(usize, usize)>,
    hits: usize,
}

impl Ship {
    /// Lay out a ship at (`row`, `col`) with `orientation` on a `rows`×`cols` grid.
    /// Only bounds are checked here; overlap is the grid's concern.
    pub fn new(
        id: ShipId,
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Result<Self, BoardError> {
        let len = ship_type.length();
        if len == 0 {
            return Err(BoardError::EmptyShip);
        }
        let fits = match orientation {
            Orientation::Horizontal => row < rows && col + len <= cols,
            Orientation::Vertical => col < cols && row + len <= rows,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }

        let cells = (0..len)
            .map(|i| match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            })
            .collect();
        Ok(Ship {
            id,
            ship_type,
            orientation,
            row,
            col,
            cells,
            hits: 0,
        })
    }

    /// Position of this ship in its fleet.
    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().copied()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Number of segments hit so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Count a hit on one of this ship's cells. The grid guarantees each
    /// cell is counted at most once.
    pub(crate) fn register_hit(&mut self) {
        if self.hits < self.ship_type.length() {
            self.hits += 1;
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.ship_type.length()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.id,
            self.ship_type.name(),
            self.row,
            self.col,
            self.orientation,
            self.hits,
            self.ship_type.length(),
        )
    }
}
