//! Grid state: cell states, the fleet laid out on it, and guess resolution.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, GuessResult, ShipId};
use crate::ship::{Orientation, Ship, ShipType};

/// State of a single grid cell.
///
/// `Empty -> Ship` happens only during placement, `Ship -> Hit` and
/// `Empty -> Miss` only during guess resolution. `Hit` and `Miss` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// Whether a guess has already been resolved on this cell.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// A `rows`×`cols` grid owning the fleet placed on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    occupants: Vec<Option<ShipId>>,
    ships: Vec<Ship>,
}

impl Grid {
    /// Create an empty grid (no ships placed).
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            occupants: vec![None; rows * cols],
            ships: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if self.in_bounds(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// State of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Ship occupying (row, col), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        let idx = self.index(row, col).ok()?;
        self.occupants[idx].map(|id| &self.ships[id])
    }

    /// Ships placed on this grid, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Whether a ship of `ship_type` fits at (row, col) without leaving the
    /// grid or covering another ship.
    pub fn can_place(
        &self,
        ship_type: ShipType,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> bool {
        self.layout(ship_type, row, col, orientation).is_ok()
    }

    fn layout(
        &self,
        ship_type: ShipType,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Ship, BoardError> {
        let ship = Ship::new(
            self.ships.len(),
            ship_type,
            orientation,
            row,
            col,
            self.rows,
            self.cols,
        )?;
        for (r, c) in ship.cells() {
            if self.cells[r * self.cols + c] != Cell::Empty {
                return Err(BoardError::ShipOverlaps);
            }
        }
        Ok(ship)
    }

    /// Place a ship at (row, col) with `orientation`, returning its id.
    pub fn place(
        &mut self,
        ship_type: ShipType,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        let ship = self.layout(ship_type, row, col, orientation)?;
        let id = ship.id();
        for (r, c) in ship.cells() {
            let idx = r * self.cols + c;
            self.cells[idx] = Cell::Ship;
            self.occupants[idx] = Some(id);
        }
        log::trace!("placed {:?}", ship);
        self.ships.push(ship);
        Ok(id)
    }

    /// Process a guess at (row, col), marking hits/misses and reporting result.
    pub fn resolve_guess(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        let idx = self.index(row, col)?;
        match self.cells[idx] {
            Cell::Hit | Cell::Miss => Ok(GuessResult::Duplicate),
            Cell::Empty => {
                self.cells[idx] = Cell::Miss;
                Ok(GuessResult::Miss)
            }
            Cell::Ship => {
                let id = self.occupants[idx].ok_or(BoardError::UnknownShipHit)?;
                self.cells[idx] = Cell::Hit;
                let ship = &mut self.ships[id];
                ship.register_hit();
                Ok(GuessResult::Hit {
                    ship: id,
                    sunk: ship.is_sunk(),
                })
            }
        }
    }

    /// Whether (row, col) has already been guessed. Out-of-bounds is `false`.
    pub fn is_guessed(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).map(Cell::is_resolved).unwrap_or(false)
    }

    /// All coordinates not yet guessed, row-major.
    pub fn unguessed_cells(&self) -> Vec<(usize, usize)> {
        (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| (r, c)))
            .filter(|&(r, c)| !self.cells[r * self.cols + c].is_resolved())
            .collect()
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Sum of ship lengths on this grid.
    pub fn fleet_size(&self) -> usize {
        self.ships.iter().map(|s| s.ship_type().length()).sum()
    }

    /// Total hits landed across the fleet.
    pub fn total_hits(&self) -> usize {
        self.ships.iter().map(Ship::hits).sum()
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.total_hits() == self.fleet_size()
    }

    /// Ships still afloat.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{ {}x{}, ship cells: {}, hits: {}, misses: {}, ships: {:?} }}",
            self.rows,
            self.cols,
            self.count(Cell::Ship),
            self.count(Cell::Hit),
            self.count(Cell::Miss),
            self.ships
        )
    }
}

/// Read-only view of an opponent's grid that hides unhit ships.
#[derive(Clone, Copy)]
pub struct OpponentView<'a> {
    grid: &'a Grid,
}

impl<'a> OpponentView<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Cell as the guessing side may see it: unhit ships show as `Empty`.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.grid.cell(row, col).map(|c| match c {
            Cell::Ship => Cell::Empty,
            other => other,
        })
    }

    pub fn is_guessed(&self, row: usize, col: usize) -> bool {
        self.grid.is_guessed(row, col)
    }

    pub fn unguessed_cells(&self) -> Vec<(usize, usize)> {
        self.grid.unguessed_cells()
    }

    /// Ships not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.grid.ships_afloat()
    }
}
