//! Random fleet placement with a bounded number of attempts per ship.

use rand::Rng;

use crate::common::PlacementError;
use crate::grid::{Cell, Grid};
use crate::ship::{Orientation, ShipType};

/// Attempts allowed per ship before placement gives up.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 1000;

/// Returns a random non-overlapping (row, col, Orientation) for `ship_type`.
///
/// Origins are sampled over the whole grid; samples that run off the edge
/// or cover another ship count against `max_attempts`.
pub fn random_placement<R: Rng>(
    grid: &Grid,
    rng: &mut R,
    ship_type: ShipType,
    max_attempts: usize,
) -> Result<(usize, usize, Orientation), PlacementError> {
    if ship_type.length() == 0 {
        return Err(PlacementError::EmptyShip {
            ship: ship_type.name(),
        });
    }
    if grid.rows() == 0 || grid.cols() == 0 {
        return Err(PlacementError::FleetTooLarge {
            needed: ship_type.length(),
            available: 0,
        });
    }
    for attempt in 1..=max_attempts {
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let r = rng.random_range(0..grid.rows());
        let c = rng.random_range(0..grid.cols());
        if grid.can_place(ship_type, r, c, orient) {
            log::trace!(
                "{} fits at ({}, {}) {:?} after {} attempts",
                ship_type.name(),
                r,
                c,
                orient,
                attempt
            );
            return Ok((r, c, orient));
        }
    }
    Err(PlacementError::NoSlot {
        ship: ship_type.name(),
        attempts: max_attempts,
    })
}

/// Place every ship of `fleet`, in order, at random positions on `grid`.
///
/// Fleets larger than the grid area are rejected before sampling starts.
pub fn place_fleet<R: Rng>(
    grid: &mut Grid,
    fleet: &[ShipType],
    rng: &mut R,
    max_attempts: usize,
) -> Result<(), PlacementError> {
    let needed: usize = fleet.iter().map(ShipType::length).sum();
    let available = grid.rows() * grid.cols() - grid.count(Cell::Ship);
    if needed > available {
        return Err(PlacementError::FleetTooLarge { needed, available });
    }
    for &ship_type in fleet {
        let (r, c, o) = random_placement(grid, rng, ship_type, max_attempts)?;
        grid.place(ship_type, r, c, o).map_err(|_| PlacementError::NoSlot {
            ship: ship_type.name(),
            attempts: max_attempts,
        })?;
    }
    Ok(())
}
