use battleship_solo::{
    BoardError, Cell, Grid, GuessResult, OpponentView, Orientation, ShipType, CARRIER, CRUISER,
    DESTROYER,
};

#[test]
fn test_manual_place_and_guess_sink() {
    let mut grid = Grid::new(10, 10);
    let id = grid.place(CARRIER, 0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(id, 0);

    for c in 0..CARRIER.length() - 1 {
        assert_eq!(
            grid.resolve_guess(0, c).unwrap(),
            GuessResult::Hit { ship: 0, sunk: false }
        );
    }
    // final hit should sink
    assert_eq!(
        grid.resolve_guess(0, CARRIER.length() - 1).unwrap(),
        GuessResult::Hit { ship: 0, sunk: true }
    );
    assert!(grid.ships()[0].is_sunk());
    assert!(grid.all_sunk());

    // repeated guess is a duplicate and changes nothing
    assert_eq!(
        grid.resolve_guess(0, CARRIER.length() - 1).unwrap(),
        GuessResult::Duplicate
    );
    assert_eq!(grid.ships()[0].hits(), CARRIER.length());
}

#[test]
fn test_miss_then_duplicate() {
    let mut grid = Grid::new(5, 5);
    grid.place(DESTROYER, 2, 2, Orientation::Vertical).unwrap();
    assert_eq!(grid.resolve_guess(0, 0).unwrap(), GuessResult::Miss);
    assert_eq!(grid.cell(0, 0).unwrap(), Cell::Miss);
    assert_eq!(grid.resolve_guess(0, 0).unwrap(), GuessResult::Duplicate);
    assert_eq!(grid.cell(0, 0).unwrap(), Cell::Miss);
    assert_eq!(grid.count(Cell::Miss), 1);
}

#[test]
fn test_place_rejects_overlap_and_edges() {
    let mut grid = Grid::new(5, 5);
    grid.place(CRUISER, 1, 1, Orientation::Horizontal).unwrap();
    assert_eq!(
        grid.place(DESTROYER, 0, 2, Orientation::Vertical).unwrap_err(),
        BoardError::ShipOverlaps
    );
    assert_eq!(
        grid.place(DESTROYER, 4, 4, Orientation::Horizontal).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        grid.place(DESTROYER, 4, 0, Orientation::Vertical).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    // adjacency is fine
    grid.place(DESTROYER, 2, 1, Orientation::Horizontal).unwrap();
    assert_eq!(grid.count(Cell::Ship), 5);
}

#[test]
fn test_zero_length_ship_rejected() {
    let mut grid = Grid::new(5, 5);
    let raft = ShipType::new("Raft", 0, 1);
    assert_eq!(
        grid.place(raft, 0, 0, Orientation::Horizontal).unwrap_err(),
        BoardError::EmptyShip
    );
}

#[test]
fn test_guess_out_of_bounds_is_error() {
    let mut grid = Grid::new(5, 5);
    assert_eq!(
        grid.resolve_guess(5, 0).unwrap_err(),
        BoardError::OutOfBounds { row: 5, col: 0 }
    );
    assert_eq!(grid.count(Cell::Miss), 0);
}

#[test]
fn test_hits_attributed_by_cell_not_name() {
    // Carrier and Cruiser share an initial; each hit must land on its own ship.
    let mut grid = Grid::new(6, 6);
    let carrier = grid.place(CARRIER, 0, 0, Orientation::Horizontal).unwrap();
    let cruiser = grid.place(CRUISER, 1, 0, Orientation::Horizontal).unwrap();

    assert_eq!(
        grid.resolve_guess(1, 2).unwrap(),
        GuessResult::Hit { ship: cruiser, sunk: false }
    );
    assert_eq!(grid.ship_at(0, 4).unwrap().id(), carrier);
    assert_eq!(grid.ships()[cruiser].hits(), 1);
    assert_eq!(grid.ships()[carrier].hits(), 0);
}

#[test]
fn test_opponent_view_hides_ships() {
    let mut grid = Grid::new(4, 4);
    grid.place(DESTROYER, 0, 0, Orientation::Horizontal).unwrap();
    grid.resolve_guess(0, 0).unwrap();
    grid.resolve_guess(3, 3).unwrap();

    let view = OpponentView::new(&grid);
    assert_eq!(view.cell(0, 0).unwrap(), Cell::Hit);
    assert_eq!(view.cell(0, 1).unwrap(), Cell::Empty);
    assert_eq!(view.cell(3, 3).unwrap(), Cell::Miss);
    assert_eq!(view.unguessed_cells().len(), 14);
    assert_eq!(view.ships_afloat(), 1);
}

#[test]
fn test_unguessed_cells_row_major() {
    let mut grid = Grid::new(2, 2);
    grid.resolve_guess(0, 1).unwrap();
    assert_eq!(grid.unguessed_cells(), vec![(0, 0), (1, 0), (1, 1)]);
    assert!(grid.is_guessed(0, 1));
    assert!(!grid.is_guessed(9, 9));
}
