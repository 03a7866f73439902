use battleship_solo::{BoardError, Orientation, Ship, ShipType};

#[test]
fn test_new_and_cells() -> Result<(), BoardError> {
    let def = ShipType::new("Test", 3, 5);
    let ship = Ship::new(0, def, Orientation::Horizontal, 2, 1, 5, 5)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3)]);
    assert_eq!(ship.origin(), (2, 1));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    Ok(())
}

#[test]
fn test_contains_vertical() -> Result<(), BoardError> {
    let def = ShipType::new("Test", 4, 5);
    let ship = Ship::new(3, def, Orientation::Vertical, 0, 0, 5, 5)?;
    for (r, c) in ship.cells() {
        assert!(ship.contains(r, c));
    }
    assert!(!ship.contains(4, 0));
    assert_eq!(ship.id(), 3);
    Ok(())
}

#[test]
fn test_bounds() {
    let def = ShipType::new("Test", 3, 5);
    assert_eq!(
        Ship::new(0, def, Orientation::Horizontal, 0, 3, 5, 5).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::new(0, def, Orientation::Vertical, 3, 0, 5, 5).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    // row off the grid for a horizontal ship
    assert_eq!(
        Ship::new(0, def, Orientation::Horizontal, 5, 0, 5, 5).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert!(Ship::new(0, def, Orientation::Vertical, 2, 4, 5, 5).is_ok());
}

#[test]
fn test_ship_type_accessors() {
    let def = ShipType::new("Tug", 2, 7);
    assert_eq!(def.name(), "Tug");
    assert_eq!(def.length(), 2);
    assert_eq!(def.points(), 7);
}
