use battleship_solo::{place_fleet, Cell, Difficulty, Grid, GuessResult, DEFAULT_PLACEMENT_ATTEMPTS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_grid(seed: u64, difficulty: Difficulty) -> Grid {
    let config = difficulty.config();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new(config.rows, config.cols);
    place_fleet(&mut grid, &config.fleet, &mut rng, DEFAULT_PLACEMENT_ATTEMPTS).unwrap();
    grid
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard)
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_covers_exact_fleet(seed in any::<u64>(), level in difficulty()) {
        let grid = random_grid(seed, level);
        let config = level.config();
        prop_assert_eq!(grid.count(Cell::Ship), config.fleet_size());

        // every ship cell belongs to exactly one ship
        let mut owned = 0;
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                let owners = grid.ships().iter().filter(|s| s.contains(r, c)).count();
                prop_assert!(owners <= 1);
                if owners == 1 {
                    owned += 1;
                    prop_assert_eq!(grid.cell(r, c).unwrap(), Cell::Ship);
                }
            }
        }
        prop_assert_eq!(owned, config.fleet_size());
    }

    #[test]
    fn cell_transitions_are_legal(
        seed in any::<u64>(),
        guesses in proptest::collection::vec((0usize..10, 0usize..10), 0..120),
    ) {
        let mut grid = random_grid(seed, Difficulty::Hard);
        for (r, c) in guesses {
            let before = grid.cell(r, c).unwrap();
            let result = grid.resolve_guess(r, c).unwrap();
            let after = grid.cell(r, c).unwrap();
            match (before, result, after) {
                (Cell::Ship, GuessResult::Hit { .. }, Cell::Hit) => {}
                (Cell::Empty, GuessResult::Miss, Cell::Miss) => {}
                (Cell::Hit, GuessResult::Duplicate, Cell::Hit) => {}
                (Cell::Miss, GuessResult::Duplicate, Cell::Miss) => {}
                other => prop_assert!(false, "illegal transition {:?}", other),
            }
        }
        prop_assert_eq!(grid.total_hits(), grid.count(Cell::Hit));
    }

    #[test]
    fn duplicate_guess_is_idempotent(
        seed in any::<u64>(),
        row in 0usize..10,
        col in 0usize..10,
    ) {
        let mut grid = random_grid(seed, Difficulty::Hard);
        let state_before = grid.clone();
        let first = grid.resolve_guess(row, col).unwrap();
        prop_assert_ne!(first, GuessResult::Duplicate);
        let state_after = grid.clone();
        prop_assert_eq!(grid.resolve_guess(row, col).unwrap(), GuessResult::Duplicate);
        prop_assert_eq!(&grid, &state_after);
        prop_assert_ne!(&state_before, &state_after);
    }

    #[test]
    fn sunk_exactly_when_every_cell_hit(seed in any::<u64>(), level in difficulty()) {
        let mut grid = random_grid(seed, level);
        let targets: Vec<(usize, usize)> = grid
            .ships()
            .iter()
            .flat_map(|s| s.cells().collect::<Vec<_>>())
            .collect();
        let last = targets.len() - 1;
        for (i, (r, c)) in targets.into_iter().enumerate() {
            prop_assert!(!grid.all_sunk());
            grid.resolve_guess(r, c).unwrap();
            prop_assert_eq!(grid.all_sunk(), i == last);
        }
        prop_assert!(grid.ships().iter().all(|s| s.is_sunk()));
    }
}
