use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{span_mask, Board, Orientation, ShipId, BOARD_SIZE, NUM_SHIPS, TOTAL_SHIP_CELLS};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Random fleet placement always yields a full, pairwise-disjoint fleet
    /// with every ship contiguous along its orientation.
    #[test]
    fn randomize_fleet_is_disjoint_and_contiguous(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.randomize(&mut rng).unwrap();

        prop_assert!(board.fleet().all_placed());
        prop_assert_eq!(board.ship_map().count(), TOTAL_SHIP_CELLS);

        let mut seen = 0;
        for ship in board.fleet().ships() {
            let (row, col) = ship.origin().unwrap();
            let expected = span_mask(row, col, ship.size(), ship.orientation()).unwrap();
            prop_assert_eq!(ship.mask(), expected);
            prop_assert_eq!(ship.mask().count(), ship.size());
            seen += ship.mask().count();
        }
        // per-ship sum equals the union: no shared cells
        prop_assert_eq!(seen, TOTAL_SHIP_CELLS);
    }

    /// On an empty board, `is_valid_placement` agrees with actually placing.
    #[test]
    fn validation_agrees_with_placement(
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        ship_index in 0..NUM_SHIPS,
        horizontal in any::<bool>(),
    ) {
        let orientation = if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let mut board = Board::new();
        let id = ShipId::new(ship_index);
        let size = board.fleet().ship(id).unwrap().size();

        let valid = board.is_valid_placement(row, col, size, orientation);
        let placed = board.place_ship(id, row, col, orientation);
        prop_assert_eq!(valid, placed.is_ok());
        if valid {
            prop_assert_eq!(board.ship_map().count(), size);
        } else {
            prop_assert!(board.ship_map().is_empty());
        }
    }

    /// Firing twice at one cell: the second shot is rejected and the board
    /// is bit-for-bit unchanged.
    #[test]
    fn second_fire_changes_nothing(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.randomize(&mut rng).unwrap();

        board.fire(row, col).unwrap();
        let after_first = board;
        prop_assert!(board.fire(row, col).is_err());
        prop_assert_eq!(board, after_first);
    }

    /// Reveal state moves Empty→Hit or Empty→Miss, driven by occupancy.
    #[test]
    fn reveal_matches_occupancy(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.randomize(&mut rng).unwrap();

        let occupied = board.ship_map().get(row, col).unwrap();
        let outcome = board.fire(row, col).unwrap();
        let cell = board.cell(row, col).unwrap();
        match (occupied, outcome) {
            (true, seabattle::ShotOutcome::Hit(_)) | (true, seabattle::ShotOutcome::Sunk(_)) => {
                prop_assert_eq!(cell.reveal, seabattle::RevealState::Hit);
            }
            (false, seabattle::ShotOutcome::Miss) => {
                prop_assert_eq!(cell.reveal, seabattle::RevealState::Miss);
            }
            other => prop_assert!(false, "occupancy/outcome mismatch: {:?}", other),
        }
    }
}
