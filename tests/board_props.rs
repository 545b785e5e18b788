use std::collections::HashSet;

use seabattle::{AttackResult, Board, GameConfig, Ship, ShipSpec, FULL_FLEET};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn placed_board(seed: u64, size: usize, fleet: &[ShipSpec]) -> (Board, Vec<Ship>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(size).unwrap();
    let mut ships: Vec<Ship> = fleet.iter().map(ShipSpec::build).collect();
    board.place_all(&mut ships, &mut rng).unwrap();
    (board, ships)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placed_ships_never_overlap_and_stay_in_bounds(seed in any::<u64>(), size in 8usize..=26) {
        let (board, ships) = placed_board(seed, size, &FULL_FLEET);
        let mut covered = HashSet::new();
        for ship in &ships {
            for (r, c) in ship.cells().unwrap() {
                prop_assert!(r < size && c < size);
                prop_assert!(covered.insert((r, c)), "cell ({}, {}) covered twice", r, c);
                let cell = board.cell(r, c).unwrap();
                prop_assert!(cell.occupied());
                prop_assert_eq!(cell.symbol(), ship.symbol());
            }
        }
        // every occupied cell belongs to some ship
        prop_assert_eq!(size * size - board.free_cells(), covered.len());
    }

    #[test]
    fn repeat_attack_changes_nothing(seed in any::<u64>(), row in 0usize..15, col in 0usize..15) {
        let (mut board, _) = placed_board(seed, 15, &GameConfig::default().fleet);
        let first = board.attack(row, col);
        prop_assert!(first.is_valid());
        let after_first = board.clone();
        prop_assert_eq!(board.attack(row, col), AttackResult::AlreadyAttacked);
        prop_assert_eq!(&board, &after_first);
    }

    #[test]
    fn sunk_exactly_when_last_ship_cell_hit(seed in any::<u64>()) {
        let (mut board, _) = placed_board(seed, 10, &FULL_FLEET);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut targets: Vec<(usize, usize)> = board.unattacked_cells().collect();
        // shuffle by random swaps
        for i in (1..targets.len()).rev() {
            let j = rng.random_range(0..=i);
            targets.swap(i, j);
        }
        let mut sunk = false;
        for (r, c) in targets {
            prop_assert_eq!(board.all_sunk(), board.remaining_ship_cells() == 0);
            prop_assert!(!sunk || board.all_sunk(), "all_sunk went back to false");
            board.attack(r, c);
            sunk = board.all_sunk();
        }
        prop_assert!(sunk);
    }

    #[test]
    fn fog_view_hides_unattacked_ships(seed in any::<u64>(), shots in 0usize..60) {
        let (mut board, _) = placed_board(seed, 10, &FULL_FLEET);
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        for _ in 0..shots {
            board.attack(rng.random_range(0..10usize), rng.random_range(0..10usize));
        }
        let fog = board.fog_view().to_string();
        let full = board.full_view().to_string();
        for ((r, fog_line), full_line) in fog.lines().skip(1).enumerate().zip(full.lines().skip(1)) {
            let fog_cells: Vec<char> = fog_line.split_whitespace().skip(1).map(|s| s.chars().next().unwrap()).collect();
            let full_cells: Vec<char> = full_line.split_whitespace().skip(1).map(|s| s.chars().next().unwrap()).collect();
            for c in 0..10 {
                let cell = board.cell(r, c).unwrap();
                prop_assert_eq!(full_cells[c], cell.symbol());
                if cell.attacked() {
                    prop_assert_eq!(fog_cells[c], cell.symbol());
                } else {
                    prop_assert_eq!(fog_cells[c], '~');
                }
            }
        }
    }
}
