use std::collections::{HashSet, VecDeque};

use minesweeper::{neighbors, Board, RevealResult};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_board(seed: u64, size: usize, mines: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    Board::with_rng(size, mines, &mut rng).unwrap()
}

/// Cells a reveal of (row, col) should open, computed by breadth-first search.
fn expected_region(board: &Board, row: usize, col: usize) -> HashSet<(usize, usize)> {
    let n = board.size();
    let mut open = HashSet::from([(row, col)]);
    let mut queue = VecDeque::new();
    if board.count_adjacent_mines(row, col) == 0 {
        queue.push_back((row, col));
    }
    while let Some((r, c)) = queue.pop_front() {
        for cell in neighbors(n, r, c) {
            if open.insert(cell) && board.count_adjacent_mines(cell.0, cell.1) == 0 {
                queue.push_back(cell);
            }
        }
    }
    open
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn mine_count_is_exact(seed in any::<u64>(), size in 1usize..12, fill in 0.0f64..0.9) {
        let mines = ((size * size) as f64 * fill) as usize;
        let mut board = random_board(seed, size, mines);
        prop_assert_eq!(board.mine_count(), mines);
        // each distinct mine reports `Mine` exactly once
        let mut hits = 0;
        for r in 0..size {
            for c in 0..size {
                if board.reveal(r, c).unwrap() == RevealResult::Mine {
                    hits += 1;
                }
            }
        }
        prop_assert_eq!(hits, mines);
        prop_assert_eq!(board.revealed_count(), size * size);
    }

    #[test]
    fn reveal_is_idempotent(seed in any::<u64>(), row in 0usize..10, col in 0usize..10) {
        let mut board = random_board(seed, 10, 15);
        board.reveal(row, col).unwrap();
        let after_first = board.revealed_count();
        prop_assert_eq!(board.reveal(row, col).unwrap(), RevealResult::Safe);
        prop_assert_eq!(board.revealed_count(), after_first);
    }

    #[test]
    fn flood_fill_opens_exactly_the_region(seed in any::<u64>(), row in 0usize..10, col in 0usize..10) {
        let mut board = random_board(seed, 10, 12);
        let probe = board.clone();
        if board.reveal(row, col).unwrap() == RevealResult::Mine {
            prop_assert_eq!(board.revealed_count(), 1);
            return Ok(());
        }
        let expected = expected_region(&probe, row, col);
        for r in 0..10 {
            for c in 0..10 {
                prop_assert_eq!(board.is_revealed(r, c), expected.contains(&(r, c)));
                // flood fill never opens a mine
                prop_assert!(!board.is_mine(r, c));
            }
        }
    }
}
