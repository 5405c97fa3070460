use minesweeper::{neighbors, Board, BoardError, GameConfig, RevealResult};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_single_cell_board_is_cleared_by_one_reveal() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::with_rng(1, 0, &mut rng).unwrap();
    assert_eq!(board.count_adjacent_mines(0, 0), 0);
    assert_eq!(board.reveal(0, 0).unwrap(), RevealResult::Safe);
    assert_eq!(board.revealed_count(), 1);
    assert_eq!(board.mine_count(), 0);
    assert!(board.is_cleared());
}

#[test]
fn test_zero_cell_cascades_over_whole_board() {
    let mut board = Board::with_mines(3, [(0, 0)]).unwrap();
    assert_eq!(board.count_adjacent_mines(2, 2), 0);
    assert_eq!(board.reveal(2, 2).unwrap(), RevealResult::Safe);
    assert_eq!(board.revealed_count(), 8);
    assert!(!board.is_revealed(0, 0));
    assert!(board.is_cleared());
}

#[test]
fn test_two_by_two_needs_three_reveals() {
    let mut board = Board::with_mines(2, [(0, 0)]).unwrap();
    for (i, &(r, c)) in [(0, 1), (1, 0), (1, 1)].iter().enumerate() {
        assert!(!board.is_cleared());
        assert_eq!(board.reveal(r, c).unwrap(), RevealResult::Safe);
        assert_eq!(board.revealed_count(), i + 1);
    }
    assert!(board.is_cleared());
    assert_eq!(board.revealed_count() + board.mine_count(), 4);
}

#[test]
fn test_mine_reveal_does_not_flood() {
    let mut board = Board::with_mines(3, [(1, 1)]).unwrap();
    assert!(!board.is_mine(1, 1), "hidden mines stay hidden");
    assert_eq!(board.reveal(1, 1).unwrap(), RevealResult::Mine);
    assert_eq!(board.revealed_count(), 1);
    assert!(board.is_mine(1, 1));
    // a second reveal of the same mine is a no-op
    assert_eq!(board.reveal(1, 1).unwrap(), RevealResult::Safe);
    assert_eq!(board.revealed_count(), 1);
}

#[test]
fn test_numbered_cell_reveals_only_itself() {
    let mut board = Board::with_mines(4, [(0, 0), (3, 3)]).unwrap();
    assert_eq!(board.count_adjacent_mines(1, 1), 1);
    board.reveal(1, 1).unwrap();
    assert_eq!(board.revealed_count(), 1);
}

#[test]
fn test_adjacency_counts() {
    let board = Board::with_mines(3, [(0, 0), (0, 1)]).unwrap();
    assert_eq!(board.count_adjacent_mines(1, 1), 2);
    assert_eq!(board.count_adjacent_mines(1, 0), 2);
    assert_eq!(board.count_adjacent_mines(2, 2), 0);
    // a mine cell does not count itself
    assert_eq!(board.count_adjacent_mines(0, 0), 1);
}

#[test]
fn test_neighbors_clip_to_board() {
    let corner: Vec<_> = neighbors(3, 0, 0).collect();
    assert_eq!(corner, vec![(0, 1), (1, 0), (1, 1)]);
    assert_eq!(neighbors(3, 1, 1).count(), 8);
    assert_eq!(neighbors(1, 0, 0).count(), 0);
}

#[test]
fn test_invalid_configurations() {
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(
        Board::with_rng(3, 9, &mut rng).unwrap_err(),
        BoardError::InvalidConfiguration { size: 3, mines: 9 }
    );
    assert_eq!(
        Board::with_rng(0, 0, &mut rng).unwrap_err(),
        BoardError::InvalidConfiguration { size: 0, mines: 0 }
    );
    assert_eq!(
        Board::with_mines(2, [(0, 0), (0, 0)]).unwrap_err(),
        BoardError::DuplicateMine { row: 0, col: 0 }
    );
    assert_eq!(
        Board::with_mines(2, [(2, 0)]).unwrap_err(),
        BoardError::OutOfBounds { row: 2, col: 0 }
    );
    assert!(Board::with_mines(2, [(0, 0), (0, 1), (1, 0), (1, 1)]).is_err());
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_overflowing_size_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(7);
    let size = 1usize << 32;
    assert_eq!(
        Board::with_rng(size, 1, &mut rng).unwrap_err(),
        BoardError::InvalidConfiguration { size, mines: 1 }
    );
    assert_eq!(
        GameConfig::new(size, 1).validate(),
        Err(BoardError::InvalidConfiguration { size, mines: 1 })
    );
    assert_eq!(
        Board::with_mines(size, [(0, 0)]).unwrap_err(),
        BoardError::InvalidConfiguration { size, mines: 0 }
    );
    assert_eq!(GameConfig::new(size, 1).safe_cells(), 0);
}

#[test]
fn test_thread_rng_constructor() {
    let board = Board::new(5, 3).unwrap();
    assert_eq!(board.size(), 5);
    assert_eq!(board.mine_count(), 3);
    assert_eq!(board.revealed_count(), 0);
    assert_eq!(
        Board::new(2, 4).unwrap_err(),
        BoardError::InvalidConfiguration { size: 2, mines: 4 }
    );
}

#[test]
fn test_reveal_out_of_bounds() {
    let mut board = Board::with_mines(3, [(0, 0)]).unwrap();
    assert_eq!(
        board.reveal(3, 1).unwrap_err(),
        BoardError::OutOfBounds { row: 3, col: 1 }
    );
    assert_eq!(board.revealed_count(), 0);
}

#[test]
fn test_random_placement_is_reproducible() {
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    let mut a = Board::with_rng(8, 10, &mut rng1).unwrap();
    let mut b = Board::with_rng(8, 10, &mut rng2).unwrap();
    for r in 0..8 {
        for c in 0..8 {
            assert_eq!(a.reveal(r, c).unwrap(), b.reveal(r, c).unwrap());
        }
    }
}
