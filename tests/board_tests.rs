//! Board tests - occupancy queries, commits and line clearing

use blockfall::core::Board;
use blockfall::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
            assert!(!board.is_occupied(x, y));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(Color::Purple)));
    assert_eq!(board.get(5, 10), Some(Some(Color::Purple)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(Color::Red)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(Color::Red)));
}

#[test]
fn test_hidden_rows_are_open() {
    let board = Board::new();

    // Above the top is free, sides and floor are not
    assert!(!board.is_occupied(4, -1));
    assert!(!board.is_occupied(4, -3));
    assert!(board.is_occupied(-1, 5));
    assert!(board.is_occupied(BOARD_WIDTH as i8, 5));
    assert!(board.is_occupied(4, BOARD_HEIGHT as i8));
}

#[test]
fn test_is_blocked_checks_columns_above_top() {
    let board = Board::new();
    assert!(board.is_blocked(-1, -2));
    assert!(board.is_blocked(BOARD_WIDTH as i8, -1));
    assert!(!board.is_blocked(0, -1));
}

#[test]
fn test_commit_skips_hidden_cells() {
    let mut board = Board::new();
    board.commit([(0, -1, Color::Cyan), (1, -1, Color::Cyan), (0, 0, Color::Cyan), (1, 0, Color::Cyan)]);

    assert_eq!(board.filled_count(), 2);
    assert!(board.is_occupied(0, 0));
    assert!(board.is_occupied(1, 0));
}

#[test]
fn test_find_full_rows() {
    let board = Board::from_rows(&["##########", "#########.", "##########"]);
    assert_eq!(board.find_full_rows().as_slice(), &[17, 19]);
}

#[test]
fn test_clear_rows_shifts_down() {
    let mut board = Board::from_rows(&[
        "#.........",
        "##########",
        ".#........",
        "##########",
    ]);

    let cleared = board.clear_full_rows();

    assert_eq!(cleared.as_slice(), &[17, 19]);
    assert_eq!(board.filled_count(), 2);
    assert!(board.is_occupied(0, 18));
    assert!(board.is_occupied(1, 19));
    assert!(!board.is_row_full(19));
    for x in 0..BOARD_WIDTH as i8 {
        assert!(!board.is_occupied(x, 0));
        assert!(!board.is_occupied(x, 1));
    }
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::from_rows(&["##########"; 4]);
    board.set(3, 15, Some(Color::Green));

    let cleared = board.clear_full_rows();

    assert_eq!(cleared.len(), 4);
    assert_eq!(board.filled_count(), 1);
    assert_eq!(board.get(3, 19), Some(Some(Color::Green)));
}

#[test]
fn test_clear_nothing() {
    let mut board = Board::from_rows(&["#########."]);
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board.filled_count(), 9);
}

#[test]
fn test_rows_view() {
    let board = Board::from_rows(&["#........."]);
    let rows: Vec<_> = board.rows().collect();
    assert_eq!(rows.len(), BOARD_HEIGHT as usize);
    assert_eq!(rows[19].len(), BOARD_WIDTH as usize);
    assert!(rows[19][0].is_some());
    assert!(rows[19][1].is_none());
}

#[test]
fn test_clear_resets() {
    let mut board = Board::from_rows(&["##########"; 3]);
    board.clear();
    assert_eq!(board.filled_count(), 0);
}
