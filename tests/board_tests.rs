//! Board tests - collision, locking and row compaction through the public API

use blockfall::core::board::Grid;
use blockfall::core::{get_shape, Board};
use blockfall::types::{PieceKind, BOARD_COLS, BOARD_ROWS, EMPTY};

const GRAY: u32 = 0x808080;

fn empty_grid() -> Grid {
    [[EMPTY; BOARD_COLS as usize]; BOARD_ROWS as usize]
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_COLS);
    assert_eq!(board.height(), BOARD_ROWS);

    for y in 0..BOARD_ROWS as i32 {
        for x in 0..BOARD_COLS as i32 {
            assert_eq!(board.get(x, y), Some(EMPTY), "cell ({}, {})", x, y);
        }
    }
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, BOARD_ROWS as i32), None);
}

#[test]
fn test_set_out_of_bounds() {
    let mut board = Board::new();
    assert!(!board.set(-1, 0, GRAY));
    assert!(!board.set(0, -1, GRAY));
    assert!(!board.set(BOARD_COLS as i32, 0, GRAY));
    assert!(!board.set(0, BOARD_ROWS as i32, GRAY));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_locked_piece_collides_at_its_own_position() {
    // Every kind, every orientation, every in-bounds anchor
    for kind in PieceKind::ALL {
        let mut shape = get_shape(kind);
        for _ in 0..4 {
            for y in -2..BOARD_ROWS as i32 {
                for x in -3..BOARD_COLS as i32 {
                    let mut board = Board::new();
                    if board.test_collision(&shape, x, y) {
                        continue;
                    }
                    board.lock(&shape, x, y, kind.color());
                    let visible = shape.cells().iter().any(|&(_, dy)| y + dy >= 0);
                    assert_eq!(
                        board.test_collision(&shape, x, y),
                        visible,
                        "{:?} at ({}, {})",
                        kind,
                        x,
                        y
                    );
                }
            }
            shape = shape.rotate_cw();
        }
    }
}

#[test]
fn test_clear_without_full_rows_is_identity() {
    let mut grid = empty_grid();
    for (y, row) in grid.iter_mut().enumerate() {
        // Staircase: never a full row
        for cell in row.iter_mut().take(y % BOARD_COLS as usize) {
            *cell = GRAY;
        }
    }
    let mut board = Board::from_grid(&grid);
    let before = board.clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_rows_three_and_four() {
    let mut grid = empty_grid();
    grid[3] = [GRAY; BOARD_COLS as usize];
    grid[4] = [GRAY; BOARD_COLS as usize];
    grid[0][1] = 11;
    grid[2][8] = 12;
    grid[5][0] = 13;
    grid[19][9] = 14;

    let mut board = Board::from_grid(&grid);
    assert_eq!(board.clear_full_rows(), 2);

    let mut out = empty_grid();
    board.write_grid(&mut out);

    let mut expected = empty_grid();
    // Content above row 3 moves down by two
    expected[2][1] = 11;
    expected[4][8] = 12;
    // Content below row 4 stays
    expected[5][0] = 13;
    expected[19][9] = 14;
    assert_eq!(out, expected);
}

#[test]
fn test_clear_interleaved_rows() {
    let mut grid = empty_grid();
    for y in [12, 14, 15, 19] {
        grid[y] = [GRAY; BOARD_COLS as usize];
    }
    grid[13][2] = 21;
    grid[18][7] = 22;

    let mut board = Board::from_grid(&grid);
    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.get(7, 19), Some(22));
    assert_eq!(board.get(2, 16), Some(21));
    assert_eq!(board.filled_count(), 2);
}
