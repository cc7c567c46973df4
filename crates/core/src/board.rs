//! Board module - the persistent grid of locked cells
//!
//! The board is a 10x20 grid where each cell is empty (`0`) or holds the
//! color id of the piece that locked there.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom).

use crate::shape::ShapeMatrix;
use crate::types::{Cell, BOARD_COLS, BOARD_ROWS, EMPTY};

const WIDTH: usize = BOARD_COLS as usize;
const HEIGHT: usize = BOARD_ROWS as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row-major grid of cells, as exported in snapshots
pub type Grid = [[Cell; WIDTH]; HEIGHT];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Build a board from a row-major grid
    pub fn from_grid(grid: &Grid) -> Self {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_COLS
    }

    pub fn height(&self) -> u8 {
        BOARD_ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Whether `shape` anchored at (x, y) collides with a wall, the floor,
    /// or a locked cell.
    ///
    /// Cells above the top edge (y < 0) only collide with the side walls,
    /// so pieces may hang partially above the visible board.
    pub fn test_collision(&self, shape: &ShapeMatrix, x: i32, y: i32) -> bool {
        shape.cells().iter().any(|&(dx, dy)| {
            let bx = x + dx;
            let by = y + dy;
            bx < 0
                || bx >= WIDTH as i32
                || by >= HEIGHT as i32
                || (by >= 0 && self.is_occupied(bx, by))
        })
    }

    /// Write `color` into every in-bounds cell covered by `shape` at (x, y).
    /// Cells outside the board are dropped.
    pub fn lock(&mut self, shape: &ShapeMatrix, x: i32, y: i32, color: Cell) {
        for &(dx, dy) in shape.cells().iter() {
            self.set(x + dx, y + dy, color);
        }
    }

    /// Clear a row and shift all rows above down
    fn clear_row(&mut self, y: usize) {
        // copy_within handles overlapping ranges safely
        for row in (1..=y).rev() {
            let src_start = (row - 1) * WIDTH;
            self.cells
                .copy_within(src_start..src_start + WIDTH, row * WIDTH);
        }

        for cell in &mut self.cells[0..WIDTH] {
            *cell = EMPTY;
        }
    }

    /// Remove every full row, inserting empty rows at the top.
    /// Returns the number of rows removed.
    ///
    /// Scans bottom to top; after a removal the same index is checked again
    /// because the row above has moved into it.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = HEIGHT;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.clear_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a row-major grid
    pub fn write_grid(&self, out: &mut Grid) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [EMPTY; BOARD_SIZE];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::get_shape;
    use crate::types::PieceKind;

    const RED: Cell = 0xF00000;

    fn fill_row(board: &mut Board, y: i32, color: Cell) {
        for x in 0..WIDTH as i32 {
            board.set(x, y, color);
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_collision_walls_and_floor() {
        let board = Board::new();
        let o = get_shape(PieceKind::O);

        assert!(!board.test_collision(&o, 0, 0));
        assert!(!board.test_collision(&o, 8, 18));
        assert!(board.test_collision(&o, -1, 0));
        assert!(board.test_collision(&o, 9, 0));
        assert!(board.test_collision(&o, 0, 19));
    }

    #[test]
    fn test_collision_above_top_is_free() {
        let board = Board::new();
        let o = get_shape(PieceKind::O);

        assert!(!board.test_collision(&o, 4, -1));
        assert!(!board.test_collision(&o, 4, -5));
        // Side walls still apply above the board
        assert!(board.test_collision(&o, -1, -3));
    }

    #[test]
    fn test_collision_with_locked_cell() {
        let mut board = Board::new();
        board.set(5, 10, RED);
        let o = get_shape(PieceKind::O);

        assert!(board.test_collision(&o, 4, 9));
        assert!(board.test_collision(&o, 5, 10));
        assert!(!board.test_collision(&o, 6, 10));
    }

    #[test]
    fn test_lock_drops_cells_above_board() {
        let mut board = Board::new();
        let o = get_shape(PieceKind::O);

        board.lock(&o, 3, -1, RED);

        assert_eq!(board.get(3, 0), Some(RED));
        assert_eq!(board.get(4, 0), Some(RED));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_locked_position_collides() {
        let mut board = Board::new();
        let t = get_shape(PieceKind::T);

        assert!(!board.test_collision(&t, 2, 15));
        board.lock(&t, 2, 15, PieceKind::T.color());
        assert!(board.test_collision(&t, 2, 15));
    }

    #[test]
    fn test_clear_no_full_rows_is_noop() {
        let mut board = Board::new();
        board.set(0, 19, RED);
        board.set(9, 3, RED);
        let before = board.clone();

        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_adjacent_full_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 3, RED);
        fill_row(&mut board, 4, RED);
        board.set(2, 1, 7);
        board.set(6, 2, 8);
        board.set(0, 19, 9);

        assert_eq!(board.clear_full_rows(), 2);

        assert!(board.row(0).iter().all(|&c| c == EMPTY));
        assert!(board.row(1).iter().all(|&c| c == EMPTY));
        assert_eq!(board.get(2, 3), Some(7));
        assert_eq!(board.get(6, 4), Some(8));
        assert_eq!(board.get(0, 19), Some(9));
        assert_eq!(board.filled_count(), 3);
    }

    #[test]
    fn test_clear_split_full_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 19, RED);
        fill_row(&mut board, 17, RED);
        board.set(4, 18, 5);

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(4, 19), Some(5));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_clear_four_rows() {
        let mut board = Board::new();
        for y in 16..20 {
            fill_row(&mut board, y, RED);
        }
        assert_eq!(board.clear_full_rows(), 4);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_grid_roundtrip() {
        let mut grid: Grid = [[EMPTY; WIDTH]; HEIGHT];
        grid[5][3] = RED;
        grid[10][7] = 42;

        let board = Board::from_grid(&grid);
        let mut back: Grid = [[EMPTY; WIDTH]; HEIGHT];
        board.write_grid(&mut back);

        assert_eq!(grid, back);
    }
}
