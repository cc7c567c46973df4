//! Shape module - fixed-size occupancy matrices
//!
//! A shape matrix is one orientation of one piece, stored in a square
//! bounding box of up to 4x4 cells. Matrices are `Copy` values: every piece
//! owns its own matrix, so rotating one piece can never affect another piece
//! or the catalog templates.

use std::fmt;

use arrayvec::ArrayVec;

/// Largest supported bounding box (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Occupied cell offsets of a shape, as (col, row) within the bounding box
pub type ShapeCells = ArrayVec<(i32, i32), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Error returned when building a matrix from malformed rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    Empty,
    TooLarge { size: usize },
    NotSquare { row: usize, len: usize, expected: usize },
    NoOccupiedCells,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "shape has no rows"),
            ShapeError::TooLarge { size } => {
                write!(f, "shape is {size}x{size}, max is {MAX_SHAPE_SIZE}x{MAX_SHAPE_SIZE}")
            }
            ShapeError::NotSquare { row, len, expected } => {
                write!(f, "shape row {row} has {len} cells, expected {expected}")
            }
            ShapeError::NoOccupiedCells => write!(f, "shape has no occupied cells"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Square occupancy matrix, N x N with N in 1..=4
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build from rows of 0/1 values.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::ShapeMatrix;
    ///
    /// let t = ShapeMatrix::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]).unwrap();
    /// assert_eq!(t.size(), 3);
    /// assert!(t.is_filled(1, 0));
    /// assert!(ShapeMatrix::from_rows(&[&[1, 1], &[1]]).is_err());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, ShapeError> {
        let size = rows.len();
        if size == 0 {
            return Err(ShapeError::Empty);
        }
        if size > MAX_SHAPE_SIZE {
            return Err(ShapeError::TooLarge { size });
        }

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(ShapeError::NotSquare {
                    row: r,
                    len: row.len(),
                    expected: size,
                });
            }
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }

        let shape = Self {
            size: size as u8,
            cells,
        };
        if shape.cells().is_empty() {
            return Err(ShapeError::NoOccupiedCells);
        }
        Ok(shape)
    }

    /// Const constructor for catalog tables. Input must be square.
    pub(crate) const fn from_table<const N: usize>(rows: [[u8; N]; N]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Side length of the bounding box
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether the cell at (col, row) of the bounding box is occupied
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < self.size() && row < self.size() && self.cells[row][col]
    }

    /// Occupied cells as (col, row) offsets, row-major order
    pub fn cells(&self) -> ShapeCells {
        let n = self.size();
        let mut out = ShapeCells::new();
        for row in 0..n {
            for col in 0..n {
                if self.cells[row][col] {
                    out.push((col as i32, row as i32));
                }
            }
        }
        out
    }

    /// 90° clockwise rotation: `result[col][n-1-row] = self[row][col]`
    #[must_use]
    pub fn rotate_cw(&self) -> Self {
        let n = self.size();
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for row in 0..n {
            for col in 0..n {
                cells[col][n - 1 - row] = self.cells[row][col];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Rows as 0/1 vectors (for snapshots and display)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        let n = self.size();
        (0..n)
            .map(|row| (0..n).map(|col| self.cells[row][col] as u8).collect())
            .collect()
    }
}

impl fmt::Debug for ShapeMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        let mut list = f.debug_list();
        for row in 0..n {
            let line: String = (0..n)
                .map(|col| if self.cells[row][col] { '#' } else { '.' })
                .collect();
            list.entry(&line);
        }
        list.finish()
    }
}
