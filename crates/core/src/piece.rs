//! Piece module - active piece instances, ghost projection and rotation
//!
//! A [`Piece`] owns its shape matrix by value and an anchor that refers to
//! the matrix's top-left cell. The ghost is never stored: it is computed
//! from the board and the piece whenever it is asked for.

use crate::board::Board;
use crate::pieces::{get_color, get_shape, spawn_position};
use crate::shape::{ShapeCells, ShapeMatrix};
use crate::types::{Cell, PieceKind};

/// Wall kick offsets (dx, dy) tried in order after a rotation.
/// The first offset that does not collide wins.
pub const WALL_KICKS: [(i32, i32); 6] = [(0, 0), (1, 0), (-1, 0), (0, -1), (2, 0), (-2, 0)];

/// A piece on (or above) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub x: i32,
    pub y: i32,
    pub color: Cell,
}

impl Piece {
    /// Create a piece in its canonical orientation at anchor (0, 0)
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            x: 0,
            y: 0,
            color: get_color(kind),
        }
    }

    /// Create a piece at its spawn position (top row, horizontally centered)
    pub fn spawn(kind: PieceKind) -> Self {
        let piece = Self::new(kind);
        let (x, y) = spawn_position(&piece.shape);
        Self { x, y, ..piece }
    }

    /// Copy of this piece shifted by (dx, dy)
    #[must_use]
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Whether the piece collides with the board at its current anchor
    pub fn collides(&self, board: &Board) -> bool {
        board.test_collision(&self.shape, self.x, self.y)
    }

    /// Occupied cells in board coordinates (may be above or outside the board)
    pub fn board_cells(&self) -> ShapeCells {
        self.shape
            .cells()
            .iter()
            .map(|&(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

/// Where the active piece would land if dropped straight down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GhostPiece {
    pub shape: ShapeMatrix,
    pub x: i32,
    pub y: i32,
    pub color: Cell,
}

impl GhostPiece {
    /// Whether the ghost sits exactly on the piece it was projected from
    pub fn coincides_with(&self, piece: &Piece) -> bool {
        self.x == piece.x && self.y == piece.y
    }
}

/// Project `piece` straight down to its resting row
pub fn compute_ghost(board: &Board, piece: &Piece) -> GhostPiece {
    let mut y = piece.y;
    while !board.test_collision(&piece.shape, piece.x, y + 1) {
        y += 1;
    }
    GhostPiece {
        shape: piece.shape,
        x: piece.x,
        y,
        color: piece.color,
    }
}

/// Rotate `piece` clockwise, trying each [`WALL_KICKS`] offset in order.
///
/// Returns the rotated, possibly kicked piece, or `None` if every offset
/// collides.
pub fn try_rotate(board: &Board, piece: &Piece) -> Option<Piece> {
    let rotated = piece.shape.rotate_cw();
    WALL_KICKS.iter().find_map(|&(dx, dy)| {
        let (x, y) = (piece.x + dx, piece.y + dy);
        if board.test_collision(&rotated, x, y) {
            None
        } else {
            Some(Piece {
                shape: rotated,
                x,
                y,
                ..*piece
            })
        }
    })
}
