//! Pieces module - the piece catalog
//!
//! Holds one canonical orientation per kind. Every other orientation is
//! derived at runtime with [`ShapeMatrix::rotate_cw`]. Lookups return copies,
//! so callers are free to rotate what they get back.

use crate::shape::ShapeMatrix;
use crate::types::{Cell, PieceKind, BOARD_COLS};

const I_SHAPE: ShapeMatrix = ShapeMatrix::from_table([
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const J_SHAPE: ShapeMatrix = ShapeMatrix::from_table([
    [1, 0, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

const L_SHAPE: ShapeMatrix = ShapeMatrix::from_table([
    [0, 0, 1],
    [1, 1, 1],
    [0, 0, 0],
]);

const O_SHAPE: ShapeMatrix = ShapeMatrix::from_table([
    [1, 1],
    [1, 1],
]);

const S_SHAPE: ShapeMatrix = ShapeMatrix::from_table([
    [0, 1, 1],
    [1, 1, 0],
    [0, 0, 0],
]);

const T_SHAPE: ShapeMatrix = ShapeMatrix::from_table([
    [0, 1, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

const Z_SHAPE: ShapeMatrix = ShapeMatrix::from_table([
    [1, 1, 0],
    [0, 1, 1],
    [0, 0, 0],
]);

/// Canonical (spawn) orientation for a piece kind
pub fn get_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Color id written into the board when a piece of this kind locks
pub fn get_color(kind: PieceKind) -> Cell {
    kind.color()
}

/// Spawn anchor (column, row) for a shape: horizontally centered, top row
pub fn spawn_position(shape: &ShapeMatrix) -> (i32, i32) {
    let x = BOARD_COLS as i32 / 2 - shape.size() as i32 / 2;
    (x, 0)
}
