use serde::Serialize;

use crate::board::{Board, Grid};
use crate::piece::{GhostPiece, Piece};
use crate::types::{Cell, GamePhase, PieceKind, BOARD_COLS, BOARD_ROWS, EMPTY};

/// FNV-1a 64-bit over the board cells, row-major, little-endian
pub fn board_hash(grid: &Grid) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in grid.iter().flatten().flat_map(|c| c.to_le_bytes()) {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PieceSnapshot {
    /// `None` for the ghost projection
    pub kind: Option<PieceKind>,
    /// Occupancy rows of the current orientation
    pub shape: Vec<Vec<u8>>,
    pub x: i32,
    pub y: i32,
    pub color: Cell,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: Some(value.kind),
            shape: value.shape.to_rows(),
            x: value.x,
            y: value.y,
            color: value.color,
        }
    }
}

impl From<GhostPiece> for PieceSnapshot {
    fn from(value: GhostPiece) -> Self {
        Self {
            kind: None,
            shape: value.shape.to_rows(),
            x: value.x,
            y: value.y,
            color: value.color,
        }
    }
}

/// Read-only view of everything a presentation layer draws
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub board: Grid,
    pub board_hash: u64,
    pub active: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub ghost: Option<PieceSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: GamePhase,
    pub running: bool,
    pub paused: bool,
    pub game_over: bool,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub(crate) fn fill_board(&mut self, board: &Board) {
        board.write_grid(&mut self.board);
        self.board_hash = board_hash(&self.board);
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let board = [[EMPTY; BOARD_COLS as usize]; BOARD_ROWS as usize];
        Self {
            board_hash: board_hash(&board),
            board,
            active: None,
            next: None,
            ghost: None,
            score: 0,
            level: 0,
            lines: 0,
            phase: GamePhase::NotStarted,
            running: false,
            paused: false,
            game_over: false,
            drop_interval_ms: 0,
        }
    }
}
