//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation
//! logic. It has no dependencies on rendering, input devices, or I/O, so the
//! same engine can sit behind a canvas, a terminal, or a headless test.
//!
//! # Module Structure
//!
//! - [`shape`]: square occupancy matrices and clockwise rotation
//! - [`pieces`]: the catalog of seven canonical shapes and their colors
//! - [`piece`]: piece instances, ghost projection, wall-kick rotation
//! - [`board`]: 10x20 grid with collision testing and row compaction
//! - [`scoring`]: line clear points, leveling, gravity interval
//! - [`rng`]: seeded piece generation (uniform or 7-bag)
//! - [`config`]: tunable rules loaded from JSON
//! - [`events`]: change notifications and the observer trait
//! - [`game_state`]: the controller and its lifecycle state machine
//! - [`snapshot`]: serializable read-only view for presentation layers
//!
//! # Game Rules
//!
//! - **Randomizer**: independent uniform choice per piece (7-bag opt-in)
//! - **Rotation**: clockwise only, with kicks `(0,0) (+1,0) (-1,0) (0,-1) (+2,0) (-2,0)`
//! - **Ghost Piece**: shows where the current piece will land
//! - **Scoring**: `[0, 100, 300, 500, 800] × level` per lock
//! - **Leveling**: `level = 1 + lines / 10`
//! - **Gravity**: `max(100, 1000 − (level − 1) × 100)` ms per row
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert!(game.active().is_some());
//! ```
//!
//! # Timing
//!
//! The engine has no clock of its own. Call
//! [`GameState::advance`](game_state::GameState::advance) with elapsed
//! milliseconds, or [`GameState::frame`](game_state::GameState::frame) with
//! absolute frame timestamps, from one thread.

pub mod board;
pub mod config;
pub mod events;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig, Randomizer};
pub use events::{EventLog, GameObserver};
pub use game_state::{GameState, MAX_PENDING_EVENTS};
pub use piece::{compute_ghost, try_rotate, GhostPiece, Piece, WALL_KICKS};
pub use pieces::{get_color, get_shape};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{calculate_level, calculate_line_score, get_drop_interval_ms};
pub use shape::{ShapeError, ShapeMatrix};
pub use snapshot::{GameSnapshot, PieceSnapshot};
