//! Game state module - the game controller
//!
//! This module ties together all core components: board, pieces, piece
//! generation and scoring. It owns the lifecycle state machine and exposes
//! the command surface (moves, rotation, drops, pause/resume, pacing).
//!
//! Every command is a silent no-op when it does not apply (wrong phase, no
//! active piece, blocked move), so drivers can forward raw input without
//! checking state first.

use log::{debug, info, trace};

use crate::board::Board;
use crate::config::GameConfig;
use crate::events::GameObserver;
use crate::piece::{compute_ghost, try_rotate, GhostPiece, Piece};
use crate::pieces::spawn_position;
use crate::rng::PieceGenerator;
use crate::scoring::{calculate_level, calculate_line_score, get_drop_interval_ms};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GameEvent, GamePhase, START_LEVEL};

/// Undrained events kept before the oldest are discarded
pub const MAX_PENDING_EVENTS: usize = 256;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    generator: PieceGenerator,
    phase: GamePhase,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    drop_accumulator_ms: u32,
    /// Timestamp of the previous `frame` call; cleared on start/reset/resume
    last_frame_ms: Option<u64>,
    /// Pending change notifications, oldest first, at most
    /// [`MAX_PENDING_EVENTS`]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default rules and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::with_seed(seed))
    }

    pub fn with_config(config: GameConfig) -> Self {
        let generator = PieceGenerator::new(config.randomizer, config.seed);
        let drop_interval_ms = get_drop_interval_ms(&config, START_LEVEL);

        Self {
            config,
            board: Board::new(),
            active: None,
            next: None,
            generator,
            phase: GamePhase::NotStarted,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms,
            drop_accumulator_ms: 0,
            last_frame_ms: None,
            events: Vec::new(),
        }
    }

    // ============== Lifecycle ==============

    /// Reset and begin a run. Ignored while a run is in progress.
    pub fn start(&mut self) -> bool {
        if self.phase.is_running() {
            return false;
        }
        self.reset();
        self.phase = GamePhase::Running;
        info!("game started");
        self.spawn_piece();
        true
    }

    /// Return to a fresh, not-started state. Allowed from any phase.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.next = None;
        self.phase = GamePhase::NotStarted;
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.drop_interval_ms = get_drop_interval_ms(&self.config, self.level);
        self.drop_accumulator_ms = 0;
        self.last_frame_ms = None;

        self.push_event(GameEvent::ScoreChanged(self.score));
        self.push_event(GameEvent::LevelChanged(self.level));
        self.push_event(GameEvent::LinesChanged(self.lines));
        info!("game reset");
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::Paused;
        true
    }

    /// Resume a paused run. The next `frame` applies no elapsed time.
    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.phase = GamePhase::Running;
        self.last_frame_ms = None;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => false,
        }
    }

    // ============== Piece commands ==============

    /// Active piece, if commands currently apply to it
    fn controllable(&self) -> Option<Piece> {
        if !self.phase.accepts_input() {
            return None;
        }
        self.active
    }

    fn try_shift(&mut self, dx: i32) -> bool {
        let Some(active) = self.controllable() else {
            return false;
        };
        let moved = active.shifted(dx, 0);
        if moved.collides(&self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Move the active piece down one row.
    ///
    /// Returns `true` if it moved, `false` if it locked instead (or if the
    /// command did not apply).
    pub fn move_down(&mut self) -> bool {
        let Some(active) = self.controllable() else {
            return false;
        };
        let moved = active.shifted(0, 1);
        if moved.collides(&self.board) {
            self.lock_piece();
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Drop the active piece row by row until it locks.
    /// Returns the number of rows it fell.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.phase.accepts_input() {
            return 0;
        }
        let mut rows = 0;
        while self.move_down() {
            rows += 1;
        }
        rows
    }

    /// Rotate the active piece clockwise with wall kicks
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.controllable() else {
            return false;
        };
        match try_rotate(&self.board, &active) {
            Some(rotated) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// Apply an inbound command by value.
    /// Returns whether it had any effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::Reset => {
                self.reset();
                true
            }
            GameAction::Pause => self.pause(),
            GameAction::Resume => self.resume(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => {
                let had_piece = self.controllable().is_some();
                self.move_down();
                had_piece
            }
            GameAction::HardDrop => {
                let had_piece = self.controllable().is_some();
                self.hard_drop();
                had_piece
            }
            GameAction::Rotate => self.rotate(),
        }
    }

    // ============== Pacing ==============

    /// Feed elapsed time to gravity.
    ///
    /// When the accumulated time exceeds the drop interval the piece moves
    /// down one row and the accumulator restarts from zero, so one call
    /// causes at most one gravity step. Returns whether a step happened.
    pub fn advance(&mut self, delta_ms: u32) -> bool {
        if !self.phase.accepts_input() {
            return false;
        }
        self.drop_accumulator_ms = self.drop_accumulator_ms.saturating_add(delta_ms);
        if self.drop_accumulator_ms <= self.drop_interval_ms {
            return false;
        }
        self.drop_accumulator_ms = 0;
        let moved = self.move_down();
        trace!("gravity step (moved: {})", moved);
        true
    }

    /// Advance using an absolute frame timestamp.
    ///
    /// The first frame after start, reset or resume only records the
    /// baseline.
    pub fn frame(&mut self, timestamp_ms: u64) -> bool {
        let delta = match self.last_frame_ms {
            Some(last) => timestamp_ms.saturating_sub(last),
            None => 0,
        };
        self.last_frame_ms = Some(timestamp_ms);
        self.advance(u32::try_from(delta).unwrap_or(u32::MAX))
    }

    // ============== Locking & spawning ==============

    /// Promote the next piece to active and draw a new next piece.
    /// Returns false (and ends the run) if the new piece collides at spawn.
    fn spawn_piece(&mut self) -> bool {
        let next = match self.next.take() {
            Some(piece) => piece,
            None => Piece::new(self.generator.draw()),
        };
        self.next = Some(Piece::new(self.generator.draw()));

        let (x, y) = spawn_position(&next.shape);
        let piece = Piece { x, y, ..next };
        self.active = Some(piece);

        if piece.collides(&self.board) {
            self.enter_game_over();
            return false;
        }

        debug!("spawned {:?} at ({}, {})", piece.kind, x, y);
        true
    }

    /// Merge the active piece into the board, clear rows, score, and spawn
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.lock(&piece.shape, piece.x, piece.y, piece.color);
        let cleared = self.board.clear_full_rows();
        debug!(
            "locked {:?} at ({}, {}), cleared {} rows",
            piece.kind, piece.x, piece.y, cleared
        );

        self.apply_line_clear(cleared);
        self.spawn_piece();
    }

    fn apply_line_clear(&mut self, cleared: usize) {
        if cleared > 0 {
            // Multiplier is the level before this clear
            let points = calculate_line_score(&self.config, cleared, self.level);
            self.score = self.score.saturating_add(points);
            self.push_event(GameEvent::ScoreChanged(self.score));

            self.lines += cleared as u32;
            self.push_event(GameEvent::LinesChanged(self.lines));

            let level = calculate_level(&self.config, self.lines);
            if level != self.level {
                debug!("level {} -> {}", self.level, level);
                self.level = level;
                self.push_event(GameEvent::LevelChanged(self.level));
            }
        }
        self.drop_interval_ms = get_drop_interval_ms(&self.config, self.level);
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let excess = self.events.len() + 1 - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
            trace!("event queue full, dropped {} oldest", excess);
        }
        self.events.push(event);
    }

    fn enter_game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.push_event(GameEvent::GameOver);
        info!(
            "game over: score={} level={} lines={}",
            self.score, self.level, self.lines
        );
    }

    // ============== Queries ==============

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    /// Ghost of the active piece, computed from the current board
    pub fn ghost(&self) -> Option<GhostPiece> {
        self.active.map(|piece| compute_ghost(&self.board, &piece))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// A run is in progress (playing or paused)
    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_accumulator_ms(&self) -> u32 {
        self.drop_accumulator_ms
    }

    // ============== Events & snapshots ==============

    /// Events queued since the last drain
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take queued events. Drivers should drain (or dispatch) once per
    /// frame; a queue left undrained keeps only the newest
    /// [`MAX_PENDING_EVENTS`].
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Deliver queued events to `observer` in order, emptying the queue
    pub fn dispatch_events<O: GameObserver + ?Sized>(&mut self, observer: &mut O) {
        for event in self.events.drain(..) {
            observer.on_event(event);
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.fill_board(&self.board);
        out.active = self.active.map(Into::into);
        out.next = self.next.map(Into::into);
        out.ghost = self.active.map(|piece| compute_ghost(&self.board, &piece).into());
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.phase = self.phase;
        out.running = self.is_running();
        out.paused = self.is_paused();
        out.game_over = self.is_game_over();
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }

    #[cfg(test)]
    pub(crate) fn set_lines(&mut self, lines: u32) {
        self.lines = lines;
        self.level = calculate_level(&self.config, lines);
        self.drop_interval_ms = get_drop_interval_ms(&self.config, self.level);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
