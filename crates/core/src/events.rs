//! Events module - change notifications for presentation layers
//!
//! The engine queues a [`GameEvent`] for every score, level or line change
//! and once on game over. Callers either drain the queue directly or hand a
//! [`GameObserver`] to `GameState::dispatch_events`.

use crate::types::GameEvent;

/// Callback surface for counter changes. Every method defaults to a no-op.
pub trait GameObserver {
    fn on_score_change(&mut self, _score: u32) {}

    fn on_level_change(&mut self, _level: u32) {}

    fn on_lines_change(&mut self, _lines: u32) {}

    /// Called once when a run ends
    fn on_game_over(&mut self) {}

    /// Route one event to the matching callback
    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::ScoreChanged(score) => self.on_score_change(score),
            GameEvent::LevelChanged(level) => self.on_level_change(level),
            GameEvent::LinesChanged(lines) => self.on_lines_change(lines),
            GameEvent::GameOver => self.on_game_over(),
        }
    }
}

/// Observer that records every event in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_over_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver))
            .count()
    }

    pub fn last_score(&self) -> Option<u32> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::ScoreChanged(s) => Some(*s),
            _ => None,
        })
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counters {
        score: u32,
        level: u32,
        lines: u32,
        over: u32,
    }

    impl GameObserver for Counters {
        fn on_score_change(&mut self, score: u32) {
            self.score = score;
        }

        fn on_level_change(&mut self, level: u32) {
            self.level = level;
        }

        fn on_lines_change(&mut self, lines: u32) {
            self.lines = lines;
        }

        fn on_game_over(&mut self) {
            self.over += 1;
        }
    }

    #[test]
    fn test_default_routing() {
        let mut c = Counters::default();
        c.on_event(GameEvent::ScoreChanged(300));
        c.on_event(GameEvent::LevelChanged(2));
        c.on_event(GameEvent::LinesChanged(12));
        c.on_event(GameEvent::GameOver);

        assert_eq!((c.score, c.level, c.lines, c.over), (300, 2, 12, 1));
    }

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_event(GameEvent::ScoreChanged(100));
        log.on_event(GameEvent::ScoreChanged(400));
        log.on_event(GameEvent::GameOver);

        assert_eq!(log.events.len(), 3);
        assert_eq!(log.last_score(), Some(400));
        assert_eq!(log.game_over_count(), 1);
    }
}
