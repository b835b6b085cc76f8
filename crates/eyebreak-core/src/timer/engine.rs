//! Countdown engine implementation.
//!
//! The engine is a logically-ticked stage machine. It does not own a
//! clock or a thread - the host is responsible for calling `tick()` once
//! per second while the timer is running, and for serializing user
//! actions with ticks on the same execution context.
//!
//! ## Stage Transitions
//!
//! ```text
//! Work -> Break -> Done -> Work
//! ```
//!
//! A stage transition happens on the tick that reaches zero (the engine
//! stops and reports a [`Event::StageCompleted`] for the host's dialog),
//! or on an explicit `advance_stage()`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = CountdownEngine::new(StageConfig::default());
//! engine.start();
//! // Once per second while running:
//! if let Some(event) = engine.tick() {
//!     // stage finished; present the dialog, then engine.start() again
//! }
//! ```

use chrono::Utc;

use super::stage::{Stage, StageConfig};
use super::format_mmss;
use crate::events::Event;

/// Core countdown stage machine.
///
/// Operates on logical one-second ticks supplied by the host. All
/// commands are total; a command that would not change state returns
/// `None` instead of an error.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    config: StageConfig,
    stage: Stage,
    /// Remaining time in seconds for the current stage. Never underflows.
    remaining_secs: u64,
    running: bool,
}

impl CountdownEngine {
    /// Create a new engine positioned at the start of the Work stage.
    pub fn new(config: StageConfig) -> Self {
        Self {
            config,
            stage: Stage::Work,
            remaining_secs: config.duration_secs(Stage::Work),
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Configured duration of the current stage.
    pub fn total_secs(&self) -> u64 {
        self.config.duration_secs(self.stage)
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// 0.0 .. 1.0 progress within the current stage.
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / total as f64)
    }

    /// `mm:ss` rendering of the remaining time.
    pub fn remaining_display(&self) -> String {
        format_mmss(self.remaining_secs)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            stage: self.stage,
            running: self.running,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            progress_pct: self.progress() * 100.0,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start (or resume) the countdown.
    ///
    /// No-op when already running, and when the current stage has no
    /// time left to count (Done, or a stage already at zero).
    pub fn start(&mut self) -> Option<Event> {
        if self.running || self.remaining_secs == 0 {
            return None;
        }
        self.running = true;
        Some(Event::TimerStarted {
            stage: self.stage,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Stop ticking without losing progress. No-op when not running.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            stage: self.stage,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Restore the current stage to its configured duration and stop.
    pub fn reset(&mut self) -> Event {
        self.running = false;
        self.remaining_secs = self.total_secs();
        Event::TimerReset {
            stage: self.stage,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Advance one second. Call once per second while running.
    ///
    /// No-op unless running with time remaining. The tick that reaches
    /// zero stops the engine, moves to the next stage with its configured
    /// duration loaded, and returns the completion event; the host
    /// presents its dialog and calls `start()` to resume.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running || self.remaining_secs == 0 {
            return None;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs > 0 {
            return None;
        }
        let finished = self.stage;
        self.running = false;
        self.stage = finished.next();
        self.remaining_secs = self.config.duration_secs(self.stage);
        Some(Event::StageCompleted {
            finished,
            next: self.stage,
            next_duration_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Explicitly move to the next stage with its configured duration.
    ///
    /// Always stops the engine; the caller resumes with `start()`.
    pub fn advance_stage(&mut self) -> Event {
        self.running = false;
        self.stage = self.stage.next();
        self.remaining_secs = self.config.duration_secs(self.stage);
        Event::StageAdvanced {
            stage: self.stage,
            duration_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }
}
