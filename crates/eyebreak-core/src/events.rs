use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Stage;

/// Every state change in the engine produces an Event.
/// Hosts render from events or poll `snapshot()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        stage: Stage,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        stage: Stage,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        stage: Stage,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A stage counted down to zero. The engine has already stopped and
    /// loaded the next stage; the host presents its dialog and resumes.
    StageCompleted {
        finished: Stage,
        next: Stage,
        next_duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// Explicit skip to the next stage.
    StageAdvanced {
        stage: Stage,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        stage: Stage,
        running: bool,
        remaining_secs: u64,
        total_secs: u64,
        progress_pct: f64,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_tag_by_type() {
        let ev = Event::StageCompleted {
            finished: Stage::Work,
            next: Stage::Break,
            next_duration_secs: 20,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "StageCompleted");
        assert_eq!(json["finished"], "work");
        assert_eq!(json["next"], "break");
        assert_eq!(json["next_duration_secs"], 20);
    }
}
