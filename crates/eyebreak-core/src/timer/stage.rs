use serde::{Deserialize, Serialize};

/// Phase of the countdown cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Screen time: the long stage.
    Work,
    /// Eyes off the screen: the short stage.
    Break,
    /// The cycle has finished and awaits acknowledgement.
    Done,
}

impl Stage {
    /// The stage that follows this one. Done wraps back to Work.
    pub fn next(self) -> Stage {
        match self {
            Stage::Work => Stage::Break,
            Stage::Break => Stage::Done,
            Stage::Done => Stage::Work,
        }
    }

    /// Lowercase display name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Work => "work",
            Stage::Break => "break",
            Stage::Done => "done",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-stage durations in seconds.
///
/// Done carries no duration: it is an acknowledgement gate, not a
/// countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    pub work_secs: u64,
    pub break_secs: u64,
}

impl StageConfig {
    /// The 20-20-20 defaults: 20 minutes of work, 20 seconds of rest.
    pub const DEFAULT_WORK_SECS: u64 = 20 * 60;
    pub const DEFAULT_BREAK_SECS: u64 = 20;

    pub fn new(work_secs: u64, break_secs: u64) -> Self {
        Self {
            work_secs,
            break_secs,
        }
    }

    /// Duration in seconds for `stage`.
    pub fn duration_secs(&self, stage: Stage) -> u64 {
        match stage {
            Stage::Work => self.work_secs,
            Stage::Break => self.break_secs,
            Stage::Done => 0,
        }
    }

    /// Duration in milliseconds, saturating on overflow.
    pub fn duration_ms(&self, stage: Stage) -> u64 {
        self.duration_secs(stage).saturating_mul(1000)
    }
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            work_secs: Self::DEFAULT_WORK_SECS,
            break_secs: Self::DEFAULT_BREAK_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_durations() {
        let cfg = StageConfig::default();
        assert_eq!(cfg.duration_secs(Stage::Work), 1200);
        assert_eq!(cfg.duration_secs(Stage::Break), 20);
        assert_eq!(cfg.duration_secs(Stage::Done), 0);
    }

    #[test]
    fn stage_cycle_wraps() {
        assert_eq!(Stage::Work.next(), Stage::Break);
        assert_eq!(Stage::Break.next(), Stage::Done);
        assert_eq!(Stage::Done.next(), Stage::Work);
    }

    #[test]
    fn duration_ms_saturates() {
        let cfg = StageConfig::new(u64::MAX, 20);
        assert_eq!(cfg.duration_ms(Stage::Work), u64::MAX);
    }
}
