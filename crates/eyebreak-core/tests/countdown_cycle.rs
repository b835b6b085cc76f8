//! Integration tests for the countdown stage machine.
//!
//! Drives the engine with plain `tick()` calls - no real clock involved.

use eyebreak_core::{CountdownEngine, Event, Stage, StageConfig};
use proptest::prelude::*;

fn completed_events(engine: &mut CountdownEngine, ticks: u64) -> Vec<Event> {
    let mut out = Vec::new();
    for _ in 0..ticks {
        if let Some(ev) = engine.tick() {
            out.push(ev);
        }
    }
    out
}

#[test]
fn default_work_stage_takes_1200_ticks() {
    let mut engine = CountdownEngine::new(StageConfig::default());
    engine.start();

    let events = completed_events(&mut engine, 1199);
    assert!(events.is_empty());
    assert_eq!(engine.remaining_secs(), 1);
    assert!(engine.is_running());

    let events = completed_events(&mut engine, 1);
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        Event::StageCompleted {
            finished: Stage::Work,
            next: Stage::Break,
            next_duration_secs: 20,
            ..
        }
    ));
    assert_eq!(engine.stage(), Stage::Break);
    assert_eq!(engine.remaining_secs(), 20);
    assert!(!engine.is_running());
}

#[test]
fn full_cycle_work_break_done_and_back() {
    let mut engine = CountdownEngine::new(StageConfig::new(3, 2));

    engine.start();
    let events = completed_events(&mut engine, 10);
    assert_eq!(events.len(), 1, "stopped at the boundary, extra ticks idle");
    assert_eq!(engine.stage(), Stage::Break);

    engine.start();
    let events = completed_events(&mut engine, 10);
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        Event::StageCompleted {
            finished: Stage::Break,
            next: Stage::Done,
            ..
        }
    ));
    assert_eq!(engine.stage(), Stage::Done);
    assert_eq!(engine.remaining_secs(), 0);

    // Acknowledging Done returns to the initial Work state.
    engine.advance_stage();
    assert_eq!(engine.stage(), Stage::Work);
    assert_eq!(engine.remaining_secs(), 3);
    assert!(!engine.is_running());
}

#[test]
fn pause_resume_preserves_remaining() {
    let mut engine = CountdownEngine::new(StageConfig::new(10, 2));
    engine.start();
    completed_events(&mut engine, 4);
    engine.pause();
    completed_events(&mut engine, 100);
    assert_eq!(engine.remaining_secs(), 6);
    engine.start();
    completed_events(&mut engine, 1);
    assert_eq!(engine.remaining_secs(), 5);
}

proptest! {
    /// After n ticks from a fresh Work stage of t seconds: either the
    /// stage is still counting down (remaining = t - n), or it crossed
    /// zero exactly once and the engine sits stopped at the start of
    /// Break.
    #[test]
    fn tick_arithmetic(t in 1u64..500, b in 1u64..60, n in 0u64..600) {
        let mut engine = CountdownEngine::new(StageConfig::new(t, b));
        engine.start();
        let events = completed_events(&mut engine, n);

        if n < t {
            prop_assert_eq!(events.len(), 0);
            prop_assert_eq!(engine.stage(), Stage::Work);
            prop_assert_eq!(engine.remaining_secs(), t - n);
            prop_assert!(engine.is_running());
        } else {
            prop_assert_eq!(events.len(), 1);
            prop_assert_eq!(engine.stage(), Stage::Break);
            prop_assert_eq!(engine.remaining_secs(), b);
            prop_assert!(!engine.is_running());
        }
    }

    /// advance_stage() cycles Work -> Break -> Done -> Work indefinitely.
    #[test]
    fn advance_cycles_with_period_three(k in 0usize..100) {
        let mut engine = CountdownEngine::new(StageConfig::new(5, 2));
        for _ in 0..k {
            engine.advance_stage();
        }
        let expected = [Stage::Work, Stage::Break, Stage::Done][k % 3];
        prop_assert_eq!(engine.stage(), expected);
        prop_assert!(!engine.is_running());
    }

    /// reset() restores the current stage's configured duration and
    /// stops the engine, regardless of prior state.
    #[test]
    fn reset_restores_stage_duration(
        t in 1u64..200,
        b in 1u64..60,
        advances in 0usize..3,
        ticks in 0u64..100,
    ) {
        let mut engine = CountdownEngine::new(StageConfig::new(t, b));
        for _ in 0..advances {
            engine.advance_stage();
        }
        engine.start();
        completed_events(&mut engine, ticks);

        engine.reset();
        prop_assert!(!engine.is_running());
        prop_assert_eq!(engine.remaining_secs(), engine.total_secs());
    }
}
