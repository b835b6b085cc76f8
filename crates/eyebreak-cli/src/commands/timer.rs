//! The `timer` subcommand: the reference host for the countdown engine.
//!
//! `timer run` owns the 1 Hz driver. Ticks and user actions are handled
//! on the same task via `select!`, so no two engine mutations can race.

use std::io::Write as _;
use std::time::Duration;

use clap::Subcommand;
use eyebreak_core::{format_mmss, Config, CountdownEngine, Event, Stage, StageConfig};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run work/break cycles with a 1 Hz countdown display
    Run {
        /// Work stage duration in seconds (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        work_secs: Option<u64>,
        /// Break stage duration in seconds (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        break_secs: Option<u64>,
        /// Number of full work/break cycles to run
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        cycles: u32,
        /// Acknowledge stage dialogs without waiting for input
        #[arg(long)]
        auto: bool,
    },
    /// Print the configured initial timer state as JSON
    Status,
}

pub async fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Status => {
            let config = Config::load()?;
            let engine = CountdownEngine::new(config.stage_config());
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
            Ok(())
        }
        TimerAction::Run {
            work_secs,
            break_secs,
            cycles,
            auto,
        } => {
            let config = Config::load()?;
            let mut stage_config = config.stage_config();
            if let Some(secs) = work_secs {
                stage_config.work_secs = secs;
            }
            if let Some(secs) = break_secs {
                stage_config.break_secs = secs;
            }
            // Flags bound these to >= 1; the config file can still say 0.
            if stage_config.work_secs == 0 || stage_config.break_secs == 0 {
                return Err("stage durations must be positive".into());
            }
            let auto = auto || config.auto_advance;
            run_session(stage_config, cycles, auto, config.notifications.bell).await
        }
    }
}

fn render(engine: &CountdownEngine) {
    print!("\r{:>5} {}   ", engine.stage().as_str(), engine.remaining_display());
    let _ = std::io::stdout().flush();
}

fn ring_bell() {
    print!("\x07");
    let _ = std::io::stdout().flush();
}

/// Prompt and wait for Enter. When stdin is closed the session degrades
/// to auto-advance so piped invocations terminate.
async fn wait_for_enter(
    lines: &mut Lines<BufReader<Stdin>>,
    prompt: &str,
    interactive: &mut bool,
) {
    if !*interactive {
        return;
    }
    print!("{prompt}");
    let _ = std::io::stdout().flush();
    match lines.next_line().await {
        Ok(Some(_)) => {}
        Ok(None) | Err(_) => {
            println!();
            *interactive = false;
        }
    }
}

async fn run_session(
    stage_config: StageConfig,
    cycles: u32,
    auto: bool,
    bell: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = CountdownEngine::new(stage_config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut interactive = !auto;

    println!(
        "eyebreak: {} work / {} break, {} cycle(s)",
        format_mmss(stage_config.work_secs),
        format_mmss(stage_config.break_secs),
        cycles
    );
    if interactive {
        println!("controls: p pause, r resume, s skip stage, q quit");
    }
    info!(
        work_secs = stage_config.work_secs,
        break_secs = stage_config.break_secs,
        "session started"
    );

    engine.start();
    render(&engine);

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first interval tick resolves immediately; swallow it so the
    // first decrement lands a full second after start.
    ticker.tick().await;

    let mut completed = 0u32;
    loop {
        tokio::select! {
            _ = ticker.tick(), if engine.is_running() => {
                if let Some(Event::StageCompleted { finished, next, next_duration_secs, .. }) = engine.tick() {
                    println!();
                    if bell {
                        ring_bell();
                    }
                    debug!(finished = %finished, next = %next, "stage complete");
                    if next == Stage::Done {
                        completed += 1;
                        println!("Cycle {completed} complete - good work resting your eyes.");
                        if completed >= cycles {
                            break;
                        }
                        wait_for_enter(&mut lines, "Press Enter to start the next cycle... ", &mut interactive).await;
                        // Done acknowledged: back to the initial Work state.
                        engine.advance_stage();
                        engine.start();
                        ticker.reset();
                    } else {
                        println!(
                            "{} finished. Next: {} for {}.",
                            finished,
                            next,
                            format_mmss(next_duration_secs)
                        );
                        wait_for_enter(&mut lines, "Press Enter when ready... ", &mut interactive).await;
                        engine.start();
                        ticker.reset();
                    }
                }
                render(&engine);
            }
            line = lines.next_line(), if interactive => {
                match line {
                    Ok(Some(cmd)) => match cmd.trim() {
                        "p" => {
                            engine.pause();
                            render(&engine);
                        }
                        "r" => {
                            if engine.start().is_some() {
                                ticker.reset();
                            }
                            render(&engine);
                        }
                        "s" => {
                            println!();
                            engine.advance_stage();
                            if engine.stage() == Stage::Done {
                                completed += 1;
                                println!("Cycle {completed} complete.");
                                if completed >= cycles {
                                    break;
                                }
                                engine.advance_stage();
                            }
                            engine.start();
                            ticker.reset();
                            render(&engine);
                        }
                        "q" => {
                            println!();
                            break;
                        }
                        _ => {}
                    },
                    Ok(None) | Err(_) => {
                        interactive = false;
                    }
                }
            }
            else => break,
        }
    }

    info!(cycles = completed, "session finished");
    Ok(())
}
