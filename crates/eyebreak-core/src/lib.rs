//! # Eyebreak Core Library
//!
//! Core logic for the Eyebreak 20-20-20 eye-rest timer. The library is
//! host-agnostic: all operations are available to any front end (the CLI
//! binary being the reference host), and nothing in here owns a clock or
//! a thread.
//!
//! ## Architecture
//!
//! - **Countdown Engine**: a stage state machine that requires the host
//!   to invoke `tick()` once per second while running
//! - **Configuration**: TOML-based user preferences (stage durations,
//!   notification bell, auto-advance)
//! - **Events**: every state change is reported as a serializable event
//!   the host can render or log
//!
//! ## Key Components
//!
//! - [`CountdownEngine`]: the stage state machine
//! - [`Stage`] / [`StageConfig`]: the Work/Break/Done cycle and its durations
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, Result};
pub use events::Event;
pub use storage::Config;
pub use timer::{format_mmss, CountdownEngine, Stage, StageConfig};
