//! Glass Player Shell Library
//!
//! Headless terminal front end for the Glass Player controller: a TOML
//! playlist, a simulated audio element, and line-based commands.
//!
//! This library exposes the core components for testing purposes.

pub mod command;
pub mod config;
pub mod error;
pub mod shell;

// Re-export commonly used types for convenience
pub use command::{parse_line, ShellCommand};
pub use config::{ShellConfig, SimulationSettings, TrackEntry, DEFAULT_CONFIG_PATH};
pub use error::{AppError, Result};
pub use shell::{Flow, Shell};
