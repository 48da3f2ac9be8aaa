//! Terminal commands
//!
//! One command per stdin line. Key names map onto the DOM `code` values the
//! controller binds, so `space` behaves exactly like the browser's Space key.

use crate::error::{AppError, Result};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Global key press, carried as a DOM `code`
    Key(String),
    /// Click the progress bar at a percentage of its width
    Seek { percent: f64 },
    /// Press at `from`, drag to `to`, release (percentages)
    Drag { from: f64, to: f64 },
    /// Volume slider input (0-100)
    Volume(u8),
    /// Let simulated time pass
    Wait(Duration),
    OpenAlbums,
    CloseAlbums,
    /// Click the dimmed area around the album panel
    Backdrop,
    /// Pick a song from the album panel (1-based playlist position)
    Select(usize),
    Show,
    /// Print the full view model as JSON
    Json,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  space | left | right | up | down | m   keyboard bindings
  key <Code>                            any DOM key code
  seek <percent>                        click the progress bar
  drag <from> <to>                      drag the progress thumb
  vol <0-100>                           move the volume slider
  wait <secs>                           let time pass
  albums | close | backdrop             album panel
  select <n>                            play song n from the panel
  show | json | help | quit
";

/// Parse one input line; blank lines and `#` comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    line.parse().map(Some)
}

impl FromStr for ShellCommand {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let name = parts
            .next()
            .ok_or_else(|| AppError::Command("empty command".to_string()))?
            .to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match (name.as_str(), args.as_slice()) {
            ("space" | "play" | "pause", []) => key("Space"),
            ("right" | "next", []) => key("ArrowRight"),
            ("left" | "prev" | "previous", []) => key("ArrowLeft"),
            ("up", []) => key("ArrowUp"),
            ("down", []) => key("ArrowDown"),
            ("m" | "mute", []) => key("KeyM"),
            ("key", [code]) => key(code),
            ("seek", [percent]) => ShellCommand::Seek {
                percent: parse_percent(percent)?,
            },
            ("drag", [from, to]) => ShellCommand::Drag {
                from: parse_percent(from)?,
                to: parse_percent(to)?,
            },
            ("vol" | "volume", [level]) => ShellCommand::Volume(parse_level(level)?),
            ("wait", [secs]) => ShellCommand::Wait(parse_secs(secs)?),
            ("albums" | "open", []) => ShellCommand::OpenAlbums,
            ("close", []) => ShellCommand::CloseAlbums,
            ("backdrop", []) => ShellCommand::Backdrop,
            ("select", [position]) => ShellCommand::Select(parse_position(position)?),
            ("show", []) => ShellCommand::Show,
            ("json", []) => ShellCommand::Json,
            ("help" | "?", []) => ShellCommand::Help,
            ("quit" | "exit" | "q", []) => ShellCommand::Quit,
            _ => return Err(AppError::Command(format!("unrecognized command '{s}'"))),
        };

        Ok(command)
    }
}

fn key(code: &str) -> ShellCommand {
    ShellCommand::Key(code.to_string())
}

fn parse_percent(value: &str) -> Result<f64> {
    let percent: f64 = value
        .trim_end_matches('%')
        .parse()
        .map_err(|_| AppError::Command(format!("'{value}' is not a number")))?;

    if !percent.is_finite() {
        return Err(AppError::Command(format!("'{value}' is not a finite number")));
    }

    Ok(percent)
}

fn parse_level(value: &str) -> Result<u8> {
    match value.parse::<u8>() {
        Ok(level) if level <= 100 => Ok(level),
        _ => Err(AppError::Command(format!(
            "volume must be 0-100, got '{value}'"
        ))),
    }
}

fn parse_secs(value: &str) -> Result<Duration> {
    let secs: f64 = value
        .parse()
        .map_err(|_| AppError::Command(format!("'{value}' is not a number of seconds")))?;

    Duration::try_from_secs_f64(secs)
        .map_err(|_| AppError::Command(format!("'{value}' is not a valid wait")))
}

fn parse_position(value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(position) if position >= 1 => Ok(position),
        _ => Err(AppError::Command(format!(
            "song number must be 1 or more, got '{value}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_aliases() {
        assert_eq!(parse_line("space").unwrap(), Some(key("Space")));
        assert_eq!(parse_line("  Next ").unwrap(), Some(key("ArrowRight")));
        assert_eq!(parse_line("m").unwrap(), Some(key("KeyM")));
        assert_eq!(parse_line("key KeyQ").unwrap(), Some(key("KeyQ")));
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# setup").unwrap(), None);
    }

    #[test]
    fn wait_rejects_negative() {
        assert_eq!(
            parse_line("wait 1.5").unwrap(),
            Some(ShellCommand::Wait(Duration::from_millis(1500)))
        );
        assert!(parse_line("wait -1").is_err());
    }

    #[test]
    fn extra_arguments_are_errors() {
        assert!(parse_line("space now").is_err());
        assert!(parse_line("seek").is_err());
    }
}
