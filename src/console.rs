//! Console status lines for the binaries
//!
//! Status messages go to stdout with optional color.

use std::io::{self, IsTerminal, Write};

use clap::ValueEnum;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
pub fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

/// Kind of status line, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Info,
    Error,
}

impl Status {
    fn color(self) -> Option<Color> {
        match self {
            Status::Success => Some(Color::Green),
            Status::Info => None,
            Status::Error => Some(Color::Red),
        }
    }
}

/// Stdout writer for user-facing status lines.
pub struct Console {
    stdout: StandardStream,
}

impl Console {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    /// Write one status line, colored by its kind.
    pub fn status(&mut self, status: Status, message: &str) -> io::Result<()> {
        if let Some(color) = status.color() {
            self.stdout.set_color(
                ColorSpec::new()
                    .set_fg(Some(color))
                    .set_bold(status == Status::Error),
            )?;
        }
        write!(self.stdout, "{}", message)?;
        self.stdout.reset()?;
        writeln!(self.stdout)?;
        self.stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes_ignore_environment() {
        assert!(should_use_color(ColorMode::Always));
        assert!(!should_use_color(ColorMode::Never));
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(Status::Success.color(), Some(Color::Green));
        assert_eq!(Status::Info.color(), None);
        assert_eq!(Status::Error.color(), Some(Color::Red));
    }
}
