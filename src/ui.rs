//! UI module for awsprof - styled diagnostics and color detection.
//!
//! Profile rows are always plain text; only messages on stderr are styled.
//!
//! # No-color detection (in priority order):
//! 1. `--no-color` CLI flag (highest priority)
//! 2. `NO_COLOR` environment variable (any value)
//! 3. `TERM=dumb` environment variable
//! 4. Non-TTY stderr (detected via anstream)

use anstream::eprintln;
use anstyle::{AnsiColor, Color, Style};
use std::io::IsTerminal;

/// Color mode for output
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Always emit ANSI colors
    Always,
    /// Emit colors only if TTY and not disabled
    #[default]
    Auto,
    /// Never emit ANSI colors
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => Err(format!("invalid color mode: {}", s)),
        }
    }
}

/// UI context holding resolved display settings
#[derive(Debug, Clone)]
pub struct Ui {
    /// Whether colors are enabled
    pub color_enabled: bool,
}

impl Ui {
    /// Create a new UI context with color mode detection.
    pub fn new(mode: ColorMode, force_no_color: bool) -> Self {
        let color_enabled = Self::resolve_color(mode, force_no_color);

        if !color_enabled {
            anstream::ColorChoice::write_global(anstream::ColorChoice::Never);
        }

        Self { color_enabled }
    }

    fn resolve_color(mode: ColorMode, force_no_color: bool) -> bool {
        if force_no_color {
            return false;
        }

        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }

        if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
            return false;
        }

        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stderr().is_terminal(),
        }
    }

    fn style_label(&self, color: AnsiColor) -> Style {
        if self.color_enabled {
            Style::new().fg_color(Some(Color::Ansi(color))).bold()
        } else {
            Style::new()
        }
    }

    /// Format an ERROR line without printing it
    pub fn error_line(&self, msg: impl AsRef<str>) -> String {
        let label = self.style_label(AnsiColor::Red);
        format!("{label}ERROR{label:#} {}", msg.as_ref())
    }

    /// Print ERROR label (red) with message to stderr
    pub fn err(&self, msg: impl AsRef<str>) {
        eprintln!("{}", self.error_line(msg));
    }
}
