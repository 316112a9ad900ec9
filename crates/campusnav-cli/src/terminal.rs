//! Terminal styling and color utilities.
//!
//! ANSI escape definitions plus detection of whether stdout should receive
//! them at all.

use std::io::IsTerminal;

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for emphasis (location names).
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements (arrows, labels).
    pub const GRAY: &str = "\x1b[90m";
    /// Green for the distance figure.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow for avoided locations.
    pub const YELLOW: &str = "\x1b[33m";
}

/// Resolved set of escape codes; empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub emphasis: &'static str,
    pub secondary: &'static str,
    pub distance: &'static str,
    pub warning: &'static str,
    pub reset: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub fn colored() -> Self {
        Self {
            emphasis: colors::WHITE_BOLD,
            secondary: colors::GRAY,
            distance: colors::GREEN,
            warning: colors::YELLOW,
            reset: colors::RESET,
        }
    }

    #[must_use]
    pub fn plain() -> Self {
        Self {
            emphasis: "",
            secondary: "",
            distance: "",
            warning: "",
            reset: "",
        }
    }

    /// Returns `colored()` if stdout supports ANSI colors, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// Check if stdout should receive ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
/// - Redirected output (pipes and files never get colors)
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}
