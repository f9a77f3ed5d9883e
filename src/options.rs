use crate::style::Color;
use crossterm::tty::IsTty;
use std::io;

/// How a [crate::Canvas] renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanvasOptions {
    pub anchor_color: Color,
    /// Write one line per call with no cursor movement or styling.
    pub plain: bool,
}

impl CanvasOptions {
    /// Defaults, switched to plain mode when stdout is not a terminal.
    pub fn detect() -> Self {
        Self {
            plain: !io::stdout().is_tty(),
            ..Self::default()
        }
    }

    pub fn with_anchor_color(mut self, color: Color) -> Self {
        self.anchor_color = color;
        self
    }

    pub fn with_plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }
}
