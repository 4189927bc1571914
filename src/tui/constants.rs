//! TUI constants: colors, timing, and layout sizes.

use std::time::Duration;

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent, soft cyan (#7EC8E3).
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// How long a status toast stays on screen.
pub(crate) const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Header height (title, document path, hint line).
pub(crate) const HEADER_LINES: u16 = 3;

/// Bottom bar height (two lines of key hints).
pub(crate) const BOTTOM_BAR_LINES: u16 = 2;

/// Width of the label column in the detail table.
pub(crate) const LABEL_WIDTH: usize = 22;
