// claude_rust — A native Rust terminal interface for Claude Code
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::list::ToolStatus;
use ratatui::style::{Color, Style};

// Accent
pub const RUST_ORANGE: Color = Color::Rgb(244, 118, 0);

// Chrome
pub const DIM: Color = Color::DarkGray;
pub const RULE_CHAR: &str = "\u{2500}";

// Role header colors
pub const ROLE_USER: Color = Color::White;
pub const ROLE_ASSISTANT: Color = RUST_ORANGE;
pub const ROLE_SYSTEM: Color = Color::Yellow;

// Tool status icons
pub const ICON_PENDING: &str = "\u{25cc}";
pub const ICON_RUNNING: &str = "\u{23f5}";
pub const ICON_COMPLETED: &str = "\u{2713}";
pub const ICON_FAILED: &str = "\u{2717}";
pub const ICON_THINKING: &str = "\u{2756}";

// Status colors
pub const STATUS_RUNNING: Color = Color::Cyan;
pub const STATUS_ERROR: Color = Color::Red;

// Tree connectors for tool output
pub const PIPE_MID: &str = "  \u{2502}  ";
pub const PIPE_END: &str = "  \u{2514}\u{2500} ";

pub fn dim() -> Style {
    Style::default().fg(DIM)
}

/// Static icon + color per tool status. No animation, so a finished or
/// running tool renders identically frame to frame.
pub fn status_icon(status: ToolStatus) -> (&'static str, Color) {
    match status {
        ToolStatus::Pending => (ICON_PENDING, DIM),
        ToolStatus::Running => (ICON_RUNNING, STATUS_RUNNING),
        ToolStatus::Completed => (ICON_COMPLETED, RUST_ORANGE),
        ToolStatus::Failed => (ICON_FAILED, STATUS_ERROR),
    }
}
