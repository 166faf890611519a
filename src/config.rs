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

pub const DEFAULT_SEPARATOR: bool = true;
pub const DEFAULT_SELECTION_MARKER: &str = "\u{258c} ";
pub const DEFAULT_WHEEL_STEP: usize = 3;

/// Presentation knobs for a [`ScrollList`](crate::list::ScrollList).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Blank row between consecutive items. Counted in the row span of the
    /// item above it, so scroll arithmetic matches what is drawn.
    pub separator: bool,
    /// Prefix drawn on each visible row of the selected item.
    pub selection_marker: String,
    /// Rows moved per mouse wheel notch.
    pub wheel_step: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            selection_marker: DEFAULT_SELECTION_MARKER.to_owned(),
            wheel_step: DEFAULT_WHEEL_STEP,
        }
    }
}

impl ListConfig {
    #[must_use]
    pub fn with_separator(mut self, separator: bool) -> Self {
        self.separator = separator;
        self
    }

    /// Zero is bumped to one so the wheel always moves.
    #[must_use]
    pub fn with_wheel_step(mut self, step: usize) -> Self {
        self.wheel_step = step.max(1);
        self
    }
}

#[must_use]
pub fn default_list_config() -> &'static ListConfig {
    static CONFIG: std::sync::OnceLock<ListConfig> = std::sync::OnceLock::new();
    CONFIG.get_or_init(ListConfig::default)
}
