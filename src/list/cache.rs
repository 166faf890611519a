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

use ratatui::text::Line;

/// Rendered lines for one item, tagged with the width they were laid out for.
///
/// Fields are private: `invalidate()` marks stale, `get(width)` reads a fresh
/// entry for exactly that width, `store(width, lines)` repopulates. A stale
/// entry keeps its lines until the next `store`, but never serves them.
#[derive(Debug, Default)]
pub struct RenderCache {
    width: u16,
    lines: Vec<Line<'static>>,
    valid: bool,
    renders: u64,
}

impl RenderCache {
    /// Mark stale without discarding the previous lines.
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    #[must_use]
    pub fn is_fresh(&self, width: u16) -> bool {
        self.valid && self.width == width
    }

    /// Cached lines, only if they were computed for `width` and not invalidated since.
    #[must_use]
    pub fn get(&self, width: u16) -> Option<&[Line<'static>]> {
        self.is_fresh(width).then_some(self.lines.as_slice())
    }

    /// Store freshly rendered lines for `width`, marking the entry clean.
    pub fn store(&mut self, width: u16, lines: Vec<Line<'static>>) {
        self.width = width;
        self.lines = lines;
        self.valid = true;
        self.renders += 1;
    }

    /// Row count of the last layout, or `0` when stale or never rendered.
    #[must_use]
    pub fn height(&self) -> usize {
        if self.valid { self.lines.len() } else { 0 }
    }

    /// Width of the last stored layout, if still valid.
    #[must_use]
    pub fn width(&self) -> Option<u16> {
        self.valid.then_some(self.width)
    }

    /// Number of times `store` has run.
    #[must_use]
    pub fn renders(&self) -> u64 {
        self.renders
    }
}
