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

//! Two-part scroll position over a sequence of variable-height items.
//!
//! A [`Cursor`] names the first visible row as `(item, line)`. Every stepping
//! function takes the item count and a `rows(index)` callback returning the
//! number of display rows item `index` occupies. The callback may render
//! lazily; the functions here only ever ask for the items they walk over, so
//! scrolling near the tail of a long list never measures the head.

/// First visible row: item index plus the number of its leading rows skipped.
///
/// Ordering is lexicographic (item first, then line), which matches display
/// order for any valid cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    pub item: usize,
    pub line: usize,
}

impl Cursor {
    pub const TOP: Self = Self { item: 0, line: 0 };

    #[must_use]
    pub const fn new(item: usize, line: usize) -> Self {
        Self { item, line }
    }

    /// Re-validate against the current items.
    ///
    /// An item index past the end collapses onto the last row of the last
    /// item; a line past the end of its item collapses onto that item's last
    /// row. Zero-row items always get `line == 0`.
    #[must_use]
    pub fn clamp_to(self, len: usize, mut rows: impl FnMut(usize) -> usize) -> Self {
        if len == 0 {
            return Self::TOP;
        }
        let item = self.item.min(len - 1);
        let last_line = rows(item).saturating_sub(1);
        let line = if item == self.item { self.line.min(last_line) } else { last_line };
        Self { item, line }
    }

    /// Move toward the end by `delta` rows.
    ///
    /// Running off the end lands on the last row of the last item.
    #[must_use]
    pub fn scroll_down(
        self,
        delta: usize,
        len: usize,
        mut rows: impl FnMut(usize) -> usize,
    ) -> Self {
        if len == 0 {
            return Self::TOP;
        }
        let mut cur = self.clamp_to(len, &mut rows);
        let mut delta = delta;
        while delta > 0 {
            let height = rows(cur.item);
            let remaining = height.saturating_sub(cur.line);
            if delta < remaining {
                cur.line += delta;
                break;
            }
            if cur.item + 1 >= len {
                cur.line = height.saturating_sub(1);
                break;
            }
            delta -= remaining;
            cur.item += 1;
            cur.line = 0;
        }
        cur
    }

    /// Move toward the start by `delta` rows.
    ///
    /// Crossing into the previous item enters it from below: position
    /// `(i - 1, rows(i - 1))` is treated as `(i, 0)`, so stepping up is the
    /// exact inverse of stepping down. Running off the start lands on
    /// [`Cursor::TOP`].
    #[must_use]
    pub fn scroll_up(
        self,
        delta: usize,
        len: usize,
        mut rows: impl FnMut(usize) -> usize,
    ) -> Self {
        if len == 0 {
            return Self::TOP;
        }
        let mut cur = self.clamp_to(len, &mut rows);
        let mut delta = delta;
        loop {
            if delta <= cur.line {
                cur.line -= delta;
                return cur;
            }
            if cur.item == 0 {
                return Self::TOP;
            }
            delta -= cur.line;
            cur.item -= 1;
            cur.line = rows(cur.item);
        }
    }

    /// Cursor that shows the last `viewport` rows.
    ///
    /// Walks backward from the last item accumulating rows until at least
    /// `viewport` rows are covered. When everything fits the result is
    /// [`Cursor::TOP`]. A zero viewport is treated as one row.
    #[must_use]
    pub fn bottom(len: usize, viewport: usize, mut rows: impl FnMut(usize) -> usize) -> Self {
        let viewport = viewport.max(1);
        let mut suffix = 0usize;
        for item in (0..len).rev() {
            suffix += rows(item);
            if suffix >= viewport {
                return Self { item, line: suffix - viewport };
            }
        }
        Self::TOP
    }

    /// Rows from this cursor to the end of the list, counting at most
    /// `limit + 1` so callers can ask "more than `limit`?" cheaply.
    #[must_use]
    pub fn rows_below(
        self,
        len: usize,
        limit: usize,
        mut rows: impl FnMut(usize) -> usize,
    ) -> usize {
        let mut total = 0usize;
        for item in self.item..len {
            let height = rows(item);
            total += if item == self.item { height.saturating_sub(self.line) } else { height };
            if total > limit {
                break;
            }
        }
        total
    }

    /// True when the rows from this cursor to the end fit in `viewport`.
    /// An empty list is always at the bottom.
    #[must_use]
    pub fn at_bottom(self, len: usize, viewport: usize, rows: impl FnMut(usize) -> usize) -> bool {
        self.rows_below(len, viewport, rows) <= viewport
    }

    /// Absolute row index of this cursor from the top of the list.
    #[must_use]
    pub fn position(self, len: usize, mut rows: impl FnMut(usize) -> usize) -> usize {
        let before: usize = (0..self.item.min(len)).map(&mut rows).sum();
        before + self.line
    }
}
