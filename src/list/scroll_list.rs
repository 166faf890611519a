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

use super::cursor::Cursor;
use super::item::{Item, ItemId, ItemKind};
use crate::config::{ListConfig, default_list_config};
use crate::ui::{line_text, theme, wrap::truncate_line};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use std::ops::Range;

/// Snapshot of where the viewport sits in the laid-out list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub total: usize,
    pub position: usize,
    pub viewport: usize,
}

impl ScrollMetrics {
    /// Fraction scrolled in `[0, 1]`; `1.0` when everything fits.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(self) -> f64 {
        if self.total <= self.viewport {
            return 1.0;
        }
        (self.position as f64 / (self.total - self.viewport) as f64).clamp(0.0, 1.0)
    }
}

/// Virtualized list of variable-height items with a two-part scroll cursor.
///
/// Items are measured lazily at the current width through their own render
/// cache. Operations that move the cursor only measure the items they walk
/// over: the tail for bottom pinning, the visible window for drawing.
#[derive(Debug)]
pub struct ScrollList {
    items: Vec<Item>,
    cursor: Cursor,
    width: u16,
    height: u16,
    pub(super) auto_scroll: bool,
    focused: bool,
    selected: Option<usize>,
    config: ListConfig,
    /// Last area passed to `render`, for mouse hit testing.
    pub(super) area: Rect,
}

/// Row spans of the items at one width. Split off from the list so the
/// cursor can be updated while items are being measured.
struct Rows<'a> {
    items: &'a mut [Item],
    width: u16,
    separator: bool,
}

impl Rows<'_> {
    fn len(&self) -> usize {
        self.items.len()
    }

    /// Rendered rows of item `index`, plus its trailing separator row.
    fn get(&mut self, index: usize) -> usize {
        let len = self.items.len();
        let Some(item) = self.items.get_mut(index) else {
            return 0;
        };
        let height = item.render(self.width).len();
        if self.separator && index + 1 < len { height + 1 } else { height }
    }
}

impl ScrollList {
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(default_list_config().clone(), width, height)
    }

    pub fn with_config(config: ListConfig, width: u16, height: u16) -> Self {
        Self {
            items: Vec::new(),
            cursor: Cursor::TOP,
            width,
            height,
            auto_scroll: true,
            focused: false,
            selected: None,
            config,
            area: Rect::default(),
        }
    }

    fn parts(&mut self) -> (&mut Cursor, Rows<'_>) {
        (
            &mut self.cursor,
            Rows { items: &mut self.items, width: self.width, separator: self.config.separator },
        )
    }

    // --- accessors ---

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[must_use]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    #[must_use]
    pub fn auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    #[must_use]
    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Index of the item with `id`, searching from the tail where streamed
    /// updates usually land.
    #[must_use]
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().rposition(|item| item.id() == id)
    }

    // --- mutation ---

    /// Replace every item. Selection outside the new range is dropped.
    pub fn set_items(&mut self, items: Vec<Item>) {
        tracing::debug!(count = items.len(), "scroll list: replacing items");
        self.items = items;
        self.selected = self.selected.filter(|&i| i < self.items.len());
        self.after_mutation();
    }

    pub fn clear(&mut self) {
        self.set_items(Vec::new());
    }

    /// Push to the tail. Under auto-scroll the new item is pinned into view
    /// immediately; otherwise the cursor does not move.
    pub fn append_item(&mut self, item: Item) {
        self.items.push(item);
        if self.auto_scroll {
            self.goto_bottom();
        }
    }

    /// Mutate item `index` in place. The item is invalidated before `f` runs.
    pub fn update_item<R>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut ItemKind) -> R,
    ) -> Option<R> {
        let result = self.items.get_mut(index)?.edit(f);
        self.after_mutation();
        Some(result)
    }

    pub fn update_by_id<R>(
        &mut self,
        id: &ItemId,
        f: impl FnOnce(&mut ItemKind) -> R,
    ) -> Option<R> {
        let index = self.position_of(id)?;
        self.update_item(index, f)
    }

    fn after_mutation(&mut self) {
        if self.auto_scroll {
            self.goto_bottom();
        } else {
            self.clamp_offset();
        }
    }

    /// Set the viewport size. Item caches are left alone; items re-lay out
    /// at the new width only when something measures or draws them.
    pub fn set_size(&mut self, width: u16, height: u16) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        tracing::trace!(width, height, "scroll list: resize");
        self.width = width;
        self.height = height;
        self.after_mutation();
    }

    // --- cursor ---

    /// Re-validate the cursor against the current items and width.
    pub fn clamp_offset(&mut self) {
        let (cursor, mut rows) = self.parts();
        let len = rows.len();
        *cursor = cursor.clamp_to(len, |i| rows.get(i));
    }

    /// Move by `delta` rows (negative is up). Never scrolls past the point
    /// where the last row sits at the bottom of the viewport.
    pub fn scroll_by(&mut self, delta: isize) {
        if delta == 0 {
            return;
        }
        let steps = delta.unsigned_abs();
        if delta > 0 {
            let bottom = self.bottom_cursor();
            let (cursor, mut rows) = self.parts();
            let len = rows.len();
            *cursor = cursor.scroll_down(steps, len, |i| rows.get(i)).min(bottom);
        } else {
            let (cursor, mut rows) = self.parts();
            let len = rows.len();
            *cursor = cursor.scroll_up(steps, len, |i| rows.get(i));
        }
        self.clamp_offset();
    }

    pub fn goto_top(&mut self) {
        self.cursor = Cursor::TOP;
    }

    pub fn goto_bottom(&mut self) {
        self.cursor = self.bottom_cursor();
        tracing::trace!(item = self.cursor.item, line = self.cursor.line, "scroll list: pinned");
    }

    fn bottom_cursor(&mut self) -> Cursor {
        let viewport = usize::from(self.height);
        let (_, mut rows) = self.parts();
        Cursor::bottom(rows.len(), viewport, |i| rows.get(i))
    }

    /// True when the last row is within the viewport. Only measures the
    /// items from the cursor down until the viewport is overfilled.
    pub fn at_bottom(&mut self) -> bool {
        let viewport = usize::from(self.height);
        let (cursor, mut rows) = self.parts();
        let len = rows.len();
        cursor.at_bottom(len, viewport, |i| rows.get(i))
    }

    /// Pin to the bottom now and after every future mutation, or stop following.
    pub fn set_auto_scroll(&mut self, enabled: bool) {
        self.auto_scroll = enabled;
        if enabled {
            self.goto_bottom();
        }
    }

    /// Put item `index` at the top of the viewport (clamped to the bottom
    /// anchor). Disables auto-scroll.
    pub fn scroll_to_item(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        let target = Cursor::new(index.min(self.items.len() - 1), 0);
        self.cursor = target.min(self.bottom_cursor());
        self.auto_scroll = false;
    }

    /// Scroll the minimum needed for item `index` to start inside the viewport.
    pub fn ensure_visible(&mut self, index: usize) {
        if index >= self.items.len() || self.visible_range().contains(&index) {
            return;
        }
        if index < self.cursor.item {
            self.scroll_to_item(index);
            return;
        }
        let viewport = usize::from(self.height);
        let bottom = self.bottom_cursor();
        let (cursor, mut rows) = self.parts();
        let len = rows.len();
        let lift = viewport.saturating_sub(rows.get(index));
        *cursor = Cursor::new(index, 0).scroll_up(lift, len, |i| rows.get(i)).min(bottom);
        self.auto_scroll = false;
    }

    /// Item indices with at least one row inside the viewport.
    pub fn visible_range(&mut self) -> Range<usize> {
        let viewport = usize::from(self.height);
        let (cursor, mut rows) = self.parts();
        let start = cursor.item;
        let line = cursor.line;
        let len = rows.len();
        if len == 0 || viewport == 0 {
            return 0..0;
        }
        let mut shown = 0usize;
        let mut end = start;
        for i in start..len {
            let span = rows.get(i);
            shown += if i == start { span.saturating_sub(line) } else { span };
            end = i + 1;
            if shown >= viewport {
                break;
            }
        }
        start..end
    }

    // --- metrics ---

    /// Total rows of all items at the current width. Measures every item,
    /// so after a resize this lays out the whole list; call it once per frame.
    pub fn total_line_count(&mut self) -> usize {
        let (_, mut rows) = self.parts();
        (0..rows.len()).map(|i| rows.get(i)).sum()
    }

    /// Absolute row of the cursor from the top of the list.
    pub fn scroll_position(&mut self) -> usize {
        let (cursor, mut rows) = self.parts();
        let len = rows.len();
        cursor.position(len, |i| rows.get(i))
    }

    /// Fraction scrolled in `[0, 1]`; `1.0` when everything fits.
    pub fn scroll_percent(&mut self) -> f64 {
        self.scroll_metrics().percent()
    }

    /// Total, position and viewport from one pass over the items, for
    /// callers that draw both a scrollbar and a percentage.
    pub fn scroll_metrics(&mut self) -> ScrollMetrics {
        ScrollMetrics {
            total: self.total_line_count(),
            position: self.scroll_position(),
            viewport: usize::from(self.height),
        }
    }

    // --- selection ---

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Out-of-range indices clear the selection.
    pub fn set_selected(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.items.len());
    }

    /// Move the selection down one item, starting from the top visible item.
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let next = match self.selected {
            None => self.cursor.item,
            Some(i) => (i + 1).min(self.items.len() - 1),
        };
        self.selected = Some(next);
        self.ensure_visible(next);
    }

    /// Move the selection up one item, starting from the top visible item.
    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let prev = match self.selected {
            None => self.cursor.item,
            Some(i) => i.saturating_sub(1),
        };
        self.selected = Some(prev);
        self.ensure_visible(prev);
    }

    // --- drawing ---

    /// Rows currently in the viewport, at most `height` of them, each no
    /// wider than `width`.
    pub fn view(&mut self) -> Vec<Line<'static>> {
        let height = usize::from(self.height);
        let width = self.width;
        if height == 0 || width == 0 || self.items.is_empty() {
            return Vec::new();
        }
        self.clamp_offset();
        let selected = self.selected;
        let separator = self.config.separator;
        let len = self.items.len();
        let marker = Span::styled(
            self.config.selection_marker.clone(),
            Style::default().fg(theme::RUST_ORANGE),
        );

        let mut out: Vec<Line<'static>> = Vec::with_capacity(height);
        let mut skip = self.cursor.line;
        for index in self.cursor.item..len {
            if out.len() >= height {
                break;
            }
            let lines = self.items[index].render(width);
            let is_selected = selected == Some(index);
            for line in lines.iter().skip(skip) {
                if out.len() >= height {
                    break;
                }
                if is_selected {
                    let mut spans = Vec::with_capacity(line.spans.len() + 1);
                    spans.push(marker.clone());
                    spans.extend(line.spans.iter().cloned());
                    out.push(truncate_line(Line::from(spans).style(line.style), width));
                } else {
                    out.push(line.clone());
                }
            }
            // clamp_offset keeps the cursor line within the item and its separator
            if separator && index + 1 < len && out.len() < height {
                out.push(Line::default());
            }
            skip = 0;
        }
        out
    }

    /// `view()` as plain text, rows joined with `\n`.
    pub fn view_string(&mut self) -> String {
        self.view().iter().map(line_text).collect::<Vec<_>>().join("\n")
    }

    /// Size to `area`, remember it for mouse hit testing, and draw the view.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.area = area;
        self.set_size(area.width, area.height);
        let lines = self.view();
        frame.render_widget(Paragraph::new(Text::from(lines)), area);
    }
}
