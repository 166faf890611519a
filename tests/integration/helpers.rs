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

use chat_scroll::config::ListConfig;
use chat_scroll::list::{Item, Role, ScrollList};

/// Plain item with exactly `rows` short lines.
pub fn block(id: &str, rows: usize) -> Item {
    let body: Vec<String> = (0..rows).map(|r| format!("{id}:{r}")).collect();
    Item::text(id, Role::Plain, body.join("\n"))
}

/// List of plain blocks with auto-scroll off, cursor at the top.
pub fn list_with(heights: &[usize], separator: bool, width: u16, height: u16) -> ScrollList {
    let config = ListConfig::default().with_separator(separator);
    let mut list = ScrollList::with_config(config, width, height);
    list.set_auto_scroll(false);
    list.set_items(heights.iter().enumerate().map(|(i, &h)| block(&format!("i{i}"), h)).collect());
    list.goto_top();
    list
}

/// Deterministic linear congruential generator for reproducible sweeps.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    /// Uniform in `lo..hi`.
    pub fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next() % (hi - lo)
    }
}

/// The cursor names a real row: a valid item, and a line inside that
/// item's row span (content rows plus its separator row, if any).
pub fn assert_cursor_valid(list: &ScrollList, context: &str) {
    let cursor = list.cursor();
    if list.is_empty() {
        assert_eq!((cursor.item, cursor.line), (0, 0), "{context}: empty list");
        return;
    }
    assert!(cursor.item < list.len(), "{context}: item {} of {}", cursor.item, list.len());
    let height = list.item(cursor.item).map_or(0, Item::height);
    if height == 0 {
        return;
    }
    let separator = list.config().separator && cursor.item + 1 < list.len();
    let span = height + usize::from(separator);
    assert!(cursor.line < span, "{context}: line {} of span {span}", cursor.line);
}
