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

//! Virtualized scroll list: items with per-width render caches, a two-part
//! cursor, and the container that ties them into a bounded-height view.

mod cache;
mod cursor;
mod item;
mod keys;
mod scroll_list;

pub use cache::RenderCache;
pub use cursor::Cursor;
pub use item::{
    DividerItem, InfoField, InfoItem, Item, ItemId, ItemKind, Role, TextItem, ThinkingItem,
    ToolCallItem, ToolStatus,
};
pub use scroll_list::{ScrollList, ScrollMetrics};
