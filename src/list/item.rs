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

use super::cache::RenderCache;
use crate::ui;
use ratatui::text::Line;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of an item, used to merge streamed deltas into the item
/// they belong to instead of appending a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Fresh random identity for items no producer will address again.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    #[default]
    Assistant,
    System,
    /// Verbatim lines with no header or markdown (log output).
    Plain,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    Pending,
    #[default]
    Running,
    Completed,
    Failed,
}

impl ToolStatus {
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoField {
    pub label: String,
    pub value: String,
}

impl InfoField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub role: Role,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolCallItem {
    pub name: String,
    pub input: serde_json::Value,
    pub status: ToolStatus,
    /// Accumulated output, possibly containing ANSI escapes.
    pub output: String,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThinkingItem {
    pub text: String,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DividerItem {
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoItem {
    pub fields: Vec<InfoField>,
}

/// Closed set of item variants. Each variant owns its layout rules in `ui::*`.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Text(TextItem),
    ToolCall(ToolCallItem),
    Thinking(ThinkingItem),
    Divider(DividerItem),
    Info(InfoItem),
}

impl ItemKind {
    /// Short variant name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::ToolCall(_) => "tool_call",
            Self::Thinking(_) => "thinking",
            Self::Divider(_) => "divider",
            Self::Info(_) => "info",
        }
    }

    /// Append streamed text. Returns false for variants without a text body.
    pub fn push_text(&mut self, delta: &str) -> bool {
        match self {
            Self::Text(t) => t.text.push_str(delta),
            Self::Thinking(t) => t.text.push_str(delta),
            _ => return false,
        }
        true
    }

    /// Flip expand/collapse. Returns false for variants that cannot collapse.
    pub fn toggle_expanded(&mut self) -> bool {
        match self {
            Self::ToolCall(tc) => tc.expanded = !tc.expanded,
            Self::Thinking(t) => t.expanded = !t.expanded,
            _ => return false,
        }
        true
    }

    /// Returns false unless this is a tool call.
    pub fn set_status(&mut self, status: ToolStatus) -> bool {
        if let Self::ToolCall(tc) = self {
            tc.status = status;
            true
        } else {
            false
        }
    }

    /// Append tool output. Returns false unless this is a tool call.
    pub fn push_output(&mut self, chunk: &str) -> bool {
        if let Self::ToolCall(tc) = self {
            tc.output.push_str(chunk);
            true
        } else {
            false
        }
    }

    fn layout(&self, width: u16) -> Vec<Line<'static>> {
        match self {
            Self::Text(t) => ui::text::render(t, width),
            Self::ToolCall(tc) => ui::tool_call::render(tc, width),
            Self::Thinking(t) => ui::thinking::render(t, width),
            Self::Divider(d) => ui::info::render_divider(d, width),
            Self::Info(i) => ui::info::render_info(i, width),
        }
    }
}

/// One unit of list content: identity, variant payload, and its render cache.
#[derive(Debug)]
pub struct Item {
    id: ItemId,
    kind: ItemKind,
    cache: RenderCache,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, kind: ItemKind) -> Self {
        Self { id: id.into(), kind, cache: RenderCache::default() }
    }

    pub fn text(id: impl Into<ItemId>, role: Role, text: impl Into<String>) -> Self {
        Self::new(id, ItemKind::Text(TextItem { role, text: text.into() }))
    }

    pub fn tool_call(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        input: serde_json::Value,
        status: ToolStatus,
    ) -> Self {
        Self::new(
            id,
            ItemKind::ToolCall(ToolCallItem {
                name: name.into(),
                input,
                status,
                output: String::new(),
                expanded: false,
            }),
        )
    }

    pub fn thinking(id: impl Into<ItemId>, text: impl Into<String>) -> Self {
        Self::new(id, ItemKind::Thinking(ThinkingItem { text: text.into(), expanded: false }))
    }

    pub fn divider(id: impl Into<ItemId>, label: Option<String>) -> Self {
        Self::new(id, ItemKind::Divider(DividerItem { label }))
    }

    pub fn info(id: impl Into<ItemId>, fields: Vec<InfoField>) -> Self {
        Self::new(id, ItemKind::Info(InfoItem { fields }))
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Display rows at `width`. Served from cache when fresh for that width;
    /// otherwise laid out once and cached.
    pub fn render(&mut self, width: u16) -> &[Line<'static>] {
        if !self.cache.is_fresh(width) {
            let fresh = self.kind.layout(width);
            self.cache.store(width, fresh);
        }
        self.cache.get(width).unwrap_or_default()
    }

    /// Rows of the last layout, or `0` meaning "unknown, call `render`".
    #[must_use]
    pub fn height(&self) -> usize {
        self.cache.height()
    }

    /// Mark the cached layout stale. The next `render` recomputes.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Mutate the payload. Always invalidates.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut ItemKind) -> R) -> R {
        self.cache.invalidate();
        f(&mut self.kind)
    }

    /// How many times this item has actually been laid out.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.cache.renders()
    }
}
