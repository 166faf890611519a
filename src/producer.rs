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

//! Producer side of the list: content events, identity-based
//! merge-or-append, and the queue that hands events to the UI thread.

use crate::error::QueueClosed;
use crate::list::{InfoField, Item, ItemId, ItemKind, Role, ScrollList, ToolStatus};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// One unit of new content for the list, addressed by logical identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProducerEvent {
    pub id: ItemId,
    #[serde(flatten)]
    pub payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    /// Text delta; consecutive deltas with one id grow one item.
    Text {
        #[serde(default)]
        role: Role,
        text: String,
    },
    Thinking {
        text: String,
    },
    ToolCall {
        name: String,
        #[serde(default)]
        input: serde_json::Value,
        #[serde(default)]
        status: ToolStatus,
    },
    ToolUpdate {
        #[serde(default)]
        status: Option<ToolStatus>,
        /// Appended to the existing output.
        #[serde(default)]
        output: Option<String>,
    },
    Divider {
        #[serde(default)]
        label: Option<String>,
    },
    Info {
        #[serde(default)]
        fields: Vec<InfoField>,
    },
}

impl Payload {
    fn name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Thinking { .. } => "thinking",
            Self::ToolCall { .. } => "tool_call",
            Self::ToolUpdate { .. } => "tool_update",
            Self::Divider { .. } => "divider",
            Self::Info { .. } => "info",
        }
    }
}

impl ProducerEvent {
    pub fn text(id: impl Into<ItemId>, role: Role, text: impl Into<String>) -> Self {
        Self { id: id.into(), payload: Payload::Text { role, text: text.into() } }
    }

    pub fn thinking(id: impl Into<ItemId>, text: impl Into<String>) -> Self {
        Self { id: id.into(), payload: Payload::Thinking { text: text.into() } }
    }

    pub fn tool_call(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        input: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            payload: Payload::ToolCall { name: name.into(), input, status: ToolStatus::Running },
        }
    }

    pub fn tool_update(
        id: impl Into<ItemId>,
        status: Option<ToolStatus>,
        output: Option<String>,
    ) -> Self {
        Self { id: id.into(), payload: Payload::ToolUpdate { status, output } }
    }

    pub fn divider(id: impl Into<ItemId>, label: Option<String>) -> Self {
        Self { id: id.into(), payload: Payload::Divider { label } }
    }

    pub fn info(id: impl Into<ItemId>, fields: Vec<InfoField>) -> Self {
        Self { id: id.into(), payload: Payload::Info { fields } }
    }
}

/// What `apply_event` did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Merged(usize),
    Appended(usize),
    Ignored,
}

/// Merge `event` into the item it belongs to, or append a new item.
///
/// Text and thinking deltas only merge into the last item, so a new
/// message after a tool call starts a new item even when ids repeat.
/// Tool calls are looked up anywhere: they finish after later text lands.
pub fn apply_event(list: &mut ScrollList, event: ProducerEvent) -> Applied {
    let ProducerEvent { id, payload } = event;
    let kind = payload.name();
    let last = list
        .len()
        .checked_sub(1)
        .filter(|&i| list.item(i).is_some_and(|item| item.id() == &id));

    let applied = match payload {
        Payload::Text { role, text } => match last {
            Some(i) => merge(list, i, is_text, |k| {
                k.push_text(&text);
            }),
            None => append(list, Item::text(id.clone(), role, text)),
        },
        Payload::Thinking { text } => match last {
            Some(i) => merge(list, i, is_thinking, |k| {
                k.push_text(&text);
            }),
            None => append(list, Item::thinking(id.clone(), text)),
        },
        Payload::ToolCall { name, input, status } => match list.position_of(&id) {
            Some(i) => merge(list, i, is_tool_call, |k| {
                if let ItemKind::ToolCall(tc) = k {
                    tc.name = name;
                    tc.input = input;
                    tc.status = status;
                }
            }),
            None => append(list, Item::tool_call(id.clone(), name, input, status)),
        },
        Payload::ToolUpdate { status, output } => match list.position_of(&id) {
            Some(i) => merge(list, i, is_tool_call, |k| {
                if let Some(status) = status {
                    k.set_status(status);
                }
                if let Some(output) = output.as_deref() {
                    k.push_output(output);
                }
            }),
            None => Applied::Ignored,
        },
        Payload::Divider { label } => match list.position_of(&id) {
            Some(i) => merge(list, i, |k| matches!(k, ItemKind::Divider(_)), |k| {
                if let ItemKind::Divider(d) = k {
                    d.label = label;
                }
            }),
            None => append(list, Item::divider(id.clone(), label)),
        },
        Payload::Info { fields } => match list.position_of(&id) {
            Some(i) => merge(list, i, |k| matches!(k, ItemKind::Info(_)), |k| {
                if let ItemKind::Info(info) = k {
                    info.fields = fields;
                }
            }),
            None => append(list, Item::info(id.clone(), fields)),
        },
    };

    match applied {
        Applied::Merged(i) => tracing::trace!(%id, kind, index = i, "producer: merged"),
        Applied::Appended(i) => tracing::debug!(%id, kind, index = i, "producer: appended"),
        Applied::Ignored => tracing::warn!(%id, kind, "producer: event ignored"),
    }
    applied
}

fn is_text(kind: &ItemKind) -> bool {
    matches!(kind, ItemKind::Text(_))
}

fn is_thinking(kind: &ItemKind) -> bool {
    matches!(kind, ItemKind::Thinking(_))
}

fn is_tool_call(kind: &ItemKind) -> bool {
    matches!(kind, ItemKind::ToolCall(_))
}

fn append(list: &mut ScrollList, item: Item) -> Applied {
    list.append_item(item);
    Applied::Appended(list.len() - 1)
}

/// Mutate item `index` only if its kind passes `same_kind`.
fn merge(
    list: &mut ScrollList,
    index: usize,
    same_kind: impl Fn(&ItemKind) -> bool,
    f: impl FnOnce(&mut ItemKind),
) -> Applied {
    if !list.item(index).is_some_and(|item| same_kind(item.kind())) {
        return Applied::Ignored;
    }
    list.update_item(index, f);
    Applied::Merged(index)
}

/// Sending half, owned by background producers.
#[derive(Debug, Clone)]
pub struct ProducerHandle {
    tx: mpsc::UnboundedSender<ProducerEvent>,
}

impl ProducerHandle {
    /// Fails once the consumer has closed the queue.
    pub fn send(&self, event: ProducerEvent) -> Result<(), QueueClosed> {
        self.tx.send(event).map_err(|_| QueueClosed)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving half, owned by the UI thread.
#[derive(Debug)]
pub struct EventQueue {
    rx: mpsc::UnboundedReceiver<ProducerEvent>,
}

impl EventQueue {
    /// Next event; `None` once every handle is dropped and the buffer is empty.
    pub async fn recv(&mut self) -> Option<ProducerEvent> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<ProducerEvent> {
        self.rx.try_recv().ok()
    }

    /// Apply every buffered event without waiting. Returns how many were applied.
    pub fn drain_into(&mut self, list: &mut ScrollList) -> usize {
        let mut count = 0;
        while let Ok(event) = self.rx.try_recv() {
            apply_event(list, event);
            count += 1;
        }
        count
    }

    /// Cancel producers. Events already buffered can still be drained.
    pub fn close(&mut self) {
        self.rx.close();
    }
}

#[must_use]
pub fn channel() -> (ProducerHandle, EventQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ProducerHandle { tx }, EventQueue { rx })
}
