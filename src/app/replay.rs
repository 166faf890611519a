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

//! Scripted producers for the demo: JSON-lines replay files and a
//! built-in session.

use crate::error::ReplayError;
use crate::list::{InfoField, Role, ToolStatus};
use crate::producer::{ProducerEvent, ProducerHandle};
use serde_json::json;
use std::path::Path;
use std::time::Duration;
use tokio::task::JoinHandle;

/// One event per line. Blank lines and `#` comments are skipped; line
/// numbers in errors are 1-based.
pub fn parse_events(source: &str) -> Result<Vec<ProducerEvent>, ReplayError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line)
                .map_err(|source| ReplayError::Parse { line: index + 1, source })
        })
        .collect()
}

pub fn load_events(path: &Path) -> Result<Vec<ProducerEvent>, ReplayError> {
    let source = std::fs::read_to_string(path)
        .map_err(|source| ReplayError::Io { path: path.to_path_buf(), source })?;
    let events = parse_events(&source)?;
    tracing::info!(path = %path.display(), count = events.len(), "replay: loaded events");
    Ok(events)
}

/// Feed `events` into the queue, sleeping `delay` before each one. Stops
/// early once the consumer closes the queue. Resolves to the number sent.
pub fn spawn_replay(
    events: Vec<ProducerEvent>,
    handle: ProducerHandle,
    delay: Duration,
) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut sent = 0usize;
        for event in events {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if handle.send(event).is_err() {
                tracing::debug!(sent, "replay: queue closed, stopping");
                break;
            }
            sent += 1;
        }
        sent
    })
}

/// Split `text` into word-sized deltas the way a streaming model emits them.
fn stream(events: &mut Vec<ProducerEvent>, id: &str, role: Role, text: &str) {
    for chunk in text.split_inclusive(' ') {
        events.push(ProducerEvent::text(id, role, chunk));
    }
}

fn tool_output(events: &mut Vec<ProducerEvent>, id: &str, lines: &[&str]) {
    for line in lines {
        events.push(ProducerEvent::tool_update(id, None, Some(format!("{line}\n"))));
    }
}

#[must_use]
pub fn builtin_script() -> Vec<ProducerEvent> {
    let mut events = Vec::new();
    events.push(ProducerEvent::info(
        "session",
        vec![InfoField::new("model", "demo"), InfoField::new("cwd", "~/chat-scroll")],
    ));
    events.push(ProducerEvent::text(
        "u1",
        Role::User,
        "Why does the list jump when I resize the terminal?",
    ));
    for chunk in [
        "Resize keeps every cache. ",
        "Only items that come back ",
        "into view re-wrap.",
    ] {
        events.push(ProducerEvent::thinking("th1", chunk));
    }
    stream(
        &mut events,
        "a1",
        Role::Assistant,
        "Let me look at how the cursor is clamped after a **resize**. \
         I'll start by listing the relevant files.",
    );
    events.push(ProducerEvent::tool_call("t1", "Bash", json!({ "command": "ls src/list" })));
    tool_output(
        &mut events,
        "t1",
        &["cache.rs", "cursor.rs", "item.rs", "keys.rs", "mod.rs", "scroll_list.rs"],
    );
    events.push(ProducerEvent::tool_update("t1", Some(ToolStatus::Completed), None));
    events.push(ProducerEvent::tool_call(
        "t2",
        "Grep",
        json!({ "pattern": "fn clamp_to", "path": "src/list" }),
    ));
    stream(
        &mut events,
        "a2",
        Role::Assistant,
        "The clamp runs after every resize, so the cursor line never points \
         past the end of its item:\n\n- an item past the end collapses onto the last one\n\
         - a line past the end of its item lands on that item's last row\n",
    );
    tool_output(&mut events, "t2", &["src/list/cursor.rs:33:    pub fn clamp_to("]);
    events.push(ProducerEvent::tool_update("t2", Some(ToolStatus::Completed), None));
    events.push(ProducerEvent::divider("d1", Some("turn 2".to_owned())));
    events.push(ProducerEvent::text("u2", Role::User, "Run the tests."));
    events.push(ProducerEvent::tool_call("t3", "Bash", json!({ "command": "cargo test" })));
    let mut test_lines = vec!["   Compiling chat-scroll".to_owned()];
    test_lines.extend((1..=24).map(|n| format!("test case_{n:02} ... \u{1b}[32mok\u{1b}[0m")));
    test_lines.push("test result: ok. 24 passed; 0 failed".to_owned());
    let refs: Vec<&str> = test_lines.iter().map(String::as_str).collect();
    tool_output(&mut events, "t3", &refs);
    events.push(ProducerEvent::tool_update("t3", Some(ToolStatus::Completed), None));
    stream(&mut events, "a3", Role::Assistant, "All 24 tests pass.");
    events.push(ProducerEvent::info(
        "session",
        vec![
            InfoField::new("model", "demo"),
            InfoField::new("cwd", "~/chat-scroll"),
            InfoField::new("turns", "2"),
        ],
    ));
    events
}
