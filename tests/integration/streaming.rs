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

// Producers on other tasks feeding the list through the event queue.

use chat_scroll::list::{Item, ItemKind, Role, ScrollList, TextItem, ToolStatus};
use chat_scroll::producer::{ProducerEvent, channel};
use pretty_assertions::assert_eq;
use serde_json::json;

fn text_of(list: &ScrollList, index: usize) -> String {
    match list.item(index).map(Item::kind) {
        Some(ItemKind::Text(TextItem { text, .. })) => text.clone(),
        other => panic!("expected text at {index}, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn deltas_from_another_thread_grow_one_item() {
    let (handle, mut queue) = channel();
    let producer = tokio::spawn(async move {
        for n in 0..200 {
            handle.send(ProducerEvent::text("log", Role::Plain, format!("line {n}\n"))).unwrap();
            if n % 16 == 0 {
                tokio::task::yield_now().await;
            }
        }
    });

    let mut list = ScrollList::new(40, 8);
    while let Some(event) = queue.recv().await {
        chat_scroll::producer::apply_event(&mut list, event);
        assert!(list.at_bottom());
    }
    producer.await.unwrap();

    assert_eq!(list.len(), 1);
    let text = text_of(&list, 0);
    assert!(text.starts_with("line 0\n"));
    assert!(text.ends_with("line 199\n"));
    assert!(list.view_string().trim_end().ends_with("line 199"));
}

#[tokio::test]
async fn interleaved_tool_and_text_events() {
    let (handle, mut queue) = channel();
    handle.send(ProducerEvent::tool_call("t", "Bash", json!({ "command": "make" }))).unwrap();
    handle.send(ProducerEvent::text("a", Role::Assistant, "building ")).unwrap();
    handle.send(ProducerEvent::tool_update("t", None, Some("ok\n".into()))).unwrap();
    handle.send(ProducerEvent::text("a", Role::Assistant, "done")).unwrap();
    handle.send(ProducerEvent::tool_update("t", Some(ToolStatus::Completed), None)).unwrap();
    drop(handle);

    let mut list = ScrollList::new(60, 10);
    assert_eq!(queue.drain_into(&mut list), 5);
    assert!(queue.recv().await.is_none());

    assert_eq!(list.len(), 2);
    assert_eq!(text_of(&list, 1), "building done");
    let Some(ItemKind::ToolCall(tc)) = list.item(0).map(Item::kind) else {
        panic!("expected tool call first");
    };
    assert_eq!(tc.status, ToolStatus::Completed);
    assert_eq!(tc.output, "ok\n");
}

#[tokio::test]
async fn closing_the_queue_cancels_the_producer_only() {
    let (handle, mut queue) = channel();
    let producer = tokio::spawn(async move {
        let mut sent = 0usize;
        loop {
            let event = ProducerEvent::text(format!("m{sent}"), Role::Plain, "x");
            if handle.send(event).is_err() {
                return sent;
            }
            sent += 1;
            tokio::task::yield_now().await;
        }
    });

    let mut list = ScrollList::new(40, 5);
    while list.len() < 10 {
        if let Some(event) = queue.recv().await {
            chat_scroll::producer::apply_event(&mut list, event);
        }
    }
    queue.close();
    let sent = producer.await.unwrap();

    // whatever was buffered before the close can still be applied
    queue.drain_into(&mut list);
    assert_eq!(list.len(), sent);
    assert!(list.len() >= 10);
    for i in 0..list.len() {
        assert_eq!(text_of(&list, i), "x");
    }
}

#[tokio::test]
async fn reading_back_survives_streaming() {
    let (handle, mut queue) = channel();
    let mut list = ScrollList::new(40, 4);
    for n in 0..20 {
        handle.send(ProducerEvent::text(format!("m{n}"), Role::Plain, "row")).unwrap();
    }
    queue.drain_into(&mut list);
    list.set_focused(true);
    list.goto_top();
    list.set_auto_scroll(false);
    let parked = list.cursor();

    handle.send(ProducerEvent::text("m19", Role::Plain, " grows")).unwrap();
    handle.send(ProducerEvent::text("m20", Role::Plain, "new")).unwrap();
    queue.drain_into(&mut list);

    assert_eq!(list.cursor(), parked);
    assert_eq!(list.len(), 21);
    assert!(!list.at_bottom());
}
