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

// Loading JSON-lines replay files and applying them to a list.

use chat_scroll::app::replay::{load_events, parse_events};
use chat_scroll::error::ReplayError;
use chat_scroll::list::ScrollList;
use chat_scroll::producer::{Applied, apply_event};
use pretty_assertions::assert_eq;
use std::io::Write as _;
use std::path::Path;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn bundled_session_replays_without_ignored_events() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/session.jsonl");
    let events = load_events(&path).unwrap();
    let mut list = ScrollList::new(80, 12);
    for event in events {
        assert_ne!(apply_event(&mut list, event), Applied::Ignored);
    }
    let ids: Vec<&str> = list.items().iter().map(|item| item.id().as_str()).collect();
    assert_eq!(ids, vec!["info", "u1", "th1", "a1", "b1", "d1", "log", "a2"]);
    assert!(list.at_bottom());
}

#[test]
fn temp_file_round_trip() {
    let file = write_temp(
        "{\"id\":\"a\",\"kind\":\"text\",\"role\":\"user\",\"text\":\"hi\"}\n\
         {\"id\":\"d\",\"kind\":\"divider\"}\n",
    );
    let events = load_events(file.path()).unwrap();
    assert_eq!(events.len(), 2);
}

#[test]
fn malformed_line_names_its_line() {
    let file =
        write_temp("# header\n{\"id\":\"a\",\"kind\":\"text\",\"text\":\"ok\"}\n\n{\"id\":3}\n");
    let err = load_events(file.path()).unwrap_err();
    match &err {
        ReplayError::Parse { line, .. } => assert_eq!(*line, 4),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert_eq!(err.exit_code(), ReplayError::PARSE_EXIT_CODE);
}

#[test]
fn unreadable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_events(&dir.path().join("absent.jsonl")).unwrap_err();
    assert_eq!(err.exit_code(), ReplayError::IO_EXIT_CODE);
    assert!(err.user_message().contains("absent.jsonl"));
}

#[test]
fn empty_source_is_no_events() {
    assert!(parse_events("\n# nothing here\n").unwrap().is_empty());
}
