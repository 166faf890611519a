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

use super::App;
use crate::list::ItemKind;
use crate::producer::{Applied, ProducerEvent, apply_event};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => {
            app.list.handle_mouse(mouse);
        }
        // Resize is picked up by the next draw
        _ => {}
    }
}

pub fn handle_producer_event(app: &mut App, event: ProducerEvent) {
    if apply_event(&mut app.list, event) == Applied::Ignored {
        tracing::debug!(items = app.list.len(), "demo: producer event dropped");
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => app.quit(),
        (KeyCode::Char('q'), KeyModifiers::NONE) => app.quit(),
        (KeyCode::Tab, _) => {
            let focused = app.list.focused();
            app.list.set_focused(!focused);
        }
        (KeyCode::Char('j') | KeyCode::Down, _) => app.list.select_next(),
        (KeyCode::Char('k') | KeyCode::Up, _) => app.list.select_prev(),
        (KeyCode::Esc, _) => app.list.set_selected(None),
        (KeyCode::Enter, _) => toggle_selected(app),
        _ => {
            app.list.handle_key(key);
        }
    }
}

fn toggle_selected(app: &mut App) {
    let Some(index) = app.list.selected() else {
        return;
    };
    if app.list.update_item(index, ItemKind::toggle_expanded) == Some(false) {
        tracing::trace!(index, "demo: selected item does not collapse");
    }
}
