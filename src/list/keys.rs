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

use super::ScrollList;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

impl ScrollList {
    /// Navigation keys while focused. Returns whether the key was consumed;
    /// anything other than PageUp/PageDown/Home/End is left to the owner.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.focused() || !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return false;
        }
        match key.code {
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => {
                self.goto_top();
                self.auto_scroll = false;
            }
            KeyCode::End => self.set_auto_scroll(true),
            _ => return false,
        }
        true
    }

    /// Wheel scrolling inside the last rendered area. Works without focus.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if !self.area.contains(Position::new(mouse.column, mouse.row)) {
            return false;
        }
        let step = isize::try_from(self.config().wheel_step).unwrap_or(isize::MAX);
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_up_by(step),
            MouseEventKind::ScrollDown => self.scroll_down_by(step),
            _ => return false,
        }
        true
    }

    pub fn page_up(&mut self) {
        self.scroll_up_by(self.page_rows());
    }

    pub fn page_down(&mut self) {
        self.scroll_down_by(self.page_rows());
    }

    fn page_rows(&self) -> isize {
        isize::try_from(self.height()).unwrap_or(isize::MAX)
    }

    fn scroll_up_by(&mut self, rows: isize) {
        self.scroll_by(-rows);
        self.auto_scroll = false;
    }

    // Follow resumes only if the move reached the bottom.
    fn scroll_down_by(&mut self, rows: isize) {
        self.scroll_by(rows);
        self.auto_scroll = self.at_bottom();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListConfig;
    use crate::list::{Cursor, Item, Role};
    use crossterm::event::{KeyEventState, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    fn list(heights: &[usize], height: u16) -> ScrollList {
        let config = ListConfig::default().with_separator(false);
        let mut list = ScrollList::with_config(config, 20, height);
        list.set_items(
            heights
                .iter()
                .enumerate()
                .map(|(i, &h)| {
                    let body: Vec<String> = (0..h).map(|r| format!("{i}.{r}")).collect();
                    Item::text(format!("i{i}"), Role::Plain, body.join("\n"))
                })
                .collect(),
        );
        list.set_focused(true);
        list
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn wheel(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn unfocused_list_ignores_keys() {
        let mut list = list(&[10, 10], 4);
        list.set_focused(false);
        let before = list.cursor();
        assert!(!list.handle_key(press(KeyCode::PageUp)));
        assert_eq!(list.cursor(), before);
        assert!(list.auto_scroll());
    }

    #[test]
    fn page_up_disables_follow() {
        let mut list = list(&[10, 10], 4);
        assert_eq!(list.cursor(), Cursor::new(1, 6));
        assert!(list.handle_key(press(KeyCode::PageUp)));
        assert_eq!(list.cursor(), Cursor::new(1, 2));
        assert!(!list.auto_scroll());
    }

    #[test]
    fn page_down_reengages_follow_only_at_bottom() {
        let mut list = list(&[10, 10], 4);
        list.handle_key(press(KeyCode::Home));
        list.handle_key(press(KeyCode::PageDown));
        assert_eq!(list.cursor(), Cursor::new(0, 4));
        assert!(!list.auto_scroll());
        for _ in 0..4 {
            list.handle_key(press(KeyCode::PageDown));
        }
        assert!(list.at_bottom());
        assert!(list.auto_scroll());
    }

    #[test]
    fn home_and_end() {
        let mut list = list(&[10, 10], 4);
        assert!(list.handle_key(press(KeyCode::Home)));
        assert_eq!(list.cursor(), Cursor::TOP);
        assert!(!list.auto_scroll());
        assert!(list.handle_key(press(KeyCode::End)));
        assert!(list.at_bottom());
        assert!(list.auto_scroll());
    }

    #[test]
    fn other_keys_are_not_consumed() {
        let mut list = list(&[10], 4);
        assert!(!list.handle_key(press(KeyCode::Char('j'))));
        assert!(!list.handle_key(press(KeyCode::Up)));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut list = list(&[10, 10], 4);
        let release = KeyEvent {
            code: KeyCode::PageUp,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(!list.handle_key(release));
        assert!(list.auto_scroll());
    }

    #[test]
    fn wheel_scrolls_inside_area_only() {
        let mut list = list(&[10, 10], 4);
        list.area = Rect::new(0, 0, 20, 4);
        list.set_focused(false);
        assert!(!list.handle_mouse(wheel(MouseEventKind::ScrollUp, 5, 10)));
        assert_eq!(list.cursor(), Cursor::new(1, 6));
        assert!(list.handle_mouse(wheel(MouseEventKind::ScrollUp, 5, 1)));
        assert_eq!(list.cursor(), Cursor::new(1, 3));
        assert!(!list.auto_scroll());
        assert!(list.handle_mouse(wheel(MouseEventKind::ScrollDown, 5, 1)));
        assert!(list.auto_scroll());
    }
}
