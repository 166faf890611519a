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

use super::markdown;
use super::theme;
use super::wrap::{truncate_line, wrap_lines};
use crate::list::{Role, TextItem};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

fn role_header(role: Role) -> Option<Line<'static>> {
    let (label, color) = match role {
        Role::User => ("You", theme::ROLE_USER),
        Role::Assistant => ("Assistant", theme::ROLE_ASSISTANT),
        Role::System | Role::Plain => return None,
    };
    Some(Line::from(Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD))))
}

pub fn render(item: &TextItem, width: u16) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> =
        role_header(item.role).map(|header| truncate_line(header, width)).into_iter().collect();
    let body = match item.role {
        Role::User | Role::Assistant => {
            if item.text.trim().is_empty() {
                Vec::new()
            } else {
                markdown::render_markdown(&item.text, Style::default())
            }
        }
        Role::System => {
            markdown::plain_lines(&item.text, Style::default().fg(theme::ROLE_SYSTEM))
        }
        Role::Plain => markdown::plain_lines(&item.text, Style::default()),
    };
    lines.extend(wrap_lines(body, width));
    lines
}
