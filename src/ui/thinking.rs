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

use super::theme;
use super::wrap::{truncate_line, wrap_lines};
use crate::list::ThinkingItem;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const INDENT_COLS: u16 = 4;

pub fn render(item: &ThinkingItem, width: u16) -> Vec<Line<'static>> {
    let dim = Style::default().fg(theme::DIM);
    let header = Span::styled(
        format!("  {} Thinking", theme::ICON_THINKING),
        dim.add_modifier(Modifier::BOLD),
    );
    let body: Vec<&str> = item.text.trim_end().lines().collect();

    if !item.expanded {
        let mut spans = vec![header];
        if let Some(first) = body.iter().find(|l| !l.trim().is_empty()) {
            spans.push(Span::styled(format!(" \u{b7} {}", first.trim()), dim));
        }
        if body.len() > 1 {
            spans.push(Span::styled(format!("  (+{} lines)", body.len() - 1), dim));
        }
        return vec![truncate_line(Line::from(spans), width)];
    }

    let mut lines = vec![truncate_line(Line::from(header), width)];
    let text_style = dim.add_modifier(Modifier::ITALIC);
    let rows: Vec<Line<'static>> =
        body.iter().map(|l| Line::from(Span::styled((*l).to_owned(), text_style))).collect();
    if width <= INDENT_COLS {
        lines.extend(wrap_lines(rows, width));
        return lines;
    }
    for row in wrap_lines(rows, width - INDENT_COLS) {
        let mut spans = vec![Span::raw("    ")];
        spans.extend(row.spans);
        lines.push(Line::from(spans));
    }
    lines
}
