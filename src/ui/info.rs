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
use super::wrap::truncate_line;
use crate::list::{DividerItem, InfoItem};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Full-width rule, optionally labelled near the left edge: `── label ─────`.
pub fn render_divider(item: &DividerItem, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let dim = Style::default().fg(theme::DIM);
    let Some(label) = item.label.as_deref().filter(|l| !l.is_empty()) else {
        return vec![Line::from(Span::styled(theme::RULE_CHAR.repeat(width), dim))];
    };
    let lead = theme::RULE_CHAR.repeat(2);
    let label = format!(" {label} ");
    let fill = width.saturating_sub(2 + label.width());
    let line = Line::from(vec![
        Span::styled(lead, dim),
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(theme::RULE_CHAR.repeat(fill), dim),
    ]);
    vec![truncate_line(line, u16::try_from(width).unwrap_or(u16::MAX))]
}

/// Composite `label: value · label: value` line, cut to width.
pub fn render_info(item: &InfoItem, width: u16) -> Vec<Line<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::with_capacity(item.fields.len() * 3);
    for (i, field) in item.fields.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  \u{b7}  ", Style::default().fg(theme::DIM)));
        }
        spans.push(Span::styled(format!("{}: ", field.label), Style::default().fg(theme::DIM)));
        spans.push(Span::styled(field.value.clone(), Style::default().fg(Color::White)));
    }
    vec![truncate_line(Line::from(spans), width)]
}
