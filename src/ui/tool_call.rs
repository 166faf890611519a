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
use super::wrap::{truncate_line, truncate_str, wrap_lines};
use crate::list::{ToolCallItem, ToolStatus};
use ansi_to_tui::IntoText as _;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr as _;

/// Max output rows shown for an expanded tool call (tail).
const OUTPUT_MAX_LINES: usize = 12;

/// Max columns of the input summary on the title row.
const SUMMARY_MAX_COLS: usize = 80;

/// Input keys that make a good one-line summary, in preference order.
const SUMMARY_KEYS: &[&str] =
    &["command", "file_path", "path", "pattern", "query", "url", "description"];

pub fn render(tc: &ToolCallItem, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![title_line(tc, width)];
    let output = output_lines(&tc.output);
    let pipe = Style::default().fg(theme::DIM);

    if output.is_empty() {
        if !tc.status.is_finished() && tc.expanded {
            let running = Line::from(vec![
                Span::styled(theme::PIPE_END, pipe),
                Span::styled("running...", Style::default().fg(theme::DIM)),
            ]);
            lines.push(truncate_line(running, width));
        }
        return lines;
    }

    if !tc.expanded {
        lines.push(truncate_line(collapsed_summary(tc, &output), width));
        return lines;
    }

    let total = output.len();
    let hidden = total.saturating_sub(OUTPUT_MAX_LINES);
    let mut body: Vec<Line<'static>> = Vec::with_capacity(total.min(OUTPUT_MAX_LINES) + 1);
    if hidden > 0 {
        body.push(Line::from(Span::styled(
            format!("... {hidden} lines hidden ..."),
            Style::default().fg(theme::DIM),
        )));
    }
    body.extend(output.into_iter().skip(hidden));

    // Too narrow for the tree prefix: output rows take the full width.
    let prefix_cols = u16::try_from(theme::PIPE_MID.width()).unwrap_or(u16::MAX);
    if width <= prefix_cols {
        lines.extend(wrap_lines(body, width));
        return lines;
    }
    let inner = width - prefix_cols;
    let last_idx = body.len().saturating_sub(1);
    for (i, content) in body.into_iter().enumerate() {
        for (j, row) in wrap_lines(vec![content], inner).into_iter().enumerate() {
            let prefix = if i == last_idx && j == 0 { theme::PIPE_END } else { theme::PIPE_MID };
            let mut spans = vec![Span::styled(prefix, pipe)];
            spans.extend(row.spans);
            lines.push(Line::from(spans));
        }
    }
    lines
}

fn title_line(tc: &ToolCallItem, width: u16) -> Line<'static> {
    let (icon, icon_color) = theme::status_icon(tc.status);
    let mut spans = vec![
        Span::styled(format!("  {icon} "), Style::default().fg(icon_color)),
        Span::styled(
            tc.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ];
    let summary = input_summary(&tc.input);
    if !summary.is_empty() {
        spans.push(Span::styled(
            format!("  {}", truncate_str(&summary, SUMMARY_MAX_COLS)),
            Style::default().fg(Color::Gray),
        ));
    }
    truncate_line(Line::from(spans), width)
}

/// First line of the most descriptive input field, or compact JSON.
fn input_summary(input: &serde_json::Value) -> String {
    let raw = match input {
        serde_json::Value::Null => return String::new(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Object(map) => SUMMARY_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .map_or_else(|| input.to_string(), str::to_owned),
        other => other.to_string(),
    };
    raw.lines().next().unwrap_or("").to_owned()
}

fn collapsed_summary(tc: &ToolCallItem, output: &[Line<'static>]) -> Line<'static> {
    let last = output
        .iter()
        .rev()
        .map(super::line_text)
        .find(|text| !text.trim().is_empty())
        .unwrap_or_default();
    let text_color =
        if matches!(tc.status, ToolStatus::Failed) { theme::STATUS_ERROR } else { theme::DIM };
    let mut spans = vec![
        Span::styled(theme::PIPE_END, Style::default().fg(theme::DIM)),
        Span::styled(last, Style::default().fg(text_color)),
    ];
    let more = output.len().saturating_sub(1);
    if more > 0 {
        spans.push(Span::styled(format!("  (+{more} lines)"), Style::default().fg(theme::DIM)));
    }
    Line::from(spans)
}

/// Parse output, honouring ANSI colors. Trailing blank rows are dropped.
fn output_lines(output: &str) -> Vec<Line<'static>> {
    if output.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<Line<'static>> = if let Ok(text) = output.as_bytes().into_text() {
        text.lines
            .into_iter()
            .map(|line| {
                let spans: Vec<Span<'static>> = line
                    .spans
                    .into_iter()
                    .map(|s| Span::styled(s.content.into_owned(), s.style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    } else {
        output.lines().map(|l| Line::from(l.to_owned())).collect()
    };
    while lines.last().is_some_and(|l| super::line_text(l).trim().is_empty()) {
        lines.pop();
    }
    lines
}
