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

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use std::panic::{self, AssertUnwindSafe};

/// Render markdown into owned lines, patching `base` under every span.
/// Falls back to plain text if the markdown renderer panics.
pub(super) fn render_markdown(text: &str, base: Style) -> Vec<Line<'static>> {
    render_markdown_with(text, base, render_with_tui_markdown)
}

fn render_markdown_with<F>(text: &str, base: Style, renderer: F) -> Vec<Line<'static>>
where
    F: FnOnce(&str, Style) -> Vec<Line<'static>>,
{
    if let Ok(lines) = panic::catch_unwind(AssertUnwindSafe(|| renderer(text, base))) {
        lines
    } else {
        tracing::warn!("tui-markdown panic; falling back to plain-text rendering");
        plain_lines(text, base)
    }
}

fn render_with_tui_markdown(text: &str, base: Style) -> Vec<Line<'static>> {
    let rendered = tui_markdown::from_str(text);
    rendered
        .lines
        .into_iter()
        .map(|line| {
            let spans: Vec<Span<'static>> = line
                .spans
                .into_iter()
                .map(|span| Span::styled(span.content.into_owned(), base.patch(span.style)))
                .collect();
            Line::from(spans).style(base.patch(line.style))
        })
        .collect()
}

/// One line per `\n`-separated segment, no markup interpretation.
pub(super) fn plain_lines(text: &str, style: Style) -> Vec<Line<'static>> {
    text.split('\n').map(|line| Line::from(Span::styled(line.to_owned(), style))).collect()
}
