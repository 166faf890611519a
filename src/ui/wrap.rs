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

//! Width fitting for rendered lines.
//!
//! Word wrapping reuses ratatui's `Paragraph` layout: an over-wide line is
//! drawn into a scratch buffer sized by `Paragraph::line_count`, and each
//! buffer row is read back as one styled display line.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '\u{2026}';

/// Stand-in for a glyph wider than the whole row.
const NARROW_PLACEHOLDER: char = '\u{FFFD}';

/// Wrap every line to at most `width` columns. Lines that already fit are
/// passed through untouched; empty lines stay as one blank row.
pub fn wrap_lines(lines: Vec<Line<'static>>, width: u16) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        let line = if width == 1 { replace_wide_glyphs(line) } else { line };
        if line.width() <= usize::from(width) {
            out.push(line);
        } else {
            out.extend(wrap_line(line, width).into_iter().flat_map(|row| split_row(row, width)));
        }
    }
    out
}

/// A one-column row can never hold a double-width glyph.
fn replace_wide_glyphs(line: Line<'static>) -> Line<'static> {
    if line.spans.iter().all(|span| span.content.chars().all(|ch| ch.width().unwrap_or(0) <= 1))
    {
        return line;
    }
    let spans: Vec<Span<'static>> = line
        .spans
        .into_iter()
        .map(|span| {
            let content: String = span
                .content
                .chars()
                .map(|ch| if ch.width().unwrap_or(0) > 1 { NARROW_PLACEHOLDER } else { ch })
                .collect();
            Span::styled(content, span.style)
        })
        .collect();
    let mut out = Line::from(spans).style(line.style);
    out.alignment = line.alignment;
    out
}

/// `Paragraph` may start a wide glyph in the last column; move whatever
/// spills past `width` onto rows of its own.
fn split_row(row: Line<'static>, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    if row.width() <= width {
        return vec![row];
    }
    let mut rows = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;
    for span in row.spans {
        let mut kept = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width && used > 0 {
                if !kept.is_empty() {
                    current.push(Span::styled(std::mem::take(&mut kept), span.style));
                }
                rows.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            }
            used += w;
            kept.push(ch);
        }
        if !kept.is_empty() {
            current.push(Span::styled(kept, span.style));
        }
    }
    if !current.is_empty() {
        rows.push(Line::from(current));
    }
    rows
}

fn wrap_line(line: Line<'static>, width: u16) -> Vec<Line<'static>> {
    let paragraph = Paragraph::new(line).wrap(Wrap { trim: false });
    let height = u16::try_from(paragraph.line_count(width)).unwrap_or(u16::MAX);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    paragraph.render(area, &mut buf);
    (0..height).map(|y| row_to_line(&buf, y, width)).collect()
}

/// Read one buffer row back into spans, merging runs of equal style and
/// stepping over the continuation cells of wide glyphs.
fn row_to_line(buf: &Buffer, y: u16, width: u16) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style: Option<Style> = None;
    let mut x = 0u16;
    while x < width {
        let Some(cell) = buf.cell((x, y)) else {
            break;
        };
        let symbol = cell.symbol();
        let style = cell.style();
        if run_style != Some(style) {
            if let Some(prev) = run_style
                && !run.is_empty()
            {
                spans.push(Span::styled(std::mem::take(&mut run), prev));
            }
            run_style = Some(style);
        }
        run.push_str(symbol);
        let advance = u16::try_from(symbol.width().max(1)).unwrap_or(1);
        x = x.saturating_add(advance);
    }
    if let Some(style) = run_style
        && !run.is_empty()
    {
        spans.push(Span::styled(run, style));
    }
    trim_blank_tail(&mut spans);
    Line::from(spans)
}

fn has_background(style: Style) -> bool {
    !matches!(style.bg, None | Some(Color::Reset))
}

/// Drop trailing padding the buffer added past the end of the text.
fn trim_blank_tail(spans: &mut Vec<Span<'static>>) {
    while let Some(last) = spans.last_mut() {
        if has_background(last.style) {
            return;
        }
        let trimmed_len = last.content.trim_end_matches(' ').len();
        if trimmed_len == 0 {
            spans.pop();
            continue;
        }
        if trimmed_len < last.content.len() {
            let mut content = last.content.to_string();
            content.truncate(trimmed_len);
            last.content = content.into();
        }
        return;
    }
}

/// Cut a line to at most `width` columns, ending in an ellipsis when
/// anything was removed.
pub fn truncate_line(line: Line<'static>, width: u16) -> Line<'static> {
    let width = usize::from(width);
    if line.width() <= width {
        return line;
    }
    let style = line.style;
    let alignment = line.alignment;
    let budget = width.saturating_sub(1);
    let mut used = 0usize;
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut last_style = Style::default();
    for span in line.spans {
        last_style = span.style;
        let mut kept = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > budget {
                break;
            }
            used += w;
            kept.push(ch);
        }
        let full = kept.len() == span.content.len();
        if !kept.is_empty() {
            spans.push(Span::styled(kept, span.style));
        }
        if !full {
            break;
        }
    }
    if width > 0 {
        spans.push(Span::styled(ELLIPSIS.to_string(), last_style));
    }
    let mut out = Line::from(spans).style(style);
    out.alignment = alignment;
    out
}

/// Truncate plain text to `max` columns with a trailing ellipsis.
pub fn truncate_str(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_owned();
    }
    let budget = max.saturating_sub(1);
    let mut used = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if max > 0 {
        out.push(ELLIPSIS);
    }
    out
}
