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

pub(crate) mod info;
mod markdown;
pub(crate) mod text;
pub mod theme;
pub(crate) mod thinking;
pub(crate) mod tool_call;
pub mod wrap;

use crate::app::App;
use crate::list::ScrollMetrics;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

const FOOTER_PAD: u16 = 1;
const FOOTER_COLUMN_GAP: u16 = 1;
const KEY_HINTS: &str = "q quit \u{b7} Tab focus \u{b7} j/k select \u{b7} Enter expand";

/// Plain text of a rendered line, styles dropped.
#[must_use]
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let [body, separator, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
            .areas(frame.area());
    let [list_area, bar_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(1)]).areas(body);

    app.list.render(frame, list_area);
    let metrics = app.list.scroll_metrics();
    render_scrollbar(frame, bar_area, metrics);
    render_separator(frame, separator);
    render_footer(frame, footer, app, metrics);
}

fn render_scrollbar(frame: &mut Frame, area: Rect, metrics: ScrollMetrics) {
    let ScrollMetrics { total, position, viewport } = metrics;
    if area.width == 0 || total <= viewport {
        return;
    }
    let mut state = ScrollbarState::new(total.saturating_sub(viewport))
        .position(position)
        .viewport_content_length(viewport);
    let bar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(theme::RUST_ORANGE))
        .track_style(Style::default().fg(theme::DIM));
    frame.render_stateful_widget(bar, area, &mut state);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let rule = theme::RULE_CHAR.repeat(usize::from(area.width));
    frame.render_widget(Paragraph::new(Line::from(Span::styled(rule, theme::dim()))), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, metrics: ScrollMetrics) {
    let padded = Rect {
        x: area.x + FOOTER_PAD.min(area.width),
        y: area.y,
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        height: area.height,
    };
    let (left, right) = split_footer_columns(padded);
    frame.render_widget(Paragraph::new(status_line(app, metrics)), left);

    if right.width == 0 {
        return;
    }
    let hints = wrap::truncate_str(KEY_HINTS, usize::from(right.width));
    let line = Line::from(Span::styled(hints, theme::dim()));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), right);
}

/// `N items · P% · follow on · focused`
fn status_line(app: &App, metrics: ScrollMetrics) -> Line<'static> {
    let list = &app.list;
    let percent = (metrics.percent() * 100.0).round();
    let (follow, follow_color) = if list.auto_scroll() {
        ("follow on", theme::RUST_ORANGE)
    } else {
        ("follow off", theme::DIM)
    };
    let dot = || Span::styled("  \u{b7}  ", theme::dim());
    let mut spans = vec![
        Span::styled(format!("{} items", list.len()), Style::default().fg(Color::White)),
        dot(),
        Span::styled(format!("{percent}%"), Style::default().fg(Color::White)),
        dot(),
        Span::styled(follow, Style::default().fg(follow_color)),
    ];
    if list.focused() {
        spans.push(dot());
        spans.push(Span::styled("focused", Style::default().fg(Color::White)));
    }
    if app.replay_finished {
        spans.push(dot());
        spans.push(Span::styled("replay done", theme::dim()));
    }
    Line::from(spans)
}

fn split_footer_columns(area: Rect) -> (Rect, Rect) {
    if area.width == 0 {
        return (area, Rect { width: 0, ..area });
    }

    let gap = if area.width > 2 { FOOTER_COLUMN_GAP } else { 0 };
    let usable_width = area.width.saturating_sub(gap);
    let left_width = usable_width.saturating_add(1) / 2;
    let right_width = usable_width.saturating_sub(left_width);

    let left = Rect { width: left_width, ..area };
    let right = Rect {
        x: area.x.saturating_add(left_width).saturating_add(gap),
        width: right_width,
        ..area
    };
    (left, right)
}
