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

// Cursor and view behaviour of the scroll list under mixed operations.

use chat_scroll::config::ListConfig;
use chat_scroll::list::{Cursor, Item, ItemKind, Role, ScrollList};
use chat_scroll::ui::line_text;
use pretty_assertions::assert_eq;

use crate::helpers::{Lcg, assert_cursor_valid, block, list_with};

fn view(list: &mut ScrollList) -> Vec<String> {
    list.view().iter().map(line_text).collect()
}

// --- worked examples ---

#[test]
fn heights_5_1_8_viewport_4_pins_into_last_item() {
    let mut list = list_with(&[5, 1, 8], false, 40, 4);
    list.goto_bottom();
    assert_eq!(list.cursor(), Cursor::new(2, 4));
    assert_eq!(view(&mut list), vec!["i2:4", "i2:5", "i2:6", "i2:7"]);
}

#[test]
fn fifty_appends_stay_pinned_then_manual_mode_holds_still() {
    let mut list = ScrollList::new(60, 10);
    for i in 0..50 {
        list.append_item(block(&format!("m{i}"), 1));
        assert!(list.at_bottom(), "append {i}");
    }
    list.set_auto_scroll(false);
    let before = list.cursor();
    list.append_item(block("late", 1));
    assert_eq!(list.cursor(), before);
}

#[test]
fn streamed_text_equals_single_shot() {
    let mut list = ScrollList::new(50, 10);
    list.append_item(Item::text("s", Role::Assistant, ""));
    for delta in ["Hello ", "world ", "test"] {
        list.update_item(0, |kind| kind.push_text(delta));
        list.view();
    }
    let mut single = ScrollList::new(50, 10);
    single.append_item(Item::text("s", Role::Assistant, "Hello world test"));
    assert_eq!(list.len(), 1);
    assert_eq!(view(&mut list), view(&mut single));
}

// --- properties swept over pseudo-random operation sequences ---

fn random_item(rng: &mut Lcg, n: u64) -> Item {
    let rows = usize::try_from(rng.range(1, 7)).unwrap();
    if rng.range(0, 4) == 0 {
        // one long line so that width changes alter the height
        let len = usize::try_from(rng.range(20, 120)).unwrap();
        Item::text(format!("w{n}"), Role::Plain, "y".repeat(len))
    } else {
        block(&format!("r{n}"), rows)
    }
}

fn run_sweep(seed: u64, separator: bool) {
    let mut rng = Lcg::new(seed);
    let config = ListConfig::default().with_separator(separator);
    let mut list = ScrollList::with_config(config, 30, 6);
    list.set_auto_scroll(false);
    for step in 0..400u64 {
        let context = format!("seed {seed} step {step}");
        match rng.range(0, 8) {
            0 | 1 => {
                list.append_item(random_item(&mut rng, step));
                if list.auto_scroll() {
                    assert!(list.at_bottom(), "{context}: follow mode off the bottom");
                }
            }
            2 => {
                let delta = isize::try_from(rng.range(0, 31)).unwrap() - 15;
                list.scroll_by(delta);
            }
            3 => {
                let width = u16::try_from(rng.range(8, 60)).unwrap();
                let height = u16::try_from(rng.range(1, 12)).unwrap();
                list.set_size(width, height);
            }
            4 if !list.is_empty() => {
                let len = u64::try_from(list.len()).unwrap();
                let index = usize::try_from(rng.range(0, len)).unwrap();
                let extra = "\nmore".repeat(usize::try_from(rng.range(0, 4)).unwrap());
                list.update_item(index, |kind| kind.push_text(&extra));
            }
            5 => {
                let count = rng.range(0, 6);
                list.set_items((0..count).map(|n| random_item(&mut rng, step * 10 + n)).collect());
            }
            6 => {
                let on = rng.range(0, 2) == 0;
                list.set_auto_scroll(on);
            }
            _ => list.goto_top(),
        }
        assert_cursor_valid(&list, &context);

        let rows = view(&mut list);
        assert!(rows.len() <= usize::from(list.height()), "{context}: view too tall");
        assert!(
            list.view().iter().all(|line| line.width() <= usize::from(list.width())),
            "{context}: view too wide"
        );
    }
}

#[test]
fn cursor_stays_valid_without_separators() {
    for seed in 1..=8 {
        run_sweep(seed, false);
    }
}

#[test]
fn cursor_stays_valid_with_separators() {
    for seed in 11..=18 {
        run_sweep(seed, true);
    }
}

#[test]
fn goto_bottom_always_reports_at_bottom() {
    let mut rng = Lcg::new(99);
    for case in 0..200 {
        let count = usize::try_from(rng.range(1, 12)).unwrap();
        let heights: Vec<usize> =
            (0..count).map(|_| usize::try_from(rng.range(1, 9)).unwrap()).collect();
        let viewport = u16::try_from(rng.range(1, 20)).unwrap();
        let separator = case % 2 == 0;
        let mut list = list_with(&heights, separator, 40, viewport);
        list.goto_bottom();
        assert!(list.at_bottom(), "heights {heights:?} viewport {viewport}");
        let shown = list.view().len();
        let total = list.total_line_count();
        assert_eq!(shown, total.min(usize::from(viewport)), "heights {heights:?}");
    }
}

#[test]
fn unclamped_scrolls_are_reversible() {
    let mut rng = Lcg::new(7);
    for _ in 0..200 {
        let count = usize::try_from(rng.range(2, 10)).unwrap();
        let heights: Vec<usize> =
            (0..count).map(|_| usize::try_from(rng.range(1, 9)).unwrap()).collect();
        let mut list = list_with(&heights, rng.range(0, 2) == 0, 40, 5);
        let start = usize::try_from(rng.range(0, 20)).unwrap();
        list.scroll_by(isize::try_from(start).unwrap());
        let origin = list.cursor();
        let p0 = list.scroll_position();
        let n = usize::try_from(rng.range(1, 15)).unwrap();
        list.scroll_by(isize::try_from(n).unwrap());
        if list.scroll_position() != p0 + n {
            continue;
        }
        list.scroll_by(-isize::try_from(n).unwrap());
        assert_eq!(list.cursor(), origin, "heights {heights:?} start {start} n {n}");
    }
}

#[test]
fn scroll_percent_tracks_position() {
    let mut list = list_with(&[10, 10], false, 40, 5);
    assert!((list.scroll_percent() - 0.0).abs() < f64::EPSILON);
    list.scroll_by(-3);
    assert_eq!(list.cursor(), Cursor::TOP);
    list.goto_bottom();
    assert!((list.scroll_percent() - 1.0).abs() < f64::EPSILON);
    list.scroll_by(100);
    assert!((list.scroll_percent() - 1.0).abs() < f64::EPSILON);
}

// --- resize ---

#[test]
fn resize_only_relayouts_what_becomes_visible() {
    let mut list = list_with(&[2; 40], false, 40, 4);
    list.goto_bottom();
    list.view();
    let before: Vec<u64> = list.items().iter().map(Item::render_count).collect();
    list.set_size(20, 4);
    list.view();
    let relaid = list
        .items()
        .iter()
        .zip(&before)
        .filter(|(item, was)| item.render_count() > **was)
        .count();
    assert!(relaid <= 3, "relaid {relaid} items");
}

#[test]
fn narrowing_rewraps_and_keeps_bottom_pinned() {
    let mut list = ScrollList::new(40, 3);
    list.append_item(Item::text("p", Role::Plain, "z".repeat(30)));
    assert_eq!(list.total_line_count(), 1);
    list.set_size(10, 3);
    assert_eq!(list.total_line_count(), 3);
    assert!(list.at_bottom());
    assert_eq!(view(&mut list), vec!["z".repeat(10); 3]);
}

// --- selection and identity ---

#[test]
fn toggling_selected_tool_call_changes_its_height() {
    let mut list = ScrollList::new(60, 20);
    list.append_item(Item::tool_call("t", "Bash", serde_json::Value::Null, Default::default()));
    list.update_item(0, |kind| kind.push_output("a\nb\nc\n"));
    let collapsed = list.total_line_count();
    list.update_item(0, ItemKind::toggle_expanded);
    assert_eq!(list.total_line_count(), collapsed + 2);
}

#[test]
fn selection_is_dropped_when_items_shrink() {
    let mut list = list_with(&[1, 1, 1], true, 40, 5);
    list.set_selected(Some(2));
    list.set_items(vec![block("only", 1)]);
    assert_eq!(list.selected(), None);
    list.select_next();
    assert_eq!(list.selected(), Some(0));
}
