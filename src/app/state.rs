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

use crate::config::ListConfig;
use crate::list::{Item, ItemId, ScrollList};
use crate::producer::EventQueue;

pub struct App {
    pub list: ScrollList,
    pub queue: EventQueue,
    pub should_quit: bool,
    /// Every producer handle is gone and the queue is empty.
    pub replay_finished: bool,
}

impl App {
    /// The list starts at zero size; the first frame sizes it.
    #[must_use]
    pub fn new(queue: EventQueue, config: ListConfig) -> Self {
        let mut list = ScrollList::with_config(config, 0, 0);
        list.set_focused(true);
        Self { list, queue, should_quit: false, replay_finished: false }
    }

    /// Producer side hung up: mark the end of the session in the list.
    pub fn finish_replay(&mut self) {
        if self.replay_finished {
            return;
        }
        self.replay_finished = true;
        self.list.append_item(Item::divider(ItemId::generate(), Some("end of replay".to_owned())));
    }

    /// Stop the loop and cancel producers.
    pub fn quit(&mut self) {
        self.should_quit = true;
        self.queue.close();
    }
}
