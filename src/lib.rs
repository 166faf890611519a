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

pub mod app;
pub mod config;
pub mod error;
pub mod list;
pub mod producer;
pub mod ui;

use clap::Parser;
use config::ListConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chat-scroll-demo", about = "Virtualized chat transcript viewer")]
pub struct Cli {
    /// JSON-lines file of producer events to replay (defaults to a built-in session)
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,

    /// Delay between replayed events, in milliseconds
    #[arg(long, default_value_t = 40)]
    pub delay_ms: u64,

    /// Draw items back to back without a blank row between them
    #[arg(long)]
    pub no_separator: bool,

    /// Rows per mouse wheel notch
    #[arg(long, default_value_t = config::DEFAULT_WHEEL_STEP)]
    pub wheel_step: usize,

    /// Write tracing diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directives (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}

impl Cli {
    #[must_use]
    pub fn list_config(&self) -> ListConfig {
        ListConfig::default().with_separator(!self.no_separator).with_wheel_step(self.wheel_step)
    }
}
