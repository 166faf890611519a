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

use std::path::PathBuf;

/// The consumer closed the queue; the producer should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("event queue closed")]
pub struct QueueClosed;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read replay file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid event on line {line}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl ReplayError {
    pub const IO_EXIT_CODE: i32 = 20;
    pub const PARSE_EXIT_CODE: i32 = 21;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } => Self::IO_EXIT_CODE,
            Self::Parse { .. } => Self::PARSE_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { path, source } => {
                format!("Could not read replay file `{}`: {source}", path.display())
            }
            Self::Parse { line, source } => {
                format!("Replay line {line} is not a valid event: {source}")
            }
        }
    }
}
