// Dweve benchgraph - Benchmark result charting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Line-by-line ingestion with a live transcript.

use crate::error::CliError;
use benchgraph_core::{Aggregator, LineStatus};
use colored::{ColoredString, Colorize};
use std::io::{BufRead, Read, Write};

/// Line counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub parsed: usize,
    pub name_invalid: usize,
    pub skipped: usize,
}

impl IngestStats {
    fn record(&mut self, status: LineStatus) {
        match status {
            LineStatus::Parsed => self.parsed += 1,
            LineStatus::NameInvalid => self.name_invalid += 1,
            LineStatus::NotABenchmarkLine => self.skipped += 1,
        }
    }

    /// Total number of lines read.
    pub fn lines(&self) -> usize {
        self.parsed + self.name_invalid + self.skipped
    }
}

/// Status mark printed in front of each echoed line.
pub fn status_mark(status: LineStatus) -> ColoredString {
    let glyph = status.glyph().to_string();
    match status {
        LineStatus::Parsed => glyph.green(),
        LineStatus::NameInvalid | LineStatus::NotABenchmarkLine => glyph.red(),
    }
}

/// Feeds every line of `reader` to `aggregator`, echoing each one to
/// `transcript` behind its status mark.
///
/// Line endings (`\n` or `\r\n`) are stripped; invalid UTF-8 is replaced
/// rather than rejected. At most `max_line_length` plus two bytes of a line
/// are buffered.
///
/// # Errors
///
/// - [`CliError::ReadInput`] if `reader` fails
/// - [`CliError::LineTooLong`] if a line exceeds `max_line_length` bytes
/// - [`CliError::Transcript`] if writing to `transcript` fails
pub fn ingest<R, W>(
    mut reader: R,
    transcript: &mut W,
    aggregator: &mut Aggregator,
    max_line_length: usize,
) -> Result<IngestStats, CliError>
where
    R: BufRead,
    W: Write,
{
    let mut stats = IngestStats::default();
    let mut buf = Vec::new();
    // Room for the longest accepted line plus its `\r\n`.
    let cap = (max_line_length as u64).saturating_add(2);

    loop {
        buf.clear();
        let read = (&mut reader)
            .take(cap)
            .read_until(b'\n', &mut buf)
            .map_err(CliError::read_input)?;
        if read == 0 {
            break;
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        if buf.len() > max_line_length {
            return Err(CliError::LineTooLong {
                line: stats.lines() + 1,
                max: max_line_length,
            });
        }

        let line = String::from_utf8_lossy(&buf);
        let status = aggregator.feed_line(&line);
        stats.record(status);

        writeln!(transcript, "{} {}", status_mark(status), line).map_err(CliError::transcript)?;
    }

    transcript.flush().map_err(CliError::transcript)?;
    Ok(stats)
}
