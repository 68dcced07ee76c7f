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

//! benchgraph CLI library.
//!
//! One run is a single forward pass:
//!
//! 1. [`ingest`](ingest::ingest) reads standard input line by line, echoing
//!    each line with its status mark and aggregating benchmark records
//! 2. the finished aggregation is rendered into a chart document
//! 3. the document is written to the configured output
//!
//! # Exit Codes
//!
//! - `0`: charts written
//! - `1`: standard input could not be read, or it held no benchmark results
//!
//! # Configuration
//!
//! - **Flags**: see [`Args`](cli::Args)
//! - **`BENCHGRAPH_MAX_LINE_LENGTH`**: longest accepted input line in bytes
//!   (default 64 KiB); a longer line is a read failure
//! - **`RUST_LOG`**: diagnostic log filter, logs go to stderr

pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;

use benchgraph_chart::{Page, PageRenderer, Renderer};
use benchgraph_core::Aggregator;
use config::{Config, OutputTarget};
use error::CliError;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use tracing::info;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Line counts from ingestion.
    pub stats: ingest::IngestStats,
    /// The rendered document.
    pub page: Page,
}

/// Runs one ingestion-and-render pass.
///
/// The transcript goes to `stdout`, as does the document when the output
/// target is `-`.
///
/// # Errors
///
/// - any ingestion error (see [`ingest::ingest`])
/// - [`CliError::NoData`] if no benchmark record was found
/// - [`CliError::Output`] if the document cannot be written
pub fn run<R, W>(config: &Config, input: R, stdout: &mut W) -> Result<RunSummary, CliError>
where
    R: BufRead,
    W: Write,
{
    let mut aggregator = Aggregator::with_overrides(config.overrides.clone());
    let stats = ingest::ingest(input, stdout, &mut aggregator, config.max_line_length)?;
    let aggregation = aggregator.finish()?;

    let page = PageRenderer::new(config.render.clone()).render(&aggregation);
    write_document(&page, &config.output, stdout)?;

    info!(
        output = %config.output.display_path().display(),
        charts = page.charts.len(),
        "wrote chart document"
    );

    Ok(RunSummary { stats, page })
}

fn write_document<W: Write>(
    page: &Page,
    target: &OutputTarget,
    stdout: &mut W,
) -> Result<(), CliError> {
    match target {
        OutputTarget::Stdout => page
            .write_json(&mut *stdout)
            .map_err(|e| CliError::document("-", e)),
        OutputTarget::File(path) => {
            let file = File::create(path).map_err(|e| CliError::output(path, e))?;
            let mut writer = BufWriter::new(file);
            page.write_json(&mut writer)
                .map_err(|e| CliError::document(path, e))?;
            writer.flush().map_err(|e| CliError::output(path, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;
    use std::io::{self, BufReader, Cursor, Read};

    const INPUT: &str = "goos: linux\n\
                         BenchmarkInsert/100-4  1000  523 ns/op  128 B/op  3 allocs/op\n\
                         PASS\n";

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    fn config(argv: &[&str]) -> Config {
        let mut full = vec!["benchgraph"];
        full.extend_from_slice(argv);
        Config::from_args(&Args::parse_from(full))
    }

    #[test]
    fn test_run_writes_document_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts.json");
        let config = config(&["-o", path.to_str().unwrap()]);
        let mut stdout = Vec::new();

        let summary = run(&config, Cursor::new(INPUT), &mut stdout).unwrap();

        assert_eq!(summary.stats.parsed, 1);
        assert_eq!(summary.stats.skipped, 2);
        assert_eq!(summary.page.charts.len(), 4);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.trim_end(), summary.page.to_json().unwrap());
    }

    #[test]
    fn test_run_document_to_stdout_follows_transcript() {
        let config = config(&["-o", "-"]);
        let mut stdout = Vec::new();

        run(&config, Cursor::new(INPUT), &mut stdout).unwrap();

        let text = String::from_utf8(stdout).unwrap();
        let doc_start = text.find("{\n").unwrap();
        assert!(text[..doc_start].contains("PASS"));
        let value: serde_json::Value = serde_json::from_str(&text[doc_start..]).unwrap();
        assert_eq!(value["charts"][1]["series"][0]["data"][0], 523.0);
    }

    #[test]
    fn test_run_empty_input_is_no_data() {
        let config = config(&["-o", "-"]);
        let mut stdout = Vec::new();

        let err = run(&config, Cursor::new("PASS\nok  \tpkg\t0.1s\n"), &mut stdout).unwrap_err();

        assert!(matches!(err, CliError::NoData));
        assert_eq!(err.exit_code(), 1);
        assert!(!String::from_utf8(stdout).unwrap().contains('{'));
    }

    #[test]
    fn test_run_read_error_precedes_empty_check() {
        let config = config(&["-o", "-"]);
        let mut stdout = Vec::new();

        let err = run(&config, BufReader::new(FailingReader), &mut stdout).unwrap_err();

        assert!(matches!(err, CliError::ReadInput { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_run_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("charts.json");
        let config = config(&["-o", path.to_str().unwrap()]);
        let mut stdout = Vec::new();

        let err = run(&config, Cursor::new(INPUT), &mut stdout).unwrap_err();

        assert!(matches!(err, CliError::Output { .. }));
    }
}
