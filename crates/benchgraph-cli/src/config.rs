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

//! Run configuration resolved from arguments and environment.

use crate::cli::Args;
use benchgraph_chart::RenderConfig;
use benchgraph_core::{KeyOrder, OrderOverrides};
use std::path::PathBuf;

/// Default maximum input line length in bytes (64 KiB).
/// Can be overridden via the `BENCHGRAPH_MAX_LINE_LENGTH` environment variable.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 64 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_LINE_LENGTH`].
pub const MAX_LINE_LENGTH_ENV: &str = "BENCHGRAPH_MAX_LINE_LENGTH";

/// Where the chart document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output, after the transcript.
    Stdout,
    /// A file, created or truncated.
    File(PathBuf),
}

impl OutputTarget {
    /// Parses an output argument; `-` means standard output.
    pub fn parse(arg: &str) -> Self {
        match arg {
            "-" => Self::Stdout,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Path shown in messages.
    pub fn display_path(&self) -> PathBuf {
        match self {
            Self::Stdout => PathBuf::from("-"),
            Self::File(path) => path.clone(),
        }
    }
}

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Axis order overrides for the aggregator.
    pub overrides: OrderOverrides,
    /// Options for the renderer.
    pub render: RenderConfig,
    /// Chart document destination.
    pub output: OutputTarget,
    /// Longest accepted input line in bytes.
    pub max_line_length: usize,
}

impl Config {
    /// Resolves the configuration from `args` and the environment.
    pub fn from_args(args: &Args) -> Self {
        Self {
            overrides: OrderOverrides {
                names: order_from_list(&args.bench_names),
                args: order_from_list(&args.bench_args),
            },
            render: RenderConfig {
                shape: args.shape.into(),
                show_max_line: args.max_line,
                show_avg_line: args.avg_line,
                title_prefix: args.title.clone(),
            },
            output: OutputTarget::parse(&args.output),
            max_line_length: parse_max_line_length(std::env::var(MAX_LINE_LENGTH_ENV).ok()),
        }
    }
}

/// Builds a key order from a comma-split flag, ignoring blank entries.
fn order_from_list(values: &[String]) -> KeyOrder {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Reads the line length limit, falling back to the default on a missing,
/// zero or unparsable value.
fn parse_max_line_length(value: Option<String>) -> usize {
    value
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_MAX_LINE_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchgraph_chart::ChartShape;
    use clap::Parser;

    #[test]
    fn test_from_default_args() {
        let config = Config::from_args(&Args::parse_from(["benchgraph"]));
        assert!(config.overrides.names.is_empty());
        assert!(config.overrides.args.is_empty());
        assert_eq!(config.render, RenderConfig::default());
        assert_eq!(
            config.output,
            OutputTarget::File(PathBuf::from("benchgraph.json"))
        );
    }

    #[test]
    fn test_orders_are_trimmed_and_deduplicated() {
        let args = Args::parse_from(["benchgraph", "--obn", "Map, Slice,,Map", "--oba", "10,100"]);
        let config = Config::from_args(&args);
        assert_eq!(config.overrides.names.as_slice(), ["Map", "Slice"]);
        assert_eq!(config.overrides.args.as_slice(), ["10", "100"]);
    }

    #[test]
    fn test_render_options() {
        let args = Args::parse_from([
            "benchgraph",
            "--shape",
            "area",
            "--avg",
            "--title",
            "Graph: ",
            "-o",
            "-",
        ]);
        let config = Config::from_args(&args);
        assert_eq!(config.render.shape, ChartShape::Area);
        assert!(config.render.show_avg_line);
        assert!(!config.render.show_max_line);
        assert_eq!(config.render.title_prefix, "Graph: ");
        assert_eq!(config.output, OutputTarget::Stdout);
    }

    #[test]
    fn test_parse_max_line_length() {
        assert_eq!(parse_max_line_length(None), DEFAULT_MAX_LINE_LENGTH);
        assert_eq!(parse_max_line_length(Some("1024".into())), 1024);
        assert_eq!(parse_max_line_length(Some(" 2048 ".into())), 2048);
        assert_eq!(parse_max_line_length(Some("0".into())), DEFAULT_MAX_LINE_LENGTH);
        assert_eq!(parse_max_line_length(Some("big".into())), DEFAULT_MAX_LINE_LENGTH);
    }

    #[test]
    fn test_output_target_display_path() {
        assert_eq!(OutputTarget::Stdout.display_path(), PathBuf::from("-"));
        assert_eq!(
            OutputTarget::parse("out/page.json").display_path(),
            PathBuf::from("out/page.json")
        );
    }
}
