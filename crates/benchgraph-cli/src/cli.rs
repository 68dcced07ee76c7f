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

//! Command-line arguments.

use benchgraph_chart::{ChartShape, DEFAULT_TITLE_PREFIX};
use clap::{Parser, ValueEnum};

/// Default path of the chart document.
pub const DEFAULT_OUTPUT: &str = "benchgraph.json";

/// Chart Go benchmark results
///
/// Reads `go test -bench` output from standard input, echoes every line with
/// a status mark (√ parsed, ! bad benchmark name, ? not a benchmark line) and
/// writes one chart per metric to a JSON chart document.
///
/// # Examples
///
/// ```bash
/// # Bar charts, axes in benchmark output order
/// go test -bench . -benchmem | benchgraph
///
/// # Line charts with explicit series and x-axis order
/// go test -bench . -benchmem | benchgraph --shape line --obn Map,Slice --oba 10,100,1000
///
/// # Bar charts with max and average mark lines, document on stdout
/// benchgraph --max --avg -o - < bench.txt
/// ```
#[derive(Parser, Debug, Clone)]
#[command(name = "benchgraph")]
#[command(author, version, about = "benchgraph - chart Go benchmark results", long_about = None)]
pub struct Args {
    /// Comma-separated benchmark name order (series)
    ///
    /// Names not listed are left out of the charts.
    #[arg(long = "obn", value_name = "NAMES", value_delimiter = ',')]
    pub bench_names: Vec<String>,

    /// Comma-separated benchmark argument order (x axis)
    ///
    /// Arguments not listed are left out of the charts.
    #[arg(long = "oba", value_name = "ARGS", value_delimiter = ',')]
    pub bench_args: Vec<String>,

    /// Chart shape
    #[arg(long, value_enum, default_value_t = Shape::Bar)]
    pub shape: Shape,

    /// Show a maximum line on bar charts
    #[arg(long = "max")]
    pub max_line: bool,

    /// Show an average line on bar charts
    #[arg(long = "avg")]
    pub avg_line: bool,

    /// Chart document path (`-` for stdout)
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Chart title prefix; the metric name is appended
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_TITLE_PREFIX)]
    pub title: String,
}

/// Chart shape selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// One bar chart per metric
    Bar,
    /// One line chart per metric
    Line,
    /// One filled line chart per metric
    Area,
    /// One scatter chart per metric
    Scatter,
    /// B/op bars, allocs/op points and ns/op lines in one chart
    Overlap,
    /// B/op and allocs/op stacked per benchmark
    Stacked,
}

impl From<Shape> for ChartShape {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Bar => ChartShape::Bar,
            Shape::Line => ChartShape::Line,
            Shape::Area => ChartShape::Area,
            Shape::Scatter => ChartShape::Scatter,
            Shape::Overlap => ChartShape::Overlap,
            Shape::Stacked => ChartShape::Stacked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["benchgraph"]);
        assert!(args.bench_names.is_empty());
        assert!(args.bench_args.is_empty());
        assert_eq!(args.shape, Shape::Bar);
        assert!(!args.max_line);
        assert!(!args.avg_line);
        assert_eq!(args.output, DEFAULT_OUTPUT);
        assert_eq!(args.title, DEFAULT_TITLE_PREFIX);
    }

    #[test]
    fn test_comma_separated_orders() {
        let args = Args::parse_from(["benchgraph", "--obn", "Map,Slice", "--oba", "10,100"]);
        assert_eq!(args.bench_names, ["Map", "Slice"]);
        assert_eq!(args.bench_args, ["10", "100"]);
    }

    #[test]
    fn test_shape_and_toggles() {
        let args = Args::parse_from(["benchgraph", "--shape", "stacked", "--max", "--avg"]);
        assert_eq!(ChartShape::from(args.shape), ChartShape::Stacked);
        assert!(args.max_line);
        assert!(args.avg_line);
    }

    #[test]
    fn test_unknown_shape_is_rejected() {
        assert!(Args::try_parse_from(["benchgraph", "--shape", "pie"]).is_err());
    }
}
