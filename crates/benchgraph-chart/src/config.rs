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

//! Render configuration.

use std::fmt;

/// Default chart title prefix; the metric name is appended.
pub const DEFAULT_TITLE_PREFIX: &str = "Graph: Benchmark results in ";

/// How metric groups are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChartShape {
    /// One bar chart per metric.
    #[default]
    Bar,
    /// One line chart per metric.
    Line,
    /// One line chart with filled areas per metric.
    Area,
    /// One scatter chart per metric.
    Scatter,
    /// `B/op` bars, `allocs/op` points and `ns/op` lines in one chart.
    Overlap,
    /// `B/op` and `allocs/op` stacked per benchmark name in one chart.
    Stacked,
}

impl ChartShape {
    /// Lowercase name of the shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartShape::Bar => "bar",
            ChartShape::Line => "line",
            ChartShape::Area => "area",
            ChartShape::Scatter => "scatter",
            ChartShape::Overlap => "overlap",
            ChartShape::Stacked => "stacked",
        }
    }
}

impl fmt::Display for ChartShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`PageRenderer`](crate::PageRenderer).
///
/// Passed explicitly so rendering holds no global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Chart shape for metric groups.
    pub shape: ChartShape,
    /// Add a maximum mark line to bar series.
    pub show_max_line: bool,
    /// Add an average mark line to bar series.
    pub show_avg_line: bool,
    /// Prefix of every chart title.
    pub title_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            shape: ChartShape::default(),
            show_max_line: false,
            show_avg_line: false,
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
        }
    }
}
