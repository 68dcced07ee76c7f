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

//! Chart documents for aggregated benchmark results.
//!
//! [`PageRenderer`] turns an [`Aggregation`](benchgraph_core::Aggregation)
//! into a [`Page`]: one chart per metric group, with the argument labels on
//! the x axis and one series per benchmark name. The page serializes to JSON
//! in ECharts option shape, ready for any front end that draws it.
//!
//! # Examples
//!
//! ```
//! use benchgraph_chart::{ChartShape, PageRenderer, RenderConfig, Renderer};
//! use benchgraph_core::Aggregator;
//!
//! let mut aggregator = Aggregator::new();
//! aggregator.feed_line("BenchmarkInsert/100-4  1000  523 ns/op  128 B/op  3 allocs/op");
//! let aggregation = aggregator.finish().unwrap();
//!
//! let config = RenderConfig {
//!     shape: ChartShape::Line,
//!     ..RenderConfig::default()
//! };
//! let page = PageRenderer::new(config).render(&aggregation);
//! assert_eq!(page.charts.len(), 4);
//! ```

mod config;
mod document;
mod error;
mod render;

pub use config::{ChartShape, RenderConfig, DEFAULT_TITLE_PREFIX};
pub use document::{
    AreaStyle, Axis, Chart, Label, Legend, MarkLine, MarkLineItem, Page, Series, SeriesKind,
    Title,
};
pub use error::{ChartError, ChartResult};
pub use render::{PageRenderer, Renderer};
