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

//! Aggregation → chart document.

use crate::config::{ChartShape, RenderConfig};
use crate::document::{Chart, MarkLine, MarkLineItem, Page, Series, SeriesKind};
use benchgraph_core::{Aggregation, ALLOCS_PER_OP, BYTES_PER_OP, NS_PER_OP};
use tracing::debug;

/// Title of every rendered page.
const PAGE_TITLE: &str = "benchgraph";

/// Metrics drawn together by [`ChartShape::Overlap`], bottom layer first.
static OVERLAP_METRICS: [&str; 3] = [BYTES_PER_OP, ALLOCS_PER_OP, NS_PER_OP];

/// Metrics drawn together by [`ChartShape::Stacked`].
static STACKED_METRICS: [&str; 2] = [BYTES_PER_OP, ALLOCS_PER_OP];

/// Turns a finished aggregation into a renderable document.
pub trait Renderer {
    /// The document type produced.
    type Output;

    /// Renders `aggregation`. Axis order comes from the aggregation's name
    /// and argument sequences; keys outside them are not drawn.
    fn render(&self, aggregation: &Aggregation) -> Self::Output;
}

/// Renders one chart per metric group into a [`Page`].
#[derive(Debug, Clone, Default)]
pub struct PageRenderer {
    config: RenderConfig,
}

impl PageRenderer {
    /// Creates a renderer with `config`.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn title(&self, metric: &str) -> String {
        format!("{}{}", self.config.title_prefix, metric)
    }

    fn mark_line(&self) -> MarkLine {
        let mut mark_line = MarkLine::default();
        if self.config.show_max_line {
            mark_line.data.push(MarkLineItem::MAX);
        }
        if self.config.show_avg_line {
            mark_line.data.push(MarkLineItem::AVERAGE);
        }
        mark_line
    }

    /// One chart of `metric`, drawn as `shape` (a single-metric shape).
    fn metric_chart(&self, aggregation: &Aggregation, metric: &str, shape: ChartShape) -> Chart {
        let mut chart = Chart::new(self.title(metric), categories(aggregation));

        for name in aggregation.names().iter() {
            let data = values(aggregation, metric, name);
            let series = match shape {
                ChartShape::Line => Series::new(name, SeriesKind::Line, data),
                ChartShape::Area => Series::new(name, SeriesKind::Line, data)
                    .with_area()
                    .with_label(None),
                ChartShape::Scatter => {
                    Series::new(name, SeriesKind::Scatter, data).with_label(Some("right"))
                }
                ChartShape::Bar | ChartShape::Overlap | ChartShape::Stacked => {
                    Series::new(name, SeriesKind::Bar, data).with_mark_line(self.mark_line())
                }
            };
            chart.series.push(series);
        }

        chart
    }

    /// `B/op` bars with `allocs/op` points and `ns/op` lines on top.
    fn overlap_chart(&self, aggregation: &Aggregation) -> Chart {
        let title = self.title(&OVERLAP_METRICS.join(", "));
        let mut chart = Chart::new(title, categories(aggregation));

        let kinds = [SeriesKind::Bar, SeriesKind::Scatter, SeriesKind::Line];
        for (metric, kind) in OVERLAP_METRICS.into_iter().zip(kinds) {
            for name in aggregation.names().iter() {
                let data = values(aggregation, metric, name);
                let label = format!("{} {}", name, metric);
                chart.series.push(Series::new(label, kind, data));
            }
        }

        chart
    }

    /// Per benchmark name, `B/op` and `allocs/op` bars on a shared stack.
    fn stacked_chart(&self, aggregation: &Aggregation) -> Chart {
        let title = self.title(&STACKED_METRICS.join(" + "));
        let mut chart = Chart::new(title, categories(aggregation));

        for name in aggregation.names().iter() {
            let stack = format!("{}-stack", name);
            let bytes = values(aggregation, BYTES_PER_OP, name);
            let allocs = values(aggregation, ALLOCS_PER_OP, name);
            chart.series.extend([
                Series::new(name, SeriesKind::Bar, bytes).stacked(stack.as_str()),
                Series::new(stack.as_str(), SeriesKind::Bar, allocs).stacked(stack.as_str()),
            ]);
        }

        chart
    }
}

impl Renderer for PageRenderer {
    type Output = Page;

    fn render(&self, aggregation: &Aggregation) -> Page {
        let mut page = Page::new(PAGE_TITLE);
        let shape = self.config.shape;

        let covered: &[&str] = match shape {
            ChartShape::Overlap => {
                page.charts.push(self.overlap_chart(aggregation));
                &OVERLAP_METRICS
            }
            ChartShape::Stacked => {
                page.charts.push(self.stacked_chart(aggregation));
                &STACKED_METRICS
            }
            _ => &[],
        };

        for metric in aggregation.metrics() {
            if covered.contains(&metric) {
                continue;
            }
            page.charts.push(self.metric_chart(aggregation, metric, shape));
        }

        debug!(shape = %shape, charts = page.charts.len(), "rendered chart page");
        page
    }
}

fn categories(aggregation: &Aggregation) -> Vec<String> {
    aggregation.args().as_slice().to_vec()
}

fn values(aggregation: &Aggregation, metric: &str, name: &str) -> Vec<Option<f64>> {
    aggregation
        .args()
        .iter()
        .map(|arg| aggregation.table().get(metric, name, arg))
        .collect()
}
