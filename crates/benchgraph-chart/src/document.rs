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

//! Chart document types.
//!
//! Field names serialize in ECharts option form (`xAxis`, `markLine`, ...).
//! Missing measurements are `null` data points, drawn as gaps.

use crate::error::ChartResult;
use serde::Serialize;
use std::io::Write;

/// A page of charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Page title.
    pub title: String,
    /// Charts in display order.
    pub charts: Vec<Chart>,
}

impl Page {
    /// Creates an empty page.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            charts: Vec::new(),
        }
    }

    /// Serializes the page as pretty-printed JSON.
    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the page as pretty-printed JSON followed by a newline.
    pub fn write_json<W: Write>(&self, mut writer: W) -> ChartResult<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n").map_err(serde_json::Error::io)?;
        Ok(())
    }
}

/// One chart: a category x axis and a set of series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    /// Chart heading.
    pub title: Title,
    /// Series legend, shown below the plot.
    pub legend: Legend,
    /// Argument labels.
    pub x_axis: Axis,
    /// Metric values.
    pub y_axis: Axis,
    /// One entry per benchmark name (two per name when stacked).
    pub series: Vec<Series>,
}

impl Chart {
    /// Creates a chart with `categories` on the x axis and no series.
    pub fn new(title: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            title: Title { text: title.into() },
            legend: Legend::default(),
            x_axis: Axis::category(categories),
            y_axis: Axis::value(),
            series: Vec::new(),
        }
    }
}

/// Chart heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    /// Title prefix followed by the metric name.
    pub text: String,
}

/// Series legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    /// Whether the legend is drawn.
    pub show: bool,
    /// Vertical placement.
    pub top: &'static str,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            show: true,
            top: "bottom",
        }
    }
}

/// A chart axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Axis {
    /// `category` or `value`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Category labels; absent on value axes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
}

impl Axis {
    /// A category axis with the given labels.
    pub fn category(labels: Vec<String>) -> Self {
        Self {
            kind: "category",
            data: Some(labels),
        }
    }

    /// A numeric value axis.
    pub fn value() -> Self {
        Self {
            kind: "value",
            data: None,
        }
    }
}

/// Series drawing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Bars.
    Bar,
    /// Connected points.
    Line,
    /// Unconnected points.
    Scatter,
}

/// A named data series, one value per x-axis category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Legend entry.
    pub name: String,
    /// Drawing type.
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    /// One value per x-axis category; `None` leaves a gap.
    pub data: Vec<Option<f64>>,
    /// Stack id shared by series drawn on top of each other.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// Fill under a line series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,
    /// Value labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    /// Max/average lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_line: Option<MarkLine>,
}

impl Series {
    /// Creates a plain series.
    pub fn new(name: impl Into<String>, kind: SeriesKind, data: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            kind,
            data,
            stack: None,
            area_style: None,
            label: None,
            mark_line: None,
        }
    }

    /// Puts the series on the stack `id`.
    pub fn stacked(mut self, id: impl Into<String>) -> Self {
        self.stack = Some(id.into());
        self
    }

    /// Fills the area under a line series.
    pub fn with_area(mut self) -> Self {
        self.area_style = Some(AreaStyle { opacity: 0.2 });
        self
    }

    /// Shows value labels at `position` (`None` for the default spot).
    pub fn with_label(mut self, position: Option<&'static str>) -> Self {
        self.label = Some(Label {
            show: true,
            position,
        });
        self
    }

    /// Attaches mark lines. An empty mark line is dropped.
    pub fn with_mark_line(mut self, mark_line: MarkLine) -> Self {
        if !mark_line.data.is_empty() {
            self.mark_line = Some(mark_line);
        }
        self
    }
}

/// Fill under a line series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaStyle {
    /// Fill opacity, 0 to 1.
    pub opacity: f64,
}

/// Value labels on data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Label {
    /// Whether labels are drawn.
    pub show: bool,
    /// Placement relative to the point; the chart default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
}

/// Summary lines drawn across a series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkLine {
    /// Lines to draw, in order.
    pub data: Vec<MarkLineItem>,
}

/// One summary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkLineItem {
    /// Label shown next to the line.
    pub name: &'static str,
    /// Statistic the line marks (`max`, `average`).
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl MarkLineItem {
    /// Line at the series maximum.
    pub const MAX: MarkLineItem = MarkLineItem {
        name: "Maximum",
        kind: "max",
    };

    /// Line at the series average.
    pub const AVERAGE: MarkLineItem = MarkLineItem {
        name: "Avg",
        kind: "average",
    };
}
