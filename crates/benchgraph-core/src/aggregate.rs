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

//! Record aggregation and axis ordering.

use crate::error::{CoreError, CoreResult};
use crate::metric::{is_standard_metric, ITERATIONS, STANDARD_METRICS};
use crate::order::KeyOrder;
use crate::record::{parse_line, BenchmarkRecord};
use crate::table::ResultTable;
use tracing::{debug, info};

/// Outcome of feeding one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStatus {
    /// The line was a benchmark result and was aggregated.
    Parsed,
    /// The line looked like a result but its name could not be decomposed.
    NameInvalid,
    /// The line is not a benchmark result.
    NotABenchmarkLine,
}

impl LineStatus {
    /// Transcript glyph for this status.
    pub fn glyph(self) -> char {
        match self {
            LineStatus::Parsed => '√',
            LineStatus::NameInvalid => '!',
            LineStatus::NotABenchmarkLine => '?',
        }
    }
}

/// Caller-supplied axis orderings.
///
/// An empty sequence means "automatic": keys are collected in first-seen
/// order. A non-empty sequence is used as-is and keys outside it are left
/// out of every chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderOverrides {
    /// Benchmark name order.
    pub names: KeyOrder,
    /// Argument label order.
    pub args: KeyOrder,
}

/// Accumulates benchmark records into a [`ResultTable`].
///
/// # Examples
///
/// ```
/// use benchgraph_core::{Aggregator, LineStatus};
///
/// let mut aggregator = Aggregator::new();
/// for line in ["BenchmarkB/1 10 5 ns/op", "BenchmarkA/1 10 7 ns/op", "BenchmarkB/2 10 6 ns/op"] {
///     assert_eq!(aggregator.feed_line(line), LineStatus::Parsed);
/// }
/// let aggregation = aggregator.finish().unwrap();
/// assert_eq!(aggregation.names().as_slice(), ["B", "A"]);
/// assert_eq!(aggregation.args().as_slice(), ["1", "2"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    table: ResultTable,
    names: KeyOrder,
    args: KeyOrder,
    fixed_names: bool,
    fixed_args: bool,
    extra_metrics: KeyOrder,
    records: usize,
    dropped: usize,
}

impl Aggregator {
    /// Creates an aggregator with automatic ordering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an aggregator using the non-empty sequences of `overrides`.
    pub fn with_overrides(overrides: OrderOverrides) -> Self {
        Self {
            fixed_names: !overrides.names.is_empty(),
            fixed_args: !overrides.args.is_empty(),
            names: overrides.names,
            args: overrides.args,
            ..Self::default()
        }
    }

    /// Parses and aggregates one line of input.
    ///
    /// Never fails: lines that are not results, or whose name cannot be
    /// decomposed, are reported through the returned status and skipped.
    pub fn feed_line(&mut self, line: &str) -> LineStatus {
        let Some(parsed) = parse_line(line) else {
            return LineStatus::NotABenchmarkLine;
        };

        let token = parsed.token.clone();
        match BenchmarkRecord::from_parsed(parsed) {
            Ok(record) => {
                self.add(&record);
                LineStatus::Parsed
            }
            Err(err) => {
                debug!(token = %token, error = %err, "dropping benchmark line");
                self.dropped += 1;
                LineStatus::NameInvalid
            }
        }
    }

    /// Files every metric of `record` under its name and argument.
    ///
    /// A value already stored for the same (metric, name, argument) is
    /// overwritten.
    pub fn add(&mut self, record: &BenchmarkRecord) {
        let (name, arg) = (record.name.as_str(), record.arg.as_str());

        if !self.fixed_names {
            self.names.push(name);
        }
        if !self.fixed_args {
            self.args.push(arg);
        }

        self.table.insert(ITERATIONS, name, arg, record.iterations as f64);

        for (metric, value) in record.metrics.iter() {
            if !is_standard_metric(metric) && self.extra_metrics.push(metric) {
                debug!(metric, "discovered extra metric");
            }
            self.table.insert(metric, name, arg, value);
        }

        self.records += 1;
    }

    /// Number of records aggregated so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Ends ingestion and hands over the finished aggregation.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NoData`] if no record was aggregated.
    pub fn finish(self) -> CoreResult<Aggregation> {
        if self.table.is_empty() {
            return Err(CoreError::NoData);
        }

        info!(
            records = self.records,
            dropped = self.dropped,
            names = self.names.len(),
            args = self.args.len(),
            extra_metrics = self.extra_metrics.len(),
            "ingestion complete"
        );

        Ok(Aggregation {
            table: self.table,
            names: self.names,
            args: self.args,
            extra_metrics: self.extra_metrics,
            records: self.records,
        })
    }
}

/// The immutable result of ingestion, handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    table: ResultTable,
    names: KeyOrder,
    args: KeyOrder,
    extra_metrics: KeyOrder,
    records: usize,
}

impl Aggregation {
    /// The aggregated values.
    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    /// Benchmark name order (series).
    pub fn names(&self) -> &KeyOrder {
        &self.names
    }

    /// Argument label order (x axis).
    pub fn args(&self) -> &KeyOrder {
        &self.args
    }

    /// Extra metric keys in first-seen order.
    pub fn extra_metrics(&self) -> &KeyOrder {
        &self.extra_metrics
    }

    /// Every metric in chart order: standard metrics, then extras.
    pub fn metrics(&self) -> Vec<&str> {
        let mut metrics: Vec<&str> = STANDARD_METRICS.to_vec();
        metrics.extend(self.extra_metrics.iter());
        metrics
    }

    /// Number of records that were aggregated.
    pub fn records(&self) -> usize {
        self.records
    }
}
