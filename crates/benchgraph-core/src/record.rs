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

//! Benchmark result line parsing.
//!
//! A result line is a sequence of whitespace-separated fields:
//!
//! ```text
//! Benchmark<token>  <iterations>  <value> <unit>  [<value> <unit> ...]
//! ```
//!
//! The `ns/op` pair is required; `B/op` and `allocs/op` default to zero.
//! Any other unit is kept as an extra metric under its literal text.

use crate::error::NameError;
use crate::metric::{Metrics, NS_PER_OP};
use crate::name::{decompose, BenchName};

/// Prefix every benchmark result line starts with.
pub const BENCHMARK_PREFIX: &str = "Benchmark";

/// A line that matched the result grammar, before name decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    /// Name token with the `Benchmark` prefix removed. May be empty.
    pub token: String,
    /// Iteration count.
    pub iterations: u64,
    /// Metric values: `ns/op`, `B/op`, `allocs/op`, then extras.
    pub metrics: Metrics,
}

/// One fully parsed benchmark measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// Benchmark name.
    pub name: String,
    /// Argument label, possibly empty.
    pub arg: String,
    /// Thread count, if the token carried one.
    pub threads: Option<u32>,
    /// Iteration count.
    pub iterations: u64,
    /// Metric values: `ns/op`, `B/op`, `allocs/op`, then extras.
    pub metrics: Metrics,
}

impl BenchmarkRecord {
    /// Decomposes the name token of `parsed` into a record.
    ///
    /// # Errors
    ///
    /// Returns the [`NameError`] from [`decompose`].
    pub fn from_parsed(parsed: ParsedLine) -> Result<Self, NameError> {
        let BenchName {
            name,
            arg,
            threads,
        } = decompose(&parsed.token)?;
        Ok(Self {
            name,
            arg,
            threads,
            iterations: parsed.iterations,
            metrics: parsed.metrics,
        })
    }
}

/// Parses one line of benchmark output.
///
/// Returns `None` for anything that is not a benchmark result line: build
/// logs, `PASS`/`ok` trailers, lines with a malformed number, an unpaired
/// trailing field, or no `ns/op` measurement.
///
/// # Examples
///
/// ```
/// use benchgraph_core::{parse_line, BYTES_PER_OP, NS_PER_OP};
///
/// let parsed = parse_line("BenchmarkInsert/100-4  1000  523 ns/op  128 B/op  3 allocs/op").unwrap();
/// assert_eq!(parsed.token, "Insert/100-4");
/// assert_eq!(parsed.iterations, 1000);
/// assert_eq!(parsed.metrics.get(NS_PER_OP), Some(523.0));
/// assert_eq!(parsed.metrics.get(BYTES_PER_OP), Some(128.0));
///
/// assert!(parse_line("ok  \tgithub.com/acme/store\t2.1s").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let mut fields = line.split_whitespace();

    let token = fields.next()?.strip_prefix(BENCHMARK_PREFIX)?;
    let iterations = fields.next()?.parse::<u64>().ok()?;

    let mut metrics = Metrics::with_standard_defaults();
    let mut has_ns_per_op = false;

    while let Some(value) = fields.next() {
        let unit = fields.next()?;
        let value = parse_value(value)?;
        has_ns_per_op |= unit == NS_PER_OP;
        metrics.insert(unit, value);
    }

    has_ns_per_op.then(|| ParsedLine {
        token: token.to_string(),
        iterations,
        metrics,
    })
}

fn parse_value(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}
