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

//! Benchmark output parsing and result aggregation.
//!
//! This crate turns the textual output of a benchmark run into a
//! [`ResultTable`] ready for charting. Ingestion is a single forward pass:
//!
//! ```text
//! line ──► parse_line ──► decompose ──► Aggregator ──► Aggregation
//!          (record.rs)    (name.rs)     (aggregate.rs)
//! ```
//!
//! - [`parse_line`] recognises result lines such as
//!   `BenchmarkInsert/100-4  1000  523 ns/op  128 B/op  3 allocs/op`.
//! - [`decompose`] splits the name token `Insert/100-4` into the benchmark
//!   name, argument label and thread count.
//! - [`Aggregator`] files every metric value under
//!   metric → benchmark name → argument label, tracking axis order.
//!
//! # Examples
//!
//! ```
//! use benchgraph_core::{Aggregator, LineStatus, NS_PER_OP};
//!
//! let mut aggregator = Aggregator::new();
//! let status = aggregator.feed_line("BenchmarkInsert/100-4  1000  523 ns/op  128 B/op  3 allocs/op");
//! assert_eq!(status, LineStatus::Parsed);
//! assert_eq!(aggregator.feed_line("PASS"), LineStatus::NotABenchmarkLine);
//!
//! let aggregation = aggregator.finish().unwrap();
//! assert_eq!(aggregation.table().get(NS_PER_OP, "Insert", "100"), Some(523.0));
//! assert_eq!(aggregation.names().as_slice(), ["Insert"]);
//! ```

mod aggregate;
mod error;
mod metric;
mod name;
mod order;
mod record;
mod table;

pub use aggregate::{Aggregation, Aggregator, LineStatus, OrderOverrides};
pub use error::{CoreError, CoreResult, NameError};
pub use metric::{
    is_standard_metric, Metrics, ALLOCS_PER_OP, BYTES_PER_OP, ITERATIONS, LINE_METRICS, NS_PER_OP,
    STANDARD_METRICS,
};
pub use name::{decompose, BenchName};
pub use order::KeyOrder;
pub use record::{parse_line, BenchmarkRecord, ParsedLine, BENCHMARK_PREFIX};
pub use table::{ArgValues, NameValues, ResultTable};
