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

//! Metric keys and the per-record metric map.

/// Iteration count of a benchmark run, charted as its own metric.
///
/// The key contains a space, so no unit token of a benchmark line can
/// collide with it.
pub const ITERATIONS: &str = "iteration count";
/// Nanoseconds per operation.
pub const NS_PER_OP: &str = "ns/op";
/// Bytes allocated per operation.
pub const BYTES_PER_OP: &str = "B/op";
/// Allocations per operation.
pub const ALLOCS_PER_OP: &str = "allocs/op";

/// Standard metrics in chart order. Extra metrics follow these.
pub const STANDARD_METRICS: [&str; 4] = [ITERATIONS, NS_PER_OP, BYTES_PER_OP, ALLOCS_PER_OP];

/// Units a benchmark line reports that are not extra metrics.
pub const LINE_METRICS: [&str; 3] = [NS_PER_OP, BYTES_PER_OP, ALLOCS_PER_OP];

/// Returns `true` if the line unit `key` is one of [`LINE_METRICS`].
pub fn is_standard_metric(key: &str) -> bool {
    LINE_METRICS.contains(&key)
}

/// Metric values of a single record, in the order they were first set.
///
/// Benchmark lines carry a handful of metrics, so a vector with linear
/// lookup keeps the unit order of the line without a hashing cost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    entries: Vec<(String, f64)>,
}

impl Metrics {
    /// Creates an empty metric map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map holding `ns/op`, `B/op` and `allocs/op`, all zero.
    pub fn with_standard_defaults() -> Self {
        let mut metrics = Self::new();
        metrics.insert(NS_PER_OP, 0.0);
        metrics.insert(BYTES_PER_OP, 0.0);
        metrics.insert(ALLOCS_PER_OP, 0.0);
        metrics
    }

    /// Sets `key` to `value`, keeping the key's original position.
    ///
    /// Returns the previous value if the key was already present.
    pub fn insert(&mut self, key: &str, value: f64) -> Option<f64> {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key.to_string(), value));
                None
            }
        }
    }

    /// Returns the value of `key`.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Iterates over metrics that are not standard.
    pub fn extras(&self) -> impl Iterator<Item = (&str, f64)> {
        self.iter().filter(|(k, _)| !is_standard_metric(k))
    }

    /// Number of metrics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no metric is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
