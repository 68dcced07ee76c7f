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

//! The three-level result table: metric → benchmark name → argument → value.

use std::collections::HashMap;

/// Values of one benchmark name, keyed by argument label.
pub type ArgValues = HashMap<String, f64>;

/// Values of one metric, keyed by benchmark name.
pub type NameValues = HashMap<String, ArgValues>;

/// Aggregated benchmark values.
///
/// Standard and extra metrics share the same shape. The table carries no
/// ordering; axis order lives in the [`KeyOrder`](crate::KeyOrder)
/// sequences of an [`Aggregation`](crate::Aggregation).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    metrics: HashMap<String, NameValues>,
}

impl ResultTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under (`metric`, `name`, `arg`).
    ///
    /// Returns the value it replaced, if any. The last write wins.
    pub fn insert(&mut self, metric: &str, name: &str, arg: &str, value: f64) -> Option<f64> {
        self.metrics
            .entry(metric.to_string())
            .or_default()
            .entry(name.to_string())
            .or_default()
            .insert(arg.to_string(), value)
    }

    /// Looks up the value for (`metric`, `name`, `arg`).
    pub fn get(&self, metric: &str, name: &str, arg: &str) -> Option<f64> {
        self.metrics.get(metric)?.get(name)?.get(arg).copied()
    }

    /// Total number of stored values.
    pub fn len(&self) -> usize {
        self.metrics
            .values()
            .flat_map(HashMap::values)
            .map(HashMap::len)
            .sum()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}
