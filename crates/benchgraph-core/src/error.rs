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

//! Error types for benchmark ingestion.

use thiserror::Error;

/// Why a benchmark name token could not be decomposed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The token after the `Benchmark` prefix is empty.
    #[error("benchmark name is empty")]
    EmptyToken,

    /// The segment before the first `/` is empty (e.g. `/100-4`).
    #[error("benchmark name '{token}' has an empty name segment")]
    EmptyName {
        /// The offending token.
        token: String,
    },

    /// A `-` thread-count suffix is present but is not a valid count.
    #[error("benchmark name '{token}' has an invalid thread count '{suffix}'")]
    ThreadCount {
        /// The offending token.
        token: String,
        /// The text after the last `-`.
        suffix: String,
    },
}

/// Errors produced by the ingestion core.
///
/// Per-line failures are reported as [`LineStatus`](crate::LineStatus)
/// values, never as errors; only conditions that end ingestion live here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Input was exhausted without a single usable benchmark record.
    #[error("no data to show")]
    NoData,
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
