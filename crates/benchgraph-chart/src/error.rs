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

//! Chart document errors.

use thiserror::Error;

/// Errors raised while emitting a chart document.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The document could not be serialized or written.
    #[error("failed to write chart document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;
