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

//! Structured error types for the benchgraph CLI.
//!
//! Every variant is fatal. Lines that fail to parse are not errors; they
//! show up in the transcript with their status glyph.

use benchgraph_chart::ChartError;
use benchgraph_core::CoreError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for benchgraph CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Reading standard input failed.
    #[error("reading standard input: {message}")]
    ReadInput {
        /// The error message
        message: String,
    },

    /// An input line exceeds the configured maximum length.
    ///
    /// Raised as a read failure; ingestion stops at that line.
    #[error("reading standard input: line {line} is too long. Maximum allowed: {max} bytes")]
    LineTooLong {
        /// 1-based line number
        line: usize,
        /// The configured maximum
        max: usize,
    },

    /// Writing the transcript to standard output failed.
    #[error("writing transcript: {message}")]
    Transcript {
        /// The error message
        message: String,
    },

    /// No benchmark record was found in the input.
    #[error("no data to show")]
    NoData,

    /// The chart document could not be written.
    #[error("I/O error for '{path}': {message}")]
    Output {
        /// Output path, `-` for standard output
        path: PathBuf,
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create a read error from an I/O error on standard input.
    pub fn read_input(source: io::Error) -> Self {
        Self::ReadInput {
            message: source.to_string(),
        }
    }

    /// Create a transcript error from an I/O error on standard output.
    pub fn transcript(source: io::Error) -> Self {
        Self::Transcript {
            message: source.to_string(),
        }
    }

    /// Create an output error with path context.
    pub fn output(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Output {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create an output error from a chart document error.
    pub fn document(path: impl Into<PathBuf>, source: ChartError) -> Self {
        Self::output(path, source)
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NoData => Self::NoData,
        }
    }
}
