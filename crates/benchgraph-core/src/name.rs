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

//! Benchmark name decomposition.
//!
//! A name token has the shape `<Name>[/<Arg>[-<Threads>]]`:
//!
//! | Token          | Name     | Arg    | Threads |
//! |----------------|----------|--------|---------|
//! | `Insert`       | `Insert` | ``     | -       |
//! | `Insert/1000`  | `Insert` | `1000` | -       |
//! | `Insert/1000-8`| `Insert` | `1000` | 8       |
//! | `Insert/a/b-2` | `Insert` | `a/b`  | 2       |
//!
//! Without a `/` the whole token is the name, thread suffix included.
//! Everything after the first `/` is the argument label, so sub-benchmark
//! paths keep their embedded slashes.

use crate::error::NameError;

/// A decomposed benchmark name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BenchName {
    /// Benchmark name (series label).
    pub name: String,
    /// Argument label (x-axis category). Empty when the token has no `/`.
    pub arg: String,
    /// Thread count from a trailing `-<digits>` on the argument.
    pub threads: Option<u32>,
}

/// Splits a name token into name, argument label and thread count.
///
/// # Errors
///
/// - [`NameError::EmptyToken`] if `token` is empty
/// - [`NameError::EmptyName`] if the name segment before `/` is empty
/// - [`NameError::ThreadCount`] if the argument ends in `-` with no digits,
///   or the digits overflow a thread count
///
/// # Examples
///
/// ```
/// use benchgraph_core::decompose;
///
/// let bench = decompose("Insert/100-4").unwrap();
/// assert_eq!(bench.name, "Insert");
/// assert_eq!(bench.arg, "100");
/// assert_eq!(bench.threads, Some(4));
/// ```
pub fn decompose(token: &str) -> Result<BenchName, NameError> {
    if token.is_empty() {
        return Err(NameError::EmptyToken);
    }

    let Some((name, rest)) = token.split_once('/') else {
        return Ok(BenchName {
            name: token.to_string(),
            arg: String::new(),
            threads: None,
        });
    };

    if name.is_empty() {
        return Err(NameError::EmptyName {
            token: token.to_string(),
        });
    }

    let (arg, threads) = split_threads(token, rest)?;
    Ok(BenchName {
        name: name.to_string(),
        arg: arg.to_string(),
        threads,
    })
}

/// Strips a `-<digits>` suffix from the argument part of `token`.
///
/// A suffix that is not all digits belongs to the label (`read-heavy`).
fn split_threads<'a>(token: &str, rest: &'a str) -> Result<(&'a str, Option<u32>), NameError> {
    let Some((arg, suffix)) = rest.rsplit_once('-') else {
        return Ok((rest, None));
    };

    let invalid = || NameError::ThreadCount {
        token: token.to_string(),
        suffix: suffix.to_string(),
    };

    if suffix.is_empty() {
        return Err(invalid());
    }
    if !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Ok((rest, None));
    }

    let threads = suffix.parse::<u32>().map_err(|_| invalid())?;
    Ok((arg, Some(threads)))
}
