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

//! Ordered, deduplicated key sequences used for chart axes.

/// An insertion-ordered set of strings.
///
/// Used for benchmark names, argument labels and extra metric keys. The
/// sequences stay small, so membership is a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOrder {
    keys: Vec<String>,
}

impl KeyOrder {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sequence from `keys`, dropping repeats after the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchgraph_core::KeyOrder;
    ///
    /// let order = KeyOrder::from_keys(["b", "a", "b"]);
    /// assert_eq!(order.as_slice(), ["b", "a"]);
    /// ```
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut order = Self::new();
        for key in keys {
            order.push(key.as_ref());
        }
        order
    }

    /// Appends `key` unless already present. Returns `true` if appended.
    pub fn push(&mut self, key: &str) -> bool {
        if self.contains(key) {
            return false;
        }
        self.keys.push(key.to_string());
        true
    }

    /// Returns `true` if `key` is in the sequence.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Iterates over the keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// The keys as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeyOrder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_dedups() {
        let mut order = KeyOrder::new();
        assert!(order.push("B"));
        assert!(order.push("A"));
        assert!(!order.push("B"));
        assert_eq!(order.as_slice(), ["B", "A"]);
    }

    #[test]
    fn test_empty_string_is_a_key() {
        let mut order = KeyOrder::new();
        assert!(order.push(""));
        assert!(order.contains(""));
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_collect() {
        let order: KeyOrder = ["10", "100", "10"].into_iter().collect();
        assert_eq!(order.iter().collect::<Vec<_>>(), ["10", "100"]);
    }
}
