// Tomlet - a TOML-style configuration document engine
//
// Copyright (c) 2026 Tomlet contributors.
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

//! Table and array containers for Tomlet documents.

use indexmap::IndexMap;

use crate::value::{Value, ValueKind};

/// An ordered table of unique keys.
///
/// Insertion order is preserved and significant: canonical stringification
/// replays entries in the order they were inserted. A successful parse
/// returns the root `Table` of the document.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Table {
    entries: IndexMap<String, Value>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value stored under `key`, comparing the whole key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Get a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Insert `value` under `key`.
    ///
    /// An existing key keeps its position and has its value replaced in
    /// place; a new key is appended at the end.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The first stored pair, if any.
    pub fn first(&self) -> Option<(&str, &Value)> {
        self.entries.first().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Descend through the document along `path`, starting at this table.
    ///
    /// Segment semantics are those of [`Value::find`]: keys for tables,
    /// decimal indices for arrays. An empty path yields `None`; use the
    /// table itself for that case.
    pub fn find(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        self.get(first)?.find(rest)
    }
}

/// An ordered sequence of values with a declared member type.
///
/// `member_type` is `None` only while the array is empty ("untyped"); the
/// builder fixes it from the first parsed member. [`Array::push`] performs
/// no type check and never updates the declared type — homogeneity is
/// enforced by the builder, which records a diagnostic for offending
/// members before appending them anyway.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Array {
    member_type: Option<ValueKind>,
    items: Vec<Value>,
}

impl Array {
    /// Create an empty, untyped array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty array with a declared member type.
    pub fn typed(member_type: ValueKind) -> Self {
        Self {
            member_type: Some(member_type),
            items: Vec::new(),
        }
    }

    /// The declared member type, or `None` for an untyped empty array.
    pub fn member_type(&self) -> Option<ValueKind> {
        self.member_type
    }

    /// Get the member at `index`.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Get a mutable reference to the member at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Append `value` at the end.
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Replace the member at `index`, or append when `index` is past the
    /// end.
    pub fn set(&mut self, index: usize, value: Value) {
        if index < self.items.len() {
            self.items[index] = value;
        } else {
            self.items.push(value);
        }
    }

    /// The last member, if any.
    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    /// A mutable reference to the last member, if any.
    pub fn last_mut(&mut self) -> Option<&mut Value> {
        self.items.last_mut()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the array has no members.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over members in order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }
}
