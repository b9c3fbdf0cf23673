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

//! Value types for Tomlet documents.

use std::fmt;

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::document::{Array, Table};

/// The type tag of a [`Value`], readable independent of its payload.
///
/// The builder and the stringifier dispatch on this everywhere: array
/// homogeneity is checked by kind, and serialization picks its text form
/// by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    Table,
    Array,
    String,
    Int,
    Double,
    Boolean,
    Date,
}

/// A document value.
///
/// Every node of a parsed document is one of these variants. Ownership is
/// strictly tree-shaped: a value owns its children, and `Clone` is a deep
/// copy of the whole subtree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Nested table (`[section]` or a table-array element).
    Table(Table),
    /// Homogeneous array (`[ 1, 2, 3 ]` or an array of tables).
    Array(Array),
    /// String value, escapes already decoded.
    String(String),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Double(f64),
    /// Boolean value (true/false).
    Boolean(bool),
    /// UTC calendar timestamp.
    Date(Date),
}

impl Value {
    /// The type tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Table(_) => ValueKind::Table,
            Self::Array(_) => ValueKind::Array,
            Self::String(_) => ValueKind::String,
            Self::Int(_) => ValueKind::Int,
            Self::Double(_) => ValueKind::Double,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Date(_) => ValueKind::Date,
        }
    }

    /// Returns true if this value is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns true if this value is a string.
    pub fn is_str(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns true if this value is an integer.
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns true if this value is a double.
    pub fn is_double(&self) -> bool {
        matches!(self, Self::Double(_))
    }

    /// Returns true if this value is numeric (integer or double).
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Double(_))
    }

    /// Returns true if this value is a boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Returns true if this value is a date.
    pub fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Try to get the value as a table.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Try to get the value as a mutable table.
    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Try to get the value as an array.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get the value as a mutable array.
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get the value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a double. Integers widen.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(n) => Some(*n),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get the value as a boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a date.
    pub fn as_date(&self) -> Option<Date> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Descend through the tree along `path`.
    ///
    /// Each segment resolves against a table by key, or against an array by
    /// decimal index. The walk stops with `None` as soon as a segment fails
    /// to resolve or the current node is neither a table nor an array while
    /// segments remain. An empty path returns `self`.
    ///
    /// ```
    /// use tomlet_core::parse;
    ///
    /// let doc = parse("[[world]]\nplanet = \"mars\"\n").unwrap();
    /// let planet = doc.find(&["world", "0", "planet"]).unwrap();
    /// assert_eq!(planet.as_str(), Some("mars"));
    /// ```
    pub fn find(&self, path: &[&str]) -> Option<&Value> {
        let mut current = self;
        for segment in path {
            match current {
                Self::Table(table) => current = table.get(segment)?,
                Self::Array(array) => {
                    let index: usize = segment.parse().ok()?;
                    current = array.get(index)?;
                }
                _ => return None,
            }
        }
        Some(current)
    }
}

impl From<Table> for Value {
    fn from(t: Table) -> Self {
        Self::Table(t)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Double(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Date> for Value {
    fn from(d: Date) -> Self {
        Self::Date(d)
    }
}

/// A UTC calendar timestamp.
///
/// Stores a single instant; the epoch offset and the decomposed
/// year/month/day/hour/minute/second fields are always consistent because
/// both constructors normalize through UTC (never local time).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date(DateTime<Utc>);

impl Date {
    /// Build from calendar components. Out-of-range components (month 13,
    /// day 0, hour 24, ...) yield `None` rather than renormalizing.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .map(Self)
    }

    /// Build from seconds since the Unix epoch.
    pub fn from_epoch(seconds: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(seconds, 0).map(Self)
    }

    /// Seconds since the Unix epoch.
    pub fn epoch(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year, 1-12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }
}

impl fmt::Display for Date {
    /// `YYYY-MM-DDTHH:MM:SSZ`, fields zero-padded to two digits except year.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Value kind tests ====================

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::Table(Table::new()).kind(), ValueKind::Table);
        assert_eq!(Value::Array(Array::new()).kind(), ValueKind::Array);
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(Value::Int(1).kind(), ValueKind::Int);
        assert_eq!(Value::Double(1.5).kind(), ValueKind::Double);
        assert_eq!(Value::Boolean(true).kind(), ValueKind::Boolean);
        assert_eq!(
            Value::Date(Date::from_epoch(0).unwrap()).kind(),
            ValueKind::Date
        );
    }

    #[test]
    fn test_value_is_predicates() {
        assert!(Value::Table(Table::new()).is_table());
        assert!(Value::Array(Array::new()).is_array());
        assert!(Value::from("s").is_str());
        assert!(Value::Int(0).is_int());
        assert!(Value::Double(0.0).is_double());
        assert!(Value::Boolean(false).is_boolean());
        assert!(Value::Date(Date::from_epoch(0).unwrap()).is_date());
        assert!(!Value::Int(0).is_table());
        assert!(!Value::Boolean(true).is_str());
    }

    #[test]
    fn test_value_is_number() {
        assert!(Value::Int(1).is_number());
        assert!(Value::Double(1.5).is_number());
        assert!(!Value::from("1").is_number());
        assert!(!Value::Boolean(true).is_number());
    }

    // ==================== Value::as_* tests ====================

    #[test]
    fn test_value_as_str() {
        assert_eq!(Value::from("hello").as_str(), Some("hello"));
        assert_eq!(Value::Int(42).as_str(), None);
    }

    #[test]
    fn test_value_as_int() {
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Int(-100).as_int(), Some(-100));
        assert_eq!(Value::Double(3.5).as_int(), None);
        assert_eq!(Value::from("42").as_int(), None);
    }

    #[test]
    fn test_value_as_double() {
        assert_eq!(Value::Double(3.5).as_double(), Some(3.5));
        // Int widens to double
        assert_eq!(Value::Int(42).as_double(), Some(42.0));
        assert_eq!(Value::from("3.5").as_double(), None);
    }

    #[test]
    fn test_value_as_boolean() {
        assert_eq!(Value::Boolean(true).as_boolean(), Some(true));
        assert_eq!(Value::Boolean(false).as_boolean(), Some(false));
        assert_eq!(Value::Int(1).as_boolean(), None);
        assert_eq!(Value::from("true").as_boolean(), None);
    }

    #[test]
    fn test_value_as_date() {
        let d = Date::from_epoch(1609459200).unwrap();
        assert_eq!(Value::Date(d).as_date(), Some(d));
        assert_eq!(Value::Int(1609459200).as_date(), None);
    }

    #[test]
    fn test_value_as_table_mut() {
        let mut v = Value::Table(Table::new());
        v.as_table_mut().unwrap().set("k", Value::Int(1));
        assert_eq!(v.as_table().unwrap().get("k"), Some(&Value::Int(1)));
        assert!(Value::Int(0).as_table().is_none());
    }

    #[test]
    fn test_value_as_array_mut() {
        let mut v = Value::Array(Array::new());
        v.as_array_mut().unwrap().push(Value::Int(7));
        assert_eq!(v.as_array().unwrap().get(0), Some(&Value::Int(7)));
        assert!(Value::Int(0).as_array().is_none());
    }

    // ==================== Value::find tests ====================

    #[test]
    fn test_find_empty_path_is_identity() {
        let v = Value::Int(9);
        assert_eq!(v.find(&[]), Some(&v));
    }

    #[test]
    fn test_find_table_key() {
        let mut table = Table::new();
        table.set("planet", Value::from("pluto"));
        let v = Value::Table(table);
        assert_eq!(v.find(&["planet"]).and_then(Value::as_str), Some("pluto"));
        assert_eq!(v.find(&["moon"]), None);
    }

    #[test]
    fn test_find_array_index() {
        let mut array = Array::typed(ValueKind::Int);
        array.push(Value::Int(1));
        array.push(Value::Int(2));
        array.push(Value::Int(3));
        let v = Value::Array(array);
        assert_eq!(v.find(&["1"]).and_then(Value::as_int), Some(2));
        assert_eq!(v.find(&["3"]), None);
    }

    #[test]
    fn test_find_rejects_non_numeric_index() {
        let mut array = Array::typed(ValueKind::Int);
        array.push(Value::Int(1));
        let v = Value::Array(array);
        assert_eq!(v.find(&["first"]), None);
    }

    #[test]
    fn test_find_mixed_path() {
        let mut inner = Table::new();
        inner.set("planet", Value::from("saturn"));
        let mut worlds = Array::typed(ValueKind::Table);
        worlds.push(Value::Table(Table::new()));
        worlds.push(Value::Table(inner));
        let mut root = Table::new();
        root.set("world", Value::Array(worlds));
        let v = Value::Table(root);
        assert_eq!(
            v.find(&["world", "1", "planet"]).and_then(Value::as_str),
            Some("saturn")
        );
    }

    #[test]
    fn test_find_stops_at_scalar() {
        let mut table = Table::new();
        table.set("n", Value::Int(1));
        let v = Value::Table(table);
        assert_eq!(v.find(&["n", "deeper"]), None);
    }

    // ==================== From conversions ====================

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(2.5f64), Value::Double(2.5));
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from("s"), Value::String("s".to_string()));
        assert_eq!(
            Value::from("s".to_string()),
            Value::String("s".to_string())
        );
    }

    // ==================== Equality and clone ====================

    #[test]
    fn test_value_deep_clone() {
        let mut inner = Table::new();
        inner.set("moons", Value::Int(2));
        let mut root = Table::new();
        root.set("mars", Value::Table(inner));
        let original = Value::Table(root);

        let mut copied = original.clone();
        assert_eq!(original, copied);

        // Mutating the copy must not touch the original
        copied
            .as_table_mut()
            .unwrap()
            .get_mut("mars")
            .unwrap()
            .as_table_mut()
            .unwrap()
            .set("moons", Value::Int(3));
        assert_ne!(original, copied);
    }

    #[test]
    fn test_value_inequality_different_types() {
        assert_ne!(Value::Int(1), Value::Boolean(true));
        assert_ne!(Value::from("42"), Value::Int(42));
        assert_ne!(Value::Int(1), Value::Double(1.0));
    }

    // ==================== Edge cases ====================

    #[test]
    fn test_value_int_bounds() {
        assert_eq!(Value::Int(i64::MAX).as_int(), Some(i64::MAX));
        assert_eq!(Value::Int(i64::MIN).as_int(), Some(i64::MIN));
    }

    #[test]
    fn test_value_empty_string() {
        assert_eq!(Value::from("").as_str(), Some(""));
    }

    #[test]
    fn test_value_unicode_string() {
        let v = Value::from("日本語 🎉");
        assert_eq!(v.as_str(), Some("日本語 🎉"));
    }

    #[test]
    fn test_value_double_special() {
        assert!(Value::Double(f64::INFINITY).as_double().unwrap().is_infinite());
        assert!(Value::Double(f64::NAN).as_double().unwrap().is_nan());
    }

    // ==================== Date tests ====================

    #[test]
    fn test_date_from_epoch_zero() {
        let d = Date::from_epoch(0).unwrap();
        assert_eq!(d.year(), 1970);
        assert_eq!(d.month(), 1);
        assert_eq!(d.day(), 1);
        assert_eq!(d.hour(), 0);
        assert_eq!(d.minute(), 0);
        assert_eq!(d.second(), 0);
    }

    #[test]
    fn test_date_components_and_epoch_agree() {
        let d = Date::from_ymd_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(d.epoch(), 1609459200);
        assert_eq!(Date::from_epoch(1609459200), Some(d));
    }

    #[test]
    fn test_date_rejects_invalid_components() {
        assert_eq!(Date::from_ymd_hms(2021, 13, 1, 0, 0, 0), None);
        assert_eq!(Date::from_ymd_hms(2021, 2, 30, 0, 0, 0), None);
        assert_eq!(Date::from_ymd_hms(2021, 1, 1, 24, 0, 0), None);
    }

    #[test]
    fn test_date_display() {
        let d = Date::from_ymd_hms(1979, 5, 27, 7, 32, 0).unwrap();
        assert_eq!(d.to_string(), "1979-05-27T07:32:00Z");
    }

    #[test]
    fn test_date_display_pads_fields() {
        let d = Date::from_ymd_hms(2026, 8, 3, 4, 5, 6).unwrap();
        assert_eq!(d.to_string(), "2026-08-03T04:05:06Z");
    }

    #[test]
    fn test_date_roundtrips_through_epoch() {
        let d = Date::from_ymd_hms(1999, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(Date::from_epoch(d.epoch()), Some(d));
    }
}
