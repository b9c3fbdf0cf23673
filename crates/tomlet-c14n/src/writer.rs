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

//! Canonical document writer.
//!
//! Walks a document tree and renders the text form the parser accepts:
//! dotted `[section]` headers, `[[section]]` array-of-tables headers, and
//! `key = value` entry lines with dense array literals.

use tomlet_core::{Array, Table, TomletError, TomletResult, Value, ValueKind};

// ==================== Writer constants ====================

/// Initial capacity of the output buffer.
///
/// Most configuration documents render to well under 4 KiB; starting there
/// avoids the early reallocation churn.
const INITIAL_OUTPUT_BUFFER_CAPACITY: usize = 4096;

/// Maximum tree depth the writer will recurse into.
///
/// Parsed documents stay far below this because the parser enforces its own
/// nesting limit, so the guard only trips on hand-built trees.
const MAX_NESTING_DEPTH: usize = 1000;

/// Streaming renderer for document trees.
///
/// Keeps the output buffer and the stack of table names leading to the
/// current position; headers are rendered by dot-joining that stack. Name
/// segments are borrowed from the document being written.
///
/// [`stringify`](crate::stringify) and [`stringify_value`](crate::stringify_value)
/// are the one-shot entry points; construct a `Writer` directly only to
/// reuse one across documents.
#[derive(Debug)]
pub struct Writer<'doc> {
    out: String,
    names: Vec<&'doc str>,
}

impl<'doc> Writer<'doc> {
    /// Create a writer with a pre-allocated output buffer.
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(INITIAL_OUTPUT_BUFFER_CAPACITY),
            names: Vec::new(),
        }
    }

    /// Render `table` as a complete document.
    ///
    /// # Errors
    ///
    /// Fails only when the tree is nested deeper than the writer's maximum
    /// recursion depth.
    pub fn write_document(&mut self, table: &'doc Table) -> TomletResult<String> {
        self.document(table, 0)?;
        Ok(std::mem::take(&mut self.out))
    }

    /// Render a single value.
    ///
    /// Tables render in document form, arrays as dense literals, and a bare
    /// string as its raw content without quotes or escapes.
    pub fn write_value(&mut self, value: &'doc Value) -> TomletResult<String> {
        match value {
            Value::Table(table) => self.document(table, 0)?,
            Value::String(text) => self.out.push_str(text),
            other => self.inline_value(other, 0)?,
        }
        Ok(std::mem::take(&mut self.out))
    }

    /// Emit every pair of `table` in insertion order.
    ///
    /// Nested tables and arrays of tables turn into header sections; every
    /// other value becomes a `key = value` entry line.
    fn document(&mut self, table: &'doc Table, depth: usize) -> TomletResult<()> {
        if depth > MAX_NESTING_DEPTH {
            return Err(depth_exceeded());
        }
        for (key, value) in table.iter() {
            match value {
                Value::Table(child) => {
                    self.names.push(key);
                    self.table_header(child);
                    self.document(child, depth + 1)?;
                    self.names.pop();
                }
                Value::Array(array) if array.member_type() == Some(ValueKind::Table) => {
                    self.names.push(key);
                    for member in array.iter() {
                        self.array_header();
                        match member {
                            Value::Table(element) => self.document(element, depth + 1)?,
                            other => {
                                self.inline_value(other, depth)?;
                                self.out.push('\n');
                            }
                        }
                    }
                    self.names.pop();
                }
                other => self.entry(key, other, depth)?,
            }
        }
        Ok(())
    }

    /// Emit `[dotted.path]` for the table about to be written.
    ///
    /// The header is suppressed when the table's first stored value is
    /// itself a table or an array of tables (the nested section's own
    /// header carries the full dotted path) and when the table is empty.
    fn table_header(&mut self, table: &Table) {
        match table.first() {
            None => return,
            Some((_, Value::Table(_))) => return,
            Some((_, Value::Array(array))) if array.member_type() == Some(ValueKind::Table) => {
                return
            }
            Some(_) => {}
        }
        self.blank_line();
        self.out.push('[');
        self.dotted_names();
        self.out.push_str("]\n");
    }

    /// Emit `[[dotted.path]]` for the next array-of-tables element.
    fn array_header(&mut self) {
        self.blank_line();
        self.out.push_str("[[");
        self.dotted_names();
        self.out.push_str("]]\n");
    }

    /// Headers are separated from earlier output by one blank line; a
    /// header at the very start of the document gets none.
    fn blank_line(&mut self) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
    }

    fn dotted_names(&mut self) {
        for (index, name) in self.names.iter().enumerate() {
            if index > 0 {
                self.out.push('.');
            }
            self.out.push_str(name);
        }
    }

    fn entry(&mut self, key: &str, value: &'doc Value, depth: usize) -> TomletResult<()> {
        self.out.push_str(key);
        self.out.push_str(" = ");
        self.inline_value(value, depth)?;
        self.out.push('\n');
        Ok(())
    }

    /// Render `value` in entry position.
    fn inline_value(&mut self, value: &'doc Value, depth: usize) -> TomletResult<()> {
        match value {
            Value::Table(table) => self.document(table, depth + 1)?,
            Value::Array(array) => self.dense_array(array, depth)?,
            Value::String(text) => self.quoted(text),
            Value::Int(n) => self.out.push_str(&n.to_string()),
            Value::Double(n) => self.out.push_str(&format_double(*n)),
            Value::Boolean(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Date(date) => self.out.push_str(&date.to_string()),
        }
        Ok(())
    }

    /// Render `[ v1, v2, v3 ]` on one line; an empty array is `[]`.
    fn dense_array(&mut self, array: &'doc Array, depth: usize) -> TomletResult<()> {
        if depth > MAX_NESTING_DEPTH {
            return Err(depth_exceeded());
        }
        self.out.push('[');
        let last = array.len().checked_sub(1);
        for (index, member) in array.iter().enumerate() {
            self.out.push(' ');
            self.inline_value(member, depth + 1)?;
            self.out.push(if Some(index) == last { ' ' } else { ',' });
        }
        self.out.push(']');
        Ok(())
    }

    fn quoted(&mut self, text: &str) {
        self.out.push('"');
        escape_into(&mut self.out, text);
        self.out.push('"');
    }
}

impl Default for Writer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape `text` for a quoted string literal.
///
/// Named escapes cover exactly the sequences the reader's unescape table
/// decodes; every other character below U+0020 and everything above U+007F
/// is written as `\uXXXX` (a surrogate pair beyond the BMP), keeping the
/// output pure ASCII.
fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '\u{0008}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\u{000c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '/' => out.push_str("\\/"),
            '\\' => out.push_str("\\\\"),
            c if (c as u32) < 0x20 || (c as u32) > 0x7f => push_unicode_escape(out, c),
            c => out.push(c),
        }
    }
}

/// Write `c` as one `\uXXXX` escape, or as a surrogate pair when it lies
/// outside the Basic Multilingual Plane.
fn push_unicode_escape(out: &mut String, c: char) {
    let code = c as u32;
    if code > 0xffff {
        let bits = code - 0x10000;
        let high = 0xd800 + (bits >> 10);
        let low = 0xdc00 + (bits & 0x3ff);
        out.push_str(&format!("\\u{:04x}\\u{:04x}", high, low));
    } else {
        out.push_str(&format!("\\u{:04x}", code));
    }
}

/// Whole doubles keep one fractional digit so they re-read as doubles;
/// anything else takes the shortest round-trip form.
fn format_double(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn depth_exceeded() -> TomletError {
    TomletError::limit_exceeded(format!(
        "Maximum nesting depth of {} exceeded while writing.",
        MAX_NESTING_DEPTH
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tomlet_core::{parse, Date, TomletErrorCode};

    fn render(table: &Table) -> String {
        let mut writer = Writer::new();
        writer.write_document(table).unwrap()
    }

    fn render_value(value: &Value) -> String {
        let mut writer = Writer::new();
        writer.write_value(value).unwrap()
    }

    // ==================== scalar rendering tests ====================

    #[test]
    fn test_int_renders_decimal() {
        assert_eq!(render_value(&Value::Int(42)), "42");
        assert_eq!(render_value(&Value::Int(-7)), "-7");
        assert_eq!(render_value(&Value::Int(0)), "0");
    }

    #[test]
    fn test_whole_double_keeps_one_fractional_digit() {
        assert_eq!(render_value(&Value::Double(2.0)), "2.0");
        assert_eq!(render_value(&Value::Double(-3.0)), "-3.0");
        assert_eq!(render_value(&Value::Double(0.0)), "0.0");
    }

    #[test]
    fn test_fractional_double_renders_shortest() {
        assert_eq!(render_value(&Value::Double(1.25)), "1.25");
        assert_eq!(render_value(&Value::Double(-0.5)), "-0.5");
        assert_eq!(render_value(&Value::Double(3.001)), "3.001");
    }

    #[test]
    fn test_boolean_renders_keyword() {
        assert_eq!(render_value(&Value::Boolean(true)), "true");
        assert_eq!(render_value(&Value::Boolean(false)), "false");
    }

    #[test]
    fn test_date_renders_utc_form() {
        let date = Date::from_ymd_hms(1979, 5, 27, 7, 32, 0).unwrap();
        assert_eq!(render_value(&Value::Date(date)), "1979-05-27T07:32:00Z");
    }

    #[test]
    fn test_bare_string_renders_raw() {
        let doc = parse("word = \"some words\"").unwrap();
        let word = doc.get("word").unwrap();
        assert_eq!(render_value(word), "some words");
    }

    #[test]
    fn test_bare_string_raw_even_with_quotes() {
        let value = Value::from("say \"hi\"\n");
        assert_eq!(render_value(&value), "say \"hi\"\n");
    }

    // ==================== escape tests ====================

    #[test]
    fn test_escape_named_sequences() {
        let mut table = Table::new();
        table.set("s", Value::from("a\u{0008}b\tc\u{000c}d\ne\rf"));
        assert_eq!(render(&table), "s = \"a\\bb\\tc\\fd\\ne\\rf\"\n");
    }

    #[test]
    fn test_escape_quote_solidus_backslash() {
        let mut table = Table::new();
        table.set("s", Value::from("a\"b/c\\d"));
        assert_eq!(render(&table), "s = \"a\\\"b\\/c\\\\d\"\n");
    }

    #[test]
    fn test_escape_control_byte() {
        let mut table = Table::new();
        table.set("s", Value::from("a\u{0001}b"));
        assert_eq!(render(&table), "s = \"a\\u0001b\"\n");
    }

    #[test]
    fn test_escape_non_ascii_as_unicode() {
        let mut table = Table::new();
        table.set("s", Value::from("café"));
        assert_eq!(render(&table), "s = \"caf\\u00e9\"\n");
    }

    #[test]
    fn test_escape_bmp_boundary_codepoints() {
        let mut table = Table::new();
        table.set("s", Value::from("\u{00a0}\u{07ff}\u{0800}\u{ffff}"));
        assert_eq!(render(&table), "s = \"\\u00a0\\u07ff\\u0800\\uffff\"\n");
    }

    #[test]
    fn test_escape_astral_as_surrogate_pair() {
        let mut table = Table::new();
        table.set("s", Value::from("😀"));
        assert_eq!(render(&table), "s = \"\\ud83d\\ude00\"\n");
    }

    #[test]
    fn test_escape_plain_ascii_untouched() {
        let mut table = Table::new();
        table.set("s", Value::from("plain ascii 123!"));
        assert_eq!(render(&table), "s = \"plain ascii 123!\"\n");
    }

    // ==================== array rendering tests ====================

    #[test]
    fn test_dense_array_spacing() {
        let doc = parse("nums = [ 1, 2, 3 ]").unwrap();
        assert_eq!(render(&doc), "nums = [ 1, 2, 3 ]\n");
    }

    #[test]
    fn test_empty_array_renders_brackets() {
        let doc = parse("nums = []").unwrap();
        assert_eq!(render(&doc), "nums = []\n");
    }

    #[test]
    fn test_single_member_array() {
        let doc = parse("nums = [ 7 ]").unwrap();
        assert_eq!(render(&doc), "nums = [ 7 ]\n");
    }

    #[test]
    fn test_string_array_members_are_quoted() {
        let doc = parse("words = [ \"a b\", \"c\" ]").unwrap();
        assert_eq!(render(&doc), "words = [ \"a b\", \"c\" ]\n");
    }

    #[test]
    fn test_nested_arrays_render_recursively() {
        let doc = parse("grid = [ [ 1, 2 ], [ 3 ] ]").unwrap();
        assert_eq!(render(&doc), "grid = [ [ 1, 2 ], [ 3 ] ]\n");
    }

    // ==================== document rendering tests ====================

    #[test]
    fn test_root_entries() {
        let doc = parse("world = true\nmoon = false").unwrap();
        assert_eq!(render(&doc), "world = true\nmoon = false\n");
    }

    #[test]
    fn test_escaped_quotes_round_trip() {
        let doc = parse("word = \"some \\\"words\\\"\"").unwrap();
        assert_eq!(render(&doc), "word = \"some \\\"words\\\"\"\n");
    }

    #[test]
    fn test_table_with_scalar_gets_header() {
        let doc = parse("[table]\nchairs = 4").unwrap();
        assert_eq!(render(&doc), "[table]\nchairs = 4\n");
    }

    #[test]
    fn test_array_of_tables_headers_and_blank_lines() {
        let doc = parse("[[planets]]\nmoons = [ \"io\" ]\n[[planets]]\nmoons = []").unwrap();
        assert_eq!(
            render(&doc),
            "[[planets]]\nmoons = [ \"io\" ]\n\n[[planets]]\nmoons = []\n"
        );
    }

    #[test]
    fn test_intermediate_table_headers_suppressed() {
        let doc = parse(
            "[top.bottom]\nmiddle = \"no\"\n[top.middle.bottom]\nmiddle = \"infact, yes\"",
        )
        .unwrap();
        assert_eq!(
            render(&doc),
            "[top.bottom]\nmiddle = \"no\"\n\n[top.middle.bottom]\nmiddle = \"infact, yes\"\n"
        );
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let doc = parse("[empty]").unwrap();
        assert_eq!(render(&doc), "");
    }

    #[test]
    fn test_blank_line_between_sibling_tables() {
        let doc = parse("[a]\nx = 1\n[b]\ny = 2").unwrap();
        assert_eq!(render(&doc), "[a]\nx = 1\n\n[b]\ny = 2\n");
    }

    #[test]
    fn test_root_entry_then_table_gets_blank_line() {
        let doc = parse("n = 1\n[t]\nk = 2").unwrap();
        assert_eq!(render(&doc), "n = 1\n\n[t]\nk = 2\n");
    }

    #[test]
    fn test_date_entry_line() {
        let mut table = Table::new();
        let date = Date::from_ymd_hms(2021, 1, 1, 0, 0, 0).unwrap();
        table.set("when", Value::Date(date));
        assert_eq!(render(&table), "when = 2021-01-01T00:00:00Z\n");
    }

    #[test]
    fn test_write_value_on_table_matches_document_form() {
        let doc = parse("[table]\nchairs = 4").unwrap();
        let as_document = render(&doc);
        let as_value = render_value(&Value::Table(doc));
        assert_eq!(as_document, as_value);
    }

    #[test]
    fn test_writer_reusable_after_write() {
        let mut writer = Writer::new();
        let first = parse("a = 1").unwrap();
        let second = parse("b = 2").unwrap();
        assert_eq!(writer.write_document(&first).unwrap(), "a = 1\n");
        assert_eq!(writer.write_document(&second).unwrap(), "b = 2\n");
    }

    // ==================== depth limit tests ====================

    #[test]
    fn test_deeply_nested_tables_exceed_depth() {
        let mut table = Table::new();
        table.set("leaf", Value::Int(1));
        for _ in 0..(MAX_NESTING_DEPTH + 10) {
            let mut outer = Table::new();
            outer.set("inner", Value::Table(table));
            table = outer;
        }
        let mut writer = Writer::new();
        let err = writer.write_document(&table).unwrap_err();
        assert_eq!(err.code, TomletErrorCode::Fatal);
    }

    #[test]
    fn test_deeply_nested_arrays_exceed_depth() {
        let mut array = Array::new();
        array.push(Value::Int(1));
        for _ in 0..(MAX_NESTING_DEPTH + 10) {
            let mut outer = Array::new();
            outer.push(Value::Array(array));
            array = outer;
        }
        let mut table = Table::new();
        table.set("deep", Value::Array(array));
        let mut writer = Writer::new();
        let err = writer.write_document(&table).unwrap_err();
        assert_eq!(err.code, TomletErrorCode::Fatal);
    }
}
