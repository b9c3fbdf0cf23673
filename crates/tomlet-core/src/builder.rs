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

//! The document builder.
//!
//! [`Builder`] pulls tokens from a [`TokenSource`] and reduces them into
//! a [`Table`] tree. All parse state lives in the builder instance;
//! nothing is global, so concurrent parses of independent inputs never
//! interfere.
//!
//! Two error disciplines apply. Structural errors (duplicate tables or
//! entries, missing `=`, missing values, bad headers, malformed token
//! streams) abort token consumption immediately. An array member whose
//! kind differs from the array's first member is recorded as a
//! diagnostic and still appended, and parsing continues to completion.
//! Either way a failed parse never yields a tree, and the first
//! diagnostic recorded is the one reported.

use crate::document::{Array, Table};
use crate::error::{TomletError, TomletResult};
use crate::lex::{unescape, StrSource, Token, TokenKind, TokenSource};
use crate::limits::Limits;
use crate::value::{Value, ValueKind};

/// Options controlling a parse.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Resource limits enforced during the parse.
    pub limits: Limits,
}

/// One step of the current-table path from the root.
#[derive(Debug, Clone)]
enum PathStep {
    /// Key of a table entry.
    Key(String),
    /// Index into an array of tables.
    Index(usize),
}

/// Grammar-driven document builder over a token source.
pub struct Builder<S: TokenSource> {
    source: S,
    limits: Limits,
    root: Table,
    /// Path of the table receiving entries, re-resolved on use. Headers
    /// replace it; `[[name]]` headers end it with an array index.
    current: Vec<PathStep>,
    recorded: Option<TomletError>,
}

impl<S: TokenSource> Builder<S> {
    /// Creates a builder reading from `source`.
    pub fn new(source: S, options: &ParseOptions) -> Self {
        Self {
            source,
            limits: options.limits.clone(),
            root: Table::new(),
            current: Vec::new(),
            recorded: None,
        }
    }

    /// Runs the parse to completion and returns the document root.
    ///
    /// A recorded diagnostic wins over a later abort, so the caller
    /// always sees the first error in source order.
    pub fn build(mut self) -> TomletResult<Table> {
        match self.document() {
            Ok(()) => match self.recorded {
                None => Ok(self.root),
                Some(err) => Err(err),
            },
            Err(err) => Err(self.recorded.take().unwrap_or(err)),
        }
    }

    fn document(&mut self) -> TomletResult<()> {
        while let Some(token) = self.source.next_token()? {
            match token.kind {
                TokenKind::Comment => {}
                TokenKind::LeftSquare => self.header()?,
                TokenKind::Ident => self.entry(token)?,
                _ => return Err(self.fatal_here()),
            }
        }
        Ok(())
    }

    // ---- headers ----

    /// Parses one header after its opening `[`: a second `[` selects the
    /// array-of-tables form.
    fn header(&mut self) -> TomletResult<()> {
        let first = self.header_token()?;
        if first.kind == TokenKind::LeftSquare {
            let path = self.header_path(None)?;
            let close = self.header_token()?;
            if close.kind != TokenKind::RightSquare {
                return Err(self.invalid_header());
            }
            self.open_array_table(&path)
        } else {
            let path = self.header_path(Some(first))?;
            self.open_table(&path)
        }
    }

    /// Parses `name (. name)* ]`, consuming the closing bracket.
    fn header_path(&mut self, first: Option<Token>) -> TomletResult<Vec<String>> {
        let mut path = Vec::new();
        let mut token = match first {
            Some(token) => token,
            None => self.header_token()?,
        };
        loop {
            if token.kind != TokenKind::Ident {
                return Err(self.invalid_header());
            }
            path.push(token.text);
            match self.header_token()?.kind {
                TokenKind::Dot => token = self.header_token()?,
                TokenKind::RightSquare => return Ok(path),
                _ => return Err(self.invalid_header()),
            }
        }
    }

    /// Next token inside a header; end of input here means the header
    /// never closed.
    fn header_token(&mut self) -> TomletResult<Token> {
        match self.source.next_token()? {
            Some(token) => Ok(token),
            None => Err(self.invalid_header()),
        }
    }

    /// Resolves a `[path]` header and makes its table current.
    ///
    /// Missing intermediates are created as empty tables; an
    /// intermediate naming an array of tables continues into its last
    /// member. A final segment that already exists, or an intermediate
    /// that resolves to anything other than a table, is a duplicate
    /// table definition.
    fn open_table(&mut self, path: &[String]) -> TomletResult<()> {
        let line = self.source.line();
        let line_text = self.source.line_text();
        let (final_key, parents) = match path.split_last() {
            Some(split) => split,
            None => return Err(self.invalid_header()),
        };
        let mut steps = Vec::with_capacity(path.len() + 1);
        let mut table = &mut self.root;
        for key in parents {
            table = descend(table, key, &mut steps, line, &line_text)?;
        }
        if table.contains_key(final_key) {
            return Err(TomletError::table_defined(line, line_text));
        }
        table.set(final_key.clone(), Value::Table(Table::new()));
        steps.push(PathStep::Key(final_key.clone()));
        self.current = steps;
        Ok(())
    }

    /// Resolves a `[[path]]` header: appends a fresh table to the named
    /// array of tables and makes it current.
    fn open_array_table(&mut self, path: &[String]) -> TomletResult<()> {
        let line = self.source.line();
        let line_text = self.source.line_text();
        let (final_key, parents) = match path.split_last() {
            Some(split) => split,
            None => return Err(self.invalid_header()),
        };
        let mut steps = Vec::with_capacity(path.len() + 1);
        let mut table = &mut self.root;
        for key in parents {
            table = descend(table, key, &mut steps, line, &line_text)?;
        }
        if !table.contains_key(final_key) {
            table.set(
                final_key.clone(),
                Value::Array(Array::typed(ValueKind::Table)),
            );
        }
        steps.push(PathStep::Key(final_key.clone()));
        let array = match table.get_mut(final_key) {
            Some(Value::Array(array)) if array.member_type() == Some(ValueKind::Table) => array,
            _ => return Err(TomletError::table_defined(line, line_text)),
        };
        array.push(Value::Table(Table::new()));
        steps.push(PathStep::Index(array.len() - 1));
        self.current = steps;
        Ok(())
    }

    /// Re-resolves the current-table path against the root.
    ///
    /// The path was produced by header resolution and later statements
    /// only add to the tree, so a dangling step is a builder defect;
    /// it reports as fatal rather than panicking.
    fn current_table_mut(&mut self) -> TomletResult<&mut Table> {
        let line = self.source.line();
        let line_text = self.source.line_text();
        let mut steps = self.current.iter();
        let mut value: &mut Value = match steps.next() {
            None => return Ok(&mut self.root),
            Some(PathStep::Key(key)) => self.root.get_mut(key),
            Some(PathStep::Index(_)) => None,
        }
        .ok_or_else(|| TomletError::fatal(line, line_text.as_str()))?;
        for step in steps {
            value = match (step, value) {
                (PathStep::Key(key), Value::Table(table)) => table.get_mut(key),
                (PathStep::Index(index), Value::Array(array)) => array.get_mut(*index),
                _ => None,
            }
            .ok_or_else(|| TomletError::fatal(line, line_text.as_str()))?;
        }
        value
            .as_table_mut()
            .ok_or_else(|| TomletError::fatal(line, line_text))
    }

    // ---- entries ----

    /// Parses one `key = value` entry; `key` is already read. The
    /// duplicate-key check runs after the value parses.
    fn entry(&mut self, key: Token) -> TomletResult<()> {
        match self.source.next_token()? {
            Some(token) if token.kind == TokenKind::Eq => {}
            // anything else after a key, dotted keys included
            _ => {
                return Err(TomletError::no_eq(
                    self.source.line(),
                    self.source.line_text(),
                ))
            }
        }
        let first = match self.source.next_token()? {
            Some(token) => token,
            None => return Err(self.no_value()),
        };
        let value = self.value(first, 0)?;
        let line = self.source.line();
        let line_text = self.source.line_text();
        let table = self.current_table_mut()?;
        if table.contains_key(&key.text) {
            return Err(TomletError::entry_defined(line, line_text));
        }
        table.set(key.text, value);
        Ok(())
    }

    /// Parses one value whose first token is `token`.
    fn value(&mut self, token: Token, depth: usize) -> TomletResult<Value> {
        match token.kind {
            TokenKind::Str => {
                let body = &token.text[1..token.text.len() - 1];
                Ok(Value::String(unescape(body)))
            }
            TokenKind::Number => self.number(&token),
            TokenKind::Bool => Ok(Value::Boolean(token.text == "true")),
            TokenKind::LeftSquare => self.array(depth),
            _ => Err(self.no_value()),
        }
    }

    /// Converts a number lexeme: a dot selects the double reading, and
    /// a lexeme the numeric types cannot hold is a missing value.
    fn number(&self, token: &Token) -> TomletResult<Value> {
        if token.text.contains('.') {
            match token.text.parse::<f64>() {
                Ok(double) => Ok(Value::Double(double)),
                Err(_) => Err(self.no_value()),
            }
        } else {
            match token.text.parse::<i64>() {
                Ok(int) => Ok(Value::Int(int)),
                Err(_) => Err(self.no_value()),
            }
        }
    }

    /// Parses an array literal after its opening `[`. The first member
    /// fixes the member type; a mismatched member is recorded and still
    /// appended. A trailing comma is allowed.
    fn array(&mut self, depth: usize) -> TomletResult<Value> {
        if depth >= self.limits.max_nesting_depth {
            return Err(self
                .fatal_here()
                .with_context("array nesting depth limit exceeded"));
        }
        let mut first_kind: Option<ValueKind> = None;
        let mut members: Vec<Value> = Vec::new();
        loop {
            let token = match self.source.next_token()? {
                Some(token) => token,
                None => return Err(self.no_value()),
            };
            if token.kind == TokenKind::RightSquare {
                break;
            }
            let member = self.value(token, depth + 1)?;
            match first_kind {
                None => first_kind = Some(member.kind()),
                Some(kind) if kind != member.kind() => self.record_mismatch(),
                Some(_) => {}
            }
            members.push(member);
            let sep = match self.source.next_token()? {
                Some(token) => token,
                None => return Err(self.no_value()),
            };
            match sep.kind {
                TokenKind::Comma => {}
                TokenKind::RightSquare => break,
                _ => return Err(self.no_value()),
            }
        }
        let mut array = match first_kind {
            Some(kind) => Array::typed(kind),
            None => Array::new(),
        };
        for member in members {
            array.push(member);
        }
        Ok(Value::Array(array))
    }

    // ---- diagnostics ----

    fn record_mismatch(&mut self) {
        if self.recorded.is_none() {
            self.recorded = Some(TomletError::array_member_mismatch(
                self.source.line(),
                self.source.line_text(),
            ));
        }
    }

    fn no_value(&self) -> TomletError {
        TomletError::no_value(self.source.line(), self.source.line_text())
    }

    fn invalid_header(&self) -> TomletError {
        TomletError::invalid_header(self.source.line(), self.source.line_text())
    }

    fn fatal_here(&self) -> TomletError {
        TomletError::fatal(self.source.line(), self.source.line_text())
    }
}

/// Walks one intermediate header segment: creates a missing table,
/// enters a table, or continues into the last member of an array of
/// tables. Anything else is a duplicate table definition.
fn descend<'a>(
    table: &'a mut Table,
    key: &str,
    steps: &mut Vec<PathStep>,
    line: usize,
    line_text: &str,
) -> TomletResult<&'a mut Table> {
    if !table.contains_key(key) {
        table.set(key.to_string(), Value::Table(Table::new()));
    }
    steps.push(PathStep::Key(key.to_string()));
    let value = match table.get_mut(key) {
        Some(value) => value,
        None => return Err(TomletError::fatal(line, line_text)),
    };
    match value {
        Value::Table(table) => Ok(table),
        Value::Array(array) => {
            let index = match array.len().checked_sub(1) {
                Some(index) => index,
                None => return Err(TomletError::table_defined(line, line_text)),
            };
            steps.push(PathStep::Index(index));
            match array.get_mut(index) {
                Some(Value::Table(table)) => Ok(table),
                _ => Err(TomletError::table_defined(line, line_text)),
            }
        }
        _ => Err(TomletError::table_defined(line, line_text)),
    }
}

/// Parses a complete document held in memory.
///
/// # Examples
///
/// ```
/// use tomlet_core::parse;
///
/// let doc = parse("[world]\nplanet = \"pluto\"\n").unwrap();
/// let planet = doc.find(&["world", "planet"]).unwrap();
/// assert_eq!(planet.as_str(), Some("pluto"));
/// ```
pub fn parse(src: &str) -> TomletResult<Table> {
    parse_with_options(src, &ParseOptions::default())
}

/// Parses a complete document with explicit limits.
pub fn parse_with_options(src: &str, options: &ParseOptions) -> TomletResult<Table> {
    if src.len() > options.limits.max_source_size {
        return Err(TomletError::limit_exceeded("source size"));
    }
    Builder::new(StrSource::new(src), options).build()
}
