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

//! Error types for Tomlet parsing and serialization.

use std::fmt;
use thiserror::Error;

/// The numeric code of a parse or I/O failure.
///
/// Discriminant values are part of the public contract: the `tomlet` binary
/// uses them as process exit codes, and zero is reserved for success (the
/// `Ok` arm of [`TomletResult`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TomletErrorCode {
    /// Reading from or writing to a file failed.
    FileIo = 1,
    /// Unrecoverable parse failure (malformed token stream).
    Fatal = 2,
    /// A table header names a table that already exists.
    TableDefined = 3,
    /// A key is assigned twice in the same table.
    EntryDefined = 4,
    /// The token after `=` does not start a value.
    NoValue = 5,
    /// A key is not followed by `=`.
    NoEq = 6,
    /// A table header is malformed or unbalanced.
    InvalidHeader = 7,
    /// An array literal mixes member types.
    ArrayMemberMismatch = 8,
}

impl TomletErrorCode {
    /// Short human message for this code.
    pub fn message(self) -> &'static str {
        match self {
            Self::FileIo => "Error reading from/writing to file.",
            Self::Fatal => "Fatal error.",
            Self::TableDefined => "Table is already defined.",
            Self::EntryDefined => "Entry is already defined.",
            Self::NoValue => "Missing valid value.",
            Self::NoEq => "Missing equal sign in table entry.",
            Self::InvalidHeader => "Incomplete table header.",
            Self::ArrayMemberMismatch => "Array member must be the same type as other members.",
        }
    }
}

impl fmt::Display for TomletErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileIo => write!(f, "FileIoError"),
            Self::Fatal => write!(f, "FatalError"),
            Self::TableDefined => write!(f, "TableDefinedError"),
            Self::EntryDefined => write!(f, "EntryDefinedError"),
            Self::NoValue => write!(f, "NoValueError"),
            Self::NoEq => write!(f, "NoEqError"),
            Self::InvalidHeader => write!(f, "InvalidHeaderError"),
            Self::ArrayMemberMismatch => write!(f, "ArrayMemberMismatchError"),
        }
    }
}

/// A structured parse or I/O diagnostic.
///
/// Parse-site errors always carry the 1-based source line number and the raw
/// text of the offending line; file-level errors carry the file path in
/// `context` instead. The rendered form is the composed long description,
/// e.g. `Error on line 3. Entry is already defined.: planet = 2`.
#[derive(Debug, Clone, Error)]
#[error("{}", self.description())]
pub struct TomletError {
    /// The numeric failure code.
    pub code: TomletErrorCode,
    /// Source line number (1-based); `None` for errors without a position.
    pub line: Option<usize>,
    /// Raw text of the offending source line.
    pub line_text: Option<String>,
    /// Additional context (e.g. `File: config.toml`).
    pub context: Option<String>,
}

impl TomletError {
    fn at(code: TomletErrorCode, line: usize, line_text: impl Into<String>) -> Self {
        Self {
            code,
            line: Some(line),
            line_text: Some(line_text.into()),
            context: None,
        }
    }

    /// Short human message for this error's code.
    pub fn message(&self) -> &'static str {
        self.code.message()
    }

    /// The composed long-form description.
    pub fn description(&self) -> String {
        match (self.line, &self.context) {
            (Some(line), None) => format!(
                "Error on line {}. {}: {}",
                line,
                self.message(),
                self.line_text.as_deref().unwrap_or("")
            ),
            (Some(line), Some(context)) => format!(
                "Error on line {}. {}: {} ({})",
                line,
                self.message(),
                self.line_text.as_deref().unwrap_or(""),
                context
            ),
            (None, Some(context)) => format!("{} {}", self.message(), context),
            (None, None) => self.message().to_string(),
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error code

    pub fn file_io(path: impl fmt::Display) -> Self {
        Self {
            code: TomletErrorCode::FileIo,
            line: None,
            line_text: None,
            context: Some(format!("File: {}", path)),
        }
    }

    pub fn fatal(line: usize, line_text: impl Into<String>) -> Self {
        Self::at(TomletErrorCode::Fatal, line, line_text)
    }

    pub fn table_defined(line: usize, line_text: impl Into<String>) -> Self {
        Self::at(TomletErrorCode::TableDefined, line, line_text)
    }

    pub fn entry_defined(line: usize, line_text: impl Into<String>) -> Self {
        Self::at(TomletErrorCode::EntryDefined, line, line_text)
    }

    pub fn no_value(line: usize, line_text: impl Into<String>) -> Self {
        Self::at(TomletErrorCode::NoValue, line, line_text)
    }

    pub fn no_eq(line: usize, line_text: impl Into<String>) -> Self {
        Self::at(TomletErrorCode::NoEq, line, line_text)
    }

    pub fn invalid_header(line: usize, line_text: impl Into<String>) -> Self {
        Self::at(TomletErrorCode::InvalidHeader, line, line_text)
    }

    pub fn array_member_mismatch(line: usize, line_text: impl Into<String>) -> Self {
        Self::at(TomletErrorCode::ArrayMemberMismatch, line, line_text)
    }

    /// A configured limit was exceeded; reported as a fatal error.
    pub fn limit_exceeded(what: impl Into<String>) -> Self {
        Self {
            code: TomletErrorCode::Fatal,
            line: None,
            line_text: None,
            context: Some(what.into()),
        }
    }
}

/// Result type for Tomlet operations.
pub type TomletResult<T> = Result<T, TomletError>;
