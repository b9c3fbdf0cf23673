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

//! Tomlet canonical rendering.
//!
//! Turns a document tree back into configuration text that the parser
//! reads to an equal tree. The output is deterministic: entries keep their
//! insertion order, every header and entry has one fixed spelling, and the
//! result is stable under repeated render/parse cycles.
//!
//! # Output form
//!
//! - Nested tables become `[dotted.path]` headers; a header is omitted when
//!   the first value inside is itself a table or an array of tables, so
//!   purely structural intermediate tables never print an empty section.
//! - Arrays of tables emit one `[[dotted.path]]` header per element.
//! - Headers after the first output are preceded by a blank line.
//! - Plain arrays render densely on one line: `[ 1, 2, 3 ]`.
//! - Strings are quoted with the reader's escape table; characters outside
//!   printable ASCII are written as `\uXXXX` escapes.
//!
//! # Examples
//!
//! ```
//! use tomlet_core::parse;
//!
//! let doc = parse("[table]\nchairs = 4\n")?;
//! assert_eq!(tomlet_c14n::stringify(&doc)?, "[table]\nchairs = 4\n");
//! # Ok::<(), tomlet_core::TomletError>(())
//! ```

mod writer;

pub use writer::Writer;

use tomlet_core::{Table, TomletResult, Value};

/// Render a document tree to its canonical text.
///
/// # Errors
///
/// Fails only when the tree nests deeper than the writer's recursion
/// limit; documents produced by the parser always render cleanly.
///
/// # Examples
///
/// ```
/// use tomlet_core::parse;
/// use tomlet_c14n::stringify;
///
/// let doc = parse("world = true\nmoon = false\n")?;
/// assert_eq!(stringify(&doc)?, "world = true\nmoon = false\n");
/// # Ok::<(), tomlet_core::TomletError>(())
/// ```
pub fn stringify(table: &Table) -> TomletResult<String> {
    let mut writer = Writer::new();
    writer.write_document(table)
}

/// Render a single value to text.
///
/// A table renders in full document form and an array as a dense literal.
/// A bare string renders as its raw content, unquoted and unescaped, which
/// makes this the display form for values plucked out of a document.
///
/// # Errors
///
/// Fails only when the value nests deeper than the writer's recursion
/// limit.
///
/// # Examples
///
/// ```
/// use tomlet_core::parse;
/// use tomlet_c14n::stringify_value;
///
/// let doc = parse("word = \"some words\"\n")?;
/// let word = doc.get("word").expect("entry exists");
/// assert_eq!(stringify_value(word)?, "some words");
/// # Ok::<(), tomlet_core::TomletError>(())
/// ```
pub fn stringify_value(value: &Value) -> TomletResult<String> {
    let mut writer = Writer::new();
    writer.write_value(value)
}
