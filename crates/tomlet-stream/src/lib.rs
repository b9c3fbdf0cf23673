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

//! Streaming input for Tomlet.
//!
//! Parses documents from files and readers without loading them into
//! memory first. Bytes are pulled in chunks and handed to the same parser
//! the in-memory API uses; resident memory tracks the longest source line,
//! not the input size.
//!
//! # Examples
//!
//! ```rust,no_run
//! let doc = tomlet_stream::load("config.toml")?;
//! println!("{} top-level entries", doc.len());
//! # Ok::<(), tomlet_core::TomletError>(())
//! ```
//!
//! Any [`std::io::Read`] works as input:
//!
//! ```
//! use std::io::Cursor;
//! use tomlet_core::Value;
//!
//! let doc = tomlet_stream::from_reader(Cursor::new("chairs = 4\n"))?;
//! assert_eq!(doc.get("chairs").and_then(Value::as_int), Some(4));
//! # Ok::<(), tomlet_core::TomletError>(())
//! ```

mod reader;

pub use reader::ChunkSource;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tomlet_core::{Builder, ParseOptions, Table, TomletError, TomletResult};

/// Parse the document at `path`.
///
/// # Errors
///
/// A file that cannot be opened or read reports `FileIo` with the path in
/// the message; parse failures carry the usual line diagnostics.
///
/// # Examples
///
/// ```rust,no_run
/// let doc = tomlet_stream::load("config.toml")?;
/// # Ok::<(), tomlet_core::TomletError>(())
/// ```
pub fn load(path: impl AsRef<Path>) -> TomletResult<Table> {
    load_with_options(path, &ParseOptions::default())
}

/// Parse the document at `path` honoring the limits in `options`.
pub fn load_with_options(path: impl AsRef<Path>, options: &ParseOptions) -> TomletResult<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|_| TomletError::file_io(path.display()))?;
    let source =
        ChunkSource::with_options(file, options).with_origin(path.display().to_string());
    Builder::new(source, options).build()
}

/// Parse a document from any reader.
pub fn from_reader(reader: impl Read) -> TomletResult<Table> {
    from_reader_with_options(reader, &ParseOptions::default())
}

/// Parse a document from any reader honoring the limits in `options`.
pub fn from_reader_with_options(
    reader: impl Read,
    options: &ParseOptions,
) -> TomletResult<Table> {
    let source = ChunkSource::with_options(reader, options);
    Builder::new(source, options).build()
}
