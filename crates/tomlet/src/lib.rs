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

//! # Tomlet
//!
//! A TOML-style configuration document engine: ordered tables,
//! homogeneous arrays, precise line diagnostics, and canonical
//! rendering that round-trips.
//!
//! ## Quick Start
//!
//! ```rust
//! use tomlet::{parse, stringify, Value};
//!
//! let doc = parse("[server]\nhost = \"localhost\"\nport = 8080\n")?;
//!
//! // Path lookup across tables and arrays
//! assert_eq!(
//!     doc.find(&["server", "host"]).and_then(Value::as_str),
//!     Some("localhost")
//! );
//!
//! // Canonical text round-trips
//! assert_eq!(stringify(&doc)?, "[server]\nhost = \"localhost\"\nport = 8080\n");
//! # Ok::<(), tomlet::TomletError>(())
//! ```
//!
//! Large files stream from disk without loading them whole:
//!
//! ```rust,no_run
//! let doc = tomlet::load("config.toml")?;
//! # Ok::<(), tomlet::TomletError>(())
//! ```
//!
//! ## Crates
//!
//! - [`tomlet_core`]: document model, scanner, and parser
//! - [`tomlet_c14n`]: canonical text rendering
//! - [`tomlet_stream`]: chunked file and reader input
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the document model

// Re-export the document model and parser
pub use tomlet_core::{
    // Functions
    parse,
    parse_with_options,
    // Document model
    Array,
    Date,
    Table,
    Value,
    ValueKind,
    // Errors
    TomletError,
    TomletErrorCode,
    TomletResult,
    // Parser
    Builder,
    Limits,
    ParseOptions,
};

// Re-export canonical rendering
pub use tomlet_c14n::{stringify, stringify_value, Writer};

// Re-export streaming input
pub use tomlet_stream::{
    from_reader, from_reader_with_options, load, load_with_options, ChunkSource,
};

// Re-export scanner utilities
pub mod lex {
    //! Window scanning utilities
    pub use tomlet_core::lex::{
        line_at, scan, unescape, Cursor, Scanned, Span, StrSource, Token, TokenKind, TokenSource,
    };
}
