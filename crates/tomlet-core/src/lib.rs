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

//! Core document model and parser for Tomlet.
//!
//! This crate holds the document model ([`Value`], [`Table`], [`Array`],
//! [`Date`]), the tokenizer ([`lex`]), and the builder that reduces a
//! token stream into a document tree ([`parse`]).
//!
//! Documents are ordered: tables keep their entries in insertion order
//! and canonical stringification (the `tomlet-c14n` crate) reproduces
//! that order. Arrays are homogeneous; the builder records a diagnostic
//! for a mixed-kind array literal but still finishes the parse so the
//! report reflects the fullest context. A failed parse never yields a
//! partial tree.
//!
//! # Examples
//!
//! ```
//! use tomlet_core::{parse, Value};
//!
//! let doc = parse("[server]\nhost = \"example.com\"\nport = 8080\n").unwrap();
//! assert_eq!(doc.find(&["server", "port"]).and_then(Value::as_int), Some(8080));
//! ```

mod builder;
mod document;
mod error;
pub mod lex;
mod limits;
mod value;

pub use builder::{parse, parse_with_options, Builder, ParseOptions};
pub use document::{Array, Table};
pub use error::{TomletError, TomletErrorCode, TomletResult};
pub use limits::Limits;
pub use value::{Date, Value, ValueKind};
