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

//! Lexical analysis for Tomlet documents.
//!
//! The scanner recognizes one token per call over a window of source
//! bytes ([`scan`]); token sources ([`TokenSource`]) own the window and
//! the cursor and hand the builder a plain stream of [`Token`]s. The
//! windowed contract is what lets `tomlet-stream` feed the same scanner
//! from a growable file buffer without ever tearing a token.
//!
//! # Components
//!
//! - [`token`]: token, span, and cursor types
//! - [`scan`](mod@scan): the window scanner
//! - [`source`]: the [`TokenSource`] trait and the in-memory source
//! - [`strings`]: escape decoding for quoted strings

pub mod scan;
pub mod source;
pub mod strings;
pub mod token;

pub use scan::{scan, Scanned};
pub use source::{line_at, StrSource, TokenSource};
pub use strings::unescape;
pub use token::{Cursor, Span, Token, TokenKind};
