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

//! Token sources feeding the document builder.

use crate::error::{TomletError, TomletResult};
use crate::lex::scan::{scan, Scanned};
use crate::lex::token::{Cursor, Token};

/// A pull source of tokens.
///
/// The builder only ever asks for the next token and, when reporting a
/// failure, for the position and text of the current source line.
/// Implementations own the bytes and the scan cursor; buffered sources
/// refill behind this interface so the builder never sees a torn token.
pub trait TokenSource {
    /// Returns the next token, or `None` at end of input.
    fn next_token(&mut self) -> TomletResult<Option<Token>>;

    /// 1-based line number of the current scan position.
    fn line(&self) -> usize;

    /// Text of the current source line, without its terminator.
    fn line_text(&self) -> String;
}

/// Token source over a complete in-memory document.
#[derive(Debug)]
pub struct StrSource<'a> {
    src: &'a str,
    cur: Cursor,
}

impl<'a> StrSource<'a> {
    /// Creates a source over `src`.
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            cur: Cursor::new(),
        }
    }
}

impl TokenSource for StrSource<'_> {
    fn next_token(&mut self) -> TomletResult<Option<Token>> {
        match scan(self.src, true, &mut self.cur) {
            Scanned::Token(token) => Ok(Some(token)),
            Scanned::End => Ok(None),
            // an unterminated string is unrecoverable; the whole buffer
            // is present, so NeedMore cannot occur here
            Scanned::NeedMore | Scanned::Unterminated => {
                Err(TomletError::fatal(self.line(), self.line_text()))
            }
        }
    }

    fn line(&self) -> usize {
        self.cur.line
    }

    fn line_text(&self) -> String {
        line_at(self.src, self.cur.line_start)
    }
}

/// Text of the line starting at byte offset `line_start`, up to (and
/// not including) the next newline or the end of the window.
pub fn line_at(window: &str, line_start: usize) -> String {
    let tail = &window[line_start.min(window.len())..];
    let end = memchr::memchr(b'\n', tail.as_bytes()).unwrap_or(tail.len());
    tail[..end].trim_end_matches('\r').to_string()
}
