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

//! Token and scan-position types.

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `[` — opens a table header or an array literal.
    LeftSquare,
    /// `]`
    RightSquare,
    /// `.` — path separator inside table headers.
    Dot,
    /// `=`
    Eq,
    /// `,`
    Comma,
    /// Bare word used as a key.
    Ident,
    /// Quoted string literal; the lexeme keeps its surrounding quotes.
    Str,
    /// Decimal integer or fractional number literal.
    Number,
    /// `true` or `false`.
    Bool,
    /// `#` comment running to the end of its line.
    Comment,
}

/// Half-open byte range of a lexeme within its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// First byte offset of the lexeme.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last byte of the lexeme.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Length of the lexeme in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for a zero-length span.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns this span shifted right by `base` bytes.
    ///
    /// Sources that hand the scanner a sliding window use this to report
    /// spans relative to the start of the overall input.
    #[inline]
    pub const fn offset(self, base: usize) -> Self {
        Self {
            start: self.start + base,
            end: self.end + base,
        }
    }
}

/// A single lexical token.
///
/// The lexeme text is an owned copy so tokens stay valid after the
/// source window behind them slides or is refilled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was recognized.
    pub kind: TokenKind,
    /// The lexeme text. `Str` tokens keep their surrounding quotes;
    /// decoding escapes is the builder's job.
    pub text: String,
    /// 1-based source line the token starts on.
    pub line: usize,
    /// Byte range of the lexeme.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            span,
        }
    }
}

/// Mutable scan position over a source window.
///
/// `pos` and `line_start` are byte offsets into the window handed to the
/// scanner; `line` is the absolute 1-based line number and is never
/// reset. Whitespace is committed to the cursor as it is consumed, so a
/// rescan after a window refill resumes exactly at the pending token's
/// first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Offset of the next unread byte.
    pub pos: usize,
    /// 1-based line number at `pos`.
    pub line: usize,
    /// Offset of the first byte of the line containing `pos`.
    pub line_start: usize,
}

impl Cursor {
    /// A cursor at the start of input: offset zero, line one.
    #[inline]
    pub const fn new() -> Self {
        Self {
            pos: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// Shifts offsets left after the window dropped `n` leading bytes.
    ///
    /// Callers must not drop bytes past `line_start`; the current line
    /// is always retained in full for diagnostics.
    #[inline]
    pub fn rebase(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
        self.line_start = self.line_start.saturating_sub(n);
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
