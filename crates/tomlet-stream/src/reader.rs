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

//! Chunked token source.
//!
//! [`ChunkSource`] feeds the window scanner from any [`Read`]
//! implementation, pulling bytes in fixed-size chunks and growing the
//! window only when a lexeme straddles a chunk boundary. Consumed text
//! before the current line is dropped on refill, so memory use tracks the
//! longest line rather than the whole input.

use std::io::Read;

use tomlet_core::lex::{line_at, scan, Cursor, Scanned, Token, TokenSource};
use tomlet_core::{ParseOptions, TomletError, TomletErrorCode, TomletResult};

/// Bytes requested from the reader per refill.
const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Incremental token source over any byte reader.
///
/// Bytes are decoded chunk by chunk; a multi-byte UTF-8 sequence split
/// across a chunk boundary is held back until its tail arrives, so the
/// scanner only ever sees complete characters. Tokens likewise never
/// tear: when a lexeme touches the window end the source refills and
/// rescans it whole.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use tomlet_core::{Builder, ParseOptions, Value};
/// use tomlet_stream::ChunkSource;
///
/// let source = ChunkSource::new(Cursor::new("planet = \"mars\"\n"));
/// let doc = Builder::new(source, &ParseOptions::default()).build()?;
/// assert_eq!(doc.get("planet").and_then(Value::as_str), Some("mars"));
/// # Ok::<(), tomlet_core::TomletError>(())
/// ```
pub struct ChunkSource<R: Read> {
    reader: R,
    /// Decoded text not yet fully consumed by the scanner.
    window: String,
    /// Trailing bytes of an incomplete UTF-8 sequence from the last chunk.
    pending: Vec<u8>,
    /// Scan position, relative to the window start.
    cur: Cursor,
    /// Bytes discarded before the window start; token spans are shifted
    /// by this much so they stay absolute.
    dropped: usize,
    chunk_size: usize,
    max_source_size: usize,
    total: usize,
    eof: bool,
    /// Name used in read-failure diagnostics, typically a file path.
    origin: String,
}

impl<R: Read> ChunkSource<R> {
    /// Create a source with default limits and chunk size.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, &ParseOptions::default())
    }

    /// Create a source honoring the limits in `options`.
    pub fn with_options(reader: R, options: &ParseOptions) -> Self {
        Self {
            reader,
            window: String::new(),
            pending: Vec::new(),
            cur: Cursor::new(),
            dropped: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_source_size: options.limits.max_source_size,
            total: 0,
            eof: false,
            origin: "<input>".to_string(),
        }
    }

    /// Override the refill chunk size. Sizes below one byte are clamped.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.max(1);
        self
    }

    /// Name this source in read-failure diagnostics.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Total bytes accepted from the reader so far.
    #[inline]
    pub fn bytes_read(&self) -> usize {
        self.total
    }

    /// Pull one chunk from the reader into the window.
    ///
    /// Text before the current line start is dropped first; the line in
    /// progress is always retained so diagnostics can quote it.
    fn refill(&mut self) -> TomletResult<()> {
        let keep_from = self.cur.line_start;
        if keep_from > 0 {
            self.window.drain(..keep_from);
            self.dropped += keep_from;
            self.cur.rebase(keep_from);
        }

        let mut chunk = vec![0u8; self.chunk_size];
        let n = self
            .reader
            .read(&mut chunk)
            .map_err(|err| TomletError::file_io(format!("{} ({})", self.origin, err)))?;
        if n == 0 {
            self.eof = true;
            if !self.pending.is_empty() {
                return Err(self.invalid_utf8());
            }
            return Ok(());
        }

        self.total += n;
        if self.total > self.max_source_size {
            return Err(TomletError::limit_exceeded("source size"));
        }

        let mut bytes = std::mem::take(&mut self.pending);
        bytes.extend_from_slice(&chunk[..n]);
        let valid = match std::str::from_utf8(&bytes) {
            Ok(_) => bytes.len(),
            // An error with no length is a sequence cut off by the chunk
            // boundary; its tail comes with the next refill.
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(_) => return Err(self.invalid_utf8()),
        };
        self.pending = bytes.split_off(valid);
        let text = String::from_utf8(bytes).map_err(|_| self.invalid_utf8())?;
        self.window.push_str(&text);
        Ok(())
    }

    fn invalid_utf8(&self) -> TomletError {
        TomletError {
            code: TomletErrorCode::Fatal,
            line: None,
            line_text: None,
            context: Some(format!("invalid UTF-8 in {}", self.origin)),
        }
    }

    fn unterminated(&self) -> TomletError {
        TomletError::fatal(self.cur.line, line_at(&self.window, self.cur.line_start))
    }
}

impl<R: Read> TokenSource for ChunkSource<R> {
    fn next_token(&mut self) -> TomletResult<Option<Token>> {
        loop {
            match scan(&self.window, self.eof, &mut self.cur) {
                Scanned::Token(mut token) => {
                    token.span = token.span.offset(self.dropped);
                    return Ok(Some(token));
                }
                Scanned::End => return Ok(None),
                Scanned::NeedMore => self.refill()?,
                Scanned::Unterminated => return Err(self.unterminated()),
            }
        }
    }

    fn line(&self) -> usize {
        self.cur.line
    }

    fn line_text(&self) -> String {
        line_at(&self.window, self.cur.line_start)
    }
}
