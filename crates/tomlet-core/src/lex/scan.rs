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

//! The window scanner.
//!
//! [`scan`] recognizes one token per call over a caller-supplied window
//! of source bytes. The caller owns the window and the [`Cursor`]; when
//! the window is only a prefix of the input (`at_eof == false`) and a
//! lexeme touches the window end, the scanner answers
//! [`Scanned::NeedMore`] without committing the cursor, so the caller
//! can grow the window and rescan the same token from its first byte.
//! Tokens are therefore never torn across refills.

use memchr::memchr;

use crate::lex::token::{Cursor, Span, Token, TokenKind};

/// Outcome of a single scan step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scanned {
    /// A complete token was recognized and the cursor advanced past it.
    Token(Token),
    /// Nothing but whitespace remained and the window is final.
    End,
    /// The lexeme in progress may extend past the window; refill and
    /// rescan. Never returned when `at_eof` is true.
    NeedMore,
    /// A string literal was cut off by a raw newline or end of input.
    Unterminated,
}

/// Structural single-byte tokens.
fn punct_kind(b: u8) -> Option<TokenKind> {
    match b {
        b'[' => Some(TokenKind::LeftSquare),
        b']' => Some(TokenKind::RightSquare),
        b'.' => Some(TokenKind::Dot),
        b'=' => Some(TokenKind::Eq),
        b',' => Some(TokenKind::Comma),
        _ => None,
    }
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Bytes that end a bare word.
fn is_word_end(b: u8) -> bool {
    is_space(b) || punct_kind(b).is_some() || b == b'"' || b == b'#'
}

/// Returns `true` if the lexeme reads as a decimal number: an optional
/// sign, digits, and an optional `.digits` fraction. No exponents, no
/// radix prefixes.
fn is_number_form(word: &str) -> bool {
    let digits = word
        .strip_prefix(|c| c == '-' || c == '+')
        .unwrap_or(word);
    if digits.is_empty() {
        return false;
    }
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match digits.split_once('.') {
        Some((int_part, frac)) => all_digits(int_part) && all_digits(frac),
        None => all_digits(digits),
    }
}

/// Scans the next token from `window` starting at the cursor.
///
/// Whitespace (spaces, tabs, `\r`, newlines) is skipped and committed to
/// the cursor before the token attempt; a newline bumps `cur.line` and
/// `cur.line_start`. On [`Scanned::Token`] the cursor sits just past the
/// lexeme. On [`Scanned::NeedMore`] the cursor sits at the lexeme's
/// first byte and the call is safe to repeat against a longer window.
pub fn scan(window: &str, at_eof: bool, cur: &mut Cursor) -> Scanned {
    let bytes = window.as_bytes();
    let len = bytes.len();

    while cur.pos < len && is_space(bytes[cur.pos]) {
        if bytes[cur.pos] == b'\n' {
            cur.line += 1;
            cur.line_start = cur.pos + 1;
        }
        cur.pos += 1;
    }
    if cur.pos == len {
        return if at_eof { Scanned::End } else { Scanned::NeedMore };
    }

    let i = cur.pos;
    let b = bytes[i];

    if let Some(kind) = punct_kind(b) {
        let token = Token::new(kind, &window[i..i + 1], cur.line, Span::new(i, i + 1));
        cur.pos = i + 1;
        return Scanned::Token(token);
    }

    if b == b'"' {
        let mut j = i + 1;
        loop {
            if j == len {
                return if at_eof {
                    Scanned::Unterminated
                } else {
                    Scanned::NeedMore
                };
            }
            match bytes[j] {
                b'"' => break,
                b'\n' => return Scanned::Unterminated,
                b'\\' => {
                    if j + 1 == len {
                        return if at_eof {
                            Scanned::Unterminated
                        } else {
                            Scanned::NeedMore
                        };
                    }
                    if bytes[j + 1] == b'\n' {
                        return Scanned::Unterminated;
                    }
                    j += 2;
                }
                _ => j += 1,
            }
        }
        let token = Token::new(
            TokenKind::Str,
            &window[i..j + 1],
            cur.line,
            Span::new(i, j + 1),
        );
        cur.pos = j + 1;
        return Scanned::Token(token);
    }

    if b == b'#' {
        return match memchr(b'\n', &bytes[i..]) {
            Some(off) => {
                let j = i + off;
                let token =
                    Token::new(TokenKind::Comment, &window[i..j], cur.line, Span::new(i, j));
                // the newline stays behind for the whitespace pass
                cur.pos = j;
                Scanned::Token(token)
            }
            None if at_eof => {
                let token = Token::new(
                    TokenKind::Comment,
                    &window[i..],
                    cur.line,
                    Span::new(i, len),
                );
                cur.pos = len;
                Scanned::Token(token)
            }
            None => Scanned::NeedMore,
        };
    }

    // Bare word: ident, number, or boolean keyword. A `.` joins the run
    // only while the run so far reads as a signed integer and a digit
    // follows the dot, so `1.5` is one lexeme while `a.b` is three.
    let mut j = i;
    let mut seen_dot = false;
    loop {
        if j == len {
            if !at_eof {
                return Scanned::NeedMore;
            }
            break;
        }
        let b = bytes[j];
        if b == b'.' {
            if seen_dot {
                break;
            }
            if j + 1 == len && !at_eof {
                return Scanned::NeedMore;
            }
            let digit_follows = j + 1 < len && bytes[j + 1].is_ascii_digit();
            if digit_follows && is_number_form(&window[i..j]) {
                seen_dot = true;
                j += 1;
                continue;
            }
            break;
        }
        if is_word_end(b) {
            break;
        }
        j += 1;
    }

    let text = &window[i..j];
    let kind = match text {
        "true" | "false" => TokenKind::Bool,
        _ if is_number_form(text) => TokenKind::Number,
        _ => TokenKind::Ident,
    };
    let token = Token::new(kind, text, cur.line, Span::new(i, j));
    cur.pos = j;
    Scanned::Token(token)
}
