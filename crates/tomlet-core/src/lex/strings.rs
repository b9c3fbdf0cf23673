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

//! String escape decoding.

use std::str::Chars;

/// Decodes the escape sequences of a quoted string body.
///
/// One left-to-right pass recognizing `\b`, `\t`, `\f`, `\n`, `\r`,
/// `\"`, `\/`, `\\`, and `\uXXXX` with four hex digits. A `\u`-escaped
/// high surrogate immediately followed by a `\u`-escaped low surrogate
/// combines into the supplementary-plane scalar; a lone surrogate
/// decodes to U+FFFD. Anything else after a backslash passes through
/// verbatim, so the function is total.
///
/// # Examples
///
/// ```
/// use tomlet_core::lex::unescape;
///
/// assert_eq!(unescape(r"tab\there"), "tab\there");
/// assert_eq!(unescape(r"©"), "\u{a9}");
/// assert_eq!(unescape(r"😀"), "\u{1f600}");
/// assert_eq!(unescape(r"\q"), r"\q");
/// ```
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => out.push('\\'),
            Some('b') => out.push('\u{0008}'),
            Some('t') => out.push('\t'),
            Some('f') => out.push('\u{000c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('/') => out.push('/'),
            Some('\\') => out.push('\\'),
            Some('u') => {
                let mut probe = chars.clone();
                match hex4(&mut probe) {
                    Some(unit) => {
                        chars = probe;
                        push_unit(&mut out, unit, &mut chars);
                    }
                    None => {
                        out.push('\\');
                        out.push('u');
                    }
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    out
}

/// Appends the scalar named by one UTF-16 code unit, pairing a high
/// surrogate with a following `\uXXXX` low surrogate when present.
fn push_unit(out: &mut String, unit: u16, chars: &mut Chars<'_>) {
    let scalar = if (0xd800..=0xdbff).contains(&unit) {
        let mut pair = chars.clone();
        match low_surrogate(&mut pair) {
            Some(low) => {
                *chars = pair;
                let high = (unit - 0xd800) as u32;
                let low = (low - 0xdc00) as u32;
                0x10000 + (high << 10) + low
            }
            None => 0xfffd,
        }
    } else if (0xdc00..=0xdfff).contains(&unit) {
        0xfffd
    } else {
        u32::from(unit)
    };
    out.push(char::from_u32(scalar).unwrap_or('\u{fffd}'));
}

/// Reads exactly four hex digits.
fn hex4(chars: &mut Chars<'_>) -> Option<u16> {
    let mut unit: u16 = 0;
    for _ in 0..4 {
        let digit = chars.next()?.to_digit(16)?;
        unit = (unit << 4) | digit as u16;
    }
    Some(unit)
}

/// Reads a `\uXXXX` escape whose unit is a low surrogate.
fn low_surrogate(chars: &mut Chars<'_>) -> Option<u16> {
    if chars.next()? != '\\' {
        return None;
    }
    if chars.next()? != 'u' {
        return None;
    }
    let unit = hex4(chars)?;
    if (0xdc00..=0xdfff).contains(&unit) {
        Some(unit)
    } else {
        None
    }
}
