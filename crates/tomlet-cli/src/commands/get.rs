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

//! Get command - path lookup into a document.

use tomlet_c14n::stringify_value;

use crate::error::CliError;

/// Parse `file`, resolve `path`, and print the value found there.
///
/// The path splits on `.`, `[` and `]` with empty segments dropped, so
/// `servers[0].host` and `servers.0.host` name the same value. Strings
/// print raw; tables print in document form.
///
/// # Errors
///
/// Returns [`CliError::PathNotFound`] when any segment fails to resolve.
pub fn get(file: &str, path: &str) -> Result<(), CliError> {
    let doc = tomlet_stream::load(file)?;
    let segments: Vec<&str> = path
        .split(|c| c == '.' || c == '[' || c == ']')
        .filter(|segment| !segment.is_empty())
        .collect();
    let value = doc
        .find(&segments)
        .ok_or_else(|| CliError::PathNotFound(path.to_string()))?;
    println!("{}", stringify_value(value)?);
    Ok(())
}
