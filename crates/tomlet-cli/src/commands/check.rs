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

//! Check command - parse a file and report validity.

use colored::Colorize;

use crate::error::CliError;

/// Parse `file` and report whether it is valid.
///
/// Prints `Ok TOML.` on success. On failure the caller prints the
/// diagnostic and the process exits with the error's numeric code.
///
/// # Errors
///
/// Returns the load or parse error unchanged.
pub fn check(file: &str) -> Result<(), CliError> {
    tomlet_stream::load(file)?;
    println!("{} Ok TOML.", "✓".green().bold());
    Ok(())
}
