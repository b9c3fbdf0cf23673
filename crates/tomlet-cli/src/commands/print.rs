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

//! Print command - canonical rendering of a document.

use tomlet_c14n::stringify;

use crate::error::CliError;

/// Parse `file` and print its canonical text to stdout.
///
/// # Errors
///
/// Returns load and parse errors unchanged, and the render error for
/// trees nested past the writer's depth limit.
pub fn print(file: &str) -> Result<(), CliError> {
    let doc = tomlet_stream::load(file)?;
    println!("{}", stringify(&doc)?);
    Ok(())
}
