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

//! Error type for CLI commands.

use thiserror::Error;
use tomlet_core::TomletError;

/// Failure of a CLI command.
///
/// Document errors keep their numeric code so the process can exit with
/// it; lookup misses are a CLI-level condition and exit with `1`.
#[derive(Error, Debug)]
pub enum CliError {
    /// The document failed to load, parse, or render.
    #[error("{}", .0.description())]
    Toml(#[from] TomletError),

    /// A lookup path did not resolve to a value.
    #[error("no value at '{0}'")]
    PathNotFound(String),
}

impl CliError {
    /// The process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Toml(err) => err.code as u8,
            Self::PathNotFound(_) => 1,
        }
    }
}
