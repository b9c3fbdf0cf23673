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

//! Command definitions and argument parsing.

use clap::Subcommand;

use crate::commands;
use crate::error::CliError;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use tomlet_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Check that a file parses as valid TOML
    Check {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Print a file in canonical form
    Print {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Look up a value by path and print it
    ///
    /// The path is split on `.`, `[` and `]`; numeric segments index into
    /// arrays. `tomlet get conf.toml servers[0].host` prints the host of
    /// the first server.
    Get {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Lookup path, e.g. `table.key` or `list[2]`
        #[arg(value_name = "PATH")]
        path: String,
    },
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Check { file } => commands::check(&file),
            Commands::Print { file } => commands::print(&file),
            Commands::Get { file, path } => commands::get(&file, &path),
        }
    }
}
