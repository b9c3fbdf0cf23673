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

//! Tomlet command line interface.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tomlet_cli::cli::Commands;

/// Tomlet - TOML-style configuration document toolkit
///
/// # Examples
///
/// ```bash
/// # Check that a file parses
/// tomlet check config.toml
///
/// # Print a file in canonical form
/// tomlet print config.toml
///
/// # Look up one value
/// tomlet get config.toml servers[0].host
/// ```
#[derive(Parser)]
#[command(name = "tomlet")]
#[command(author, version, about = "Tomlet - configuration document toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "✗".red().bold(), err);
            ExitCode::from(err.exit_code())
        }
    }
}
