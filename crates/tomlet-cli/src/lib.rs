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

//! Tomlet CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **check**: parse a file and report validity
//! - **print**: render a file in canonical form
//! - **get**: look up a value by dotted/indexed path and print it
//!
//! Parse failures exit with the error's numeric code, so shell scripts can
//! distinguish a missing file (1) from, say, a duplicate table (3).
//!
//! # Examples
//!
//! ```no_run
//! use tomlet_cli::commands::check;
//!
//! # fn main() -> Result<(), tomlet_cli::error::CliError> {
//! check("config.toml")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
