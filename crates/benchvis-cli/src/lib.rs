// Benchvis - Go benchmark output parser and visualizer
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

//! benchvis command-line library.
//!
//! Holds the flag definitions ([`cli::Cli`]), the command steps
//! ([`commands`]) and the CLI error type ([`error::CliError`]) so they can be
//! tested without spawning the binary.
//!
//! # Modes
//!
//! - **pipe mode** (default): read `go test -bench` output from stdin
//! - **file mode** (`-f PATH`): read it from a file
//!
//! Either way the output is one HTML chart page per run in the output
//! directory, or with `--json` a single `parsed_benchmark.json`.
//!
//! # Example
//!
//! ```no_run
//! use benchvis_cli::cli::Cli;
//! use clap::Parser;
//!
//! # fn main() -> Result<(), benchvis_cli::error::CliError> {
//! let cli = Cli::parse_from(["benchvis", "-s", "/", "-f", "bench.txt", "--json"]);
//! cli.execute()?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
