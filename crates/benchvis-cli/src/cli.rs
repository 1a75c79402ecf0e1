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

//! Command-line flags.

use crate::commands;
use crate::error::CliError;
use benchvis_chart::ChartOptions;
use benchvis_core::{Extraction, Parser as BenchParser};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Pattern used when no separator is given.
pub const DEFAULT_PATTERN: &str = r"^Bench(mark)?(?<target>[A-Z]+\S*)(?<scenario>[A-Z]+\S*)$";

/// Parse and visualize Go standard benchmark output.
///
/// Reads `go test -bench` output from stdin (pipe mode) or from a file
/// (`-f`), splits every benchmark name into a *target* and a *scenario*, and
/// writes one HTML chart page per package, or the parsed runs as JSON.
///
/// # Examples
///
/// ```bash
/// go test -bench . | benchvis -r '^Bench(mark)?(?<target>\S+)/(?<scenario>\S+)$'
/// benchvis -s / -f path/to/bench.txt -o reports
/// benchvis -s / -f bench.txt --json -o ''
/// ```
#[derive(Parser, Debug)]
#[command(name = "benchvis")]
#[command(author, version, about = "Parse and visualize Go standard benchmark output", long_about = None)]
pub struct Cli {
    /// Read the benchmark output from this file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Separator between target and scenario, e.g. '/' splits
    /// 'BenchmarkFib/10' into 'Fib' and '10'
    #[arg(short, long, default_value = "", conflicts_with = "regex")]
    pub sep: String,

    /// Regular expression with 'target' and 'scenario' named groups,
    /// used when no separator is given
    #[arg(short, long, value_name = "RE", default_value = DEFAULT_PATTERN)]
    pub regex: String,

    /// Directory to save the output files in
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: String,

    /// Only write the parsed runs as JSON (to stdout when the output directory is '')
    #[arg(long)]
    pub json: bool,

    /// Mark measurements within these limits: NS_PER_OP,BYTES_PER_OP,ALLOCS_PER_OP
    /// (a limit of 0 is never satisfied)
    #[arg(long, value_name = "NS,BYTES,ALLOCS")]
    pub baseline: Option<String>,

    /// Only log errors
    #[arg(long, conflicts_with = "verbose")]
    pub silent: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Default log directive for the selected verbosity; `RUST_LOG` wins when set.
    pub fn log_directive(&self) -> &'static str {
        if self.silent {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Run the whole pipeline: parse, evaluate the baseline, then write output.
    pub fn execute(&self) -> Result<(), CliError> {
        let output = Path::new(&self.output);
        let to_stdout = self.json && self.output.is_empty();
        if !to_stdout {
            commands::check_output_dir(output)?;
        }

        let baseline = self
            .baseline
            .as_deref()
            .map(commands::parse_baseline)
            .transpose()?;

        let extraction = Extraction::from_options(&self.sep, Some(&self.regex))?;
        debug!(?extraction, "extraction strategy");

        let parser = BenchParser::new(extraction);
        let mut runs = commands::parse_input(&parser, self.file.as_deref())?;
        info!(runs = runs.len(), "benchmark parsed");

        if let Some(baseline) = baseline {
            benchvis_core::apply_baseline(&mut runs, &baseline);
        }

        if self.json {
            let target = (!to_stdout).then_some(output);
            commands::write_json(&runs, target)?;
            return Ok(());
        }

        let saved = commands::write_charts(output, &runs, &ChartOptions::default())?;
        info!(pages = ?saved, "benchmark visualized");
        Ok(())
    }
}
