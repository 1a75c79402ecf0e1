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

//! CLI command implementations

use crate::error::CliError;
use benchvis_chart::{visualize, ChartOptions};
use benchvis_core::{Baseline, Parser, Run};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the JSON export inside the output directory.
pub const JSON_FILE_NAME: &str = "parsed_benchmark.json";

/// Fail unless `dir` exists and is a directory.
pub fn check_output_dir(dir: &Path) -> Result<(), CliError> {
    let metadata = fs::metadata(dir).map_err(|e| CliError::io_error(dir, e))?;
    if !metadata.is_dir() {
        return Err(CliError::invalid_input(format!(
            "output path is not a directory: {}",
            dir.display()
        )));
    }
    Ok(())
}

/// Parse `NS,BYTES,ALLOCS` into a [`Baseline`].
///
/// # Examples
///
/// ```
/// use benchvis_cli::commands::parse_baseline;
///
/// let baseline = parse_baseline("1000, 64, 2").unwrap();
/// assert_eq!(baseline.max_ns_per_op, 1000.0);
/// assert!(parse_baseline("1000,64").is_err());
/// ```
pub fn parse_baseline(value: &str) -> Result<Baseline, CliError> {
    let limits = value
        .split(',')
        .map(|part| {
            part.trim().parse::<f64>().map_err(|e| {
                CliError::invalid_input(format!("baseline value '{}': {}", part.trim(), e))
            })
        })
        .collect::<Result<Vec<f64>, CliError>>()?;

    match limits.as_slice() {
        &[ns, bytes, allocs] => Ok(Baseline::new(ns, bytes, allocs)),
        _ => Err(CliError::invalid_input(format!(
            "baseline needs 3 comma-separated values (ns/op, B/op, allocs/op), got {}",
            limits.len()
        ))),
    }
}

/// Parse every run from `file`, or from stdin when no file is given.
pub fn parse_input(parser: &Parser, file: Option<&Path>) -> Result<Vec<Run>, CliError> {
    match file {
        Some(path) => {
            debug!(path = %path.display(), "file mode");
            let reader = File::open(path).map_err(|e| CliError::io_error(path, e))?;
            Ok(parser.parse(reader)?)
        }
        None => {
            debug!("pipe mode");
            Ok(parser.parse(io::stdin().lock())?)
        }
    }
}

/// Write the runs as indented JSON into `dir`, or to stdout when `dir` is `None`.
pub fn write_json(runs: &[Run], dir: Option<&Path>) -> Result<Option<PathBuf>, CliError> {
    let json = serde_json::to_string_pretty(runs)?;

    match dir {
        Some(dir) => {
            let path = dir.join(JSON_FILE_NAME);
            fs::write(&path, json).map_err(|e| CliError::io_error(&path, e))?;
            info!(path = %path.display(), "parsed benchmark saved");
            Ok(Some(path))
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json).map_err(|e| CliError::io_error("<stdout>", e))?;
            Ok(None)
        }
    }
}

/// Write one chart page per run into `dir`.
pub fn write_charts(
    dir: &Path,
    runs: &[Run],
    options: &ChartOptions,
) -> Result<Vec<PathBuf>, CliError> {
    visualize(dir, runs, options).map_err(|e| CliError::chart(dir, e))
}
