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

//! Structured error types for the benchvis CLI.
//!
//! Every command path returns `Result<T, CliError>`; `main` prints the error
//! on stderr and exits with a failure status.

use benchvis_core::ParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for benchvis CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use benchvis_cli::error::CliError;
///
/// fn open(path: &str) -> Result<std::fs::File, CliError> {
///     std::fs::File::open(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (input file, output directory or output file).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The benchmark stream could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serializing the parsed runs failed.
    #[error("JSON format error: {message}")]
    Json {
        /// The error message
        message: String,
    },

    /// Writing the chart pages failed.
    #[error("Chart error in '{dir}': {message}")]
    Chart {
        /// The output directory
        dir: PathBuf,
        /// The error message
        message: String,
    },

    /// A flag value or flag combination is not usable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn chart(dir: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Chart {
            dir: dir.into(),
            message: source.to_string(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<ParseError> for CliError {
    fn from(source: ParseError) -> Self {
        Self::Parse(source.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "bench.txt",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("bench.txt"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: CliError = ParseError::TruncatedRun { start_line: 3 }.into();
        assert!(matches!(err, CliError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error: "));
    }

    #[test]
    fn test_chart_error_display() {
        let err = CliError::chart("out", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "Chart error in 'out': denied");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CliError = json_err.into();
        assert!(matches!(err, CliError::Json { .. }));
    }

    #[test]
    fn test_invalid_input_display() {
        let err = CliError::invalid_input("bad baseline");
        assert_eq!(err.to_string(), "Invalid input: bad baseline");
    }
}
