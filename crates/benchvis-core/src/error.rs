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

//! Error types for benchmark parsing.
//!
//! Every failure is fail-fast: the first error aborts the current run and the
//! whole parse call. Record-level failures are wrapped in
//! [`ParseError::InvalidLine`] so the offending raw line travels with them.
//!
//! # Error Categories
//!
//! - **Stream**: Problems reading the input source
//! - **Truncated run**: End of input before `PASS`/`FAIL`
//! - **Malformed name**: Missing or non-numeric `-N` core suffix
//! - **Extraction**: Target/scenario could not be resolved
//! - **Malformed metric**: Iteration count or `<value> <unit>` field unparseable
//! - **Invalid pattern**: Configuration error detected before parsing
//!
//! # Matching on the Underlying Kind
//!
//! ```rust
//! use benchvis_core::{ErrorKind, Extraction, Parser};
//!
//! let input = "goos: linux\nBenchmarkFib10-8\t100\t330 ns/op\nPASS\n";
//! let parser = Parser::new(Extraction::separator("/"));
//!
//! let err = parser.parse_str(input).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Extraction);
//! assert_eq!(err.line(), Some(2));
//! ```

use thiserror::Error;

/// Coarse classification of a [`ParseError`], seen through annotation wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Stream,
    TruncatedRun,
    MalformedName,
    Extraction,
    MalformedMetric,
    InvalidPattern,
}

/// Errors that can occur while parsing benchmark output.
#[derive(Error, Debug)]
pub enum ParseError {
    /// I/O failure on the input source.
    #[error("stream error: {0}")]
    Stream(#[from] std::io::Error),

    /// End of input reached inside a run.
    #[error("found end of input before 'PASS' or 'FAIL' (run started at line {start_line})")]
    TruncatedRun { start_line: usize },

    /// Missing or non-numeric core-count suffix.
    #[error("invalid benchmark name '{name}': {message}")]
    MalformedName { name: String, message: String },

    /// Target/scenario resolution failed.
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// Iteration count or a metric field could not be parsed.
    #[error("{name}: {message}")]
    MalformedMetric { name: String, message: String },

    /// The configured pattern does not compile.
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A record line failed to parse.
    #[error("{source} (line {line}: {raw:?})")]
    InvalidLine {
        line: usize,
        raw: String,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Create an extraction error.
    #[inline]
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction(message.into())
    }

    /// Create a malformed-name error.
    #[inline]
    pub fn malformed_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedName {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-metric error.
    #[inline]
    pub fn malformed_metric(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedMetric {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Annotate an error with the raw line it came from.
    pub fn at_line(self, line: usize, raw: impl Into<String>) -> Self {
        Self::InvalidLine {
            line,
            raw: raw.into(),
            source: Box::new(self),
        }
    }

    /// The underlying error kind, unwrapping line annotations.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Stream(_) => ErrorKind::Stream,
            Self::TruncatedRun { .. } => ErrorKind::TruncatedRun,
            Self::MalformedName { .. } => ErrorKind::MalformedName,
            Self::Extraction(_) => ErrorKind::Extraction,
            Self::MalformedMetric { .. } => ErrorKind::MalformedMetric,
            Self::InvalidPattern { .. } => ErrorKind::InvalidPattern,
            Self::InvalidLine { source, .. } => source.kind(),
        }
    }

    /// Get the line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidLine { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The raw input line attached to this error, if any.
    pub fn raw_line(&self) -> Option<&str> {
        match self {
            Self::InvalidLine { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_stream_error_display() {
        let err = ParseError::Stream(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        let display = err.to_string();
        assert!(display.contains("stream error"));
        assert!(display.contains("pipe closed"));
        assert_eq!(err.kind(), ErrorKind::Stream);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: ParseError = io_err.into();
        assert!(matches!(err, ParseError::Stream(_)));
    }

    #[test]
    fn test_truncated_run_display() {
        let err = ParseError::TruncatedRun { start_line: 7 };
        let display = err.to_string();
        assert!(display.contains("'PASS' or 'FAIL'"));
        assert!(display.contains('7'));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_malformed_name_constructor() {
        let err = ParseError::malformed_name("BenchmarkFoo", "no '-' found");
        if let ParseError::MalformedName { name, message } = &err {
            assert_eq!(name, "BenchmarkFoo");
            assert_eq!(message, "no '-' found");
        } else {
            panic!("Expected MalformedName variant");
        }
        assert_eq!(err.kind(), ErrorKind::MalformedName);
    }

    #[test]
    fn test_at_line_keeps_kind() {
        let err = ParseError::malformed_metric("BenchmarkFoo", "could not parse ns/op")
            .at_line(12, "BenchmarkFoo-8\t10\tabc ns/op");

        assert_eq!(err.kind(), ErrorKind::MalformedMetric);
        assert_eq!(err.line(), Some(12));
        assert_eq!(err.raw_line(), Some("BenchmarkFoo-8\t10\tabc ns/op"));

        let display = err.to_string();
        assert!(display.contains("could not parse ns/op"));
        assert!(display.contains("line 12"));
        assert!(display.contains("BenchmarkFoo-8\\t10\\tabc ns/op"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let err = ParseError::extraction("separator '/' not found").at_line(3, "BenchmarkX-1");
        let source = err.source().expect("annotated error has a source");
        assert!(source.to_string().contains("separator '/' not found"));
    }

    #[test]
    fn test_invalid_pattern_display() {
        let err = ParseError::InvalidPattern {
            pattern: "(?<target>".to_string(),
            message: "unclosed group".to_string(),
        };
        assert!(err.to_string().contains("(?<target>"));
        assert_eq!(err.kind(), ErrorKind::InvalidPattern);
    }
}
