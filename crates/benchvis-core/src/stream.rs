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

//! Stream-level parsing: find every run in an arbitrarily long input.

use crate::error::ParseResult;
use crate::line::Extraction;
use crate::model::Run;
use crate::reader::LineReader;
use crate::run::parse_run;
use std::io::{Cursor, Read};
use tracing::info;

/// Prefix that marks the first line of a run.
const RUN_MARKER: &str = "goos";

/// Scan `reader` for runs, parsing each one in stream order.
///
/// Lines outside a run are discarded. Zero runs is a valid result. The call is
/// all-or-nothing: the first error is returned and runs already parsed are
/// dropped.
pub fn parse_stream<R: Read>(
    reader: &mut LineReader<R>,
    extraction: &Extraction,
) -> ParseResult<Vec<Run>> {
    let mut runs = Vec::new();

    loop {
        let starts_run = match reader.peek_line()? {
            Some((_, line)) => line.starts_with(RUN_MARKER),
            None => break,
        };

        if starts_run {
            runs.push(parse_run(reader, extraction)?);
        } else {
            reader.next_line()?;
        }
    }

    info!(runs = runs.len(), "benchmark output parsed");
    Ok(runs)
}

/// Benchmark output parser.
///
/// Holds the target/scenario extraction strategy and reader settings, and
/// parses complete inputs into a list of [`Run`]s.
///
/// # Examples
///
/// ```rust
/// use benchvis_core::{Extraction, Parser};
///
/// let input = "\
/// goos: linux
/// goarch: amd64
/// pkg: example.com/demo
/// BenchmarkFib/10-8\t3033732\t358 ns/op\t16 B/op\t1 allocs/op
/// BenchmarkFib/100-8\t303373\t3580 ns/op\t16 B/op\t1 allocs/op
/// PASS
/// ok  \texample.com/demo\t2.1s
/// ";
///
/// let runs = Parser::new(Extraction::separator("/")).parse_str(input).unwrap();
/// assert_eq!(runs.len(), 1);
/// assert_eq!(runs[0].scenarios(), vec!["10", "100"]);
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    extraction: Extraction,
    buffer_size: usize,
}

impl Parser {
    /// Default read buffer size.
    pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

    pub fn new(extraction: Extraction) -> Self {
        Self {
            extraction,
            buffer_size: Self::DEFAULT_BUFFER_SIZE,
        }
    }

    /// Use a different read buffer size.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    pub fn extraction(&self) -> &Extraction {
        &self.extraction
    }

    /// Parse every run in `reader`.
    pub fn parse<R: Read>(&self, reader: R) -> ParseResult<Vec<Run>> {
        let mut lines = LineReader::with_capacity(reader, self.buffer_size);
        parse_stream(&mut lines, &self.extraction)
    }

    /// Parse every run in an in-memory string.
    pub fn parse_str(&self, input: &str) -> ParseResult<Vec<Run>> {
        self.parse(Cursor::new(input))
    }
}
