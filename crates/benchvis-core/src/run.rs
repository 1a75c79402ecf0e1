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

//! Parsing of a single benchmark run.

use crate::error::{ParseError, ParseResult};
use crate::line::{parse_measurement, Extraction};
use crate::model::Run;
use crate::reader::LineReader;
use std::io::Read;
use tracing::{debug, info};

/// Consume one run, from its first line through the `PASS`/`FAIL` line.
///
/// Metadata lines (`goos: `, `goarch: `, `pkg: `, `cpu: `) overwrite the
/// corresponding field. Lines starting with `Bench` are parsed as records and
/// grouped by target. Anything else is skipped.
///
/// # Errors
///
/// - `ParseError::TruncatedRun` if input ends before the terminal line
/// - `ParseError::Stream` on read failure
/// - `ParseError::InvalidLine` wrapping any record failure; the whole run is dropped
///
/// # Examples
///
/// ```rust
/// use benchvis_core::{parse_run, Extraction, LineReader};
/// use std::io::Cursor;
///
/// let input = "goos: linux\npkg: demo\nBenchmarkFib/10-8\t100\t5 ns/op\nok  \tdemo\nPASS\n";
/// let mut reader = LineReader::new(Cursor::new(input));
///
/// let run = parse_run(&mut reader, &Extraction::separator("/")).unwrap();
/// assert_eq!(run.pkg.as_deref(), Some("demo"));
/// assert_eq!(run.target("Fib").unwrap().len(), 1);
/// ```
pub fn parse_run<R: Read>(reader: &mut LineReader<R>, extraction: &Extraction) -> ParseResult<Run> {
    let start_line = reader.line_number() + 1;
    let mut run = Run::default();

    loop {
        let (line_num, line) = reader
            .next_line()?
            .ok_or(ParseError::TruncatedRun { start_line })?;

        if line.starts_with("PASS") || line.starts_with("FAIL") {
            info!(
                pkg = run.pkg.as_deref().unwrap_or_default(),
                targets = run.targets.len(),
                measurements = run.measurement_count(),
                "benchmark run parsed"
            );
            return Ok(run);
        } else if let Some(goos) = line.strip_prefix("goos: ") {
            info!(goos, "benchmark metadata");
            run.goos = Some(goos.to_string());
        } else if let Some(goarch) = line.strip_prefix("goarch: ") {
            info!(goarch, "benchmark metadata");
            run.goarch = Some(goarch.to_string());
        } else if let Some(pkg) = line.strip_prefix("pkg: ") {
            info!(pkg, "benchmark metadata");
            run.pkg = Some(pkg.to_string());
        } else if let Some(cpu) = line.strip_prefix("cpu: ") {
            info!(cpu, "benchmark metadata");
            run.cpu = Some(cpu.to_string());
        } else if line.starts_with("Bench") {
            debug!(line = line_num, origin_line = %line, "benchmark line");
            let measurement =
                parse_measurement(&line, extraction).map_err(|e| e.at_line(line_num, line.as_str()))?;
            debug!(
                name = %measurement.name,
                runs = measurement.runs,
                target = %measurement.target,
                scenario = %measurement.scenario,
                "benchmark parsed"
            );
            run.push(measurement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::{self, Cursor};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    fn parse(input: &str) -> ParseResult<Run> {
        let mut reader = LineReader::new(Cursor::new(input));
        parse_run(&mut reader, &Extraction::separator("/"))
    }

    #[test]
    fn test_metadata_and_records() {
        let input = "goos: darwin\ngoarch: amd64\npkg: demo\ncpu: Intel Xeon\n\
                     BenchmarkFib/10-8\t100\t358 ns/op\n\
                     BenchmarkFib/100-8\t10\t3580 ns/op\n\
                     PASS\n";
        let run = parse(input).unwrap();

        assert_eq!(run.goos.as_deref(), Some("darwin"));
        assert_eq!(run.goarch.as_deref(), Some("amd64"));
        assert_eq!(run.pkg.as_deref(), Some("demo"));
        assert_eq!(run.cpu.as_deref(), Some("Intel Xeon"));

        let fib = run.target("Fib").unwrap();
        assert_eq!(fib.len(), 2);
        assert_eq!(fib[0].scenario, "10");
        assert_eq!(fib[1].scenario, "100");
    }

    #[test]
    fn test_metadata_last_write_wins() {
        let run = parse("goos: linux\npkg: first\npkg: second\nPASS").unwrap();
        assert_eq!(run.pkg.as_deref(), Some("second"));
    }

    #[test]
    fn test_fail_terminates() {
        let run = parse("goos: linux\nBenchmarkA/x-1\t1\t1 ns/op\nFAIL\tdemo\t0.1s").unwrap();
        assert_eq!(run.measurement_count(), 1);
    }

    #[test]
    fn test_terminal_line_is_consumed() {
        let mut reader = LineReader::new(Cursor::new("goos: linux\nPASS\nnext"));
        parse_run(&mut reader, &Extraction::separator("/")).unwrap();
        assert_eq!(reader.next_line().unwrap(), Some((3, "next".to_string())));
    }

    #[test]
    fn test_unrelated_lines_ignored() {
        let input = "goos: linux\n\n=== RUN   TestX\n--- BENCH: BenchmarkX\n    x_test.go:12: 42\nPASS";
        let run = parse(input).unwrap();
        assert!(run.targets.is_empty());
        assert_eq!(run.goos.as_deref(), Some("linux"));
    }

    #[test]
    fn test_no_records() {
        let run = parse("goos: linux\ngoarch: arm64\nPASS").unwrap();
        assert!(run.targets.is_empty());
    }

    #[test]
    fn test_truncated_run() {
        let err = parse("goos: linux\nBenchmarkA/x-1\t1\t1 ns/op\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedRun);
        assert!(matches!(err, ParseError::TruncatedRun { start_line: 1 }));
    }

    #[test]
    fn test_record_error_annotated() {
        let err = parse("goos: linux\nBenchmarkA/x-1\t1\tslow ns/op\nPASS").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedMetric);
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.raw_line(), Some("BenchmarkA/x-1\t1\tslow ns/op"));
    }

    #[test]
    fn test_read_failure_inside_run() {
        let input = Cursor::new("goos: linux\nBenchmarkA/x-1\t1\t1 ns/op\n").chain(FailingReader);
        let mut reader = LineReader::new(input);

        let err = parse_run(&mut reader, &Extraction::separator("/")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Stream);
        assert!(err.to_string().contains("reset"));
    }
}
