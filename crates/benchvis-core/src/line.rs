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

//! Benchmark record line parsing.
//!
//! A record line looks like:
//!
//! ```text
//! BenchmarkFib/10-8    3033732    358 ns/op    16 B/op    1 allocs/op
//! ```
//!
//! Fields are tab-separated. The name carries a trailing `-N` core count;
//! the remaining fields are `<value> <unit>` pairs.

use crate::error::{ParseError, ParseResult};
use crate::model::Measurement;
use regex::Regex;
use tracing::debug;

/// How a benchmark name is split into target and scenario.
///
/// The two strategies are mutually exclusive.
#[derive(Debug, Clone)]
pub enum Extraction {
    /// A pattern with `target` and `scenario` named groups, matched against
    /// the name after the core suffix is removed.
    Pattern(Regex),
    /// Strip `Benchmark`/`Bench`, then split at the first separator.
    Separator(String),
}

impl Extraction {
    /// Separator strategy.
    ///
    /// An empty separator configures nothing; every name then fails to
    /// resolve with `ParseError::Extraction`.
    pub fn separator(separator: impl Into<String>) -> Self {
        Self::Separator(separator.into())
    }

    /// Pattern strategy from source text.
    ///
    /// # Errors
    ///
    /// `ParseError::InvalidPattern` if the pattern does not compile.
    pub fn pattern(pattern: &str) -> ParseResult<Self> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|e| ParseError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }

    /// Pick a strategy from command-line style options.
    ///
    /// A non-empty separator wins; otherwise the pattern is compiled.
    ///
    /// ```rust
    /// use benchvis_core::Extraction;
    ///
    /// let e = Extraction::from_options("/", Some("ignored")).unwrap();
    /// assert!(matches!(e, Extraction::Separator(ref s) if s == "/"));
    ///
    /// let e = Extraction::from_options("", Some(r"^Bench(?<target>\D+)(?<scenario>\d+)$")).unwrap();
    /// assert!(matches!(e, Extraction::Pattern(_)));
    ///
    /// assert!(Extraction::from_options("", None).is_err());
    /// ```
    pub fn from_options(separator: &str, pattern: Option<&str>) -> ParseResult<Self> {
        if !separator.is_empty() {
            return Ok(Self::separator(separator));
        }
        match pattern {
            Some(pattern) => Self::pattern(pattern),
            None => Err(ParseError::extraction(
                "neither a pattern nor a separator was given",
            )),
        }
    }

    /// Resolve `(target, scenario)` from a benchmark name without its core suffix.
    pub fn resolve<'a>(&self, name: &'a str) -> ParseResult<(&'a str, &'a str)> {
        match self {
            Self::Pattern(regex) => {
                debug!(pattern = regex.as_str(), "resolving name with pattern");
                let caps = regex.captures(name).ok_or_else(|| {
                    ParseError::extraction(format!(
                        "no match found in benchmark name '{}' for pattern '{}'",
                        name,
                        regex.as_str()
                    ))
                })?;
                let target = caps.name("target").ok_or_else(|| {
                    ParseError::extraction("group 'target' not found in match result")
                })?;
                let scenario = caps.name("scenario").ok_or_else(|| {
                    ParseError::extraction("group 'scenario' not found in match result")
                })?;
                Ok((target.as_str(), scenario.as_str()))
            }
            Self::Separator(separator) if separator.is_empty() => Err(ParseError::extraction(
                "neither a pattern nor a separator was given",
            )),
            Self::Separator(separator) => {
                debug!(separator = separator.as_str(), "resolving name with separator");
                let rest = name
                    .strip_prefix("Benchmark")
                    .or_else(|| name.strip_prefix("Bench"))
                    .ok_or_else(|| {
                        ParseError::extraction(format!("illegal benchmark name: {}", name))
                    })?;
                rest.split_once(separator.as_str()).ok_or_else(|| {
                    ParseError::extraction(format!(
                        "separator '{}' not found in benchmark name: {}",
                        separator, name
                    ))
                })
            }
        }
    }
}

/// Parse one benchmark record line into a [`Measurement`].
///
/// # Examples
///
/// ```rust
/// use benchvis_core::{parse_measurement, Extraction};
///
/// let line = "BenchmarkFib/10-8\t3033732\t358 ns/op\t16 B/op\t1 allocs/op";
/// let m = parse_measurement(line, &Extraction::separator("/")).unwrap();
///
/// assert_eq!(m.name, "BenchmarkFib/10");
/// assert_eq!(m.cpu_cores, 8);
/// assert_eq!(m.target, "Fib");
/// assert_eq!(m.scenario, "10");
/// assert_eq!(m.ns_per_op, 358.0);
/// assert_eq!(m.mem.allocs_per_op, 1.0);
/// ```
pub fn parse_measurement(line: &str, extraction: &Extraction) -> ParseResult<Measurement> {
    let mut fields = line.split('\t').map(str::trim);

    let raw_name = fields.next().unwrap_or_default();
    let (name, cpu_cores) = split_core_suffix(raw_name)?;
    let (target, scenario) = extraction.resolve(name)?;

    let mut measurement = Measurement {
        name: name.to_string(),
        cpu_cores,
        target: target.to_string(),
        scenario: scenario.to_string(),
        ..Default::default()
    };

    let runs = fields.next().unwrap_or_default();
    measurement.runs = runs.parse().map_err(|e| {
        ParseError::malformed_metric(name, format!("could not parse run count '{}': {}", runs, e))
    })?;

    for field in fields {
        let (value, unit) = split_value_unit(field).ok_or_else(|| {
            ParseError::malformed_metric(
                name,
                format!(
                    "expected two parts in value '{}', got {}",
                    field,
                    field.split(' ').count()
                ),
            )
        })?;
        let value: f64 = value.parse().map_err(|e| {
            ParseError::malformed_metric(name, format!("could not parse {}: {}", unit, e))
        })?;

        match unit {
            "ns/op" => measurement.ns_per_op = value,
            "B/op" => measurement.mem.bytes_per_op = value,
            "allocs/op" => measurement.mem.allocs_per_op = value,
            "MB/s" => measurement.mem.mb_per_sec = value,
            custom => {
                measurement.custom_metrics.insert(custom.to_string(), value);
            }
        }
    }

    Ok(measurement)
}

/// Split `Name-N` into `("Name", N)`.
fn split_core_suffix(raw: &str) -> ParseResult<(&str, u32)> {
    let (name, cores) = raw
        .rsplit_once('-')
        .ok_or_else(|| ParseError::malformed_name(raw, "no '-' found"))?;
    match cores.parse::<u32>() {
        Ok(n) if n > 0 => Ok((name, n)),
        _ => Err(ParseError::malformed_name(
            raw,
            format!("failed to parse cpu core count '{}'", cores),
        )),
    }
}

/// Split `<value> <unit>` on its single space.
fn split_value_unit(field: &str) -> Option<(&str, &str)> {
    let (value, unit) = field.split_once(' ')?;
    if value.is_empty() || unit.is_empty() || unit.contains(' ') {
        return None;
    }
    Some((value, unit))
}
