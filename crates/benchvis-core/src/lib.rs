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

//! Go Benchmark Output Parser
//!
//! This crate turns the text printed by `go test -bench` into structured
//! [`Run`] and [`Measurement`] values, grouped by *target* (the thing being
//! benchmarked) and *scenario* (its parameterization), and optionally flags
//! measurements against a [`Baseline`].
//!
//! # Pipeline
//!
//! ```text
//! Parser / parse_stream      finds runs (a `goos` line up to PASS/FAIL)
//!   └── parse_run            metadata + record lines of one run
//!         └── parse_measurement   one tab-separated record line
//! apply_baseline             post-pass over the finished runs
//! ```
//!
//! Parsing is single-threaded, blocking and strictly forward: the input is
//! peeked and consumed line by line and never rewound. The first error aborts
//! the whole call.
//!
//! # Target and Scenario
//!
//! A name such as `BenchmarkFib/10-8` is split by an [`Extraction`] strategy:
//!
//! - [`Extraction::Separator`]: strip `Benchmark`/`Bench`, split at the first
//!   separator (`Fib` / `10`)
//! - [`Extraction::Pattern`]: a regex with `target` and `scenario` named groups
//!
//! # Example
//!
//! ```rust
//! use benchvis_core::{apply_baseline, Baseline, Extraction, Parser};
//!
//! let input = "\
//! goos: linux
//! goarch: amd64
//! pkg: example.com/pizza
//! BenchmarkPizzas/10-8\t22866814\t46.3 ns/op\t9.00 pizzas\t0 B/op\t0 allocs/op
//! PASS
//! ";
//!
//! let mut runs = Parser::new(Extraction::separator("/")).parse_str(input)?;
//! let pizzas = &runs[0].target("Pizzas").unwrap()[0];
//! assert_eq!(pizzas.scenario, "10");
//! assert_eq!(pizzas.custom_metrics["pizzas"], 9.0);
//!
//! apply_baseline(&mut runs, &Baseline::new(1000.0, 1.0, 1.0));
//! assert!(runs[0].target("Pizzas").unwrap()[0].reach_baseline);
//! # Ok::<(), benchvis_core::ParseError>(())
//! ```

mod baseline;
mod error;
mod line;
mod model;
mod reader;
mod run;
mod set;
mod stream;

pub use baseline::{apply_baseline, Baseline};
pub use error::{ErrorKind, ParseError, ParseResult};
pub use line::{parse_measurement, Extraction};
pub use model::{Measurement, Memory, Run};
pub use reader::LineReader;
pub use run::parse_run;
pub use set::{slice_difference, slice_equal, slice_intersection, slice_union, FiniteSet};
pub use stream::{parse_stream, Parser};
