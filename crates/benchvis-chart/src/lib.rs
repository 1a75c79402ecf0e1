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

//! Charts for Go Benchmark Runs
//!
//! Turns each parsed [`benchvis_core::Run`] into one HTML page holding a
//! grouped bar chart per metric (time, bytes, allocations, throughput).
//! Scenarios form the category axis and every target is a series.
//!
//! Charts are plain inline SVG; pages have no scripts or external assets.
//!
//! # Example
//!
//! ```rust
//! use benchvis_chart::{build_charts, render_page, ChartOptions};
//! use benchvis_core::{Extraction, Parser};
//!
//! let runs = Parser::new(Extraction::separator("/"))
//!     .parse_str("goos: linux\nBenchmarkFib/10-8\t100\t358 ns/op\nPASS\n")?;
//!
//! let charts = build_charts(&runs[0]);
//! assert_eq!(charts[0].categories, vec!["10"]);
//!
//! let html = render_page(&runs[0], &ChartOptions::default());
//! assert!(html.contains("<svg"));
//! # Ok::<(), benchvis_core::ParseError>(())
//! ```

mod chart;
mod options;
mod page;
mod svg;

pub use chart::{build_chart, build_charts, GroupedChart, Metric, Series};
pub use options::ChartOptions;
pub use page::{page_file_name, render_page, visualize};
pub use svg::render_svg;
