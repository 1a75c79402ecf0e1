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

//! Grouped chart data built from a parsed run.

use benchvis_core::{Measurement, Run};
use serde::Serialize;

/// The fixed metrics charted for every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    Time,
    Bytes,
    Allocs,
    Throughput,
}

impl Metric {
    /// Every metric, in chart order.
    pub const ALL: [Metric; 4] = [Metric::Time, Metric::Bytes, Metric::Allocs, Metric::Throughput];

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Time => "Time",
            Metric::Bytes => "Memory",
            Metric::Allocs => "Allocations",
            Metric::Throughput => "Throughput",
        }
    }

    /// Unit literal as printed by `go test`.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Time => "ns/op",
            Metric::Bytes => "B/op",
            Metric::Allocs => "allocs/op",
            Metric::Throughput => "MB/s",
        }
    }

    pub fn value(&self, measurement: &Measurement) -> f64 {
        match self {
            Metric::Time => measurement.ns_per_op,
            Metric::Bytes => measurement.mem.bytes_per_op,
            Metric::Allocs => measurement.mem.allocs_per_op,
            Metric::Throughput => measurement.mem.mb_per_sec,
        }
    }
}

/// One target's values, aligned with [`GroupedChart::categories`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    /// `None` where the target has no measurement for that scenario.
    pub values: Vec<Option<f64>>,
}

/// A bar chart with scenarios on the category axis and one series per target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedChart {
    pub metric: Metric,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl GroupedChart {
    /// Largest value across all series, or `0.0` when there is none.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().flatten())
            .fold(0.0_f64, |max, &v| max.max(v))
    }

    /// True when no series reports a non-zero value.
    pub fn is_empty(&self) -> bool {
        self.max_value() <= 0.0
    }
}

/// Build the chart for one metric.
///
/// When a target reports the same scenario more than once (`-count=N`), the
/// last measurement is charted.
pub fn build_chart(run: &Run, metric: Metric) -> GroupedChart {
    let categories = run.scenarios();

    let series = run
        .targets
        .iter()
        .map(|(target, measurements)| {
            let values = categories
                .iter()
                .map(|scenario| {
                    measurements
                        .iter()
                        .rev()
                        .find(|m| &m.scenario == scenario)
                        .map(|m| metric.value(m))
                })
                .collect();
            Series {
                name: target.clone(),
                values,
            }
        })
        .collect();

    GroupedChart {
        metric,
        categories,
        series,
    }
}

/// One chart per fixed metric: time, bytes, allocations, throughput.
pub fn build_charts(run: &Run) -> Vec<GroupedChart> {
    Metric::ALL
        .iter()
        .map(|&metric| build_chart(run, metric))
        .collect()
}
