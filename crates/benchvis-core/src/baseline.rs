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

//! Baseline comparison of parsed measurements.

use crate::model::{Measurement, Run};

/// Performance thresholds a measurement must stay under.
///
/// A threshold that is zero or negative is never satisfied, so every
/// measurement fails the baseline unless all three thresholds are positive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Baseline {
    /// Upper bound on `ns/op * cpu_cores`.
    pub max_ns_per_op: f64,
    pub max_bytes_per_op: f64,
    pub max_allocs_per_op: f64,
}

impl Baseline {
    pub fn new(max_ns_per_op: f64, max_bytes_per_op: f64, max_allocs_per_op: f64) -> Self {
        Self {
            max_ns_per_op,
            max_bytes_per_op,
            max_allocs_per_op,
        }
    }

    /// Whether `measurement` is under every threshold.
    pub fn accepts(&self, measurement: &Measurement) -> bool {
        let mut fast = false;
        let mut small = false;
        let mut few = false;

        if self.max_ns_per_op > 0.0 {
            fast = measurement.normalized_ns_per_op() < self.max_ns_per_op;
        }
        if self.max_bytes_per_op > 0.0 {
            small = measurement.mem.bytes_per_op < self.max_bytes_per_op;
        }
        if self.max_allocs_per_op > 0.0 {
            few = measurement.mem.allocs_per_op < self.max_allocs_per_op;
        }

        fast && small && few
    }
}

impl From<[f64; 3]> for Baseline {
    fn from([ns, bytes, allocs]: [f64; 3]) -> Self {
        Self::new(ns, bytes, allocs)
    }
}

/// Set [`Measurement::reach_baseline`] on every measurement of every run.
///
/// # Examples
///
/// ```rust
/// use benchvis_core::{apply_baseline, Baseline, Extraction, Parser};
///
/// let input = "goos: linux\nBenchmarkFib/10-2\t100\t40 ns/op\t8 B/op\t1 allocs/op\nPASS\n";
/// let mut runs = Parser::new(Extraction::separator("/")).parse_str(input).unwrap();
///
/// apply_baseline(&mut runs, &Baseline::new(100.0, 16.0, 2.0));
/// assert!(runs[0].target("Fib").unwrap()[0].reach_baseline);
///
/// apply_baseline(&mut runs, &Baseline::new(100.0, 0.0, 0.0));
/// assert!(!runs[0].target("Fib").unwrap()[0].reach_baseline);
/// ```
pub fn apply_baseline(runs: &mut [Run], baseline: &Baseline) {
    for measurement in runs
        .iter_mut()
        .flat_map(|run| run.targets.values_mut())
        .flatten()
    {
        measurement.reach_baseline = baseline.accepts(measurement);
    }
}
