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

//! Parsed benchmark data model.
//!
//! A [`Run`] is one `go test -bench` invocation block (from `goos:` to
//! `PASS`/`FAIL`). It owns every [`Measurement`] parsed inside it, grouped by
//! target. Both are built once during a forward pass and treated as read-only
//! afterwards, except for [`Measurement::reach_baseline`] which the baseline
//! pass sets in place.

use crate::set::FiniteSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One complete benchmark run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goarch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    /// Target name to its measurements, in stream order. Every list is non-empty.
    #[serde(default)]
    pub targets: BTreeMap<String, Vec<Measurement>>,
}

impl Run {
    /// Append a measurement under its target, creating the list on first sight.
    pub fn push(&mut self, measurement: Measurement) {
        self.targets
            .entry(measurement.target.clone())
            .or_default()
            .push(measurement);
    }

    /// Measurements recorded for `target`.
    pub fn target(&self, target: &str) -> Option<&[Measurement]> {
        self.targets.get(target).map(Vec::as_slice)
    }

    /// Total number of measurements across all targets.
    pub fn measurement_count(&self) -> usize {
        self.targets.values().map(Vec::len).sum()
    }

    /// All measurements, target by target.
    pub fn measurements(&self) -> impl Iterator<Item = &Measurement> {
        self.targets.values().flatten()
    }

    /// Distinct scenario labels across every target.
    ///
    /// Sorted by numeric value when every label is a number (`10, 20, 100`),
    /// otherwise lexically.
    pub fn scenarios(&self) -> Vec<String> {
        let mut scenarios = self
            .measurements()
            .map(|m| m.scenario.clone())
            .collect::<FiniteSet<_>>()
            .into_vec();

        let numeric: Option<Vec<f64>> = scenarios.iter().map(|s| s.parse().ok()).collect();
        match numeric {
            Some(values) => {
                let mut keyed: Vec<(f64, String)> = values.into_iter().zip(scenarios).collect();
                keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
                keyed.into_iter().map(|(_, label)| label).collect()
            }
            None => {
                scenarios.sort();
                scenarios
            }
        }
    }
}

/// One benchmark record line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Benchmark name with the `-N` core suffix removed.
    pub name: String,
    pub cpu_cores: u32,
    /// Iteration count reported by the benchmark tool.
    pub runs: u64,
    pub target: String,
    pub scenario: String,
    #[serde(default)]
    pub ns_per_op: f64,
    #[serde(default)]
    pub mem: Memory,
    /// Any unit outside the four standard ones, keyed by unit literal.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_metrics: BTreeMap<String, f64>,
    #[serde(default)]
    pub reach_baseline: bool,
}

impl Measurement {
    /// Time per op scaled by core count: an approximation of total CPU cost.
    #[inline]
    pub fn normalized_ns_per_op(&self) -> f64 {
        self.ns_per_op * f64::from(self.cpu_cores)
    }
}

/// Metrics reported by `-benchmem` and `b.SetBytes`. Absent values are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    #[serde(default)]
    pub bytes_per_op: f64,
    #[serde(default)]
    pub allocs_per_op: f64,
    #[serde(default)]
    pub mb_per_sec: f64,
}
