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

//! Chart styling.

/// Immutable styling shared by every chart of a rendering call.
///
/// Build it once and pass it by reference; nothing in this crate keeps
/// global chart state.
///
/// ```rust
/// use benchvis_chart::ChartOptions;
///
/// let options = ChartOptions {
///     width: 1200,
///     ..Default::default()
/// };
/// assert_eq!(options.height, 400);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// SVG width in pixels.
    pub width: u32,
    /// SVG height in pixels.
    pub height: u32,
    /// Space reserved around the plot area for axes and labels.
    pub margin: u32,
    /// Fraction of each category slot left empty between groups (0.0 - 0.9).
    pub group_gap: f64,
    /// Series colors, cycled when there are more targets than colors.
    pub palette: Vec<String>,
    /// Prefix for every page title; the package name follows.
    pub page_title: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 900,
            height: 400,
            margin: 60,
            group_gap: 0.2,
            palette: [
                "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de", "#3ba272", "#fc8452",
                "#9a60b4", "#ea7ccc",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            page_title: "Benchmark".to_string(),
        }
    }
}

impl ChartOptions {
    /// Color for the series at `index`.
    pub fn color(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return "#5470c6";
        }
        &self.palette[index % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_cycles() {
        let options = ChartOptions {
            palette: vec!["#000".to_string(), "#fff".to_string()],
            ..Default::default()
        };
        assert_eq!(options.color(0), "#000");
        assert_eq!(options.color(1), "#fff");
        assert_eq!(options.color(2), "#000");
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let options = ChartOptions {
            palette: Vec::new(),
            ..Default::default()
        };
        assert_eq!(options.color(3), "#5470c6");
    }
}
