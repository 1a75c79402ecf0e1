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

//! HTML pages, one per benchmark run.

use crate::chart::build_charts;
use crate::options::ChartOptions;
use crate::svg::{escape, render_svg};
use benchvis_core::{FiniteSet, Run};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Render a self-contained HTML page for one run.
///
/// # Arguments
///
/// * `run` - The parsed run
/// * `options` - Chart styling
pub fn render_page(run: &Run, options: &ChartOptions) -> String {
    let title = match run.pkg.as_deref() {
        Some(pkg) => format!("{}: {}", options.page_title, pkg),
        None => options.page_title.clone(),
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&title)));
    html.push_str("<style>\n");
    html.push_str(include_str!("styles.css"));
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&title)));

    html.push_str("<table class=\"meta\">\n");
    for (label, value) in [
        ("goos", &run.goos),
        ("goarch", &run.goarch),
        ("pkg", &run.pkg),
        ("cpu", &run.cpu),
    ] {
        if let Some(value) = value {
            html.push_str(&format!(
                "<tr><th>{}</th><td>{}</td></tr>\n",
                label,
                escape(value)
            ));
        }
    }
    html.push_str(&format!(
        "<tr><th>targets</th><td>{}</td></tr>\n<tr><th>benchmarks</th><td>{}</td></tr>\n",
        run.targets.len(),
        run.measurement_count()
    ));
    html.push_str("</table>\n");

    for chart in build_charts(run) {
        html.push_str(&format!(
            "<h2>{} ({})</h2>\n",
            chart.metric.title(),
            escape(chart.metric.unit())
        ));
        if chart.is_empty() {
            html.push_str("<p class=\"empty\">Not reported</p>\n");
        } else {
            html.push_str(&render_svg(&chart, options));
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// File name for a run's page, derived from its package identifier.
///
/// Characters other than ASCII letters, digits, `-` and `_` become `_`.
///
/// ```rust
/// use benchvis_chart::page_file_name;
///
/// assert_eq!(page_file_name(Some("go.bobheadxi.dev/gobenchdata/demo"), 0),
///            "go_bobheadxi_dev_gobenchdata_demo.html");
/// assert_eq!(page_file_name(None, 2), "benchmark_2.html");
/// ```
pub fn page_file_name(pkg: Option<&str>, index: usize) -> String {
    let stem: String = pkg
        .unwrap_or_default()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        format!("benchmark_{}.html", index)
    } else {
        format!("{}.html", stem)
    }
}

/// Write one HTML page per run into `dir`.
///
/// Runs that sanitize to the same file name within one call get a `_<n>`
/// suffix instead of overwriting each other.
///
/// # Returns
///
/// Paths of the written pages, in run order.
pub fn visualize(dir: &Path, runs: &[Run], options: &ChartOptions) -> io::Result<Vec<PathBuf>> {
    let mut used = FiniteSet::with_capacity(runs.len());
    let mut saved = Vec::with_capacity(runs.len());

    for (index, run) in runs.iter().enumerate() {
        let base = page_file_name(run.pkg.as_deref(), index);
        let stem = base.trim_end_matches(".html");
        let mut name = base.clone();
        let mut attempt = 1;
        while !used.add(name.clone()) {
            name = format!("{}_{}.html", stem, attempt);
            attempt += 1;
        }

        let path = dir.join(&name);
        debug!(path = %path.display(), targets = run.targets.len(), "rendering page");
        fs::write(&path, render_page(run, options))?;
        saved.push(path);
    }

    info!(pages = saved.len(), dir = %dir.display(), "benchmark pages saved");
    Ok(saved)
}
