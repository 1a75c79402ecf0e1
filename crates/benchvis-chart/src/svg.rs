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

//! Inline SVG rendering of grouped bar charts.

use crate::chart::GroupedChart;
use crate::options::ChartOptions;

const Y_TICKS: usize = 5;

/// Render `chart` as a standalone `<svg>` element.
pub fn render_svg(chart: &GroupedChart, options: &ChartOptions) -> String {
    let width = f64::from(options.width);
    let height = f64::from(options.height);
    let margin = f64::from(options.margin);
    let plot_width = (width - 2.0 * margin).max(1.0);
    let plot_height = (height - 2.0 * margin).max(1.0);
    let baseline_y = margin + plot_height;
    let max = nice_ceiling(chart.max_value());

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" role=\"img\">\n",
        w = options.width,
        h = options.height
    ));
    svg.push_str(&format!(
        "<title>{} ({})</title>\n",
        escape(chart.metric.title()),
        escape(chart.metric.unit())
    ));

    // Y axis with gridlines
    for i in 0..=Y_TICKS {
        let value = max * i as f64 / Y_TICKS as f64;
        let y = baseline_y - plot_height * i as f64 / Y_TICKS as f64;
        svg.push_str(&format!(
            "<line class=\"grid\" x1=\"{x1:.1}\" y1=\"{y:.1}\" x2=\"{x2:.1}\" y2=\"{y:.1}\"/>\n",
            x1 = margin,
            x2 = margin + plot_width
        ));
        svg.push_str(&format!(
            "<text class=\"tick\" x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"end\">{label}</text>\n",
            x = margin - 6.0,
            y = y + 4.0,
            label = format_value(value)
        ));
    }
    svg.push_str(&format!(
        "<text class=\"axis\" x=\"{x:.1}\" y=\"{y:.1}\">{unit}</text>\n",
        x = margin,
        y = margin - 12.0,
        unit = escape(chart.metric.unit())
    ));

    if !chart.categories.is_empty() && !chart.series.is_empty() {
        let slot = plot_width / chart.categories.len() as f64;
        let gap = options.group_gap.clamp(0.0, 0.9);
        let bar_width = slot * (1.0 - gap) / chart.series.len() as f64;

        for (c, category) in chart.categories.iter().enumerate() {
            let group_x = margin + slot * c as f64 + slot * gap / 2.0;

            for (s, series) in chart.series.iter().enumerate() {
                let Some(value) = series.values.get(c).copied().flatten() else {
                    continue;
                };
                let bar_height = if max > 0.0 {
                    plot_height * value / max
                } else {
                    0.0
                };
                svg.push_str(&format!(
                    "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{w:.1}\" height=\"{h:.1}\" fill=\"{fill}\"><title>{name} / {category}: {value}</title></rect>\n",
                    x = group_x + bar_width * s as f64,
                    y = baseline_y - bar_height,
                    w = bar_width,
                    h = bar_height,
                    fill = escape(options.color(s)),
                    name = escape(&series.name),
                    category = escape(category),
                    value = format_value(value)
                ));
            }

            svg.push_str(&format!(
                "<text class=\"category\" x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\">{label}</text>\n",
                x = margin + slot * (c as f64 + 0.5),
                y = baseline_y + 18.0,
                label = escape(category)
            ));
        }
    }

    // Legend
    for (s, series) in chart.series.iter().enumerate() {
        let x = margin + 120.0 * s as f64;
        let y = height - 16.0;
        svg.push_str(&format!(
            "<rect x=\"{x:.1}\" y=\"{ry:.1}\" width=\"10\" height=\"10\" fill=\"{fill}\"/><text class=\"legend\" x=\"{tx:.1}\" y=\"{y:.1}\">{name}</text>\n",
            ry = y - 9.0,
            tx = x + 14.0,
            fill = escape(options.color(s)),
            name = escape(&series.name)
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Round `max` up to 1, 2 or 5 times a power of ten.
fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|step| step * magnitude)
        .find(|&candidate| candidate >= max)
        .unwrap_or(10.0 * magnitude)
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Escape text for HTML and SVG content and attributes.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
