//! Bar Chart Component
//!
//! Inline SVG bar chart for a handful of labelled counts.

use leptos::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 300.0;
/// Space below the bars for labels
const AXIS: f64 = 24.0;
const GAP: f64 = 24.0;

/// Position of one bar inside the chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub label: String,
    pub value: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out bars left to right, scaled to the largest value
pub fn layout_bars(data: &[(&str, usize)], width: f64, height: f64) -> Vec<BarGeometry> {
    if data.is_empty() {
        return Vec::new();
    }
    let plot_height = height - AXIS;
    let max = data.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1) as f64;
    let slot = width / data.len() as f64;
    let bar_width = (slot - GAP).max(1.0);

    data.iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let bar_height = plot_height * (*value as f64) / max;
            BarGeometry {
                label: label.to_string(),
                value: *value,
                x: i as f64 * slot + (slot - bar_width) / 2.0,
                y: plot_height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

#[component]
pub fn BarChart(#[prop(into)] data: Signal<Vec<(&'static str, usize)>>) -> impl IntoView {
    view! {
        <svg class="bar-chart" viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)}>
            {move || {
                layout_bars(&data.get(), WIDTH, HEIGHT)
                    .into_iter()
                    .map(|bar| {
                        let center = bar.x + bar.width / 2.0;
                        view! {
                            <g>
                                <rect
                                    class="bar"
                                    x={bar.x.to_string()}
                                    y={bar.y.to_string()}
                                    width={bar.width.to_string()}
                                    height={bar.height.to_string()}
                                    rx="4"
                                />
                                <text class="bar-value" x={center.to_string()} y={(bar.y - 4.0).max(12.0).to_string()} text-anchor="middle">
                                    {bar.value}
                                </text>
                                <text class="bar-label" x={center.to_string()} y={(HEIGHT - 6.0).to_string()} text-anchor="middle">
                                    {bar.label}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()
            }}
        </svg>
    }
}
