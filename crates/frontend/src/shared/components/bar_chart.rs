use leptos::prelude::*;

use crate::shared::components::table::{format_compact, format_money};

pub const PALETTE: [&str; 6] = [
    "#2563eb", "#16a34a", "#f59e0b", "#dc2626", "#7c3aed", "#0891b2",
];

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// One rectangle in chart coordinates, with its tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
    pub tooltip: String,
}

const AXIS_WIDTH: f64 = 56.0;
const LABEL_HEIGHT: f64 = 24.0;
const GROUP_GAP: f64 = 0.2;

pub fn tooltip(category: &str, series: &str, value: f64) -> String {
    format!("{} · {}: {}", category, series, format_money(value))
}

/// Largest value across all series; negative values are drawn as zero.
pub fn scale_max(series: &[ChartSeries]) -> f64 {
    series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0, f64::max)
}

/// Grouped bars: one group per category, one bar per series inside it.
pub fn layout_bars(
    categories: &[String],
    series: &[ChartSeries],
    width: f64,
    height: f64,
) -> Vec<BarRect> {
    let max = scale_max(series);
    if categories.is_empty() || series.is_empty() || max <= 0.0 {
        return Vec::new();
    }
    let plot_width = (width - AXIS_WIDTH).max(0.0);
    let plot_height = (height - LABEL_HEIGHT).max(0.0);
    let group_width = plot_width / categories.len() as f64;
    let bar_width = group_width * (1.0 - GROUP_GAP) / series.len() as f64;

    let mut bars = Vec::new();
    for (ci, category) in categories.iter().enumerate() {
        let group_x = AXIS_WIDTH + ci as f64 * group_width + group_width * GROUP_GAP / 2.0;
        for (si, s) in series.iter().enumerate() {
            let value = s.values.get(ci).copied().unwrap_or(0.0).max(0.0);
            let bar_height = value / max * plot_height;
            bars.push(BarRect {
                x: group_x + si as f64 * bar_width,
                y: plot_height - bar_height,
                width: bar_width,
                height: bar_height,
                color: PALETTE[si % PALETTE.len()],
                tooltip: tooltip(category, &s.name, value),
            });
        }
    }
    bars
}

/// SVG bar chart with a compact value axis and a legend.
#[component]
pub fn BarChart(
    #[prop(into)]
    categories: Signal<Vec<String>>,

    #[prop(into)]
    series: Signal<Vec<ChartSeries>>,

    #[prop(optional, default = 640.0)]
    width: f64,

    #[prop(optional, default = 260.0)]
    height: f64,
) -> impl IntoView {
    let plot_height = height - LABEL_HEIGHT;

    view! {
        <div class="bar-chart">
            <svg
                viewBox=format!("0 0 {} {}", width, height)
                width="100%"
                preserveAspectRatio="none"
                role="img"
            >
                {move || {
                    let max = scale_max(&series.get());
                    (0..=4)
                        .map(|step| {
                            let ratio = step as f64 / 4.0;
                            let y = plot_height - ratio * plot_height;
                            view! {
                                <g>
                                    <line x1=AXIS_WIDTH.to_string() y1=y.to_string() x2=width.to_string() y2=y.to_string() stroke="currentColor" stroke-opacity="0.1" />
                                    <text x=(AXIS_WIDTH - 6.0).to_string() y=(y + 4.0).to_string() text-anchor="end" font-size="10" fill="currentColor">
                                        {format_compact(max * ratio)}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    layout_bars(&categories.get(), &series.get(), width, height)
                        .into_iter()
                        .map(|bar| {
                            view! {
                                <rect x=bar.x.to_string() y=bar.y.to_string() width=bar.width.to_string() height=bar.height.to_string() fill=bar.color rx="2">
                                    <title>{bar.tooltip}</title>
                                </rect>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    let cats = categories.get();
                    let group_width = (width - AXIS_WIDTH) / cats.len().max(1) as f64;
                    cats.into_iter()
                        .enumerate()
                        .map(|(i, label)| {
                            let x = AXIS_WIDTH + (i as f64 + 0.5) * group_width;
                            view! {
                                <text x=x.to_string() y=(height - 6.0).to_string() text-anchor="middle" font-size="11" fill="currentColor">
                                    {label}
                                </text>
                            }
                        })
                        .collect_view()
                }}
            </svg>
            <div class="bar-chart__legend" style="display: flex; gap: 12px; font-size: 0.8rem;">
                {move || {
                    series
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, s)| {
                            let swatch = format!(
                                "display: inline-block; width: 10px; height: 10px; border-radius: 2px; margin-right: 4px; background: {};",
                                PALETTE[i % PALETTE.len()]
                            );
                            view! { <span><span style=swatch></span>{s.name}</span> }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
