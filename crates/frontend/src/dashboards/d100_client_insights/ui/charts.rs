//! SVG charts of the client's sales: spending by category (donut) and monthly trend (bars).
//! Geometry is computed by plain functions so the views only draw.

use contracts::dashboards::d100_client_insights::{AnalyticsDto, ChartPoint};
use leptos::prelude::*;

use crate::shared::number_format::{format_usd, format_usd_thousands};

const PALETTE: [&str; 5] = ["#4F46E5", "#7C3AED", "#EC4899", "#8B5CF6", "#6366F1"];
const BAR_COLOR: &str = "#4F46E5";

const DONUT_RADIUS: f64 = 40.0;
/// Visual gap between donut slices, in circumference units
const DONUT_GAP: f64 = 1.5;

const BAR_CHART_HEIGHT: f64 = 200.0;
const BAR_SLOT_WIDTH: f64 = 60.0;
const BAR_WIDTH: f64 = 40.0;
const AXIS_WIDTH: f64 = 48.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
    /// Visible arc length
    pub length: f64,
    /// Arc start along the circumference
    pub offset: f64,
}

pub fn donut_circumference() -> f64 {
    2.0 * std::f64::consts::PI * DONUT_RADIUS
}

/// Slices proportional to value; non-positive values get no slice
pub fn donut_segments(points: &[ChartPoint]) -> Vec<DonutSegment> {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let circumference = donut_circumference();
    let mut offset = 0.0;
    let mut segments = Vec::new();
    for (i, point) in points.iter().enumerate() {
        if point.value <= 0.0 {
            continue;
        }
        let share = point.value / total * circumference;
        segments.push(DonutSegment {
            label: point.label.clone(),
            value: point.value,
            color: PALETTE[i % PALETTE.len()],
            length: (share - DONUT_GAP).max(share * 0.5),
            offset,
        });
        offset += share;
    }
    segments
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub height: f64,
}

/// Bars scaled to the largest month; negative values are drawn as zero height
pub fn bar_layout(points: &[ChartPoint]) -> Vec<Bar> {
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let height = if max > 0.0 {
                point.value.max(0.0) / max * BAR_CHART_HEIGHT
            } else {
                0.0
            };
            Bar {
                label: point.label.clone(),
                value: point.value,
                x: AXIS_WIDTH + i as f64 * BAR_SLOT_WIDTH + (BAR_SLOT_WIDTH - BAR_WIDTH) / 2.0,
                y: BAR_CHART_HEIGHT - height,
                height,
            }
        })
        .collect()
}

/// Y-axis ticks: 0, 25, 50, 75 and 100 % of the largest value
pub fn axis_ticks(points: &[ChartPoint]) -> Vec<(f64, String)> {
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![(BAR_CHART_HEIGHT, format_usd_thousands(0.0))];
    }
    (0..=4)
        .map(|step| {
            let value = max * step as f64 / 4.0;
            let y = BAR_CHART_HEIGHT - value / max * BAR_CHART_HEIGHT;
            (y, format_usd_thousands(value.round()))
        })
        .collect()
}

#[component]
pub fn SpendingChart(analytics: AnalyticsDto) -> impl IntoView {
    let points = analytics.categories();
    let segments = donut_segments(&points);
    let circumference = donut_circumference();
    let total = format_usd(analytics.total_sales());

    view! {
        <div class="card chart-card">
            <h3 class="card__title">"Gasto por Categoría"</h3>
            <div class="donut">
                <svg viewBox="0 0 100 100" class="donut__svg">
                    {segments.iter().map(|segment| view! {
                        <circle
                            cx="50" cy="50" r=DONUT_RADIUS.to_string()
                            fill="none"
                            stroke=segment.color
                            stroke-width="12"
                            stroke-dasharray=format!("{:.2} {:.2}", segment.length, circumference - segment.length)
                            stroke-dashoffset=format!("{:.2}", -segment.offset)
                            transform="rotate(-90 50 50)"
                        >
                            <title>{format!("{}: {}", segment.label, format_usd(segment.value))}</title>
                        </circle>
                    }).collect_view()}
                </svg>
                <div class="donut__center">
                    <span class="donut__caption">"Total Ventas"</span>
                    <span class="donut__total">{total}</span>
                </div>
            </div>
            <ul class="chart-legend">
                {segments.into_iter().map(|segment| view! {
                    <li>
                        <span class="chart-legend__swatch" style=format!("background: {}", segment.color)></span>
                        {segment.label}
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn TrendChart(analytics: AnalyticsDto) -> impl IntoView {
    let points = analytics.months();
    let bars = bar_layout(&points);
    let ticks = axis_ticks(&points);
    let width = AXIS_WIDTH + points.len().max(1) as f64 * BAR_SLOT_WIDTH;

    view! {
        <div class="card chart-card">
            <h3 class="card__title">"Tendencia Mensual"</h3>
            <svg viewBox=format!("0 -10 {} {}", width, BAR_CHART_HEIGHT + 40.0) class="bars__svg">
                {ticks.into_iter().map(|(y, label)| view! {
                    <text x={(AXIS_WIDTH - 6.0).to_string()} y={(y + 4.0).to_string()} text-anchor="end" class="bars__tick">{label}</text>
                }).collect_view()}
                {bars.into_iter().map(|bar| view! {
                    <g>
                        <rect x=bar.x.to_string() y=bar.y.to_string() width=BAR_WIDTH.to_string() height=bar.height.to_string() rx="4" fill=BAR_COLOR>
                            <title>{format!("Ventas: {}", format_usd(bar.value))}</title>
                        </rect>
                        <text x={(bar.x + BAR_WIDTH / 2.0).to_string()} y={(BAR_CHART_HEIGHT + 20.0).to_string()} text-anchor="middle" class="bars__label">
                            {bar.label}
                        </text>
                    </g>
                }).collect_view()}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, value: f64) -> ChartPoint {
        ChartPoint {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn test_donut_segments_are_proportional() {
        let segments = donut_segments(&[point("Hardware", 75.0), point("Software", 25.0)]);
        let c = donut_circumference();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].offset, 0.0);
        assert!((segments[1].offset - c * 0.75).abs() < 1e-9);
        assert!((segments[0].length - (c * 0.75 - DONUT_GAP)).abs() < 1e-9);
        assert_eq!(segments[1].color, PALETTE[1]);
    }

    #[test]
    fn test_donut_skips_empty_values() {
        assert!(donut_segments(&[]).is_empty());
        assert!(donut_segments(&[point("A", 0.0)]).is_empty());
        let segments = donut_segments(&[point("A", 10.0), point("B", 0.0)]);
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn test_bar_layout_scales_to_max() {
        let bars = bar_layout(&[point("Ene", 10000.0), point("Feb", 20000.0)]);
        assert_eq!(bars[1].height, BAR_CHART_HEIGHT);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, BAR_CHART_HEIGHT / 2.0);
        assert!(bars[1].x > bars[0].x);
    }

    #[test]
    fn test_axis_ticks() {
        let ticks = axis_ticks(&[point("Ene", 20000.0)]);
        let labels: Vec<&str> = ticks.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(labels, vec!["$0k", "$5k", "$10k", "$15k", "$20k"]);
        assert_eq!(axis_ticks(&[]).len(), 1);
    }
}
