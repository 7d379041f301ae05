//! Bar Chart Component
//!
//! Intensity, likelihood, and relevance per record, grouped by position and
//! labelled with each record's country, drawn on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{GlobalState, Record};

/// Series colors: intensity, likelihood, relevance
const SERIES_COLORS: [&str; 3] = [
    "#4BC0C0", // Teal
    "#FF6384", // Pink
    "#9966FF", // Purple
];

const SERIES_LABELS: [&str; 3] = ["Intensity", "Likelihood", "Relevance"];

/// Chart-ready projection of the filtered records.
///
/// All four sequences are positionally aligned and share the filtered
/// view's length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarChartData {
    pub labels: Vec<String>,
    pub intensity: Vec<f64>,
    pub likelihood: Vec<f64>,
    pub relevance: Vec<f64>,
}

/// Project records into bar-chart series, one entry per record in the given
/// order. No grouping: duplicate countries stay duplicate bars. Missing
/// measures chart as zero.
pub fn bar_chart_data(records: &[Record]) -> BarChartData {
    BarChartData {
        labels: records.iter().map(|r| r.country.clone()).collect(),
        intensity: records.iter().map(|r| r.intensity.unwrap_or(0.0)).collect(),
        likelihood: records.iter().map(|r| r.likelihood.unwrap_or(0.0)).collect(),
        relevance: records.iter().map(|r| r.relevance.unwrap_or(0.0)).collect(),
    }
}

impl BarChartData {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn series(&self) -> [&[f64]; 3] {
        [&self.intensity, &self.likelihood, &self.relevance]
    }
}

/// Grouped bar chart over the filtered view
#[component]
pub fn BarChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the dataset or any filter changes
    let filtered = state.filtered;
    create_effect(move |_| {
        let data = bar_chart_data(&filtered.get());

        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &data);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />

            <BarChartLegend />
        </div>
    }
}

/// Legend showing the three series colors
#[component]
fn BarChartLegend() -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {SERIES_LABELS
                .iter()
                .zip(SERIES_COLORS.iter())
                .map(|(label, color)| {
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-300">{*label}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Draw the chart on canvas
fn draw_bar_chart(canvas: &HtmlCanvasElement, data: &BarChartData) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if data.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data for selected filters", width / 2.0 - 90.0, height / 2.0);
        return;
    }

    // Y-axis scale from the largest value across all three series
    let mut y_max = data
        .series()
        .iter()
        .flat_map(|s| s.iter().copied())
        .fold(0.0_f64, f64::max);
    if y_max <= 0.0 {
        y_max = 1.0;
    }
    y_max *= 1.1; // headroom above the tallest bar

    // Horizontal grid lines (5 lines) with y-axis labels
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.set_stroke_style(&"#374151".into()); // gray-700
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // One group of three bars per record
    let group_count = data.len();
    let group_width = chart_width / group_count as f64;
    let bar_gap = group_width * 0.1;
    let bar_width = (group_width - 2.0 * bar_gap) / 3.0;

    for (series_idx, series) in data.series().iter().enumerate() {
        ctx.set_fill_style(&SERIES_COLORS[series_idx].into());

        for (group_idx, value) in series.iter().enumerate() {
            let bar_height = (value / y_max) * chart_height;
            let x = margin_left
                + group_idx as f64 * group_width
                + bar_gap
                + series_idx as f64 * bar_width;
            let y = margin_top + chart_height - bar_height;

            ctx.fill_rect(x, y, bar_width.max(1.0), bar_height);
        }
    }

    // X-axis labels: country per group, thinned so they stay readable
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    let label_step = (group_count / 12).max(1);
    for (group_idx, label) in data.labels.iter().enumerate() {
        if group_idx % label_step != 0 {
            continue;
        }
        let x = margin_left + (group_idx as f64 + 0.5) * group_width;
        let shown: String = label.chars().take(10).collect();
        let _ = ctx.fill_text(&shown, x - 15.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, intensity: f64, likelihood: f64, relevance: f64) -> Record {
        Record {
            country: country.to_string(),
            intensity: Some(intensity),
            likelihood: Some(likelihood),
            relevance: Some(relevance),
            ..Record::default()
        }
    }

    #[test]
    fn test_series_lengths_match_record_count() {
        let records = vec![
            record("USA", 3.0, 2.0, 1.0),
            record("India", 5.0, 1.0, 4.0),
            record("USA", 2.0, 2.0, 2.0),
        ];

        let data = bar_chart_data(&records);
        assert_eq!(data.labels.len(), 3);
        assert_eq!(data.intensity.len(), 3);
        assert_eq!(data.likelihood.len(), 3);
        assert_eq!(data.relevance.len(), 3);
    }

    #[test]
    fn test_duplicate_countries_stay_duplicate_bars() {
        let records = vec![record("USA", 3.0, 2.0, 1.0), record("USA", 5.0, 1.0, 4.0)];

        let data = bar_chart_data(&records);
        assert_eq!(data.labels, vec!["USA", "USA"]);
        assert_eq!(data.intensity, vec![3.0, 5.0]);
        assert_eq!(data.likelihood, vec![2.0, 1.0]);
        assert_eq!(data.relevance, vec![1.0, 4.0]);
    }

    #[test]
    fn test_missing_measures_chart_as_zero() {
        let records = vec![Record {
            country: "USA".to_string(),
            ..Record::default()
        }];

        let data = bar_chart_data(&records);
        assert_eq!(data.intensity, vec![0.0]);
        assert_eq!(data.likelihood, vec![0.0]);
        assert_eq!(data.relevance, vec![0.0]);
    }

    #[test]
    fn test_empty_view_projects_empty_series() {
        let data = bar_chart_data(&[]);
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
    }
}
