//! Pie Chart Component
//!
//! Distribution of topics across the filtered view, drawn on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{GlobalState, Record};

/// Slice palette; topics beyond six reuse colors
const SLICE_COLORS: [&str; 6] = [
    "#FF6384", // Pink
    "#36A2EB", // Blue
    "#FFCE56", // Yellow
    "#4BC0C0", // Teal
    "#9966FF", // Purple
    "#FF9F40", // Orange
];

/// One slice of the pie: a distinct topic and its record count
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieSlice {
    pub topic: String,
    pub count: usize,
    pub color: &'static str,
}

/// Chart-ready projection of the filtered records
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PieChartData {
    pub slices: Vec<PieSlice>,
}

impl PieChartData {
    /// Total records across all slices
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

/// Count records per distinct topic, topics in first-seen order, colors
/// assigned cyclically from the fixed palette.
pub fn pie_chart_data(records: &[Record]) -> PieChartData {
    let mut slices: Vec<PieSlice> = Vec::new();

    for record in records {
        match slices.iter_mut().find(|s| s.topic == record.topic) {
            Some(slice) => slice.count += 1,
            None => {
                let color = SLICE_COLORS[slices.len() % SLICE_COLORS.len()];
                slices.push(PieSlice {
                    topic: record.topic.clone(),
                    count: 1,
                    color,
                });
            }
        }
    }

    PieChartData { slices }
}

/// Pie chart over the filtered view
#[component]
pub fn PieChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let filtered = state.filtered;
    create_effect(move |_| {
        let data = pie_chart_data(&filtered.get());

        if let Some(canvas) = canvas_ref.get() {
            draw_pie_chart(&canvas, &data);
        }
    });

    view! {
        <div class="flex flex-col md:flex-row items-center gap-6">
            <canvas
                node_ref=canvas_ref
                width="400"
                height="400"
                class="w-64 h-64 md:w-80 md:h-80 rounded-lg"
            />

            <PieChartLegend />
        </div>
    }
}

/// Legend listing each topic with its slice color and count
#[component]
fn PieChartLegend() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let filtered = state.filtered;

    view! {
        <div class="flex flex-col gap-2">
            {move || {
                pie_chart_data(&filtered.get())
                    .slices
                    .into_iter()
                    .map(|slice| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", slice.color)
                                />
                                <span class="text-sm text-gray-300">
                                    {format!("{} ({})", slice.topic, slice.count)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Draw the chart on canvas
fn draw_pie_chart(canvas: &HtmlCanvasElement, data: &PieChartData) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let total = data.total();
    if total == 0 {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data for selected filters", width / 2.0 - 90.0, height / 2.0);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 20.0;

    let mut start_angle = -std::f64::consts::FRAC_PI_2; // 12 o'clock

    for slice in &data.slices {
        let sweep = (slice.count as f64 / total as f64) * std::f64::consts::PI * 2.0;
        let end_angle = start_angle + sweep;

        ctx.set_fill_style(&slice.color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start_angle, end_angle);
        ctx.close_path();
        ctx.fill();

        start_angle = end_angle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(topic: &str) -> Record {
        Record {
            topic: topic.to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn test_one_slice_per_distinct_topic() {
        let records = vec![
            record("Energy"),
            record("Economy"),
            record("Energy"),
            record("Oil"),
        ];

        let data = pie_chart_data(&records);
        let topics: Vec<&str> = data.slices.iter().map(|s| s.topic.as_str()).collect();
        assert_eq!(topics, vec!["Energy", "Economy", "Oil"]);
    }

    #[test]
    fn test_counts_sum_to_record_count() {
        let records = vec![
            record("Energy"),
            record("Economy"),
            record("Energy"),
            record("Energy"),
        ];

        let data = pie_chart_data(&records);
        assert_eq!(data.total(), 4);
        assert_eq!(data.slices[0].count, 3);
        assert_eq!(data.slices[1].count, 1);
    }

    #[test]
    fn test_colors_cycle_past_six_topics() {
        let records: Vec<Record> = (0..8).map(|i| record(&format!("topic-{}", i))).collect();

        let data = pie_chart_data(&records);
        assert_eq!(data.slices.len(), 8);
        assert_eq!(data.slices[0].color, data.slices[6].color);
        assert_eq!(data.slices[1].color, data.slices[7].color);
        assert_ne!(data.slices[0].color, data.slices[5].color);
    }

    #[test]
    fn test_empty_view_has_no_slices() {
        let data = pie_chart_data(&[]);
        assert!(data.slices.is_empty());
        assert_eq!(data.total(), 0);
    }
}
