//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod bar_chart;
pub mod filter_bar;
pub mod loading;
pub mod nav;
pub mod pie_chart;

pub use bar_chart::BarChart;
pub use filter_bar::FilterBar;
pub use loading::{ChartSkeleton, InlineLoading};
pub use nav::Nav;
pub use pie_chart::PieChart;
