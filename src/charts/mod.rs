//! SVG charts rendered straight from Yew, no JS charting library.

mod arc;
mod bar;
mod donut;
mod hooks;
mod scale;
mod tooltip;

pub use bar::BarChart;
pub use donut::DonutChart;

pub const BLUE_SCHEME: &[&str] = &["#3b82f6", "#60a5fa", "#93c5fd", "#dbeafe"];
pub const CATEGORY_SCHEME: &[&str] = &[
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#f97316",
];
pub const INCOME_SCHEME: &[&str] = &["#10b981", "#34d399", "#6ee7b7", "#a7f3d0", "#d1fae5"];
pub const EXPENSE_SCHEME: &[&str] = &["#ef4444", "#f87171", "#fca5a5", "#fecaca", "#fee2e2"];
pub const TREND_SCHEME: &[&str] = &["#8b5cf6", "#a78bfa", "#c4b5fd", "#ddd6fe"];

#[derive(Clone, Debug, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
