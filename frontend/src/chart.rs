//! Geometry for the summary bars, the pie and the category breakdown.

use crate::aggregate::Summary;
use crate::config::AppConfig;
use crate::model::Flow;

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryBar {
    pub flow: Flow,
    pub value: f64,
    pub height_px: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryBar {
    pub category: String,
    pub amount: f64,
    pub width_percent: f64,
    pub flow: Flow,
}

/// `value / max` within `[0, 1]`; an overflowed `max` only fills overflowed values.
fn fraction(value: f64, max: f64) -> f64 {
    if !(max > 0.0) {
        return 0.0;
    }
    if max.is_infinite() {
        return if value.is_infinite() { 1.0 } else { 0.0 };
    }
    (value / max).clamp(0.0, 1.0)
}

/// Income then expense, scaled against `max(income, expense, floor)`.
pub fn summary_bars(summary: &Summary, config: &AppConfig) -> [SummaryBar; 2] {
    let scale = summary
        .income_total
        .max(summary.expense_total)
        .max(config.bar_scale_floor);
    let bar = |flow, value: f64| SummaryBar {
        flow,
        value,
        height_px: (fraction(value, scale) * config.bar_track_height).max(config.bar_min_height),
    };
    [
        bar(Flow::Inflow, summary.income_total),
        bar(Flow::Outflow, summary.expense_total),
    ]
}

/// CSS `background` for the two-segment pie.
pub fn pie_gradient(income_percent: f64) -> String {
    format!(
        "conic-gradient(var(--income) 0% {p}%, var(--expense) {p}% 100%)",
        p = income_percent
    )
}

pub fn category_bars(summary: &Summary, config: &AppConfig) -> Vec<CategoryBar> {
    let max = summary.max_category_amount();
    summary
        .category_totals
        .iter()
        .map(|total| CategoryBar {
            category: total.category.clone(),
            amount: total.amount,
            width_percent: (fraction(total.amount, max) * 100.0)
                .max(config.category_bar_min_width),
            flow: Flow::of_category(&total.category),
        })
        .collect()
}
