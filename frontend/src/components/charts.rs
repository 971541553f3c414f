use yew::prelude::*;

use super::icons::icon_bar_chart;
use crate::aggregate::Summary;
use crate::chart::{pie_gradient, summary_bars};
use crate::config::AppConfig;
use crate::view::{category_rows, EMPTY_BREAKDOWN_MESSAGE};

#[derive(Properties, PartialEq)]
pub struct SummaryBarsProps {
    pub summary: Summary,
    pub config: AppConfig,
}

#[function_component(SummaryBars)]
pub fn summary_bars_chart(props: &SummaryBarsProps) -> Html {
    let bars = summary_bars(&props.summary, &props.config);
    html! {
        <div class="card chart">
            <h3>{"Income vs Expense"}</h3>
            <div id="bar-chart" class="bar-chart" style={format!("height: {}px", props.config.bar_track_height)}>
                { for bars.iter().map(|bar| html! {
                    <div
                        class={classes!("bar", bar.flow.class())}
                        style={format!("height: {}px; background: var(--{})", bar.height_px, bar.flow.class())}
                    ></div>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub income_percent: f64,
}

#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    html! {
        <div class="card chart">
            <h3>{"Share of Income"}</h3>
            <div id="pie-chart" class="pie-chart" style={format!("background: {}", pie_gradient(props.income_percent))}></div>
            <p class="muted">{ format!("{:.0}% income", props.income_percent) }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryBreakdownProps {
    pub summary: Summary,
    pub config: AppConfig,
    pub currency_symbol: String,
}

#[function_component(CategoryBreakdown)]
pub fn category_breakdown(props: &CategoryBreakdownProps) -> Html {
    let rows = category_rows(&props.summary, &props.config, &props.currency_symbol);
    html! {
        <section class="card category-breakdown">
            <div class="card-title">
                { icon_bar_chart() }
                <h3>{"By Category"}</h3>
            </div>
            if rows.is_empty() {
                <p class="muted">{ EMPTY_BREAKDOWN_MESSAGE }</p>
            } else {
                <div class="category-rows">
                    { for rows.into_iter().map(|row| {
                        let key = row.category.clone();
                        html! {
                            <div key={key} class="category-row">
                                <div class="category-label">
                                    <span>{ row.category }</span>
                                    <span>{ row.amount }</span>
                                </div>
                                <div class="category-track">
                                    <div class={classes!("category-bar", row.class)} style={row.bar_style}></div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }
        </section>
    }
}
