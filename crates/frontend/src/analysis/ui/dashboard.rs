use contracts::analysis::{ColumnDetail, ColumnKind, Histogram, OverallStats, SummaryData};
use leptos::html::Canvas;
use leptos::prelude::*;

use crate::analysis::charts;
use crate::shared::icons::icon;

/// Summary dashboard: overall stat cards plus one card per column.
/// Mounted only after a successful summarize call, which is what moves the
/// dashboard region from hidden to visible.
#[component]
pub fn SummaryDashboard(data: SummaryData) -> impl IntoView {
    view! {
        <div class="dashboard">
            <h2 class="dashboard__title">
                {icon("bar-chart")}
                " Summary"
            </h2>
            <OverallStatsCards stats=data.overall_stats />
            <div class="dashboard__columns">
                {data.column_details.into_iter().map(|column| view! {
                    <ColumnCard column=column />
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn OverallStatsCards(stats: OverallStats) -> impl IntoView {
    view! {
        <div class="dashboard__stats">
            <StatCard value=stats.rows.to_string() label="Rows" />
            <StatCard value=stats.columns.to_string() label="Columns" />
            <StatCard value=stats.missing_cells.to_string() label="Missing Cells" />
            // percentage arrives formatted by the service, only "%" is appended
            <StatCard value=format!("{}%", stats.missing_cells_percent) label="Missing (%)" />
        </div>
    }
}

#[component]
fn StatCard(value: String, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h3>{value}</h3>
            <p>{label}</p>
        </div>
    }
}

#[component]
fn ColumnCard(column: ColumnDetail) -> impl IntoView {
    let ColumnDetail {
        column_name,
        data_type,
        missing_values,
        kind,
    } = column;

    view! {
        <div class="column-card">
            <h3>{column_name.clone()}</h3>
            <p><strong>"Type: "</strong>{data_type}</p>
            <p><strong>"Missing: "</strong>{missing_values.to_string()}</p>
            {match kind {
                ColumnKind::Numeric { stats, histogram } => view! {
                    <p><strong>"Mean: "</strong>{stats.mean.to_string()}</p>
                    <p><strong>"Std Dev: "</strong>{stats.std.to_string()}</p>
                    <p>
                        <strong>"Min: "</strong>{stats.min.to_string()}
                        " | "
                        <strong>"Max: "</strong>{stats.max.to_string()}
                    </p>
                    {histogram.map(|histogram| view! {
                        <HistogramCanvas column_name=column_name histogram=histogram />
                    })}
                }
                .into_any(),
                ColumnKind::Categorical { unique_values } => view! {
                    <p><strong>"Unique Values: "</strong>{unique_values.to_string()}</p>
                }
                .into_any(),
            }}
        </div>
    }
}

/// Canvas host for one histogram. The chart is attached once the canvas
/// is in the DOM; a failed attach is logged and leaves the card chartless.
#[component]
fn HistogramCanvas(column_name: String, histogram: Histogram) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let canvas_id = format!("hist-{}", column_name);
    let config = charts::histogram_config(&histogram);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if let Err(err) = charts::render_histogram(&canvas, &config) {
            log::error!("Failed to render histogram for \"{}\": {:?}", column_name, err);
        }
    });

    view! { <canvas id=canvas_id node_ref=canvas_ref></canvas> }
}
