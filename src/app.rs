use leptos::*;

use crate::domain::{
    chart::{BarChartLayout, BarDatum, BarLayoutService, BarRow, ChartInput, ChartStyle},
    logging::LogComponent,
};
use crate::log_trace;

/// Horizontal bar chart: one row per item, in order, with label, bar and
/// right-aligned value. Re-lays out from scratch whenever an input changes.
#[component]
pub fn BarChart(
    #[prop(into)] items: MaybeSignal<Vec<BarDatum>>,
    #[prop(into, optional)] max_value: MaybeSignal<Option<f64>>,
    #[prop(into, optional)] style: MaybeSignal<ChartStyle>,
) -> impl IntoView {
    let container_style = {
        let style = style.clone();
        move || {
        style.with(|style| {
            format!(
                "display: flex; flex-direction: column; gap: {}px; font: {};",
                style.row_gap, style.font
            )
        })
        }
    };

    let layout = {
        let style = style.clone();
        move || -> BarChartLayout {
        let input = ChartInput {
            items: items.get(),
            explicit_max: max_value.get(),
        };
        style.with(|style| BarLayoutService::new().layout(&input, style))
        }
    };

    view! {
        <div class="bar-chart" style=container_style>
            {move || {
                let layout = layout();
                let style = style.get();
                log_trace!(
                    LogComponent::Presentation("BarChart"),
                    "Rendering {} rows",
                    layout.len()
                );
                layout
                    .rows
                    .into_iter()
                    .map(|row| view! { <BarChartRow row=row style=style.clone()/> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn BarChartRow(row: BarRow, style: ChartStyle) -> impl IntoView {
    let row_style = format!(
        "display: grid; grid-template-columns: {}px 1fr {}px; align-items: center; column-gap: 8px; height: {}px;",
        style.label_width, style.value_width, style.row_height
    );
    let label_style = format!(
        "color: {}; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
        style.label_color.to_css()
    );
    let track_style = format!(
        "background: {}; border-radius: {}px; height: 100%; overflow: hidden;",
        style.track.to_css(),
        style.bar_radius
    );
    let fill_style = format!(
        "background: {}; border-radius: {}px; height: 100%; width: {};",
        row.color.to_css(),
        style.bar_radius,
        row.proportion.css_width()
    );
    let key = row.key();
    let value_style = format!(
        "color: {}; text-align: right; font-variant-numeric: tabular-nums;",
        style.label_color.to_css()
    );

    view! {
        <div class="bar-row" data-key=key>
            <div style=row_style>
                <span class="bar-label" style=label_style>{row.label}</span>
                <div class="bar-track" style=track_style>
                    <div class="bar-fill" style=fill_style></div>
                </div>
                <span class="bar-value" style=value_style>{row.value_text}</span>
            </div>
        </div>
    }
}

/// Demo page: a small chart with a toggle between derived and fixed max.
#[component]
pub fn App() -> impl IntoView {
    let items = vec![
        BarDatum::new("Rust", 42.0),
        BarDatum::new("Go", 28.0),
        BarDatum::new("Zig", 9.0).with_color("#f97316"),
        BarDatum::new("Idle", 0.0),
    ];
    let (max_value, set_max_value) = create_signal(None::<f64>);

    view! {
        <div class="bar-chart-app" style="font-family: sans-serif; max-width: 560px; margin: 40px auto;">
            <h1>"Bar Chart"</h1>
            <button on:click=move |_| {
                set_max_value.update(|max| *max = if max.is_some() { None } else { Some(100.0) })
            }>
                {move || match max_value.get() {
                    Some(max) => format!("Scale: fixed {}", max),
                    None => "Scale: largest value".to_string(),
                }}
            </button>
            <BarChart items=items max_value=max_value/>
        </div>
    }
}
