//! Time-series area chart of audit metrics.
//!
//! ARCHITECTURE
//! ============
//! Layout is a pure function of the points, the metrics and the measured chart
//! size ([`graph_layout`]); the component binds it to SVG. The legend carries
//! an information popover per metric whose visibility is shared by the whole
//! graph and is dismissed by the next click anywhere else on the page.
//!
//! Popover placement is measured after render: the popover sits 30px right of
//! the information icon and 5px above it, relative to the legend.

#[cfg(test)]
#[path = "metric_graph_test.rs"]
mod metric_graph_test;

use leptos::prelude::*;

use crate::components::icons::InformationIcon;
use crate::state::audit_results::{GraphPoint, MetricType};
use crate::util::chart::{
    PlotArea, area_path, monotone_line_path, nearest_index, nice_value_axis, point_positions, ticks_from_start,
};
use crate::util::date::{LocalClock, axis_tick_label, tooltip_date_parts};
use crate::util::format::{format_metric_value, format_number};
use crate::util::i18n::{Messages, use_messages};
use crate::util::outside_click::{PageClicks, Popover};

const DEFAULT_WIDTH: f64 = 720.0;
const HEIGHT: f64 = 280.0;
const MARGIN_LEFT: f64 = 50.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 30.0;

const Y_TICK_COUNT: usize = 5;
/// Approximate rendered width of a `DD/MM` label.
const X_TICK_LABEL_WIDTH: f64 = 35.0;
const X_TICK_MIN_GAP: f64 = 50.0;

const INFO_TOOLTIP_RIGHT_SHIFT: f64 = 30.0;
const INFO_TOOLTIP_UP_SHIFT: f64 = 5.0;

const GRAPH_LINE: &str = "#4a6df1";
const CURSOR: &str = "#b4bdd6";
const ACTIVE_DOT: &str = "#ffffff";
const ACTIVE_DOT_BORDER: &str = "#4a6df1";
const INFO_ICON: &str = "#b4bdd6";

/// Left, top and right edges of a measured element, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
}

/// CSS `left`/`top` of the information popover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipOffsets {
    pub left: String,
    pub top: String,
}

impl Default for TooltipOffsets {
    fn default() -> Self {
        Self { left: "auto".to_owned(), top: "auto".to_owned() }
    }
}

/// Place the popover relative to the legend from the icon's position.
pub fn info_tooltip_offsets(legend: ElementBox, icon: ElementBox) -> TooltipOffsets {
    let left = (icon.right - legend.left + INFO_TOOLTIP_RIGHT_SHIFT).floor();
    let top = (icon.top - legend.top - INFO_TOOLTIP_UP_SHIFT).floor();
    TooltipOffsets { left: format!("{}px", format_number(left)), top: format!("{}px", format_number(top)) }
}

/// Geometry of one metric's series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPath {
    pub metric: MetricType,
    pub line: String,
    pub area: String,
    /// Plot position per point index; `None` where the point lacks the metric.
    pub coords: Vec<Option<(f64, f64)>>,
}

/// A labeled tick at `position` along its axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLayout {
    pub width: f64,
    pub height: f64,
    pub area: PlotArea,
    pub positions: Vec<f64>,
    pub series: Vec<SeriesPath>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

/// Lay out `points` for `metrics` in a `width` x `height` chart.
pub fn graph_layout(
    points: &[GraphPoint],
    metrics: &[MetricType],
    width: f64,
    height: f64,
    clock: &LocalClock,
) -> GraphLayout {
    let area = PlotArea {
        left: MARGIN_LEFT,
        top: MARGIN_TOP,
        width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0),
        height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0),
    };

    let max_value = points
        .iter()
        .flat_map(|point| metrics.iter().filter_map(|metric| point.value(*metric)))
        .fold(0.0, f64::max);
    let axis = nice_value_axis(max_value, Y_TICK_COUNT);
    let positions = point_positions(points.len(), &area);

    let series = metrics
        .iter()
        .map(|&metric| {
            let coords: Vec<Option<(f64, f64)>> = points
                .iter()
                .zip(&positions)
                .map(|(point, &x)| point.value(metric).map(|value| (x, axis.y(value, &area))))
                .collect();
            let present: Vec<(f64, f64)> = coords.iter().flatten().copied().collect();
            SeriesPath {
                metric,
                line: monotone_line_path(&present),
                area: area_path(&present, area.bottom()),
                coords,
            }
        })
        .collect();

    let x_ticks = ticks_from_start(&positions, X_TICK_LABEL_WIDTH, X_TICK_MIN_GAP)
        .into_iter()
        .filter_map(|idx| {
            let point = points.get(idx)?;
            Some(AxisTick {
                position: *positions.get(idx)?,
                label: clock.local(point.date).map(axis_tick_label).unwrap_or_default(),
            })
        })
        .collect();

    let y_ticks = axis
        .ticks
        .iter()
        .map(|&value| AxisTick { position: axis.y(value, &area), label: format_number(value) })
        .collect();

    GraphLayout { width, height, area, positions, series, x_ticks, y_ticks }
}

/// One line of the hover tooltip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipEntry {
    pub value: String,
    pub date: String,
}

/// Tooltip lines for the hovered point, one per metric it has a value for.
pub fn tooltip_entries(
    point: &GraphPoint,
    metrics: &[MetricType],
    messages: &Messages,
    clock: &LocalClock,
) -> Vec<TooltipEntry> {
    let (day, time) = tooltip_date_parts(point.date, messages.locale(), clock);
    let date = messages.format_with("components.MetricGraph.tooltipDate", &[("day", &day), ("time", &time)]);
    metrics
        .iter()
        .filter_map(|metric| {
            point.value(*metric).map(|value| TooltipEntry {
                value: format_metric_value(metric.kind(), value),
                date: date.clone(),
            })
        })
        .collect()
}

#[cfg(feature = "hydrate")]
fn element_box(el: &web_sys::Element) -> ElementBox {
    let rect = el.get_bounding_client_rect();
    ElementBox { left: rect.left(), top: rect.top(), right: rect.right() }
}

/// Area chart with one filled series per metric.
#[component]
pub fn MetricGraph(#[prop(into)] audit_results: Signal<Vec<GraphPoint>>, metrics: Vec<MetricType>) -> impl IntoView {
    let messages = use_messages();
    let clock = LocalClock::now();
    let metrics = StoredValue::new(metrics);

    let chart_ref = NodeRef::<leptos::html::Div>::new();
    let legends_ref = NodeRef::<leptos::html::Div>::new();
    let legend_ref = NodeRef::<leptos::html::Div>::new();
    let icon_ref = NodeRef::<leptos::html::Div>::new();

    let size = RwSignal::new((DEFAULT_WIDTH, HEIGHT));
    let hovered = RwSignal::new(None::<usize>);
    let info_visible = RwSignal::new(false);
    let offsets = RwSignal::new(TooltipOffsets::default());

    let popover = StoredValue::new_local(Popover::new(PageClicks::new(legends_ref, ".metric-graph__info-icon")));
    let hide_info = move || {
        popover.try_update_value(Popover::hide);
        info_visible.set(false);
    };
    let on_info_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let visible = popover.try_update_value(|p| p.toggle(hide_info)).unwrap_or(false);
        info_visible.set(visible);
    };
    on_cleanup(move || {
        popover.try_update_value(Popover::hide);
    });

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let (Some(legend), Some(icon)) = (legend_ref.get(), icon_ref.get()) else {
                return;
            };
            offsets.set(info_tooltip_offsets(element_box(&legend), element_box(&icon)));
        });
        Effect::new(move || {
            if let Some(el) = chart_ref.get() {
                let width = f64::from(el.client_width());
                if width > 0.0 {
                    size.set((width, HEIGHT));
                }
            }
        });
    }

    let layout = Memo::new(move |_| {
        let (width, height) = size.get();
        audit_results.with(|points| metrics.with_value(|m| graph_layout(points, m, width, height, &clock)))
    });

    let on_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = chart_ref.get_untracked() else {
                return;
            };
            let x = f64::from(ev.client_x()) - el.get_bounding_client_rect().left();
            hovered.set(layout.with_untracked(|l| nearest_index(x, &l.positions)));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };
    let on_focus = move |_| hovered.set(audit_results.with_untracked(|p| p.len().checked_sub(1)));

    let legend = metrics
        .get_value()
        .into_iter()
        .map(|metric| {
            view! {
                <div class="metric-graph__legend" node_ref=legend_ref>
                    <span class="metric-graph__legend-title">
                        {move || messages.with(|m| m.format(&metric.name_message_id()))}
                    </span>
                    <div class="metric-graph__info-icon" node_ref=icon_ref on:click=on_info_click>
                        <InformationIcon color=INFO_ICON/>
                    </div>
                    <Show when=move || info_visible.get()>
                        <div
                            class="metric-graph__info-tooltip"
                            style=move || offsets.with(|o| format!("left: {}; top: {};", o.left, o.top))
                        >
                            {move || messages.with(|m| m.format(&metric.description_message_id()))}
                        </div>
                    </Show>
                </div>
            }
        })
        .collect_view();

    let tooltip = move || {
        let idx = hovered.get()?;
        let point = audit_results.with(|points| points.get(idx).cloned())?;
        let x = layout.with(|l| l.positions.get(idx).copied())?;
        let entries = messages.with(|m| metrics.with_value(|ms| tooltip_entries(&point, ms, m, &clock)));
        Some(view! {
            <div class="metric-graph__tooltip" style=format!("left: {}px; top: {MARGIN_TOP}px;", x + 10.0)>
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <div class="metric-graph__tooltip-entry">
                                <span class="metric-graph__tooltip-value">{entry.value}</span>
                                <span class="metric-graph__tooltip-date">{entry.date}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        })
    };

    view! {
        <div class="metric-graph">
            <div class="metric-graph__legends" node_ref=legends_ref>{legend}</div>
            <div
                class="metric-graph__chart"
                node_ref=chart_ref
                tabindex="0"
                on:mousemove=on_move
                on:mouseleave=move |_| hovered.set(None)
                on:focus=on_focus
                on:blur=move |_| hovered.set(None)
            >
                <svg
                    width=move || layout.with(|l| l.width.to_string())
                    height=move || layout.with(|l| l.height.to_string())
                    role="img"
                >
                    <defs>
                        <linearGradient id="areaGradient" x1="0" y1="0" x2="0" y2="1">
                            <stop offset="5%" stop-color=GRAPH_LINE stop-opacity="0.8"/>
                            <stop offset="95%" stop-color=GRAPH_LINE stop-opacity="0"/>
                        </linearGradient>
                    </defs>
                    {move || {
                        layout
                            .with(|l| {
                                l.y_ticks
                                    .iter()
                                    .map(|tick| {
                                        view! {
                                            <text
                                                class="metric-graph__tick"
                                                x=(l.area.left - 8.0).to_string()
                                                y=tick.position.to_string()
                                                text-anchor="end"
                                                dominant-baseline="middle"
                                            >
                                                {tick.label.clone()}
                                            </text>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                    {move || {
                        layout
                            .with(|l| {
                                l.x_ticks
                                    .iter()
                                    .map(|tick| {
                                        view! {
                                            <text
                                                class="metric-graph__tick"
                                                x=tick.position.to_string()
                                                y=(l.area.bottom() + 20.0).to_string()
                                                text-anchor="middle"
                                            >
                                                {tick.label.clone()}
                                            </text>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                    {move || {
                        hovered
                            .get()
                            .and_then(|idx| {
                                layout
                                    .with(|l| {
                                        let x = l.positions.get(idx).copied()?;
                                        let (top, bottom) = (l.area.top, l.area.bottom());
                                        Some(
                                            view! {
                                                <line
                                                    x1=x.to_string()
                                                    x2=x.to_string()
                                                    y1=top.to_string()
                                                    y2=bottom.to_string()
                                                    stroke=CURSOR
                                                />
                                            },
                                        )
                                    })
                            })
                    }}
                    {move || {
                        layout
                            .with(|l| {
                                l.series
                                    .iter()
                                    .map(|series| {
                                        view! {
                                            <path
                                                class="metric-graph__area"
                                                d=series.area.clone()
                                                fill="url(#areaGradient)"
                                                fill-opacity="1"
                                                stroke="none"
                                            />
                                            <path
                                                class="metric-graph__line"
                                                d=series.line.clone()
                                                fill="none"
                                                stroke=GRAPH_LINE
                                                stroke-width="5"
                                            />
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                    {move || {
                        hovered
                            .get()
                            .map(|idx| {
                                layout
                                    .with(|l| {
                                        l.series
                                            .iter()
                                            .filter_map(|series| series.coords.get(idx).copied().flatten())
                                            .map(|(x, y)| {
                                                view! {
                                                    <circle
                                                        cx=x.to_string()
                                                        cy=y.to_string()
                                                        r="10"
                                                        fill=ACTIVE_DOT
                                                        stroke=ACTIVE_DOT_BORDER
                                                        stroke-width="4"
                                                    />
                                                }
                                            })
                                            .collect_view()
                                    })
                            })
                    }}
                </svg>
                <Show when=move || audit_results.with(Vec::is_empty)>
                    <p class="metric-graph__empty">
                        {move || messages.with(|m| m.format("components.MetricGraph.no_data"))}
                    </p>
                </Show>
                {tooltip}
            </div>
        </div>
    }
}
