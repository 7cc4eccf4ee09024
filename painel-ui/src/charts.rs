#![cfg(target_arch = "wasm32")]

//! SVG renderers for the generic `{labels, datasets}` chart shape.
//!
//! Adapters do layout only; every data decision (order, sign, colour) was
//! made when the series was built.

use painel_core::views::pyramid_display_value;
use painel_core::{format_number, ChartSeries, Dataset};
use yew::prelude::*;

use crate::chart_geometry::{
    donut_angles, nice_ceiling, polyline_points, ring_segment_path, symmetric_ticks, ticks,
    LinearScale,
};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const MARGIN: f64 = 36.0;
const CATEGORY_LABEL_WIDTH: f64 = 220.0;
const BAR_ROW_HEIGHT: f64 = 26.0;
const TICK_COUNT: usize = 5;
const FALLBACK_COLOR: &str = "#64748b";

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub series: ChartSeries,
    pub title: AttrValue,
}

fn px(value: f64) -> String {
    format!("{value:.2}")
}

fn stroke_of(dataset: &Dataset) -> String {
    dataset
        .colors
        .border
        .clone()
        .or_else(|| dataset.colors.background_at(0).map(str::to_string))
        .unwrap_or_else(|| FALLBACK_COLOR.to_string())
}

fn fill_of(dataset: &Dataset, index: usize) -> String {
    dataset
        .colors
        .background_at(index)
        .unwrap_or(FALLBACK_COLOR)
        .to_string()
}

fn dataset_legend(series: &ChartSeries) -> Html {
    html! {
        <div class="chart-legend">
            {
                for series.datasets.iter().map(|dataset| html! {
                    <span>
                        <span class="chart-legend__swatch" style={format!("background: {}", fill_of(dataset, 0))} />
                        { dataset.label.clone() }
                    </span>
                })
            }
        </div>
    }
}

fn chart_card(title: &AttrValue, legend: Html, body: Html) -> Html {
    html! {
        <figure class="chart-card">
            <figcaption class="chart-card__title">{ title.clone() }</figcaption>
            { legend }
            { body }
        </figure>
    }
}

/// One polyline per dataset over the category axis.
#[function_component(LineChart)]
pub fn line_chart(props: &ChartProps) -> Html {
    let series = &props.series;
    let max = nice_ceiling(series.max_magnitude());
    let last_index = series.len().saturating_sub(1) as f64;
    let x = LinearScale::new((0.0, last_index), (MARGIN * 2.0, WIDTH - MARGIN));
    let y = LinearScale::new((0.0, max), (HEIGHT - MARGIN, MARGIN / 2.0));

    let grid = ticks(max, TICK_COUNT).into_iter().map(|tick| {
        html! {
            <g class="chart-axis">
                <line x1={px(MARGIN * 2.0)} x2={px(WIDTH - MARGIN)} y1={px(y.map(tick))} y2={px(y.map(tick))} />
                <text x={px(MARGIN * 2.0 - 6.0)} y={px(y.map(tick) + 4.0)} text-anchor="end">
                    { format_number(Some(tick)) }
                </text>
            </g>
        }
    });

    let labels = series.labels.iter().enumerate().map(|(index, label)| {
        html! {
            <g class="chart-axis">
                <text x={px(x.map(index as f64))} y={px(HEIGHT - MARGIN + 18.0)} text-anchor="middle">
                    { label.clone() }
                </text>
            </g>
        }
    });

    let lines = series.datasets.iter().map(|dataset| {
        let stroke = stroke_of(dataset);
        html! {
            <g>
                <polyline
                    points={polyline_points(&dataset.data, &x, &y)}
                    fill="none"
                    stroke={stroke.clone()}
                    stroke-width="2"
                />
                {
                    for dataset.data.iter().enumerate().map(|(index, value)| html! {
                        <circle cx={px(x.map(index as f64))} cy={px(y.map(*value))} r="4" fill={fill_of(dataset, 0)} stroke={stroke.clone()}>
                            <title>{ format!("{} ({}): {}", dataset.label, series.labels[index], format_number(Some(*value))) }</title>
                        </circle>
                    })
                }
            </g>
        }
    });

    let body = html! {
        <svg viewBox={format!("0 0 {WIDTH} {HEIGHT}")} role="img" aria-label={props.title.clone()}>
            { for grid }
            { for labels }
            { for lines }
        </svg>
    };

    chart_card(&props.title, dataset_legend(series), body)
}

/// Category index 0 is drawn at the bottom, so the last label sits on top.
fn row_center(index: usize, rows: usize) -> f64 {
    MARGIN / 2.0 + (rows - 1 - index) as f64 * BAR_ROW_HEIGHT + BAR_ROW_HEIGHT / 2.0
}

fn bar_height(rows: usize) -> f64 {
    MARGIN * 1.5 + rows as f64 * BAR_ROW_HEIGHT
}

fn category_labels(series: &ChartSeries) -> Html {
    let rows = series.len();
    html! {
        <g class="chart-axis">
            {
                for series.labels.iter().enumerate().map(|(index, label)| html! {
                    <text x={px(CATEGORY_LABEL_WIDTH - 8.0)} y={px(row_center(index, rows) + 4.0)} text-anchor="end">
                        { label.clone() }
                    </text>
                })
            }
        </g>
    }
}

/// Single-dataset ranking bars growing to the right.
#[function_component(HorizontalBarChart)]
pub fn horizontal_bar_chart(props: &ChartProps) -> Html {
    let series = &props.series;
    let rows = series.len();
    let height = bar_height(rows);
    let max = nice_ceiling(series.max_magnitude());
    let x = LinearScale::new((0.0, max), (CATEGORY_LABEL_WIDTH, WIDTH - MARGIN));
    let thickness = BAR_ROW_HEIGHT * 0.7;

    let axis = ticks(max, TICK_COUNT).into_iter().map(|tick| {
        html! {
            <g class="chart-axis">
                <line x1={px(x.map(tick))} x2={px(x.map(tick))} y1={px(MARGIN / 2.0)} y2={px(height - MARGIN)} />
                <text x={px(x.map(tick))} y={px(height - MARGIN + 16.0)} text-anchor="middle">
                    { format_number(Some(tick)) }
                </text>
            </g>
        }
    });

    let bars = series.datasets.iter().flat_map(|dataset| {
        dataset.data.iter().enumerate().map(move |(index, value)| {
            let width = x.map(*value) - x.map(0.0);
            html! {
                <rect
                    x={px(x.map(0.0))}
                    y={px(row_center(index, rows) - thickness / 2.0)}
                    width={px(width.max(0.0))}
                    height={px(thickness)}
                    fill={fill_of(dataset, index)}
                    stroke={stroke_of(dataset)}
                >
                    <title>{ format!("{}: {}", dataset.label, format_number(Some(*value))) }</title>
                </rect>
            }
        })
    });

    let body = html! {
        <svg viewBox={format!("0 0 {WIDTH} {height}")} role="img" aria-label={props.title.clone()}>
            { for axis }
            { category_labels(series) }
            { for bars }
        </svg>
    };

    chart_card(&props.title, Html::default(), body)
}

/// Two datasets mirrored around a shared zero axis. The first dataset holds
/// negated values; ticks and tooltips print magnitudes.
#[function_component(PyramidChart)]
pub fn pyramid_chart(props: &ChartProps) -> Html {
    let series = &props.series;
    let rows = series.len();
    let height = bar_height(rows);
    let max = nice_ceiling(series.max_magnitude());
    let x = LinearScale::new((-max, max), (CATEGORY_LABEL_WIDTH, WIDTH - MARGIN));
    let thickness = BAR_ROW_HEIGHT * 0.7;

    let axis = symmetric_ticks(max, 2).into_iter().map(|tick| {
        html! {
            <g class="chart-axis">
                <line x1={px(x.map(tick))} x2={px(x.map(tick))} y1={px(MARGIN / 2.0)} y2={px(height - MARGIN)} />
                <text x={px(x.map(tick))} y={px(height - MARGIN + 16.0)} text-anchor="middle">
                    { format_number(Some(pyramid_display_value(tick))) }
                </text>
            </g>
        }
    });

    let bars = series.datasets.iter().flat_map(|dataset| {
        dataset.data.iter().enumerate().map(move |(index, value)| {
            let (from, to) = (x.map(0.0), x.map(*value));
            html! {
                <rect
                    x={px(from.min(to))}
                    y={px(row_center(index, rows) - thickness / 2.0)}
                    width={px((to - from).abs())}
                    height={px(thickness)}
                    fill={fill_of(dataset, index)}
                >
                    <title>{ format!("{}: {}", dataset.label, format_number(Some(pyramid_display_value(*value)))) }</title>
                </rect>
            }
        })
    });

    let body = html! {
        <svg viewBox={format!("0 0 {WIDTH} {height}")} role="img" aria-label={props.title.clone()}>
            { for axis }
            { category_labels(series) }
            { for bars }
        </svg>
    };

    chart_card(&props.title, dataset_legend(series), body)
}

/// Ring chart of the first dataset; slice colours cycle through its palette.
#[function_component(DonutChart)]
pub fn donut_chart(props: &ChartProps) -> Html {
    let series = &props.series;
    let Some(dataset) = series.datasets.first() else {
        return chart_card(&props.title, Html::default(), Html::default());
    };

    let size = 300.0;
    let center = (size / 2.0, size / 2.0);
    let outer = size / 2.0 - 4.0;
    let inner = outer * 0.55;

    let slices = donut_angles(&dataset.data)
        .into_iter()
        .enumerate()
        .filter(|(_, (start, end))| end > start)
        .map(|(index, (start, end))| {
            html! {
                <path d={ring_segment_path(center, outer, inner, start, end)} fill={fill_of(dataset, index)} stroke="#ffffff">
                    <title>{ format!("{}: {}", series.labels[index], format_number(Some(dataset.data[index]))) }</title>
                </path>
            }
        });

    let legend = html! {
        <div class="chart-legend">
            {
                for series.labels.iter().enumerate().map(|(index, label)| html! {
                    <span>
                        <span class="chart-legend__swatch" style={format!("background: {}", fill_of(dataset, index))} />
                        { label.clone() }
                    </span>
                })
            }
        </div>
    };

    let body = html! {
        <svg viewBox={format!("0 0 {size} {size}")} role="img" aria-label={props.title.clone()}>
            { for slices }
        </svg>
    };

    chart_card(&props.title, legend, body)
}
