use yew::prelude::*;

use super::hooks::{stagger_progress, use_enter_clock, use_fitted_width};
use super::scale::{ordinal_colors, BandScale, LinearScale};
use super::tooltip::{Tooltip, TooltipLine, TooltipState};
use super::{ChartDatum, BLUE_SCHEME};
use crate::format::{axis_label, format_number, short_money};

const MARGIN_TOP: f64 = 40.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 60.0;
const MARGIN_LEFT: f64 = 60.0;
const BAND_PADDING: f64 = 0.3;
const TICK_COUNT: usize = 10;

const GROW_MS: u32 = 800;
const STAGGER_MS: u32 = 100;
const LABEL_DELAY_MS: u32 = 400;

#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub inner_width: f64,
    pub inner_height: f64,
    pub bars: Vec<BarGeometry>,
    /// (pixel offset, label) for each y tick.
    pub ticks: Vec<(f64, String)>,
}

pub fn bar_layout(data: &[ChartDatum], width: f64, height: f64, scheme: &[&'static str]) -> BarLayout {
    let inner_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0);
    let inner_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0);

    let max = data.iter().map(|d| d.value).fold(0.0, f64::max);
    let y = LinearScale::new((0.0, max), (inner_height, 0.0)).nice(TICK_COUNT);
    let x = BandScale::new(data.len(), (0.0, inner_width), BAND_PADDING);

    let labels: Vec<&str> = data.iter().map(|d| d.label.as_str()).collect();
    let colors = ordinal_colors(&labels, scheme);

    let bars = data
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(i, (datum, color))| {
            let top = y.scale(datum.value).min(inner_height);
            BarGeometry {
                label: datum.label.clone(),
                value: datum.value,
                x: x.position(i).unwrap_or(0.0),
                y: top,
                width: x.bandwidth(),
                height: inner_height - top,
                color,
            }
        })
        .collect();

    let ticks = y
        .ticks(TICK_COUNT)
        .into_iter()
        .map(|t| (y.scale(t), axis_label(t)))
        .collect();

    BarLayout {
        inner_width,
        inner_height,
        bars,
        ticks,
    }
}

fn enter_duration(bars: usize) -> u32 {
    let last = bars.saturating_sub(1) as u32 * STAGGER_MS;
    last + LABEL_DELAY_MS + GROW_MS
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub data: Vec<ChartDatum>,
    #[prop_or(480.0)]
    pub width: f64,
    #[prop_or(280.0)]
    pub height: f64,
    #[prop_or(BLUE_SCHEME)]
    pub color_scheme: &'static [&'static str],
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let node = use_node_ref();
    let width = use_fitted_width(node.clone(), props.width);
    let height = props.height;
    let elapsed = use_enter_clock((props.data.clone(), width), enter_duration(props.data.len()));
    let hovered = use_state_eq(|| None::<usize>);
    let tooltip = use_state(|| None::<TooltipState>);

    if props.data.is_empty() {
        return html! { <div ref={node} class="w-full" /> };
    }

    let layout = bar_layout(&props.data, width, height, props.color_scheme);
    let h = layout.inner_height;
    let w = layout.inner_width;

    let bars = layout.bars.iter().enumerate().map(|(i, bar)| {
        let delay = i as u32 * STAGGER_MS;
        let grown = bar.height * stagger_progress(elapsed, delay, GROW_MS);
        let opacity = if *hovered == Some(i) { "0.8" } else { "1" };

        let lines = vec![
            TooltipLine { text: bar.label.clone(), class: "font-semibold" },
            TooltipLine { text: format!("${}", format_number(bar.value)), class: "text-yellow-300" },
        ];
        let on_enter = {
            let hovered = hovered.clone();
            let tooltip = tooltip.clone();
            let lines = lines.clone();
            Callback::from(move |e: MouseEvent| {
                hovered.set(Some(i));
                tooltip.set(Some(TooltipState::at(&e, lines.clone())));
            })
        };
        let on_move = {
            let tooltip = tooltip.clone();
            Callback::from(move |e: MouseEvent| {
                tooltip.set(Some(TooltipState::at(&e, lines.clone())));
            })
        };
        let on_leave = {
            let hovered = hovered.clone();
            let tooltip = tooltip.clone();
            Callback::from(move |_: MouseEvent| {
                hovered.set(None);
                tooltip.set(None);
            })
        };

        html! {
            <rect
                class="cursor-pointer transition-opacity duration-200"
                x={format!("{:.2}", bar.x)}
                y={format!("{:.2}", h - grown)}
                width={format!("{:.2}", bar.width)}
                height={format!("{:.2}", grown)}
                fill={bar.color}
                rx="4"
                ry="4"
                opacity={opacity}
                onmouseenter={on_enter}
                onmousemove={on_move}
                onmouseleave={on_leave}
            />
        }
    });

    let value_labels = layout.bars.iter().enumerate().map(|(i, bar)| {
        let fade = stagger_progress(elapsed, i as u32 * STAGGER_MS + LABEL_DELAY_MS, GROW_MS);
        html! {
            <text
                x={format!("{:.2}", bar.x + bar.width / 2.0)}
                y={format!("{:.2}", bar.y - 5.0)}
                text-anchor="middle"
                class="text-xs font-semibold fill-gray-700 dark:fill-gray-300"
                style={format!("opacity: {:.3}", fade)}
            >
                { short_money(bar.value) }
            </text>
        }
    });

    html! {
        <div ref={node} class="w-full">
            <svg width={format!("{:.0}", width)} height={format!("{:.0}", height)} class="overflow-visible">
                <g transform={format!("translate({},{})", MARGIN_LEFT, MARGIN_TOP)}>
                    <g class="grid" opacity="0.1">
                        { for layout.ticks.iter().map(|(y, _)| html! {
                            <line x1="0" x2={format!("{:.2}", w)} y1={format!("{:.2}", y)} y2={format!("{:.2}", y)} stroke="currentColor" />
                        }) }
                    </g>
                    <g class="x-axis" transform={format!("translate(0,{:.2})", h)}>
                        <line x1="0" x2={format!("{:.2}", w)} class="stroke-gray-300 dark:stroke-gray-600" />
                        { for layout.bars.iter().map(|bar| html! {
                            <g transform={format!("translate({:.2},0)", bar.x + bar.width / 2.0)}>
                                <line y2="6" class="stroke-gray-300 dark:stroke-gray-600" />
                                <text y="9" dx="-.8em" dy=".15em" transform="rotate(-45)" text-anchor="end" class="text-xs fill-gray-600 dark:fill-gray-400">
                                    { bar.label.clone() }
                                </text>
                            </g>
                        }) }
                    </g>
                    <g class="y-axis">
                        <line y1="0" y2={format!("{:.2}", h)} class="stroke-gray-300 dark:stroke-gray-600" />
                        { for layout.ticks.iter().map(|(y, label)| html! {
                            <g transform={format!("translate(0,{:.2})", y)}>
                                <line x2="-6" class="stroke-gray-300 dark:stroke-gray-600" />
                                <text x="-9" dy=".32em" text-anchor="end" class="text-xs fill-gray-600 dark:fill-gray-400">
                                    { label.clone() }
                                </text>
                            </g>
                        }) }
                    </g>
                    { for bars }
                    { for value_labels }
                </g>
            </svg>
            <Tooltip state={(*tooltip).clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ChartDatum> {
        vec![ChartDatum::new("Budget", 800.0), ChartDatum::new("Actual", 650.0)]
    }

    #[test]
    fn test_layout_dimensions() {
        let layout = bar_layout(&sample(), 480.0, 280.0, BLUE_SCHEME);
        assert_eq!(layout.inner_width, 380.0);
        assert_eq!(layout.inner_height, 180.0);
        assert_eq!(layout.bars.len(), 2);
        assert_eq!(layout.bars[0].color, "#3b82f6");
        assert_eq!(layout.bars[1].color, "#60a5fa");
    }

    #[test]
    fn test_tallest_bar_reaches_nice_max() {
        // 800 is already a nice bound, so the tallest bar fills the plot
        let layout = bar_layout(&sample(), 480.0, 280.0, BLUE_SCHEME);
        assert!((layout.bars[0].height - 180.0).abs() < 1e-9);
        assert!((layout.bars[1].height - 180.0 * 650.0 / 800.0).abs() < 1e-9);
        assert_eq!(layout.ticks.first().map(|t| t.1.as_str()), Some("$0"));
        assert_eq!(layout.ticks.last().map(|t| t.1.as_str()), Some("$800"));
    }

    #[test]
    fn test_all_zero_values_stay_on_baseline() {
        let data = vec![ChartDatum::new("A", 0.0), ChartDatum::new("B", 0.0)];
        let layout = bar_layout(&data, 480.0, 280.0, BLUE_SCHEME);
        assert!(layout.bars.iter().all(|b| b.height == 0.0 && b.y == 180.0));
    }

    #[test]
    fn test_narrow_container_never_goes_negative() {
        let layout = bar_layout(&sample(), 50.0, 280.0, BLUE_SCHEME);
        assert_eq!(layout.inner_width, 0.0);
        assert!(layout.bars.iter().all(|b| b.width >= 0.0));
    }

    #[test]
    fn test_enter_duration() {
        assert_eq!(enter_duration(1), 1200);
        assert_eq!(enter_duration(3), 1400);
        assert_eq!(enter_duration(0), 1200);
    }
}
