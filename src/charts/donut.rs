use yew::prelude::*;

use super::arc::{arc_path, centroid, ease_cubic_in_out, percentage, pie};
use super::hooks::{stagger_progress, use_enter_clock, use_fitted_width};
use super::scale::ordinal_colors;
use super::tooltip::{Tooltip, TooltipLine, TooltipState};
use super::{ChartDatum, CATEGORY_SCHEME};
use crate::format::{format_number, percent, short_money};

const RING_INSET: f64 = 20.0;
const INNER_RATIO: f64 = 0.65;
const HOVER_GROWTH: f64 = 10.0;
const SWEEP_MS: u32 = 800;
const LABEL_FADE_MS: u32 = 800;
const LABEL_MIN_PERCENT: f64 = 5.0;

/// Chart size for a container-constrained width: square-ish, never taller
/// than requested.
pub fn donut_size(fitted_width: f64, preferred_height: f64) -> (f64, f64) {
    (fitted_width, fitted_width.min(preferred_height))
}

pub fn radii(width: f64, height: f64) -> (f64, f64) {
    let outer = (width.min(height) / 2.0 - RING_INSET).max(0.0);
    (outer * INNER_RATIO, outer)
}

/// Whole-number slice label, hidden for slices of 5% or less.
pub fn slice_label(value: f64, total: f64) -> Option<String> {
    let pct = percentage(value, total).round();
    (pct > LABEL_MIN_PERCENT).then(|| format!("{}%", pct))
}

#[derive(Properties, PartialEq)]
pub struct DonutChartProps {
    pub data: Vec<ChartDatum>,
    #[prop_or(320.0)]
    pub width: f64,
    #[prop_or(240.0)]
    pub height: f64,
    #[prop_or(CATEGORY_SCHEME)]
    pub color_scheme: &'static [&'static str],
}

#[function_component(DonutChart)]
pub fn donut_chart(props: &DonutChartProps) -> Html {
    let node = use_node_ref();
    let fitted = use_fitted_width(node.clone(), props.width);
    let (width, height) = donut_size(fitted, props.height);
    let elapsed = use_enter_clock((props.data.clone(), width), SWEEP_MS + LABEL_FADE_MS);
    let hovered = use_state_eq(|| None::<usize>);
    let tooltip = use_state(|| None::<TooltipState>);

    if props.data.is_empty() {
        return html! { <div ref={node} class="w-full flex justify-center" /> };
    }

    let (inner, outer) = radii(width, height);
    let total: f64 = props.data.iter().map(|d| d.value).sum();
    let values: Vec<f64> = props.data.iter().map(|d| d.value).collect();
    let slices = pie(&values);
    let labels: Vec<&str> = props.data.iter().map(|d| d.label.as_str()).collect();
    let colors = ordinal_colors(&labels, props.color_scheme);
    let sweep = ease_cubic_in_out(stagger_progress(elapsed, 0, SWEEP_MS));
    let label_opacity = stagger_progress(elapsed, SWEEP_MS, LABEL_FADE_MS);

    let paths = slices.iter().zip(colors).map(|(slice, color)| {
        let i = slice.index;
        let datum = &props.data[i];
        let is_hovered = *hovered == Some(i);
        let shown = slice.at(sweep);
        let radius = if is_hovered { outer + HOVER_GROWTH } else { outer };
        let d = arc_path(inner, radius, shown.start_angle, shown.end_angle);

        let lines = vec![
            TooltipLine { text: datum.label.clone(), class: "font-semibold" },
            TooltipLine { text: format!("${}", format_number(datum.value)), class: "text-yellow-300" },
            TooltipLine { text: percent(percentage(datum.value, total), 1), class: "text-gray-300" },
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
            <g class="arc cursor-pointer">
                <path
                    d={d}
                    fill={color}
                    class="transition-all duration-300"
                    style={if is_hovered { "opacity: 1" } else { "opacity: 0.9" }}
                    onmouseenter={on_enter}
                    onmousemove={on_move}
                    onmouseleave={on_leave}
                />
            </g>
        }
    });

    let slice_labels = slices.iter().filter_map(|slice| {
        let text = slice_label(slice.value, total)?;
        let (x, y) = centroid(inner, outer, slice.start_angle, slice.end_angle);
        Some(html! {
            <text
                transform={format!("translate({:.2},{:.2})", x, y)}
                text-anchor="middle"
                dy=".35em"
                class="text-xs font-bold fill-white"
                style={format!("opacity: {:.3}; pointer-events: none", label_opacity)}
            >
                { text }
            </text>
        })
    });

    html! {
        <div ref={node} class="w-full flex justify-center">
            <svg width={format!("{:.0}", width)} height={format!("{:.0}", height)} class="overflow-visible">
                <g transform={format!("translate({:.2},{:.2})", width / 2.0, height / 2.0)}>
                    { for paths }
                    { for slice_labels }
                    <text text-anchor="middle" dy="-0.2em" class="text-xs font-medium fill-gray-500 dark:fill-gray-400">
                        {"Total"}
                    </text>
                    <text text-anchor="middle" dy="1em" class="text-lg font-bold fill-gray-700 dark:fill-gray-300">
                        { short_money(total) }
                    </text>
                </g>
            </svg>
            <Tooltip state={(*tooltip).clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_capped_by_height() {
        assert_eq!(donut_size(368.0, 300.0), (368.0, 300.0));
        assert_eq!(donut_size(200.0, 300.0), (200.0, 200.0));
    }

    #[test]
    fn test_radii() {
        let (inner, outer) = radii(320.0, 240.0);
        assert_eq!(outer, 100.0);
        assert_eq!(inner, 65.0);
        assert_eq!(radii(30.0, 30.0), (0.0, 0.0));
    }

    #[test]
    fn test_small_slices_have_no_label() {
        assert_eq!(slice_label(50.0, 100.0).as_deref(), Some("50%"));
        assert_eq!(slice_label(5.0, 100.0), None);
        assert_eq!(slice_label(5.6, 100.0).as_deref(), Some("6%"));
        assert_eq!(slice_label(1.0, 0.0), None);
    }
}
