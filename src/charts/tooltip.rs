use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLine {
    pub text: String,
    pub class: &'static str,
}

/// Pointer position plus the lines shown under it.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipState {
    pub x: i32,
    pub y: i32,
    pub lines: Vec<TooltipLine>,
}

impl TooltipState {
    pub fn at(event: &MouseEvent, lines: Vec<TooltipLine>) -> Self {
        Self {
            x: event.client_x(),
            y: event.client_y(),
            lines,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    pub state: Option<TooltipState>,
}

#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    let Some(state) = &props.state else {
        return html! {};
    };
    let style = format!(
        "left: {}px; top: {}px; pointer-events: none; opacity: 0.9;",
        state.x + 10,
        state.y - 28
    );
    html! {
        <div class="fixed z-50 px-3 py-2 text-sm font-medium text-white bg-gray-900 rounded-lg shadow-sm dark:bg-gray-700" style={style}>
            { for state.lines.iter().map(|line| html! {
                <div class={line.class}>{ line.text.clone() }</div>
            }) }
        </div>
    }
}
