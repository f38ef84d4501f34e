use yew::prelude::*;

use super::icons::{icon_trending_down, icon_trending_up, icon_wallet};

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Income,
    Expense,
    Balance,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: String,
    pub icon: StatIcon,
    #[prop_or_default]
    pub caption: Option<String>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let (tint, value_class) = match props.icon {
        StatIcon::Income => ("bg-green-100 text-green-600 dark:bg-green-900/40", "text-green-600 dark:text-green-400"),
        StatIcon::Expense => ("bg-red-100 text-red-600 dark:bg-red-900/40", "text-red-600 dark:text-red-400"),
        StatIcon::Balance => ("bg-blue-100 text-blue-600 dark:bg-blue-900/40", "text-gray-900 dark:text-white"),
    };

    html! {
        <div class="bg-white dark:bg-gray-800 p-6 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 flex justify-between items-start">
            <div>
                <p class="text-gray-500 dark:text-gray-400 text-xs font-bold mb-1 tracking-widest uppercase">{ props.title }</p>
                <h3 class={classes!("text-2xl", "font-bold", "tracking-tight", value_class)}>{ props.value.clone() }</h3>
                if let Some(caption) = &props.caption {
                    <p class="text-xs text-gray-500 dark:text-gray-400 mt-1">{ caption.clone() }</p>
                }
            </div>
            <div class={classes!("p-3", "rounded-lg", tint)}>
                {
                    match props.icon {
                        StatIcon::Income => icon_trending_up(),
                        StatIcon::Expense => icon_trending_down(),
                        StatIcon::Balance => icon_wallet(),
                    }
                }
            </div>
        </div>
    }
}
