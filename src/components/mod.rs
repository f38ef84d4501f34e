pub mod icons;
mod layout;
mod pagination;
mod stat_card;
mod transaction_form;

pub use layout::Layout;
pub use pagination::Pagination;
pub use stat_card::{StatCard, StatIcon};
pub use transaction_form::TransactionForm;

use yew::prelude::*;

pub fn page_shell(actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto space-y-6">
            <div class="flex items-center justify-end gap-3">
                { actions }
            </div>
            { children }
        </div>
    }
}

pub fn spinner() -> Html {
    html! {
        <div class="flex items-center justify-center py-16">
            <div class="h-10 w-10 rounded-full border-4 border-blue-200 border-t-blue-600 animate-spin"></div>
        </div>
    }
}

pub fn card(title: &'static str, children: Html) -> Html {
    html! {
        <div class="bg-white dark:bg-gray-800 p-6 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">{ title }</h2>
            { children }
        </div>
    }
}
