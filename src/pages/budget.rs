use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api;
use crate::charts::BarChart;
use crate::components::{card, page_shell, spinner};
use crate::forms::{self, BudgetDraft, Field, FieldErrors};
use crate::format::{format_money, month_name};
use crate::models::{Budget, CurrentBudget};

const INPUT_CLASS: &str = "w-full px-3 py-2 bg-white dark:bg-gray-700 border border-gray-300 dark:border-gray-600 rounded-lg text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-blue-500";

fn error_line(errors: &FieldErrors, field: Field) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="mt-1 text-sm text-red-600 dark:text-red-400">{ message.to_string() }</p> },
        None => html! {},
    }
}

#[function_component(BudgetPage)]
pub fn budget_page() -> Html {
    let budgets = use_state(Vec::<Budget>::new);
    let current = use_state(CurrentBudget::default);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);
    let draft = use_state(|| BudgetDraft::for_month(forms::today()));
    let errors = use_state(FieldErrors::default);
    let saving = use_state(|| false);

    {
        let budgets = budgets.clone();
        let current = current.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::list_budgets().await {
                        Ok(list) => budgets.set(list),
                        Err(err) => log::error!("could not load budgets: {err}"),
                    }
                    match api::current_budget().await {
                        Ok(data) => current.set(data),
                        Err(err) => log::error!("could not load current budget: {err}"),
                    }
                    loading.set(false);
                });
                || ()
            },
            *reload,
        );
    }

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = match draft.validate() {
                Ok(payload) => payload,
                Err(found) => {
                    errors.set(found);
                    return;
                }
            };
            errors.set(FieldErrors::default());
            saving.set(true);

            let draft = draft.clone();
            let errors = errors.clone();
            let saving = saving.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api::create_budget(&payload).await {
                    Ok(budget) => {
                        log::info!("set budget for {}-{:02}", budget.year, budget.month);
                        let mut next = (*draft).clone();
                        next.amount.clear();
                        draft.set(next);
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        log::error!("could not save budget: {err}");
                        errors.set(FieldErrors::single(Field::General, "An error occurred while saving"));
                    }
                }
                saving.set(false);
            });
        })
    };

    let update = |apply: fn(&mut BudgetDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };
    let on_year = update(|d, v| d.year = v)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_month = update(|d, v| d.month = v)
        .reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());
    let on_amount = update(|d, v| d.amount = v)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());

    let form = html! {
        <form class="grid grid-cols-1 md:grid-cols-4 gap-4 items-start" onsubmit={on_submit}>
            <div>
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{"Year"}</label>
                <input type="number" min="2000" class={INPUT_CLASS} value={draft.year.clone()} oninput={on_year} />
                { error_line(&errors, Field::Year) }
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{"Month"}</label>
                <select class={INPUT_CLASS} onchange={on_month}>
                    { for (1..=12u32).map(|month| html! {
                        <option value={month.to_string()} selected={draft.month == month.to_string()}>{ month_name(month) }</option>
                    }) }
                </select>
                { error_line(&errors, Field::Month) }
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{"Amount"}</label>
                <input type="number" step="0.01" min="0" placeholder="0.00" class={INPUT_CLASS} value={draft.amount.clone()} oninput={on_amount} />
                { error_line(&errors, Field::Amount) }
            </div>
            <div class="md:pt-6">
                <button type="submit" class="w-full px-4 py-2 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-700 disabled:opacity-50" disabled={*saving}>
                    { if *saving { "Saving..." } else { "Set Budget" } }
                </button>
                { error_line(&errors, Field::General) }
            </div>
        </form>
    };

    let chart_data = current.chart_data();
    let overview = if chart_data.is_empty() {
        html! { <p class="text-sm text-gray-500 dark:text-gray-400 py-8 text-center">{"No budget set for current month"}</p> }
    } else {
        html! { <BarChart data={chart_data} /> }
    };

    let table = if *loading {
        spinner()
    } else if budgets.is_empty() {
        html! { <p class="text-sm text-gray-500 dark:text-gray-400 py-6 text-center">{"No budgets yet."}</p> }
    } else {
        html! {
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead>
                    <tr class="text-left text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                        <th class="px-4 py-3">{"Year"}</th>
                        <th class="px-4 py-3">{"Month"}</th>
                        <th class="px-4 py-3 text-right">{"Amount"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700 text-sm">
                    { for budgets.iter().map(|budget| html! {
                        <tr key={budget.id.to_string()}>
                            <td class="px-4 py-3 text-gray-700 dark:text-gray-300">{ budget.year }</td>
                            <td class="px-4 py-3 text-gray-700 dark:text-gray-300">{ month_name(budget.month) }</td>
                            <td class="px-4 py-3 text-right font-semibold text-gray-900 dark:text-white">{ format_money(budget.amount) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        }
    };

    page_shell(
        html! {},
        html! {
            <>
                { card("Set Monthly Budget", form) }
                { card("Monthly Overview", overview) }
                { card("All Budgets", table) }
            </>
        },
    )
}
