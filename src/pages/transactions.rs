use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api;
use crate::components::icons::{icon_filter, icon_pencil, icon_plus, icon_trash};
use crate::components::{page_shell, spinner, Pagination, TransactionForm};
use crate::config::config;
use crate::format::{format_date, format_money};
use crate::ledger::{FilterField, LedgerAction, LedgerState};
use crate::models::{Category, CategoryKind, Listing, Transaction};

const DELETE_PROMPT: &str = "Are you sure you want to delete this transaction?";

fn signed_amount(tx: &Transaction) -> String {
    let sign = tx.kind().map(|kind| kind.sign()).unwrap_or("");
    format!("{}{}", sign, format_money(tx.amount))
}

fn amount_class(tx: &Transaction) -> &'static str {
    match tx.kind() {
        Some(CategoryKind::Income) => "px-4 py-3 text-right font-semibold text-green-600 dark:text-green-400",
        Some(CategoryKind::Expense) => "px-4 py-3 text-right font-semibold text-red-600 dark:text-red-400",
        None => "px-4 py-3 text-right font-semibold text-gray-900 dark:text-white",
    }
}

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(DELETE_PROMPT).ok())
        .unwrap_or(false)
}

const FILTER_INPUT: &str = "w-full px-3 py-2 bg-white dark:bg-gray-700 border border-gray-300 dark:border-gray-600 rounded-lg text-sm text-gray-900 dark:text-white";

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let ledger = use_reducer(LedgerState::default);
    let listing = use_state(Listing::<Transaction>::default);
    let loading = use_state(|| true);
    let categories = use_state(Vec::<Category>::new);

    {
        let categories = categories.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::list_categories().await {
                        Ok(list) => categories.set(list),
                        Err(err) => log::error!("could not load categories: {err}"),
                    }
                });
                || ()
            },
            (),
        );
    }

    {
        let listing = listing.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |(query, _)| {
                let query = query.clone();
                loading.set(true);
                spawn_local(async move {
                    match api::list_transactions(&query).await {
                        Ok(page) => listing.set(page),
                        Err(err) => log::error!("could not load transactions: {err}"),
                    }
                    loading.set(false);
                });
                || ()
            },
            (ledger.query(), ledger.reload),
        );
    }

    let set_filter = |field: FilterField| {
        let ledger = ledger.dispatcher();
        Callback::from(move |value: String| ledger.dispatch(LedgerAction::SetFilter(field, value)))
    };
    let text_filter = |field: FilterField| {
        set_filter(field).reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())
    };
    let select_filter = |field: FilterField| {
        set_filter(field).reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value())
    };

    let on_add = {
        let ledger = ledger.dispatcher();
        Callback::from(move |_: MouseEvent| ledger.dispatch(LedgerAction::OpenCreate))
    };
    let on_toggle_filters = {
        let ledger = ledger.dispatcher();
        Callback::from(move |_: MouseEvent| ledger.dispatch(LedgerAction::ToggleFilters))
    };
    let on_reset = {
        let ledger = ledger.dispatcher();
        Callback::from(move |_: MouseEvent| ledger.dispatch(LedgerAction::ResetFilters))
    };
    let on_page = {
        let ledger = ledger.dispatcher();
        Callback::from(move |page: u32| ledger.dispatch(LedgerAction::SetPage(page)))
    };
    let on_saved = {
        let ledger = ledger.dispatcher();
        Callback::from(move |_: ()| ledger.dispatch(LedgerAction::Saved))
    };
    let on_cancel = {
        let ledger = ledger.dispatcher();
        Callback::from(move |_: ()| ledger.dispatch(LedgerAction::CloseModal))
    };
    let on_delete = {
        let ledger = ledger.dispatcher();
        Callback::from(move |id: i64| {
            if !confirm_delete() {
                return;
            }
            let ledger = ledger.clone();
            spawn_local(async move {
                match api::delete_transaction(id).await {
                    Ok(()) => {
                        log::info!("deleted transaction {id}");
                        ledger.dispatch(LedgerAction::Deleted);
                    }
                    Err(err) => log::error!("could not delete transaction {id}: {err}"),
                }
            });
        })
    };

    let filters = &ledger.filters;
    let actions = html! {
        <>
            <button type="button" class="flex items-center gap-2 px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700" onclick={on_toggle_filters}>
                { icon_filter() }
                <span>{ if ledger.show_filters { "Hide Filters" } else { "Filters" } }</span>
            </button>
            <button type="button" class="flex items-center gap-2 px-4 py-2 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-700" onclick={on_add}>
                { icon_plus() }
                <span>{"Add Transaction"}</span>
            </button>
        </>
    };

    let filter_panel = if ledger.show_filters {
        html! {
            <div class="bg-white dark:bg-gray-800 p-4 rounded-xl border border-gray-200 dark:border-gray-700">
                <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-6 gap-4">
                    <div>
                        <label class="block text-xs font-medium text-gray-500 dark:text-gray-400 mb-1">{"Type"}</label>
                        <select class={FILTER_INPUT} onchange={select_filter(FilterField::Kind)}>
                            <option value="" selected={filters.kind.is_empty()}>{"All"}</option>
                            { for CategoryKind::ALL.iter().map(|kind| html! {
                                <option value={kind.as_str()} selected={filters.kind == kind.as_str()}>{ kind.label() }</option>
                            }) }
                        </select>
                    </div>
                    <div>
                        <label class="block text-xs font-medium text-gray-500 dark:text-gray-400 mb-1">{"Category"}</label>
                        <select class={FILTER_INPUT} onchange={select_filter(FilterField::Category)}>
                            <option value="" selected={filters.category.is_empty()}>{"All"}</option>
                            { for categories.iter().map(|category| {
                                let value = category.id.to_string();
                                let selected = filters.category == value;
                                html! { <option value={value} selected={selected}>{ category.name.clone() }</option> }
                            }) }
                        </select>
                    </div>
                    <div>
                        <label class="block text-xs font-medium text-gray-500 dark:text-gray-400 mb-1">{"Min amount"}</label>
                        <input type="number" step="0.01" class={FILTER_INPUT} value={filters.get(FilterField::MinAmount).to_string()} oninput={text_filter(FilterField::MinAmount)} />
                    </div>
                    <div>
                        <label class="block text-xs font-medium text-gray-500 dark:text-gray-400 mb-1">{"Max amount"}</label>
                        <input type="number" step="0.01" class={FILTER_INPUT} value={filters.get(FilterField::MaxAmount).to_string()} oninput={text_filter(FilterField::MaxAmount)} />
                    </div>
                    <div>
                        <label class="block text-xs font-medium text-gray-500 dark:text-gray-400 mb-1">{"From"}</label>
                        <input type="date" class={FILTER_INPUT} value={filters.get(FilterField::StartDate).to_string()} oninput={text_filter(FilterField::StartDate)} />
                    </div>
                    <div>
                        <label class="block text-xs font-medium text-gray-500 dark:text-gray-400 mb-1">{"To"}</label>
                        <input type="date" class={FILTER_INPUT} value={filters.get(FilterField::EndDate).to_string()} oninput={text_filter(FilterField::EndDate)} />
                    </div>
                </div>
                if ledger.has_active_filters() {
                    <div class="mt-4 flex justify-end">
                        <button type="button" class="text-sm font-semibold text-blue-600 dark:text-blue-400" onclick={on_reset}>
                            {"Reset filters"}
                        </button>
                    </div>
                }
            </div>
        }
    } else {
        html! {}
    };

    let rows = match &*listing {
        Listing::Page { results, .. } => results.clone(),
        Listing::Plain(items) => items.clone(),
    };

    let table = if *loading && rows.is_empty() {
        spinner()
    } else if rows.is_empty() {
        html! {
            <div class="p-10 text-center text-gray-500 dark:text-gray-400">
                { if ledger.has_active_filters() { "No transactions match these filters." } else { "No transactions yet. Add your first one." } }
            </div>
        }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-700/50">
                        <tr class="text-left text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                            <th class="px-4 py-3">{"Date"}</th>
                            <th class="px-4 py-3">{"Category"}</th>
                            <th class="px-4 py-3">{"Type"}</th>
                            <th class="px-4 py-3 text-right">{"Amount"}</th>
                            <th class="px-4 py-3">{"Description"}</th>
                            <th class="px-4 py-3 text-right">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700 text-sm">
                        { for rows.iter().map(|tx| {
                            let on_edit = {
                                let ledger = ledger.dispatcher();
                                let tx = tx.clone();
                                Callback::from(move |_: MouseEvent| ledger.dispatch(LedgerAction::OpenEdit(tx.clone())))
                            };
                            let on_delete = {
                                let on_delete = on_delete.clone();
                                let id = tx.id;
                                Callback::from(move |_: MouseEvent| on_delete.emit(id))
                            };
                            html! {
                                <tr key={tx.id.to_string()} class="hover:bg-gray-50 dark:hover:bg-gray-700/50">
                                    <td class="px-4 py-3 whitespace-nowrap text-gray-700 dark:text-gray-300">{ format_date(tx.date) }</td>
                                    <td class="px-4 py-3 text-gray-900 dark:text-white">{ tx.category_name().to_string() }</td>
                                    <td class="px-4 py-3 text-gray-500 dark:text-gray-400">{ tx.kind().map(|kind| kind.label()).unwrap_or("") }</td>
                                    <td class={amount_class(tx)}>{ signed_amount(tx) }</td>
                                    <td class="px-4 py-3 text-gray-500 dark:text-gray-400 truncate max-w-xs">{ tx.description.clone().unwrap_or_default() }</td>
                                    <td class="px-4 py-3">
                                        <div class="flex justify-end gap-2">
                                            <button type="button" class="p-2 rounded-lg text-blue-600 hover:bg-blue-50 dark:hover:bg-blue-900/30" aria-label="Edit" onclick={on_edit}>
                                                { icon_pencil() }
                                            </button>
                                            <button type="button" class="p-2 rounded-lg text-red-600 hover:bg-red-50 dark:hover:bg-red-900/30" aria-label="Delete" onclick={on_delete}>
                                                { icon_trash() }
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    let modal = if ledger.modal.is_open() {
        let editing = ledger.modal.editing().cloned();
        let title = if editing.is_some() { "Edit Transaction" } else { "Add Transaction" };
        html! {
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4">
                <div class="w-full max-w-lg bg-white dark:bg-gray-800 rounded-xl shadow-xl p-6">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">{ title }</h2>
                    <TransactionForm transaction={editing} on_saved={on_saved} on_cancel={on_cancel} />
                </div>
            </div>
        }
    } else {
        html! {}
    };

    page_shell(
        actions,
        html! {
            <>
                { filter_panel }
                <div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 overflow-hidden">
                    { table }
                    <Pagination page={ledger.page} count={listing.count()} page_size={config().page_size} on_change={on_page} />
                </div>
                { modal }
            </>
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn tx(kind: Option<CategoryKind>) -> Transaction {
        Transaction {
            id: 1,
            category: 5,
            category_detail: kind.map(|kind| Category {
                id: 5,
                name: "Groceries".to_string(),
                kind,
            }),
            amount: Decimal::new(123450, 2),
            date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            description: None,
        }
    }

    #[test]
    fn test_amount_sign_follows_category_type() {
        assert_eq!(signed_amount(&tx(Some(CategoryKind::Expense))), "-$1,234.50");
        assert_eq!(signed_amount(&tx(Some(CategoryKind::Income))), "+$1,234.50");
        assert_eq!(signed_amount(&tx(None)), "$1,234.50");
    }
}
