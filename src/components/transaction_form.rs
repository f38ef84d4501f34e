use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api;
use crate::forms::{self, Field, FieldErrors, TransactionDraft, DESCRIPTION_LIMIT};
use crate::models::{Category, CategoryKind, NewCategory, Transaction};

const INPUT_CLASS: &str = "w-full px-3 py-2 bg-white dark:bg-gray-700 border rounded-lg text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-blue-500";

fn input_class(errors: &FieldErrors, field: Field) -> Classes {
    if errors.has(field) {
        classes!(INPUT_CLASS, "border-red-500")
    } else {
        classes!(INPUT_CLASS, "border-gray-300", "dark:border-gray-600")
    }
}

fn field_error(errors: &FieldErrors, field: Field) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="mt-1 text-sm text-red-600 dark:text-red-400">{ message.to_string() }</p> },
        None => html! {},
    }
}

/// Editing a field clears whatever error that field was showing.
fn edit(
    draft: &UseStateHandle<TransactionDraft>,
    errors: &UseStateHandle<FieldErrors>,
    field: Option<Field>,
    apply: fn(&mut TransactionDraft, String),
) -> Callback<String> {
    let draft = draft.clone();
    let errors = errors.clone();
    Callback::from(move |value: String| {
        let mut next = (*draft).clone();
        apply(&mut next, value);
        draft.set(next);
        if let Some(field) = field {
            if errors.has(field) {
                let mut remaining = (*errors).clone();
                remaining.clear(field);
                errors.set(remaining);
            }
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    #[prop_or_default]
    pub transaction: Option<Transaction>,
    pub on_saved: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let today = forms::today();
    let draft = {
        let transaction = props.transaction.clone();
        use_state(move || match &transaction {
            Some(tx) => TransactionDraft::from_transaction(tx),
            None => TransactionDraft::blank(today),
        })
    };
    let categories = use_state(Vec::<Category>::new);
    let errors = use_state(FieldErrors::default);
    let saving = use_state(|| false);
    let adding_category = use_state(|| false);
    let new_category_name = use_state(String::new);
    let new_category_kind = use_state(|| CategoryKind::Expense);

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

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let on_saved = props.on_saved.clone();
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

            let id = draft.id;
            let draft = draft.clone();
            let errors = errors.clone();
            let saving = saving.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let result = match id {
                    Some(id) => api::update_transaction(id, &payload).await,
                    None => api::create_transaction(&payload).await,
                };
                saving.set(false);
                match result {
                    Ok(saved) => {
                        log::info!("saved transaction {}", saved.id);
                        if id.is_none() {
                            draft.set(TransactionDraft::blank(forms::today()));
                        }
                        on_saved.emit(());
                    }
                    Err(err) => {
                        log::error!("could not save transaction: {err}");
                        errors.set(FieldErrors::single(Field::General, "An error occurred while saving"));
                    }
                }
            });
        })
    };

    let on_add_category = {
        let categories = categories.clone();
        let draft = draft.clone();
        let errors = errors.clone();
        let adding_category = adding_category.clone();
        let new_category_name = new_category_name.clone();
        let new_category_kind = new_category_kind.clone();
        Callback::from(move |_: MouseEvent| {
            let name = new_category_name.trim().to_string();
            if name.is_empty() {
                return;
            }
            let body = NewCategory { name, kind: *new_category_kind };
            let categories = categories.clone();
            let draft = draft.clone();
            let errors = errors.clone();
            let adding_category = adding_category.clone();
            let new_category_name = new_category_name.clone();
            spawn_local(async move {
                match api::create_category(&body).await {
                    Ok(created) => {
                        let mut next = (*draft).clone();
                        next.category = created.id.to_string();
                        draft.set(next);
                        let mut list = (*categories).clone();
                        list.push(created);
                        categories.set(list);
                        new_category_name.set(String::new());
                        adding_category.set(false);
                        if errors.has(Field::Category) {
                            let mut remaining = (*errors).clone();
                            remaining.clear(Field::Category);
                            errors.set(remaining);
                        }
                    }
                    Err(err) => {
                        log::error!("could not create category: {err}");
                        errors.set(FieldErrors::single(Field::Category, "Could not create category"));
                    }
                }
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_category = edit(&draft, &errors, Some(Field::Category), |d, v| d.category = v)
        .reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());
    let on_amount = edit(&draft, &errors, Some(Field::Amount), |d, v| d.amount = v)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_date = edit(&draft, &errors, Some(Field::Date), |d, v| d.date = v)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_description = edit(&draft, &errors, None, |d, v| {
        d.description = v.chars().take(DESCRIPTION_LIMIT).collect()
    })
    .reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value());

    let is_editing = draft.is_editing();
    let selected = draft.selected_category(&categories).cloned();
    let preview = if is_editing {
        None
    } else {
        selected.as_ref().zip(draft.signed_amount(&categories))
    };

    html! {
        <form class="space-y-4" onsubmit={on_submit}>
            <div>
                <div class="flex items-center justify-between mb-1">
                    <label class="text-sm font-medium text-gray-700 dark:text-gray-300">{"Category"}</label>
                    <button
                        type="button"
                        class="text-xs font-semibold text-blue-600 dark:text-blue-400"
                        onclick={{
                            let adding_category = adding_category.clone();
                            Callback::from(move |_| adding_category.set(!*adding_category))
                        }}
                    >
                        { if *adding_category { "Cancel" } else { "New category" } }
                    </button>
                </div>
                <select class={input_class(&errors, Field::Category)} onchange={on_category}>
                    <option value="" selected={draft.category.is_empty()}>{"Select a category"}</option>
                    { for categories.iter().map(|category| {
                        let value = category.id.to_string();
                        let selected = value == draft.category;
                        html! {
                            <option value={value} selected={selected}>
                                { format!("{} • {}", category.name, category.kind.as_str()) }
                            </option>
                        }
                    }) }
                </select>
                { field_error(&errors, Field::Category) }
                if *adding_category {
                    <div class="mt-2 flex gap-2">
                        <input
                            type="text"
                            placeholder="Category name"
                            class={INPUT_CLASS}
                            value={(*new_category_name).clone()}
                            oninput={{
                                let new_category_name = new_category_name.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    new_category_name.set(input.value());
                                })
                            }}
                        />
                        <select
                            class="px-3 py-2 bg-white dark:bg-gray-700 border border-gray-300 dark:border-gray-600 rounded-lg text-gray-900 dark:text-white"
                            onchange={{
                                let new_category_kind = new_category_kind.clone();
                                Callback::from(move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    if let Some(kind) = CategoryKind::parse(&select.value()) {
                                        new_category_kind.set(kind);
                                    }
                                })
                            }}
                        >
                            { for CategoryKind::ALL.iter().map(|kind| html! {
                                <option value={kind.as_str()} selected={*kind == *new_category_kind}>{ kind.label() }</option>
                            }) }
                        </select>
                        <button type="button" class="px-3 py-2 rounded-lg bg-blue-600 text-white text-sm font-semibold hover:bg-blue-700" onclick={on_add_category}>
                            {"Add"}
                        </button>
                    </div>
                }
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{"Amount"}</label>
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="0.00"
                    class={input_class(&errors, Field::Amount)}
                    value={draft.amount.clone()}
                    oninput={on_amount}
                />
                { field_error(&errors, Field::Amount) }
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{"Date"}</label>
                <input
                    type="date"
                    max={today.format("%Y-%m-%d").to_string()}
                    class={input_class(&errors, Field::Date)}
                    value={draft.date.clone()}
                    oninput={on_date}
                />
                { field_error(&errors, Field::Date) }
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">{"Description"}</label>
                <textarea
                    rows="3"
                    maxlength={DESCRIPTION_LIMIT.to_string()}
                    placeholder="Optional note"
                    class={classes!(INPUT_CLASS, "border-gray-300", "dark:border-gray-600")}
                    value={draft.description.clone()}
                    oninput={on_description}
                />
                <p class="mt-1 text-xs text-right text-gray-500 dark:text-gray-400">
                    { format!("{}/{}", draft.description.chars().count(), DESCRIPTION_LIMIT) }
                </p>
            </div>

            if let Some((category, amount)) = preview {
                <div class="p-3 rounded-lg bg-gray-50 dark:bg-gray-700/50 flex items-center justify-between">
                    <span class="text-sm text-gray-600 dark:text-gray-300">{ category.name.clone() }</span>
                    <span class={match category.kind {
                        CategoryKind::Income => "font-semibold text-green-600 dark:text-green-400",
                        CategoryKind::Expense => "font-semibold text-red-600 dark:text-red-400",
                    }}>
                        { amount }
                    </span>
                </div>
            }

            { field_error(&errors, Field::General) }

            <div class="flex justify-end gap-3 pt-2">
                <button type="button" class="px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700" onclick={on_cancel}>
                    {"Cancel"}
                </button>
                <button
                    type="submit"
                    class="px-4 py-2 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-700 disabled:opacity-50"
                    disabled={*saving || !draft.is_submittable()}
                >
                    { if *saving { "Saving..." } else if is_editing { "Update" } else { "Save" } }
                </button>
            </div>
        </form>
    }
}
