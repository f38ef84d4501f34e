use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::charts::{BarChart, ChartDatum, DonutChart, EXPENSE_SCHEME, INCOME_SCHEME, TREND_SCHEME};
use crate::components::{card, page_shell, spinner, StatCard, StatIcon};
use crate::format::{format_money, format_number, percent};
use crate::models::{CategoryKind, Summary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Period {
    Week,
    Month,
    Year,
}

impl Period {
    const ALL: [Period; 3] = [Period::Week, Period::Month, Period::Year];

    fn label(&self) -> &'static str {
        match self {
            Period::Week => "Week",
            Period::Month => "Month",
            Period::Year => "Year",
        }
    }
}

const DONUT_SIZE: (f64, f64) = (400.0, 300.0);
const SPENDING_CHART_SIZE: (f64, f64) = (1200.0, 320.0);
const SPENDING_SCHEME: &[&str] = TREND_SCHEME;

/// Expense categories when there are any, otherwise income ones.
fn spending_chart_data(summary: &Summary) -> Vec<ChartDatum> {
    let expenses = summary.breakdown(CategoryKind::Expense);
    if expenses.is_empty() {
        summary.breakdown(CategoryKind::Income)
    } else {
        expenses
    }
}

fn donut_card(title: &'static str, data: Vec<ChartDatum>, scheme: &'static [&'static str]) -> Html {
    card(
        title,
        if data.is_empty() {
            html! { <p class="text-sm text-gray-500 dark:text-gray-400 py-8 text-center">{"No data for this period"}</p> }
        } else {
            html! { <DonutChart data={data} width={DONUT_SIZE.0} height={DONUT_SIZE.1} color_scheme={scheme} /> }
        },
    )
}

/// Quick statistics, all rounded to whole numbers.
fn quick_stats(summary: &Summary) -> [(&'static str, String); 4] {
    let daily = |total| format!("${}", format_number(Summary::daily_average(total).round()));
    [
        ("Avg. daily income", daily(summary.total_income)),
        ("Avg. daily expense", daily(summary.total_expense)),
        ("Savings rate", percent(summary.savings_rate(), 0)),
        ("Categories", summary.by_category.len().to_string()),
    ]
}

fn quick_stat(label: &'static str, value: String) -> Html {
    html! {
        <div class="p-4 rounded-lg bg-gray-50 dark:bg-gray-700/50">
            <p class="text-xs text-gray-500 dark:text-gray-400">{ label }</p>
            <p class="text-lg font-semibold text-gray-900 dark:text-white">{ value }</p>
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let summary = use_state(|| None::<Summary>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let period = use_state(|| Period::Month);
    let attempt = use_state(|| 0u32);

    {
        let summary = summary.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |(period, _)| {
                log::debug!("loading summary for {}", period.label());
                loading.set(true);
                error.set(None);
                spawn_local(async move {
                    match api::get_summary().await {
                        Ok(data) => summary.set(Some(data)),
                        Err(err) => {
                            log::error!("could not load summary: {err}");
                            let message = match err.status() {
                                Some(401) => "Your session has expired. Sign in again to see your data.",
                                _ => "Failed to load dashboard data",
                            };
                            error.set(Some(message.to_string()));
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
            (*period, *attempt),
        );
    }

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_| attempt.set(*attempt + 1))
    };

    let period_toggle = html! {
        <div class="inline-flex rounded-lg border border-gray-300 dark:border-gray-600 overflow-hidden">
            { for Period::ALL.iter().map(|option| {
                let class = if *option == *period {
                    "px-4 py-2 text-sm font-medium bg-blue-600 text-white"
                } else {
                    "px-4 py-2 text-sm font-medium bg-white dark:bg-gray-800 text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700"
                };
                let period = period.clone();
                let option = *option;
                html! {
                    <button type="button" class={class} onclick={Callback::from(move |_| period.set(option))}>
                        { option.label() }
                    </button>
                }
            }) }
        </div>
    };

    let body = if *loading && summary.is_none() {
        spinner()
    } else if let Some(message) = &*error {
        html! {
            <div class="p-6 rounded-xl border border-red-200 bg-red-50 dark:bg-red-900/20 dark:border-red-800 text-center">
                <p class="text-red-700 dark:text-red-300 mb-4">{ message.clone() }</p>
                <button type="button" class="px-4 py-2 rounded-lg bg-red-600 text-white font-semibold hover:bg-red-700" onclick={on_retry}>
                    {"Retry"}
                </button>
            </div>
        }
    } else if let Some(data) = &*summary {
        let income = data.breakdown(CategoryKind::Income);
        let expenses = data.breakdown(CategoryKind::Expense);
        let balance_share = if data.total_income.is_zero() {
            None
        } else {
            Some(format!("{} of income", percent(data.savings_rate(), 1)))
        };

        html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <StatCard title="Total Income" value={format_money(data.total_income)} icon={StatIcon::Income} />
                    <StatCard title="Total Expenses" value={format_money(data.total_expense)} icon={StatIcon::Expense} />
                    <StatCard title="Balance" value={format_money(data.balance)} icon={StatIcon::Balance} caption={balance_share} />
                </div>

                if data.by_category.is_empty() {
                    <div class="p-10 rounded-xl border border-dashed border-gray-300 dark:border-gray-600 text-center text-gray-500 dark:text-gray-400">
                        {"No transactions yet. Add some to see your breakdown."}
                    </div>
                } else {
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        { donut_card("Income by Category", income, INCOME_SCHEME) }
                        { donut_card("Expenses by Category", expenses, EXPENSE_SCHEME) }
                    </div>
                    { card("Category Spending", html! {
                        <BarChart
                            data={spending_chart_data(data)}
                            width={SPENDING_CHART_SIZE.0}
                            height={SPENDING_CHART_SIZE.1}
                            color_scheme={SPENDING_SCHEME}
                        />
                    }) }
                }

                { card("Quick Statistics", html! {
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        { for quick_stats(data).into_iter().map(|(label, value)| quick_stat(label, value)) }
                    </div>
                }) }
            </>
        }
    } else {
        html! {}
    };

    page_shell(period_toggle, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryTotal;
    use rust_decimal::Decimal;

    fn total(name: &str, kind: CategoryKind, amount: i64) -> CategoryTotal {
        CategoryTotal {
            name: name.to_string(),
            kind,
            total: Decimal::from(amount),
        }
    }

    #[test]
    fn test_spending_chart_prefers_expenses() {
        let summary = Summary {
            by_category: vec![
                total("Salary", CategoryKind::Income, 3000),
                total("Rent", CategoryKind::Expense, 1200),
            ],
            ..Default::default()
        };
        assert_eq!(spending_chart_data(&summary), vec![ChartDatum::new("Rent", 1200.0)]);
    }

    #[test]
    fn test_chart_sizes() {
        assert_eq!(DONUT_SIZE, (400.0, 300.0));
        assert_eq!(SPENDING_CHART_SIZE, (1200.0, 320.0));
        assert_eq!(SPENDING_SCHEME[0], "#8b5cf6");
    }

    #[test]
    fn test_quick_stats_are_whole_numbers() {
        let summary = Summary {
            total_income: Decimal::new(100000, 2),
            total_expense: Decimal::new(25000, 2),
            balance: Decimal::new(75000, 2),
            by_category: vec![total("Rent", CategoryKind::Expense, 250)],
        };
        let stats = quick_stats(&summary);
        assert_eq!(stats[0], ("Avg. daily income", "$33".to_string()));
        assert_eq!(stats[1], ("Avg. daily expense", "$8".to_string()));
        assert_eq!(stats[2], ("Savings rate", "75%".to_string()));
        assert_eq!(stats[3], ("Categories", "1".to_string()));
    }

    #[test]
    fn test_spending_chart_falls_back_to_income() {
        let summary = Summary {
            by_category: vec![total("Salary", CategoryKind::Income, 3000)],
            ..Default::default()
        };
        assert_eq!(spending_chart_data(&summary), vec![ChartDatum::new("Salary", 3000.0)]);
        assert!(spending_chart_data(&Summary::default()).is_empty());
    }
}
