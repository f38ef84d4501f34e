use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::charts::ChartDatum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 2] = [CategoryKind::Income, CategoryKind::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Income => "income",
            CategoryKind::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryKind::Income => "Income",
            CategoryKind::Expense => "Expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(CategoryKind::Income),
            "expense" => Some(CategoryKind::Expense),
            _ => None,
        }
    }

    pub fn sign(&self) -> &'static str {
        match self {
            CategoryKind::Income => "+",
            CategoryKind::Expense => "-",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub category: i64,
    #[serde(default)]
    pub category_detail: Option<Category>,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

impl Transaction {
    pub fn kind(&self) -> Option<CategoryKind> {
        self.category_detail.as_ref().map(|c| c.kind)
    }

    pub fn category_name(&self) -> &str {
        self.category_detail
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("")
    }
}

/// Body for create and update calls.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransactionPayload {
    pub category: i64,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub year: i32,
    pub month: u32,
    pub amount: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetPayload {
    pub year: i32,
    pub month: u32,
    pub amount: Decimal,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CurrentBudget {
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub actual_expense: Decimal,
}

impl CurrentBudget {
    /// Budget-vs-actual bars, empty when no budget is set for the month.
    pub fn chart_data(&self) -> Vec<ChartDatum> {
        match &self.budget {
            Some(budget) => vec![
                ChartDatum::new("Budget", to_f64(budget.amount)),
                ChartDatum::new("Actual", to_f64(self.actual_expense)),
            ],
            None => Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryTotal {
    #[serde(rename = "category__name")]
    pub name: String,
    #[serde(rename = "category__type")]
    pub kind: CategoryKind,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total: Decimal,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Summary {
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_income: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_expense: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub balance: Decimal,
    #[serde(default)]
    pub by_category: Vec<CategoryTotal>,
}

impl Summary {
    pub fn breakdown(&self, kind: CategoryKind) -> Vec<ChartDatum> {
        self.by_category
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| ChartDatum::new(&c.name, to_f64(c.total)))
            .collect()
    }

    /// Balance as a percentage of income; zero when there is no income.
    pub fn savings_rate(&self) -> f64 {
        let income = to_f64(self.total_income);
        if income > 0.0 {
            to_f64(self.balance) / income * 100.0
        } else {
            0.0
        }
    }

    pub fn daily_average(total: Decimal) -> f64 {
        to_f64(total) / 30.0
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// List endpoints answer either with a bare array or a paginated envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged, bound(deserialize = "T: Deserialize<'de>"))]
pub enum Listing<T> {
    Page {
        #[serde(default)]
        count: u64,
        #[serde(default)]
        results: Vec<T>,
    },
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    pub fn count(&self) -> u64 {
        match self {
            Listing::Page { count, .. } => *count,
            Listing::Plain(items) => items.len() as u64,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Page { results, .. } => results,
            Listing::Plain(items) => items,
        }
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Listing::Page {
            count: 0,
            results: Vec::new(),
        }
    }
}

pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_transaction_from_api() {
        let json = r#"{
            "id": 7,
            "category": 2,
            "category_detail": {"id": 2, "name": "Groceries", "type": "expense"},
            "amount": "42.50",
            "date": "2025-03-14",
            "description": "weekly shop"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.amount, dec("42.50"));
        assert_eq!(tx.kind(), Some(CategoryKind::Expense));
        assert_eq!(tx.category_name(), "Groceries");
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    }

    #[test]
    fn test_transaction_without_detail() {
        let json = r#"{"id": 1, "category": 3, "amount": 10, "date": "2025-01-01", "description": null}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind(), None);
        assert_eq!(tx.category_name(), "");
        assert_eq!(tx.description, None);
    }

    #[test]
    fn test_listing_accepts_both_shapes() {
        let paged: Listing<Category> = serde_json::from_str(
            r#"{"count": 23, "next": null, "previous": null, "results": [{"id": 1, "name": "Salary", "type": "income"}]}"#,
        )
        .unwrap();
        assert_eq!(paged.count(), 23);
        assert_eq!(paged.into_items().len(), 1);

        let plain: Listing<Category> = serde_json::from_str(
            r#"[{"id": 1, "name": "Salary", "type": "income"}, {"id": 2, "name": "Rent", "type": "expense"}]"#,
        )
        .unwrap();
        assert_eq!(plain.count(), 2);
        assert_eq!(plain.into_items()[1].kind, CategoryKind::Expense);
    }

    #[test]
    fn test_transaction_listing_envelope_and_empty_array() {
        let paged: Listing<Transaction> = serde_json::from_str(
            r#"{"count": 11, "next": "http://api/transactions/?page=2", "previous": null, "results": [
                {"id": 4, "category": 2, "amount": "9.99", "date": "2025-04-02", "description": ""}
            ]}"#,
        )
        .unwrap();
        assert_eq!(paged.count(), 11);
        let items = paged.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].amount, dec("9.99"));

        let empty: Listing<Transaction> = serde_json::from_str("[]").unwrap();
        assert_eq!(empty.count(), 0);
        assert!(empty.into_items().is_empty());

        let budgets: Listing<Budget> = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert_eq!(budgets.count(), 0);
    }

    #[test]
    fn test_summary_breakdown_and_rate() {
        let json = r#"{
            "total_income": "2000.00",
            "total_expense": "500.00",
            "balance": "1500.00",
            "by_category": [
                {"category__name": "Salary", "category__type": "income", "total": "2000.00"},
                {"category__name": "Food", "category__type": "expense", "total": "300.00"},
                {"category__name": "Transport", "category__type": "expense", "total": null}
            ]
        }"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        let expense = summary.breakdown(CategoryKind::Expense);
        assert_eq!(expense.len(), 2);
        assert_eq!(expense[0].label, "Food");
        assert_eq!(expense[1].value, 0.0);
        assert_eq!(summary.breakdown(CategoryKind::Income)[0].value, 2000.0);
        assert!((summary.savings_rate() - 75.0).abs() < 1e-9);
        assert!((Summary::daily_average(summary.total_expense) - 500.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_with_nulls() {
        let summary: Summary =
            serde_json::from_str(r#"{"total_income": null, "total_expense": null, "balance": null}"#).unwrap();
        assert_eq!(summary.total_income, Decimal::ZERO);
        assert!(summary.by_category.is_empty());
        assert_eq!(summary.savings_rate(), 0.0);
    }

    #[test]
    fn test_current_budget_chart() {
        let current: CurrentBudget = serde_json::from_str(
            r#"{"budget": {"id": 4, "year": 2025, "month": 6, "amount": "800.00"}, "actual_expense": "650.25"}"#,
        )
        .unwrap();
        let data = current.chart_data();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].label, "Budget");
        assert_eq!(data[1].value, 650.25);

        let empty: CurrentBudget = serde_json::from_str(r#"{"budget": null, "actual_expense": 0}"#).unwrap();
        assert!(empty.chart_data().is_empty());
    }

    #[test]
    fn test_payload_serializes_category_id() {
        let payload = TransactionPayload {
            category: 5,
            amount: dec("19.99"),
            date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            description: String::new(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["category"], 5);
        assert_eq!(value["amount"], "19.99");
        assert_eq!(value["date"], "2025-02-01");
    }

    #[test]
    fn test_new_category_uses_type_key() {
        let value = serde_json::to_value(NewCategory {
            name: "Gifts".to_string(),
            kind: CategoryKind::Income,
        })
        .unwrap();
        assert_eq!(value["type"], "income");
    }
}
