//! Form drafts for transactions and budgets, with the client-side checks.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{BudgetPayload, Category, Transaction, TransactionPayload};

pub const DESCRIPTION_LIMIT: usize = 500;

/// Today's date in UTC, which is what the date inputs default to.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Category,
    Amount,
    Date,
    Year,
    Month,
    General,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    errors: Vec<(Field, String)>,
}

impl FieldErrors {
    pub fn single(field: Field, message: impl Into<String>) -> Self {
        Self {
            errors: vec![(field, message.into())],
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn clear(&mut self, field: Field) {
        self.errors.retain(|(f, _)| *f != field);
    }
}

fn positive_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim())
        .ok()
        .filter(|amount| *amount > Decimal::ZERO)
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionDraft {
    pub id: Option<i64>,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

impl TransactionDraft {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            id: None,
            category: String::new(),
            amount: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            description: String::new(),
        }
    }

    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            id: Some(tx.id),
            category: tx.category.to_string(),
            amount: tx.amount.to_string(),
            date: tx.date.format("%Y-%m-%d").to_string(),
            description: tx.description.clone().unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Mirrors the submit button: every required field has some input.
    pub fn is_submittable(&self) -> bool {
        !self.category.trim().is_empty() && !self.amount.trim().is_empty() && !self.date.trim().is_empty()
    }

    /// Checks fields in order and reports the first problem only.
    pub fn validate(&self) -> Result<TransactionPayload, FieldErrors> {
        let category = self
            .category
            .trim()
            .parse::<i64>()
            .map_err(|_| FieldErrors::single(Field::Category, "Category is required"))?;
        let amount = positive_amount(&self.amount)
            .ok_or_else(|| FieldErrors::single(Field::Amount, "Amount must be greater than 0"))?;
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| FieldErrors::single(Field::Date, "Date is required"))?;
        Ok(TransactionPayload {
            category,
            amount,
            date,
            description: self.description.trim().to_string(),
        })
    }

    pub fn selected_category<'a>(&self, categories: &'a [Category]) -> Option<&'a Category> {
        let id = self.category.trim().parse::<i64>().ok()?;
        categories.iter().find(|c| c.id == id)
    }

    /// Signed, two-decimal amount shown next to the amount input.
    pub fn signed_amount(&self, categories: &[Category]) -> Option<String> {
        let amount = Decimal::from_str(self.amount.trim()).ok()?;
        let sign = self
            .selected_category(categories)
            .map(|c| c.kind.sign())
            .unwrap_or("");
        Some(format!("{}${:.2}", sign, amount.round_dp(2)))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BudgetDraft {
    pub year: String,
    pub month: String,
    pub amount: String,
}

impl BudgetDraft {
    pub fn for_month(date: NaiveDate) -> Self {
        Self {
            year: date.year().to_string(),
            month: date.month().to_string(),
            amount: String::new(),
        }
    }

    pub fn validate(&self) -> Result<BudgetPayload, FieldErrors> {
        let year = self
            .year
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|y| *y > 0)
            .ok_or_else(|| FieldErrors::single(Field::Year, "Year is required"))?;
        let month = self
            .month
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or_else(|| FieldErrors::single(Field::Month, "Month must be between 1 and 12"))?;
        let amount = positive_amount(&self.amount)
            .ok_or_else(|| FieldErrors::single(Field::Amount, "Amount must be greater than 0"))?;
        Ok(BudgetPayload { year, month, amount })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled() -> TransactionDraft {
        TransactionDraft {
            id: None,
            category: "3".to_string(),
            amount: "12.50".to_string(),
            date: "2025-05-01".to_string(),
            description: "  lunch ".to_string(),
        }
    }

    #[test]
    fn test_blank_draft_defaults_to_today() {
        let draft = TransactionDraft::blank(date(2025, 7, 9));
        assert_eq!(draft.date, "2025-07-09");
        assert!(!draft.is_submittable());
        assert!(!draft.is_editing());
    }

    #[test]
    fn test_valid_draft_builds_payload() {
        let payload = filled().validate().unwrap();
        assert_eq!(payload.category, 3);
        assert_eq!(payload.amount, Decimal::from_str("12.50").unwrap());
        assert_eq!(payload.date, date(2025, 5, 1));
        assert_eq!(payload.description, "lunch");
    }

    #[test]
    fn test_category_checked_first() {
        let draft = TransactionDraft {
            category: String::new(),
            amount: String::new(),
            ..filled()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(Field::Category), Some("Category is required"));
        assert!(!errors.has(Field::Amount));
    }

    #[test]
    fn test_amount_must_be_positive() {
        for amount in ["0", "-4", "abc", ""] {
            let draft = TransactionDraft {
                amount: amount.to_string(),
                ..filled()
            };
            let errors = draft.validate().unwrap_err();
            assert_eq!(errors.get(Field::Amount), Some("Amount must be greater than 0"));
        }
    }

    #[test]
    fn test_date_required() {
        let draft = TransactionDraft {
            date: String::new(),
            ..filled()
        };
        assert_eq!(draft.validate().unwrap_err().get(Field::Date), Some("Date is required"));
    }

    #[test]
    fn test_clearing_a_field_error() {
        let mut errors = FieldErrors::single(Field::Amount, "Amount must be greater than 0");
        errors.clear(Field::Category);
        assert!(errors.has(Field::Amount));
        errors.clear(Field::Amount);
        assert_eq!(errors, FieldErrors::default());
    }

    #[test]
    fn test_signed_amount_follows_category_type() {
        let categories = vec![
            Category { id: 3, name: "Food".to_string(), kind: CategoryKind::Expense },
            Category { id: 4, name: "Salary".to_string(), kind: CategoryKind::Income },
        ];
        assert_eq!(filled().signed_amount(&categories).as_deref(), Some("-$12.50"));
        let income = TransactionDraft { category: "4".to_string(), amount: "7".to_string(), ..filled() };
        assert_eq!(income.signed_amount(&categories).as_deref(), Some("+$7.00"));
        let unknown = TransactionDraft { category: String::new(), ..filled() };
        assert_eq!(unknown.signed_amount(&categories).as_deref(), Some("$12.50"));
    }

    #[test]
    fn test_budget_draft() {
        let mut draft = BudgetDraft::for_month(date(2025, 11, 20));
        assert_eq!((draft.year.as_str(), draft.month.as_str()), ("2025", "11"));
        assert_eq!(draft.validate().unwrap_err().get(Field::Amount), Some("Amount must be greater than 0"));

        draft.amount = "1200".to_string();
        let payload = draft.validate().unwrap();
        assert_eq!((payload.year, payload.month), (2025, 11));

        draft.month = "13".to_string();
        assert!(draft.validate().unwrap_err().has(Field::Month));
    }
}
