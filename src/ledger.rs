//! State behind the transactions page: filters, page, modal and a reload
//! counter, driven through `use_reducer`.

use std::rc::Rc;

use yew::Reducible;

use crate::api::TransactionQuery;
use crate::models::Transaction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Kind,
    Category,
    MinAmount,
    MaxAmount,
    StartDate,
    EndDate,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters {
    pub kind: String,
    pub category: String,
    pub min_amount: String,
    pub max_amount: String,
    pub start_date: String,
    pub end_date: String,
}

impl Filters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Kind => &self.kind,
            FilterField::Category => &self.category,
            FilterField::MinAmount => &self.min_amount,
            FilterField::MaxAmount => &self.max_amount,
            FilterField::StartDate => &self.start_date,
            FilterField::EndDate => &self.end_date,
        }
    }

    fn slot(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Kind => &mut self.kind,
            FilterField::Category => &mut self.category,
            FilterField::MinAmount => &mut self.min_amount,
            FilterField::MaxAmount => &mut self.max_amount,
            FilterField::StartDate => &mut self.start_date,
            FilterField::EndDate => &mut self.end_date,
        }
    }

    pub fn is_active(&self) -> bool {
        [
            &self.kind,
            &self.category,
            &self.min_amount,
            &self.max_amount,
            &self.start_date,
            &self.end_date,
        ]
        .iter()
        .any(|value| !value.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Modal {
    Closed,
    Creating,
    Editing(Transaction),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn editing(&self) -> Option<&Transaction> {
        match self {
            Modal::Editing(tx) => Some(tx),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LedgerState {
    pub filters: Filters,
    pub page: u32,
    pub modal: Modal,
    pub show_filters: bool,
    /// Bumped after writes so the list effect re-runs with unchanged filters.
    pub reload: u32,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self {
            filters: Filters::default(),
            page: 1,
            modal: Modal::Closed,
            show_filters: false,
            reload: 0,
        }
    }
}

impl LedgerState {
    pub fn has_active_filters(&self) -> bool {
        self.filters.is_active()
    }

    pub fn query(&self) -> TransactionQuery {
        TransactionQuery {
            page: self.page,
            kind: self.filters.kind.clone(),
            category: self.filters.category.clone(),
            min_amount: self.filters.min_amount.clone(),
            max_amount: self.filters.max_amount.clone(),
            start_date: self.filters.start_date.clone(),
            end_date: self.filters.end_date.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LedgerAction {
    SetFilter(FilterField, String),
    ResetFilters,
    SetPage(u32),
    ToggleFilters,
    OpenCreate,
    OpenEdit(Transaction),
    CloseModal,
    /// A save went through: close the modal and reload.
    Saved,
    /// A delete went through: reload in place.
    Deleted,
}

impl Reducible for LedgerState {
    type Action = LedgerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LedgerAction::SetFilter(field, value) => {
                *next.filters.slot(field) = value;
                next.page = 1;
            }
            LedgerAction::ResetFilters => {
                next.filters = Filters::default();
                next.page = 1;
            }
            LedgerAction::SetPage(page) => next.page = page.max(1),
            LedgerAction::ToggleFilters => next.show_filters = !next.show_filters,
            LedgerAction::OpenCreate => next.modal = Modal::Creating,
            LedgerAction::OpenEdit(tx) => next.modal = Modal::Editing(tx),
            LedgerAction::CloseModal => next.modal = Modal::Closed,
            LedgerAction::Saved => {
                next.modal = Modal::Closed;
                next.reload = next.reload.wrapping_add(1);
            }
            LedgerAction::Deleted => next.reload = next.reload.wrapping_add(1),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn apply(state: LedgerState, action: LedgerAction) -> LedgerState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn sample_tx() -> Transaction {
        Transaction {
            id: 9,
            category: 2,
            category_detail: None,
            amount: Decimal::new(1999, 2),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            description: None,
        }
    }

    #[test]
    fn test_starts_on_first_page_without_filters() {
        let state = LedgerState::default();
        assert_eq!(state.page, 1);
        assert!(!state.has_active_filters());
        assert!(!state.modal.is_open());
    }

    #[test]
    fn test_setting_a_filter_resets_page() {
        let state = apply(LedgerState::default(), LedgerAction::SetPage(4));
        assert_eq!(state.page, 4);
        let state = apply(state, LedgerAction::SetFilter(FilterField::Kind, "expense".into()));
        assert_eq!(state.page, 1);
        assert_eq!(state.filters.get(FilterField::Kind), "expense");
        assert!(state.has_active_filters());
    }

    #[test]
    fn test_reset_clears_every_filter() {
        let mut state = LedgerState::default();
        for (field, value) in [
            (FilterField::MinAmount, "5"),
            (FilterField::StartDate, "2025-01-01"),
            (FilterField::Category, "3"),
        ] {
            state = apply(state, LedgerAction::SetFilter(field, value.into()));
        }
        state = apply(state, LedgerAction::SetPage(2));
        let state = apply(state, LedgerAction::ResetFilters);
        assert_eq!(state.filters, Filters::default());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_query_mirrors_state() {
        let state = apply(LedgerState::default(), LedgerAction::SetFilter(FilterField::MaxAmount, "80".into()));
        let state = apply(state, LedgerAction::SetPage(3));
        let query = state.query();
        assert_eq!(query.page, 3);
        assert_eq!(query.max_amount, "80");
        assert!(query.kind.is_empty());
    }

    #[test]
    fn test_modal_lifecycle_and_reload() {
        let state = apply(LedgerState::default(), LedgerAction::OpenEdit(sample_tx()));
        assert_eq!(state.modal.editing().map(|tx| tx.id), Some(9));

        let state = apply(state, LedgerAction::Saved);
        assert_eq!(state.modal, Modal::Closed);
        assert_eq!(state.reload, 1);

        let state = apply(state, LedgerAction::OpenCreate);
        assert!(state.modal.is_open());
        assert!(state.modal.editing().is_none());
        let state = apply(state, LedgerAction::CloseModal);
        assert!(!state.modal.is_open());
        assert_eq!(state.reload, 1);

        let state = apply(state, LedgerAction::Deleted);
        assert_eq!(state.reload, 2);
    }

    #[test]
    fn test_toggle_filters_panel() {
        let state = apply(LedgerState::default(), LedgerAction::ToggleFilters);
        assert!(state.show_filters);
        assert!(!apply(state, LedgerAction::ToggleFilters).show_filters);
    }
}
