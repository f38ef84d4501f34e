//! REST calls against the finance backend, one function per endpoint.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::config;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Budget, BudgetPayload, Category, CurrentBudget, Listing, LoginResponse, NewCategory, Summary,
    Transaction, TransactionPayload,
};
use crate::storage;

/// Filters and page for the transaction list. Empty fields are left out of
/// the query string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionQuery {
    pub page: u32,
    pub kind: String,
    pub category: String,
    pub min_amount: String,
    pub max_amount: String,
    pub start_date: String,
    pub end_date: String,
}

impl TransactionQuery {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.max(1).to_string())];
        let filters = [
            ("type", &self.kind),
            ("category", &self.category),
            ("min_amount", &self.min_amount),
            ("max_amount", &self.max_amount),
            ("start_date", &self.start_date),
            ("end_date", &self.end_date),
        ];
        for (key, value) in filters {
            let value = value.trim();
            if !value.is_empty() {
                pairs.push((key, value.to_string()));
            }
        }
        pairs
    }
}

pub fn auth_header(token: &str) -> String {
    format!("Token {token}")
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::load_token() {
        Some(token) => builder.header("Authorization", &auth_header(&token)),
        None => builder,
    }
}

fn ensure_ok(path: &str, response: &Response) -> ApiResult<()> {
    if response.ok() {
        Ok(())
    } else {
        log::warn!("{} answered {}", path, response.status());
        Err(ApiError::Status {
            path: path.to_string(),
            status: response.status(),
        })
    }
}

async fn read_json<T: DeserializeOwned>(path: &str, response: Response) -> ApiResult<T> {
    ensure_ok(path, &response)?;
    Ok(response.json::<T>().await?)
}

async fn get<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    log::debug!("GET {path}");
    let response = authorized(Request::get(&config().endpoint(path))).send().await?;
    read_json(path, response).await
}

async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    log::debug!("POST {path}");
    let request = authorized(Request::post(&config().endpoint(path))).json(body)?;
    let response = request.send().await?;
    read_json(path, response).await
}

async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    log::debug!("PUT {path}");
    let request = authorized(Request::put(&config().endpoint(path))).json(body)?;
    let response = request.send().await?;
    read_json(path, response).await
}

pub async fn login(username: &str, password: &str) -> ApiResult<LoginResponse> {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = Request::post(&config().endpoint("/auth/login/"))
        .json(&body)?
        .send()
        .await?;
    if !response.ok() {
        log::info!("login rejected with status {}", response.status());
        return Err(ApiError::LoginFailed);
    }
    Ok(response.json::<LoginResponse>().await?)
}

pub async fn get_summary() -> ApiResult<Summary> {
    get("/summary/").await
}

pub async fn list_categories() -> ApiResult<Vec<Category>> {
    let listing: Listing<Category> = get("/categories/").await?;
    Ok(listing.into_items())
}

pub async fn create_category(category: &NewCategory) -> ApiResult<Category> {
    post("/categories/", category).await
}

pub async fn list_transactions(query: &TransactionQuery) -> ApiResult<Listing<Transaction>> {
    let path = "/transactions/";
    log::debug!("GET {path} {:?}", query.pairs());
    let request = Request::get(&config().endpoint(path)).query(
        query
            .pairs()
            .iter()
            .map(|(key, value)| (*key, value.as_str())),
    );
    let response = authorized(request).send().await?;
    read_json(path, response).await
}

pub async fn create_transaction(payload: &TransactionPayload) -> ApiResult<Transaction> {
    post("/transactions/", payload).await
}

pub async fn update_transaction(id: i64, payload: &TransactionPayload) -> ApiResult<Transaction> {
    put(&format!("/transactions/{id}/"), payload).await
}

pub async fn delete_transaction(id: i64) -> ApiResult<()> {
    let path = format!("/transactions/{id}/");
    log::debug!("DELETE {path}");
    let response = authorized(Request::delete(&config().endpoint(&path)))
        .send()
        .await?;
    ensure_ok(&path, &response)
}

pub async fn list_budgets() -> ApiResult<Vec<Budget>> {
    let listing: Listing<Budget> = get("/budgets/").await?;
    Ok(listing.into_items())
}

pub async fn create_budget(payload: &BudgetPayload) -> ApiResult<Budget> {
    post("/budgets/", payload).await
}

pub async fn current_budget() -> ApiResult<CurrentBudget> {
    get("/budgets/current/").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_uses_token_scheme() {
        assert_eq!(auth_header("abc123"), "Token abc123");
    }

    #[test]
    fn test_query_only_page_when_unfiltered() {
        let query = TransactionQuery {
            page: 1,
            ..Default::default()
        };
        assert_eq!(query.pairs(), vec![("page", "1".to_string())]);
    }

    #[test]
    fn test_query_skips_blank_filters() {
        let query = TransactionQuery {
            page: 3,
            kind: "expense".to_string(),
            min_amount: "  ".to_string(),
            max_amount: "250".to_string(),
            end_date: "2025-06-30".to_string(),
            ..Default::default()
        };
        assert_eq!(
            query.pairs(),
            vec![
                ("page", "3".to_string()),
                ("type", "expense".to_string()),
                ("max_amount", "250".to_string()),
                ("end_date", "2025-06-30".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_page_never_zero() {
        let query = TransactionQuery::default();
        assert_eq!(query.pairs()[0], ("page", "1".to_string()));
    }
}
