use crate::api;
use crate::error::ApiResult;
use crate::storage;

/// Exchanges credentials for a token and keeps it for later requests.
pub async fn login(username: &str, password: &str) -> ApiResult<()> {
    let response = api::login(username, password).await?;
    storage::save_token(&response.token);
    log::info!("signed in as {username}");
    Ok(())
}

pub fn logout() {
    storage::clear_token();
    log::info!("signed out");
}

/// Token presence is the only signal; it is never validated or refreshed.
pub fn is_authed() -> bool {
    storage::load_token().is_some()
}
