use wasm_bindgen::JsValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Dashboard,
    Transactions,
    Budget,
}

impl AppRoute {
    pub const NAV: [AppRoute; 3] = [AppRoute::Dashboard, AppRoute::Transactions, AppRoute::Budget];

    /// Unknown paths fall through to the dashboard.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => AppRoute::Login,
            "/transactions" => AppRoute::Transactions,
            "/budget" => AppRoute::Budget,
            _ => AppRoute::Dashboard,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Login => "/login",
            AppRoute::Dashboard => "/",
            AppRoute::Transactions => "/transactions",
            AppRoute::Budget => "/budget",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Login => "Sign In",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Transactions => "Transactions",
            AppRoute::Budget => "Budget",
        }
    }

    /// Where an unauthenticated visitor actually lands.
    pub fn guard(self, authed: bool) -> Self {
        if authed || self == AppRoute::Login {
            self
        } else {
            AppRoute::Login
        }
    }
}

pub fn current_route() -> AppRoute {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| AppRoute::from_path(&path))
        .unwrap_or(AppRoute::Dashboard)
}

fn update_history(route: AppRoute, replace: bool) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(route.path()))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(route.path()))
    };
    if result.is_err() {
        log::warn!("could not update history for {}", route.path());
    }
}

pub fn push_route(route: AppRoute) {
    update_history(route, false);
}

pub fn replace_route(route: AppRoute) {
    update_history(route, true);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in [AppRoute::Login, AppRoute::Dashboard, AppRoute::Transactions, AppRoute::Budget] {
            assert_eq!(AppRoute::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_and_trailing_slash() {
        assert_eq!(AppRoute::from_path("/budget/"), AppRoute::Budget);
        assert_eq!(AppRoute::from_path("/reports"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path(""), AppRoute::Dashboard);
    }

    #[test]
    fn test_guard_redirects_to_login() {
        assert_eq!(AppRoute::Transactions.guard(false), AppRoute::Login);
        assert_eq!(AppRoute::Dashboard.guard(false), AppRoute::Login);
        assert_eq!(AppRoute::Login.guard(false), AppRoute::Login);
        assert_eq!(AppRoute::Budget.guard(true), AppRoute::Budget);
    }
}
