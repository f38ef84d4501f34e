const DEFAULT_API_BASE: &str = "https://business-backend-tl5s.vercel.app/api";
const DEFAULT_LOG_LEVEL: &str = "info";
pub const PAGE_SIZE: u32 = 10;

/// Build-time settings for the frontend.
///
/// Trunk builds pick these up from the environment, e.g.
/// `FINANCE_API_BASE=http://localhost:8000/api trunk serve`.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub log_level: log::Level,
    pub page_size: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("FINANCE_API_BASE"), option_env!("FINANCE_LOG_LEVEL"))
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|v| v.trim().parse::<log::Level>().ok())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.parse().unwrap_or(log::Level::Info));

        Self {
            api_base,
            log_level,
            page_size: PAGE_SIZE,
        }
    }

    /// Joins an endpoint path (with leading slash) onto the API base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

thread_local! {
    static CONFIG: AppConfig = AppConfig::from_env();
}

/// Returns the process-wide configuration.
pub fn config() -> AppConfig {
    CONFIG.with(|c| c.clone())
}
