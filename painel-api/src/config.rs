use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

pub const API_URL_VAR: &str = "PAINEL_API_URL";
pub const API_KEY_VAR: &str = "PAINEL_API_KEY";

/// Where the API lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Values baked in at compile time. The browser build has no process
    /// environment, so this is what the dashboard uses at startup.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PAINEL_API_URL"), option_env!("PAINEL_API_KEY"))
    }

    /// Values read from the process environment at runtime.
    pub fn from_env() -> Self {
        let url = std::env::var(API_URL_VAR).ok();
        let key = std::env::var(API_KEY_VAR).ok();
        Self::from_values(url.as_deref(), key.as_deref())
    }

    /// Blank strings count as unset.
    pub fn from_values(base_url: Option<&str>, api_key: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = non_blank(base_url) {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        config.api_key = non_blank(api_key).map(str::to_string);
        config
    }

    pub fn with_api_key(mut self, api_key: Option<&str>) -> Self {
        self.api_key = non_blank(api_key).map(str::to_string);
        self
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
