//! API settings handed over by the host page.

use painel_api::ApiConfig;
use serde::Deserialize;

/// Optional overrides passed as the second argument of `mount_dashboard`.
#[derive(Debug, Default, Deserialize)]
pub struct JsApiConfig {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Build-time environment first, then whatever the page passed in.
pub fn resolve_config(overrides: Option<JsApiConfig>) -> ApiConfig {
    apply_overrides(ApiConfig::from_build_env(), overrides)
}

pub fn apply_overrides(base: ApiConfig, overrides: Option<JsApiConfig>) -> ApiConfig {
    let Some(overrides) = overrides else {
        return base;
    };

    let url = non_blank(overrides.api_url.as_deref()).unwrap_or(&base.base_url);
    let key = non_blank(overrides.api_key.as_deref()).or(base.api_key.as_deref());

    ApiConfig {
        timeout: base.timeout,
        ..ApiConfig::from_values(Some(url), key)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
