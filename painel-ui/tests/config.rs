use painel_api::config::REQUEST_TIMEOUT;
use painel_api::ApiConfig;
use painel_ui::config::{apply_overrides, JsApiConfig};

fn base() -> ApiConfig {
    ApiConfig::from_values(Some("http://build.local:8000"), Some("chave-build"))
}

#[test]
fn no_overrides_keeps_the_build_settings() {
    assert_eq!(apply_overrides(base(), None), base());
}

#[test]
fn page_overrides_win_over_build_settings() {
    let overrides: JsApiConfig = serde_json::from_str(
        r#"{ "api_url": "https://painel.exemplo.gov.br/", "api_key": "chave-pagina" }"#,
    )
    .expect("override json");

    let config = apply_overrides(base(), Some(overrides));
    assert_eq!(config.base_url, "https://painel.exemplo.gov.br");
    assert_eq!(config.api_key.as_deref(), Some("chave-pagina"));
    assert_eq!(config.timeout, REQUEST_TIMEOUT);
}

#[test]
fn blank_or_missing_fields_fall_back() {
    let overrides: JsApiConfig =
        serde_json::from_str(r#"{ "api_url": "  ", "api_key": "" }"#).expect("override json");
    assert_eq!(apply_overrides(base(), Some(overrides)), base());

    let partial: JsApiConfig =
        serde_json::from_str(r#"{ "api_key": "outra" }"#).expect("override json");
    let config = apply_overrides(base(), Some(partial));
    assert_eq!(config.base_url, "http://build.local:8000");
    assert_eq!(config.api_key.as_deref(), Some("outra"));
}
