mod common;

use chrono::NaiveDate;
use common::{client, StubTransport, BASE_URL};
use futures::executor::block_on;
use painel_api::endpoint::{AtendimentosPorPeriodo, Endpoint, KpisPrincipais, TopDiagnosticos};
use painel_api::{build_url, ApiClient, ApiConfig, TransportError};
use painel_core::{DateRange, ExecutiveKpis};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("data de teste invalida")
}

#[test]
fn url_omits_missing_date_parameters() {
    let path = KpisPrincipais::PATH;
    assert_eq!(
        build_url(BASE_URL, path, None, None),
        format!("{BASE_URL}{path}")
    );
    assert_eq!(
        build_url(BASE_URL, path, Some(date(2024, 1, 1)), None),
        format!("{BASE_URL}{path}?data_inicio=2024-01-01")
    );
    assert_eq!(
        build_url(BASE_URL, path, None, Some(date(2024, 1, 31))),
        format!("{BASE_URL}{path}?data_fim=2024-01-31")
    );
    assert_eq!(
        build_url(BASE_URL, path, Some(date(2024, 1, 1)), Some(date(2024, 1, 31))),
        format!("{BASE_URL}{path}?data_inicio=2024-01-01&data_fim=2024-01-31")
    );
}

#[test]
fn error_status_returns_body_as_detail() {
    let api = client(StubTransport::new().status(TopDiagnosticos::PATH, 500, "boom"));

    let result = block_on(api.fetch::<TopDiagnosticos>(None));

    assert_eq!(result.error.as_deref(), Some("Erro 500: boom"));
    assert!(result.data.is_empty());
}

#[test]
fn kpi_endpoint_defaults_to_empty_object_on_error() {
    let api = client(StubTransport::new().status(KpisPrincipais::PATH, 500, "boom"));

    let result = block_on(api.fetch::<KpisPrincipais>(None));

    assert_eq!(result.error.as_deref(), Some("Erro 500: boom"));
    assert_eq!(result.data, ExecutiveKpis::default());
}

#[test]
fn timeout_reports_time_limit_with_empty_default() {
    let api = client(StubTransport::new().fail(AtendimentosPorPeriodo::PATH, TransportError::Timeout));

    let result = block_on(api.fetch::<AtendimentosPorPeriodo>(None));

    assert_eq!(
        result.error.as_deref(),
        Some("Requisicao excedeu o tempo limite")
    );
    assert!(result.data.is_empty());
}

#[test]
fn network_failure_names_the_endpoint() {
    let api = client(StubTransport::new().fail(
        KpisPrincipais::PATH,
        TransportError::Network("connection refused".to_string()),
    ));

    let result = block_on(api.fetch::<KpisPrincipais>(None));

    assert_eq!(
        result.error,
        Some(format!("Erro ao buscar {}", KpisPrincipais::PATH))
    );
}

#[test]
fn malformed_body_is_reported_like_a_network_failure() {
    let api = client(StubTransport::new().json(TopDiagnosticos::PATH, "<html>"));

    let result = block_on(api.fetch::<TopDiagnosticos>(None));

    assert_eq!(
        result.error,
        Some(format!("Erro ao buscar {}", TopDiagnosticos::PATH))
    );
    assert!(result.data.is_empty());
}

#[test]
fn range_and_timeout_are_forwarded() {
    let api = client(StubTransport::new().fixture(
        AtendimentosPorPeriodo::PATH,
        "atendimentos_por_periodo.json",
    ));
    let range = DateRange::new(date(2024, 1, 1), date(2024, 2, 29)).expect("intervalo valido");

    let result = block_on(api.fetch::<AtendimentosPorPeriodo>(Some(&range)));

    assert!(result.is_ok());
    assert_eq!(result.data.len(), 2);

    let requests = api.transport().requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0]
        .url
        .ends_with("?data_inicio=2024-01-01&data_fim=2024-02-29"));
    assert_eq!(requests[0].timeout.as_millis(), 10_000);
    assert!(requests[0].headers.is_empty());
}

#[test]
fn api_key_header_is_sent_when_configured() {
    let config = ApiConfig::from_values(Some(BASE_URL), Some("segredo"));
    let api = ApiClient::with_transport(
        config,
        StubTransport::new().fixture(KpisPrincipais::PATH, "kpis_principais.json"),
    );

    let result = block_on(api.fetch::<KpisPrincipais>(None));

    assert_eq!(result.error, None);
    assert_eq!(result.data.faturamento_estimado_mes, Some(98765.43));
    assert_eq!(
        api.transport().requests()[0].headers,
        vec![("X-API-Key".to_string(), "segredo".to_string())]
    );
}

#[test]
fn blank_configuration_values_are_ignored() {
    let config = ApiConfig::from_values(Some("  "), Some(""));
    assert_eq!(config, ApiConfig::default());

    let config = ApiConfig::from_values(Some("https://api.exemplo.gov.br/"), None);
    assert_eq!(config.base_url, "https://api.exemplo.gov.br");
    assert_eq!(config.api_key, None);
}
