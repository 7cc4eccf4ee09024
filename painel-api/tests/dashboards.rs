mod common;

use common::{client, StubTransport};
use futures::executor::block_on;
use painel_api::endpoint::{
    AtendimentosPorMunicipio, AtendimentosPorPeriodo, Endpoint, KpisPrincipais, PerfilEtario,
    PrevalenciaDeficiencias, RankingProfissionais, TopDiagnosticos,
};
use futures::future::join;
use painel_api::{
    latest_only, load_assistencial, load_executive, load_productivity, load_territorial,
    TransportError,
};
use painel_core::{PageState, RequestGuard};

fn assistencial_stub() -> StubTransport {
    StubTransport::new()
        .fixture(TopDiagnosticos::PATH, "top_diagnosticos.json")
        .fixture(PerfilEtario::PATH, "perfil_etario.json")
        .fixture(PrevalenciaDeficiencias::PATH, "prevalencia_deficiencias.json")
}

#[test]
fn executive_page_renders_cards_and_two_series() {
    let api = client(
        StubTransport::new()
            .fixture(KpisPrincipais::PATH, "kpis_principais.json")
            .fixture(AtendimentosPorPeriodo::PATH, "atendimentos_por_periodo.json"),
    );

    let state = block_on(load_executive(&api, None));

    let view = state.ready().expect("pagina pronta");
    let values: Vec<String> = view.kpi_cards().into_iter().map(|card| card.value).collect();
    assert_eq!(values, vec!["1.200", "800", "R$ 98.765,43"]);

    let chart = view.attendance.as_ref().expect("grafico esperado");
    assert_eq!(chart.labels.len(), 2);
    assert_eq!(chart.datasets.len(), 2);
    assert!(chart.is_aligned());
}

#[test]
fn executive_page_without_periods_keeps_cards() {
    let api = client(
        StubTransport::new()
            .json(KpisPrincipais::PATH, "{}")
            .json(AtendimentosPorPeriodo::PATH, "[]"),
    );

    let state = block_on(load_executive(&api, None));

    let view = state.ready().expect("pagina pronta");
    assert!(view.attendance.is_none());
    assert_eq!(view.kpi_cards()[2].value, "R$ 0,00");
}

#[test]
fn executive_page_fails_when_any_fetch_fails() {
    let api = client(
        StubTransport::new()
            .status(KpisPrincipais::PATH, 503, "indisponivel")
            .fixture(AtendimentosPorPeriodo::PATH, "atendimentos_por_periodo.json"),
    );

    let state = block_on(load_executive(&api, None));

    assert_eq!(state, PageState::Error("Erro 503: indisponivel".to_string()));
}

#[test]
fn assistencial_page_issues_all_fetches_and_reshapes() {
    let api = client(assistencial_stub());

    let state = block_on(load_assistencial(&api, None));

    assert_eq!(api.transport().requests().len(), 3);
    let view = state.ready().expect("pagina pronta");

    let diagnoses = view.diagnoses.as_ref().expect("diagnosticos");
    assert_eq!(diagnoses.labels, vec!["B00 - Doenca B", "A00 - Doenca A"]);

    let pyramid = view.age_pyramid.as_ref().expect("piramide");
    assert_eq!(pyramid.datasets[0].data, vec![-5.0, -1.0]);

    let donut = view.disabilities.as_ref().expect("deficiencias");
    assert_eq!(donut.datasets[0].data, vec![7.0, 3.0]);
}

#[test]
fn assistencial_page_surfaces_first_error_only() {
    let api = client(
        assistencial_stub()
            .status(PerfilEtario::PATH, 500, "perfil")
            .fail(PrevalenciaDeficiencias::PATH, TransportError::Timeout),
    );

    let state = block_on(load_assistencial(&api, None));

    assert_eq!(state.error(), Some("Erro 500: perfil"));
}

#[test]
fn assistencial_empty_slot_does_not_block_page() {
    let api = client(assistencial_stub().json(PerfilEtario::PATH, "[]"));

    let state = block_on(load_assistencial(&api, None));

    let view = state.ready().expect("pagina pronta");
    assert!(view.age_pyramid.is_none());
    assert!(view.diagnoses.is_some());
}

#[test]
fn productivity_page_ranks_rows() {
    let api = client(
        StubTransport::new().fixture(RankingProfissionais::PATH, "ranking_profissionais.json"),
    );

    let state = block_on(load_productivity(&api, None));

    let rows = state.ready().expect("pagina pronta");
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[1].position, 2);
    assert_eq!(rows[1].cbo_descricao, "N/A");
}

#[test]
fn productivity_page_without_rows_is_empty() {
    let api = client(StubTransport::new().json(RankingProfissionais::PATH, "[]"));

    assert_eq!(block_on(load_productivity(&api, None)), PageState::Empty);
}

#[test]
fn territorial_page_without_coordinates_has_no_markers() {
    let api = client(StubTransport::new().fixture(
        AtendimentosPorMunicipio::PATH,
        "municipios_sem_coordenadas.json",
    ));

    let state = block_on(load_territorial(&api, None));

    let view = state.ready().expect("pagina pronta");
    assert!(view.markers.is_empty());
    assert_eq!(view.rows.len(), 2);
}

#[test]
fn territorial_page_places_known_municipalities() {
    let api = client(
        StubTransport::new().fixture(AtendimentosPorMunicipio::PATH, "municipios.json"),
    );

    let state = block_on(load_territorial(&api, None));

    let view = state.ready().expect("pagina pronta");
    let titles: Vec<&str> = view.markers.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Palmas - TO", "Araguaina - TO"]);
    assert_eq!(view.rows.len(), 3);
}

#[test]
fn territorial_error_is_surfaced() {
    let api = client(StubTransport::new().fail(
        AtendimentosPorMunicipio::PATH,
        TransportError::Timeout,
    ));

    let state = block_on(load_territorial(&api, None));

    assert_eq!(state.error(), Some("Requisicao excedeu o tempo limite"));
}

#[test]
fn executive_fetches_overlap() {
    let api = client(
        StubTransport::new()
            .fixture(KpisPrincipais::PATH, "kpis_principais.json")
            .fixture(AtendimentosPorPeriodo::PATH, "atendimentos_por_periodo.json"),
    );

    let state = block_on(load_executive(&api, None));

    assert!(state.ready().is_some());
    assert_eq!(api.transport().peak_in_flight(), 2);
}

#[test]
fn assistencial_fetches_overlap() {
    let api = client(assistencial_stub());

    let state = block_on(load_assistencial(&api, None));

    assert!(state.ready().is_some());
    assert_eq!(api.transport().peak_in_flight(), 3);
}

#[test]
fn single_fetch_pages_have_one_request_in_flight() {
    let api = client(
        StubTransport::new().fixture(RankingProfissionais::PATH, "ranking_profissionais.json"),
    );

    block_on(load_productivity(&api, None));

    assert_eq!(api.transport().peak_in_flight(), 1);
}

#[test]
fn overtaken_load_is_discarded() {
    let api = client(
        StubTransport::new().fixture(RankingProfissionais::PATH, "ranking_profissionais.json"),
    );
    let guard = RequestGuard::default();

    let first = guard.issue();
    let older = latest_only(&guard, first, load_productivity(&api, None));
    let second = guard.issue();
    let newer = latest_only(&guard, second, load_productivity(&api, None));

    let (older, newer) = block_on(join(older, newer));

    assert_eq!(older, None);
    let rows = newer.expect("carga mais recente aplicada");
    assert!(rows.ready().is_some());
}

#[test]
fn load_started_after_completion_does_not_revoke_result() {
    let api = client(
        StubTransport::new().fixture(RankingProfissionais::PATH, "ranking_profissionais.json"),
    );
    let guard = RequestGuard::default();

    let ticket = guard.issue();
    let settled = block_on(latest_only(&guard, ticket, load_productivity(&api, None)));

    assert!(settled.is_some());
    guard.issue();
    assert!(!guard.is_current(ticket));
}
