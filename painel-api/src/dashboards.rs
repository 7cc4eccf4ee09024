//! Load pipelines of the four dashboards.
//!
//! Each pipeline fetches its indicators concurrently, waits for all of them,
//! and either surfaces the first error (in declaration order) or reshapes
//! the rows into the page's view model.

use std::future::Future;

use futures::join;
use log::{debug, info};
use painel_core::views::productivity_ranking;
use painel_core::{
    first_error, AssistencialView, DateRange, ExecutiveView, PageState, RankedProfessional,
    RequestGuard, RequestTicket, TerritorialView,
};

use crate::client::ApiClient;
use crate::endpoint::{
    AtendimentosPorMunicipio, AtendimentosPorPeriodo, KpisPrincipais, PerfilEtario,
    PrevalenciaDeficiencias, RankingProfissionais, TopDiagnosticos,
};
use crate::transport::Transport;

/// KPI cards plus the attendance time series. Never `Empty`: the cards are
/// shown even when the series has no periods.
pub async fn load_executive<T: Transport>(
    client: &ApiClient<T>,
    range: Option<&DateRange>,
) -> PageState<ExecutiveView> {
    let (kpis, periods) = join!(
        client.fetch::<KpisPrincipais>(range),
        client.fetch::<AtendimentosPorPeriodo>(range)
    );

    if let Some(message) = first_error([kpis.error.as_deref(), periods.error.as_deref()]) {
        return settle("executivo", PageState::Error(message));
    }

    settle(
        "executivo",
        PageState::Ready(ExecutiveView::new(kpis.data, &periods.data)),
    )
}

/// Diagnosis ranking, age pyramid and disability donut. Individual empty
/// charts are `None` slots inside a `Ready` view.
pub async fn load_assistencial<T: Transport>(
    client: &ApiClient<T>,
    range: Option<&DateRange>,
) -> PageState<AssistencialView> {
    let (diagnoses, ages, disabilities) = join!(
        client.fetch::<TopDiagnosticos>(range),
        client.fetch::<PerfilEtario>(range),
        client.fetch::<PrevalenciaDeficiencias>(range)
    );

    if let Some(message) = first_error([
        diagnoses.error.as_deref(),
        ages.error.as_deref(),
        disabilities.error.as_deref(),
    ]) {
        return settle("assistencial", PageState::Error(message));
    }

    settle(
        "assistencial",
        PageState::Ready(AssistencialView::new(
            &diagnoses.data,
            &ages.data,
            &disabilities.data,
        )),
    )
}

pub async fn load_productivity<T: Transport>(
    client: &ApiClient<T>,
    range: Option<&DateRange>,
) -> PageState<Vec<RankedProfessional>> {
    let ranking = client.fetch::<RankingProfissionais>(range).await;
    let state = match ranking.into_result() {
        Err(message) => PageState::Error(message),
        Ok(rows) if rows.is_empty() => PageState::Empty,
        Ok(rows) => PageState::Ready(productivity_ranking(rows)),
    };
    settle("produtividade", state)
}

pub async fn load_territorial<T: Transport>(
    client: &ApiClient<T>,
    range: Option<&DateRange>,
) -> PageState<TerritorialView> {
    let municipalities = client.fetch::<AtendimentosPorMunicipio>(range).await;
    let state = match municipalities.into_result() {
        Err(message) => PageState::Error(message),
        Ok(rows) if rows.is_empty() => PageState::Empty,
        Ok(rows) => PageState::Ready(TerritorialView::new(rows)),
    };
    settle("territorial", state)
}

/// Awaits `load` and hands back its output only while `ticket` is still the
/// guard's latest. A load overtaken by a newer one yields `None`.
pub async fn latest_only<F: Future>(
    guard: &RequestGuard,
    ticket: RequestTicket,
    load: F,
) -> Option<F::Output> {
    let output = load.await;
    if guard.is_current(ticket) {
        Some(output)
    } else {
        debug!("discarding stale dashboard response");
        None
    }
}

fn settle<V>(page: &str, state: PageState<V>) -> PageState<V> {
    info!("dashboard {page} -> {}", state.phase());
    state
}
