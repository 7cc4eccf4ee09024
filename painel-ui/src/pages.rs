#![cfg(target_arch = "wasm32")]

//! Route-level dashboards. Each page owns its own `PageState` and reloads it
//! on mount and on every filter apply.

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use painel_api::{
    latest_only, load_assistencial, load_executive, load_productivity, load_territorial,
    ApiClient, ApiConfig,
};
use painel_core::{
    AssistencialView, ChartSeries, DateRange, ExecutiveView, PageState, RankedProfessional,
    RequestGuard, TerritorialView,
};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::charts::{DonutChart, HorizontalBarChart, LineChart, PyramidChart};
use crate::components::{
    DateFilter, EmptyState, ErrorCard, KpiCard, LoadingBlock, Skeleton, SkeletonSize,
};
use crate::copy;
use crate::map::TerritorialMap;
use crate::routes::Dashboard;
use crate::tables::{MunicipalityTable, ProductivityTable};

/// Shared API client, provided once by the app shell.
#[derive(Clone)]
pub struct ApiHandle(pub Rc<ApiClient>);

impl ApiHandle {
    pub fn new(config: ApiConfig) -> Self {
        Self(Rc::new(ApiClient::new(config)))
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

type Loader<V> = fn(Rc<ApiClient>, Option<DateRange>) -> LocalBoxFuture<'static, PageState<V>>;

/// Page state plus a callback that starts a load for a range (`None` lets
/// the server pick its default window). A response that arrives after a
/// newer load was started is dropped.
#[hook]
fn use_page_loader<V: 'static>(
    loader: Loader<V>,
) -> (UseStateHandle<PageState<V>>, Callback<Option<DateRange>>) {
    let api = use_context::<ApiHandle>()
        .unwrap_or_else(|| ApiHandle::new(ApiConfig::from_build_env()));
    let state = use_state(PageState::<V>::default);
    let guard = use_memo((), |_| RequestGuard::default());

    let load = {
        let state = state.clone();
        Callback::from(move |range: Option<DateRange>| {
            let ticket = guard.issue();
            state.set(PageState::Loading);

            let (state, guard, client) = (state.clone(), guard.clone(), api.0.clone());
            spawn_local(async move {
                if let Some(next) = latest_only(&guard, ticket, loader(client, range)).await {
                    state.set(next);
                }
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(None);
            || ()
        });
    }

    (state, load)
}

fn executive_loader(
    client: Rc<ApiClient>,
    range: Option<DateRange>,
) -> LocalBoxFuture<'static, PageState<ExecutiveView>> {
    async move { load_executive(&*client, range.as_ref()).await }.boxed_local()
}

fn assistencial_loader(
    client: Rc<ApiClient>,
    range: Option<DateRange>,
) -> LocalBoxFuture<'static, PageState<AssistencialView>> {
    async move { load_assistencial(&*client, range.as_ref()).await }.boxed_local()
}

fn productivity_loader(
    client: Rc<ApiClient>,
    range: Option<DateRange>,
) -> LocalBoxFuture<'static, PageState<Vec<RankedProfessional>>> {
    async move { load_productivity(&*client, range.as_ref()).await }.boxed_local()
}

fn territorial_loader(
    client: Rc<ApiClient>,
    range: Option<DateRange>,
) -> LocalBoxFuture<'static, PageState<TerritorialView>> {
    async move { load_territorial(&*client, range.as_ref()).await }.boxed_local()
}

/// Loading, error and empty placeholders; `ready` renders the view.
fn render_state<V>(
    state: &PageState<V>,
    loading: Html,
    empty_message: &'static str,
    ready: impl FnOnce(&V) -> Html,
) -> Html {
    match state {
        PageState::Loading => loading,
        PageState::Error(message) => html! {
            <ErrorCard title={copy::LOAD_FAILURE_TITLE} message={message.clone()} />
        },
        PageState::Empty => html! { <EmptyState message={empty_message} /> },
        PageState::Ready(view) => ready(view),
    }
}

fn page_shell(dashboard: Dashboard, on_apply: Callback<DateRange>, body: Html) -> Html {
    html! {
        <section class="dashboard">
            <h1>{ dashboard.title() }</h1>
            <DateFilter on_apply={on_apply} />
            { body }
        </section>
    }
}

fn chart_or_empty(
    slot: &Option<ChartSeries>,
    empty: &'static str,
    chart: impl FnOnce(&ChartSeries) -> Html,
) -> Html {
    match slot {
        Some(series) => chart(series),
        None => html! { <EmptyState message={empty} /> },
    }
}

#[function_component(ExecutivoPage)]
pub fn executivo_page() -> Html {
    let (state, load) = use_page_loader(executive_loader);

    let body = render_state(
        &state,
        html! { <LoadingBlock height="260px" /> },
        copy::EMPTY_EXECUTIVE,
        |view: &ExecutiveView| {
            html! {
                <>
                    <div class="kpi-row">
                        {
                            for view.kpi_cards().into_iter().map(|card| html! {
                                <KpiCard title={card.title} value={card.value} />
                            })
                        }
                    </div>
                    {
                        chart_or_empty(
                            &view.attendance,
                            copy::EMPTY_ATTENDANCE,
                            |series| html! { <LineChart series={series.clone()} title={copy::CHART_ATTENDANCE} /> },
                        )
                    }
                </>
            }
        },
    );

    page_shell(Dashboard::Executivo, load.reform(Some), body)
}

#[function_component(AssistencialPage)]
pub fn assistencial_page() -> Html {
    let (state, load) = use_page_loader(assistencial_loader);

    let body = render_state(
        &state,
        html! { <Skeleton size={SkeletonSize::Lg} /> },
        copy::EMPTY_ASSISTENCIAL,
        |view: &AssistencialView| {
            html! {
                <>
                    {
                        chart_or_empty(
                            &view.diagnoses,
                            copy::EMPTY_DIAGNOSES,
                            |series| html! {
                                <HorizontalBarChart series={series.clone()} title={copy::CHART_DIAGNOSES} />
                            },
                        )
                    }
                    <div class="assistencial-grid">
                        {
                            chart_or_empty(
                                &view.age_pyramid,
                                copy::EMPTY_AGE_PROFILE,
                                |series| html! {
                                    <PyramidChart series={series.clone()} title={copy::CHART_AGE_PYRAMID} />
                                },
                            )
                        }
                        {
                            chart_or_empty(
                                &view.disabilities,
                                copy::EMPTY_DISABILITIES,
                                |series| html! {
                                    <DonutChart series={series.clone()} title={copy::CHART_DISABILITIES} />
                                },
                            )
                        }
                    </div>
                </>
            }
        },
    );

    page_shell(Dashboard::Assistencial, load.reform(Some), body)
}

#[function_component(ProdutividadePage)]
pub fn produtividade_page() -> Html {
    let (state, load) = use_page_loader(productivity_loader);

    let body = render_state(
        &state,
        html! { <Skeleton size={SkeletonSize::Lg} /> },
        copy::EMPTY_PRODUCTIVITY,
        |rows: &Vec<RankedProfessional>| html! { <ProductivityTable rows={rows.clone()} /> },
    );

    page_shell(Dashboard::Produtividade, load.reform(Some), body)
}

#[function_component(TerritorialPage)]
pub fn territorial_page() -> Html {
    let (state, load) = use_page_loader(territorial_loader);

    let body = render_state(
        &state,
        html! { <Skeleton size={SkeletonSize::Lg} /> },
        copy::EMPTY_MUNICIPALITIES,
        |view: &TerritorialView| {
            html! {
                <div class="territorial-layout">
                    <div><TerritorialMap markers={view.markers.clone()} /></div>
                    <div><MunicipalityTable rows={view.rows.clone()} /></div>
                </div>
            }
        },
    );

    page_shell(Dashboard::Territorial, load.reform(Some), body)
}
