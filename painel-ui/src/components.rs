#![cfg(target_arch = "wasm32")]

//! Stateless display units plus the date filter panel.

use chrono::Utc;
use painel_core::DateRange;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

use crate::routes::Dashboard;

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    html! {
        <div class="kpi-card">
            <h3 class="kpi-card__title">{ props.title.clone() }</h3>
            <p class="kpi-card__value">{ props.value.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorCardProps {
    #[prop_or(AttrValue::Static("Erro ao carregar"))]
    pub title: AttrValue,
    pub message: AttrValue,
}

#[function_component(ErrorCard)]
pub fn error_card(props: &ErrorCardProps) -> Html {
    html! {
        <div class="card card--error" role="alert">
            <h3 class="card__title">{ props.title.clone() }</h3>
            <p class="card__message">{ props.message.clone() }</p>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Default)]
pub enum SkeletonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    #[prop_or_default]
    pub size: SkeletonSize,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    let size = match props.size {
        SkeletonSize::Sm => "skeleton--sm",
        SkeletonSize::Md => "skeleton--md",
        SkeletonSize::Lg => "skeleton--lg",
    };
    html! { <div class={classes!("skeleton", size, props.class.clone())} aria-busy="true" /> }
}

#[derive(Properties, PartialEq)]
pub struct LoadingBlockProps {
    #[prop_or(AttrValue::Static("120px"))]
    pub height: AttrValue,
}

#[function_component(LoadingBlock)]
pub fn loading_block(props: &LoadingBlockProps) -> Html {
    html! {
        <div class="loading-block" style={format!("min-height: {}", props.height)} aria-busy="true" />
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: AttrValue,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! { <div class="empty-state" role="status">{ props.message.clone() }</div> }
}

#[derive(Properties, PartialEq)]
pub struct TableWrapperProps {
    #[prop_or_default]
    pub scroll: bool,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(TableWrapper)]
pub fn table_wrapper(props: &TableWrapperProps) -> Html {
    html! {
        <div class={classes!("table-wrapper", props.scroll.then_some("table-wrapper--scroll"))}>
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DateFilterProps {
    pub on_apply: Callback<DateRange>,
}

/// Two date inputs pre-filled with the previous calendar month. Emits only
/// validated ranges; invalid input shows an inline message instead.
#[function_component(DateFilter)]
pub fn date_filter(props: &DateFilterProps) -> Html {
    let initial = use_memo((), |_| DateRange::previous_month(Utc::now().date_naive()));
    let start = use_state(|| initial.start_param());
    let end = use_state(|| initial.end_param());
    let error = use_state(|| None::<String>);

    let on_start = {
        let start = start.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            start.set(input.value());
        })
    };

    let on_end = {
        let end = end.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            end.set(input.value());
        })
    };

    let on_click = {
        let (start, end, error) = (start.clone(), end.clone(), error.clone());
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| {
            match DateRange::parse_inputs(start.as_str(), end.as_str()) {
                Ok(range) => {
                    error.set(None);
                    on_apply.emit(range);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    html! {
        <div class="stack">
            <div class="filter-panel">
                <div class="filter-panel__group">
                    <label class="filter-panel__label" for="data-inicio">{"Data de Inicio"}</label>
                    <input
                        id="data-inicio"
                        type="date"
                        class="filter-panel__input"
                        value={(*start).clone()}
                        oninput={on_start}
                    />
                </div>
                <div class="filter-panel__group">
                    <label class="filter-panel__label" for="data-fim">{"Data de Fim"}</label>
                    <input
                        id="data-fim"
                        type="date"
                        class="filter-panel__input"
                        value={(*end).clone()}
                        oninput={on_end}
                    />
                </div>
                <div class="filter-panel__actions">
                    <button type="button" class="btn btn--primary" onclick={on_click}>{"Aplicar Filtro"}</button>
                </div>
            </div>
            {
                (*error)
                    .as_ref()
                    .map(|message| html! { <span class="form-error">{ message.clone() }</span> })
                    .unwrap_or_default()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Dashboard,
    pub on_select: Callback<Dashboard>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="app-nav">
            {
                for Dashboard::ALL.into_iter().map(|dashboard| {
                    let on_select = props.on_select.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(dashboard));
                    html! {
                        <a
                            href={dashboard.href()}
                            class={classes!((props.active == dashboard).then_some("is-active"))}
                            onclick={onclick}
                        >
                            { dashboard.nav_label() }
                        </a>
                    }
                })
            }
        </nav>
    }
}
