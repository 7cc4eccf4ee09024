//! Browser front end for the health indicators dashboards.
//!
//! Pure layout helpers (routes, chart geometry, map tiles, config merging)
//! build on every target; the Yew components only on wasm32.

pub mod chart_geometry;
pub mod config;
pub mod copy;
pub mod routes;
pub mod tiles;

#[cfg(target_arch = "wasm32")]
mod charts;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
mod map;
#[cfg(target_arch = "wasm32")]
mod pages;
#[cfg(target_arch = "wasm32")]
mod styles;
#[cfg(target_arch = "wasm32")]
mod tables;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use crate::components::NavBar;
    use crate::config::{resolve_config, JsApiConfig};
    use crate::pages::{
        ApiHandle, AssistencialPage, ExecutivoPage, ProdutividadePage, TerritorialPage,
    };
    use crate::routes::Dashboard;
    use crate::{logger, styles};
    use log::LevelFilter;
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HashChangeEvent, Window};
    use yew::prelude::*;

    #[derive(Properties, PartialEq)]
    pub struct AppProps {
        pub api: ApiHandle,
        pub initial: Dashboard,
    }

    #[function_component(App)]
    fn app(props: &AppProps) -> Html {
        let route = use_state(|| props.initial);

        {
            let route = route.clone();
            use_effect_with((), move |_| {
                let listener = web_sys::window().map(|window| {
                    let on_hash_change = Closure::<dyn FnMut(HashChangeEvent)>::new(
                        move |event: HashChangeEvent| {
                            route.set(Dashboard::from_url(&event.new_url()));
                        },
                    );
                    if let Err(err) = window.add_event_listener_with_callback(
                        "hashchange",
                        on_hash_change.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("hashchange listener not installed: {err:?}");
                    }
                    (window, on_hash_change)
                });

                move || {
                    if let Some((window, on_hash_change)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "hashchange",
                            on_hash_change.as_ref().unchecked_ref(),
                        );
                    }
                }
            });
        }

        let on_select = {
            let route = route.clone();
            Callback::from(move |dashboard: Dashboard| {
                log::debug!("navigating to {}", dashboard.path());
                route.set(dashboard);
            })
        };

        let page = match *route {
            Dashboard::Executivo => html! { <ExecutivoPage /> },
            Dashboard::Assistencial => html! { <AssistencialPage /> },
            Dashboard::Produtividade => html! { <ProdutividadePage /> },
            Dashboard::Territorial => html! { <TerritorialPage /> },
        };

        html! {
            <ContextProvider<ApiHandle> context={props.api.clone()}>
                <NavBar active={*route} on_select={on_select} />
                <main class="container">
                    { page }
                </main>
            </ContextProvider<ApiHandle>>
        }
    }

    fn parse_overrides(config: Option<JsValue>) -> Result<Option<JsApiConfig>, JsValue> {
        match config {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                Ok(Some(from_value(value)?))
            }
            _ => Ok(None),
        }
    }

    /// Mount the dashboards under `selector`. `config` may carry
    /// `{ api_url, api_key }` overriding the build-time settings.
    #[wasm_bindgen]
    pub fn mount_dashboard(selector: &str, config: Option<JsValue>) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        logger::init(LevelFilter::Info);

        let window: Window = web_sys::window()
            .ok_or_else(|| JsValue::from_str("Janela do navegador indisponivel"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Documento indisponivel"))?;

        styles::ensure_styles(&document)?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Seletor invalido: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Elemento nao encontrado para o seletor"))?;

        let api_config = resolve_config(parse_overrides(config)?);
        log::info!("painel montado em {selector} usando {}", api_config.base_url);

        let initial = window
            .location()
            .hash()
            .map(|hash| Dashboard::from_location(&hash))
            .unwrap_or_default();

        yew::Renderer::<App>::with_root_and_props(
            target,
            AppProps {
                api: ApiHandle::new(api_config),
                initial,
            },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_dashboard;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_dashboard(
    _: &str,
    _: Option<wasm_bindgen::JsValue>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "painel-ui so pode ser montado no target wasm32",
    ))
}
