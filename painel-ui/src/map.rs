#![cfg(target_arch = "wasm32")]

use painel_core::geo::{MAP_CENTER, MAP_ZOOM};
use painel_core::{format_number, MapMarker};
use yew::prelude::*;

use crate::tiles::{Viewport, MAP_HEIGHT, MAP_WIDTH, TILE_ATTRIBUTION};

#[derive(Properties, PartialEq)]
pub struct TerritorialMapProps {
    pub markers: Vec<MapMarker>,
}

/// Raster tiles framing every marker, one pin per marker. With no markers
/// the map shows the default centre.
#[function_component(TerritorialMap)]
pub fn territorial_map(props: &TerritorialMapProps) -> Html {
    let points: Vec<_> = props.markers.iter().map(|marker| marker.point).collect();
    let viewport = Viewport::fitting(&points, MAP_CENTER, MAP_ZOOM, MAP_WIDTH, MAP_HEIGHT);

    let tiles = viewport.tiles().into_iter().map(|tile| {
        html! {
            <img
                class="tile-map__tile"
                src={tile.url()}
                alt=""
                style={format!("left: {:.0}px; top: {:.0}px", tile.left, tile.top)}
            />
        }
    });

    let pins = props.markers.iter().filter_map(|marker| {
        let (left, top) = viewport.to_screen(marker.point)?;
        let tooltip = format!(
            "{}\nPacientes: {}",
            marker.title,
            format_number(Some(marker.total_pacientes as f64))
        );
        Some(html! {
            <span
                key={marker.key.clone()}
                class="tile-map__marker"
                title={tooltip}
                style={format!("left: {left:.0}px; top: {top:.0}px")}
            />
        })
    });

    html! {
        <div
            class="tile-map"
            style={format!("width: 100%; max-width: {MAP_WIDTH}px; height: {MAP_HEIGHT}px")}
        >
            { for tiles }
            { for pins }
            <span class="tile-map__attribution">{ TILE_ATTRIBUTION }</span>
        </div>
    }
}
