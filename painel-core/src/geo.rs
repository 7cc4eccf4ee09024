//! Marker selection for the territorial map.

use serde::{Deserialize, Serialize};

use crate::records::MunicipalityAttendance;

/// Upper bound on plotted markers, to keep map rendering cheap.
pub const MAX_MAP_MARKERS: usize = 50;

/// Initial map centre (Tocantins) and zoom level.
pub const MAP_CENTER: GeoPoint = GeoPoint {
    lat: -9.5,
    lon: -48.5,
};
pub const MAP_ZOOM: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Fallback coordinates for municipalities the API returns without lat/long.
const KNOWN_MUNICIPALITIES: [(&str, GeoPoint); 5] = [
    ("Colinas do Tocantins", GeoPoint { lat: -8.06, lon: -48.47 }),
    ("Araguaina", GeoPoint { lat: -7.19, lon: -48.20 }),
    ("Palmas", GeoPoint { lat: -10.18, lon: -48.33 }),
    ("Gurupi", GeoPoint { lat: -11.72, lon: -49.06 }),
    ("Porto Nacional", GeoPoint { lat: -10.70, lon: -48.41 }),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub key: String,
    pub point: GeoPoint,
    pub title: String,
    pub total_pacientes: u64,
}

/// Row coordinates when both are present and valid, else the static lookup.
pub fn resolve_coordinates(row: &MunicipalityAttendance) -> Option<GeoPoint> {
    if let (Some(lat), Some(lon)) = (row.latitude, row.longitude) {
        if is_valid_point(lat, lon) {
            return Some(GeoPoint { lat, lon });
        }
    }

    let name = row.municipio_nome.trim();
    KNOWN_MUNICIPALITIES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, point)| *point)
}

/// Rows with resolvable coordinates, in API order, capped at [`MAX_MAP_MARKERS`].
pub fn select_markers(rows: &[MunicipalityAttendance]) -> Vec<MapMarker> {
    let markers: Vec<MapMarker> = rows
        .iter()
        .filter_map(|row| {
            let point = resolve_coordinates(row)?;
            Some(MapMarker {
                key: format!(
                    "{}-{}",
                    row.municipio_ibge.as_deref().unwrap_or_default(),
                    row.municipio_nome
                ),
                point,
                title: format!("{} - {}", row.municipio_nome, row.uf),
                total_pacientes: row.total_pacientes,
            })
        })
        .take(MAX_MAP_MARKERS)
        .collect();

    if markers.len() < rows.len() {
        log::debug!(
            "map shows {} of {} municipalities",
            markers.len(),
            rows.len()
        );
    }
    markers
}

fn is_valid_point(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && lat.abs() <= 90.0 && lon.abs() <= 180.0
}
