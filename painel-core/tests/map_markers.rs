use painel_core::geo::MAX_MAP_MARKERS;
use painel_core::{resolve_coordinates, select_markers, MunicipalityAttendance, TerritorialView};

fn municipality(name: &str, lat: Option<f64>, lon: Option<f64>) -> MunicipalityAttendance {
    MunicipalityAttendance {
        municipio_ibge: None,
        municipio_nome: name.to_string(),
        uf: "TO".to_string(),
        total_pacientes: 10,
        latitude: lat,
        longitude: lon,
    }
}

#[test]
fn row_coordinates_win_over_lookup_table() {
    let row = municipality("Palmas", Some(-10.0), Some(-48.0));
    let point = resolve_coordinates(&row).expect("coordenadas");
    assert_eq!((point.lat, point.lon), (-10.0, -48.0));
}

#[test]
fn known_municipality_falls_back_to_lookup() {
    let row = municipality("Gurupi", None, None);
    let point = resolve_coordinates(&row).expect("coordenadas");
    assert_eq!((point.lat, point.lon), (-11.72, -49.06));
}

#[test]
fn unknown_municipality_without_coordinates_is_skipped() {
    assert!(resolve_coordinates(&municipality("Cidade A", None, None)).is_none());
    assert!(resolve_coordinates(&municipality("Cidade B", Some(-95.0), Some(0.0))).is_none());
}

#[test]
fn markers_are_capped() {
    let rows: Vec<_> = (0..80)
        .map(|index| municipality(&format!("Cidade {index}"), Some(-9.0), Some(-48.0)))
        .collect();

    let markers = select_markers(&rows);

    assert_eq!(markers.len(), MAX_MAP_MARKERS);
    assert_eq!(markers[0].title, "Cidade 0 - TO");
}

#[test]
fn table_keeps_rows_without_coordinates() {
    let rows = vec![
        municipality("Cidade A", None, None),
        municipality("Cidade B", None, None),
    ];

    let view = TerritorialView::new(rows);

    assert!(view.markers.is_empty());
    assert_eq!(view.rows.len(), 2);
}
