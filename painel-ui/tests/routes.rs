use painel_ui::routes::Dashboard;

#[test]
fn every_dashboard_round_trips_through_its_href() {
    for dashboard in Dashboard::ALL {
        assert_eq!(Dashboard::from_location(&dashboard.href()), dashboard);
    }
}

#[test]
fn location_variants_resolve_to_the_same_dashboard() {
    assert_eq!(Dashboard::from_location("/territorial"), Dashboard::Territorial);
    assert_eq!(Dashboard::from_location("#territorial"), Dashboard::Territorial);
    assert_eq!(Dashboard::from_location("#/produtividade/"), Dashboard::Produtividade);
}

#[test]
fn empty_and_unknown_locations_land_on_executivo() {
    assert_eq!(Dashboard::from_location(""), Dashboard::Executivo);
    assert_eq!(Dashboard::from_location("#/"), Dashboard::Executivo);
    assert_eq!(Dashboard::from_location("#/financeiro"), Dashboard::Executivo);
}

#[test]
fn titles_match_navigation_order() {
    let titles: Vec<_> = Dashboard::ALL.into_iter().map(Dashboard::title).collect();
    assert_eq!(
        titles,
        vec![
            "Dashboard Executivo",
            "Dashboard Assistencial",
            "Dashboard de Produtividade",
            "Dashboard Territorial",
        ]
    );
}

#[test]
fn full_urls_resolve_by_fragment() {
    assert_eq!(
        Dashboard::from_url("http://localhost:8080/#/territorial"),
        Dashboard::Territorial
    );
    assert_eq!(
        Dashboard::from_url("https://painel.exemplo.gov.br/app/index.html#/assistencial"),
        Dashboard::Assistencial
    );
    assert_eq!(Dashboard::from_url("http://localhost:8080/"), Dashboard::Executivo);
}
