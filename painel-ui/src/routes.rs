//! The four dashboards and their hash routes.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dashboard {
    #[default]
    Executivo,
    Assistencial,
    Produtividade,
    Territorial,
}

impl Dashboard {
    pub const ALL: [Dashboard; 4] = [
        Dashboard::Executivo,
        Dashboard::Assistencial,
        Dashboard::Produtividade,
        Dashboard::Territorial,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Dashboard::Executivo => "/",
            Dashboard::Assistencial => "/assistencial",
            Dashboard::Produtividade => "/produtividade",
            Dashboard::Territorial => "/territorial",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.path())
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Dashboard::Executivo => "Executivo",
            Dashboard::Assistencial => "Assistencial",
            Dashboard::Produtividade => "Produtividade",
            Dashboard::Territorial => "Territorial",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Dashboard::Executivo => "Dashboard Executivo",
            Dashboard::Assistencial => "Dashboard Assistencial",
            Dashboard::Produtividade => "Dashboard de Produtividade",
            Dashboard::Territorial => "Dashboard Territorial",
        }
    }

    /// Accepts `/territorial`, `#/territorial` or `#territorial`; anything
    /// unknown lands on the executive dashboard.
    pub fn from_location(location: &str) -> Self {
        let path = location.trim_start_matches('#').trim_end_matches('/');
        let path = path.strip_prefix('/').unwrap_or(path);
        Self::ALL
            .into_iter()
            .find(|dashboard| dashboard.path().trim_start_matches('/') == path)
            .unwrap_or_default()
    }

    /// Dashboard for a full URL such as `hashchange`'s `newURL`. Only the
    /// fragment counts; a URL without one is the executive dashboard.
    pub fn from_url(url: &str) -> Self {
        url.split_once('#')
            .map(|(_, fragment)| Self::from_location(fragment))
            .unwrap_or_default()
    }
}
