//! Domain logic for the healthcare indicators dashboard.
//!
//! Everything here is pure: API record shapes, the reshaping rules that turn
//! them into chart and table view models, the page state machine, locale
//! formatters and the static theme tokens. Network access lives in
//! `painel-api`, rendering in `painel-ui`.

pub mod format;
pub mod geo;
pub mod period;
pub mod records;
pub mod series;
pub mod state;
pub mod theme;
pub mod views;

pub use format::{format_currency, format_number, format_percent, DEFAULT_PERCENT_DIGITS};
pub use geo::{resolve_coordinates, select_markers, GeoPoint, MapMarker, MAX_MAP_MARKERS};
pub use period::DateRange;
pub use records::{
    AgeProfile, AttendancePeriod, DisabilityPrevalence, ExecutiveKpis, MunicipalityAttendance,
    ProfessionalProductivity, TopDiagnosis,
};
pub use series::{ChartSeries, Dataset, SeriesBuilder, SeriesColors};
pub use state::{first_error, PageState, RequestGuard, RequestTicket};
pub use views::{
    AssistencialView, ExecutiveView, KpiCard, RankedProfessional, TerritorialView,
};

/// Errors raised while validating user input before a load is triggered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PainelError {
    #[error("Preencha as duas datas.")]
    MissingDate,
    #[error("Data inicial nao pode ser maior que a final.")]
    InvertedRange,
    #[error("Data invalida: {0}")]
    InvalidDate(String),
}
