//! Reshaping of raw API rows into rendering-ready view models.

use serde::{Deserialize, Serialize};

use crate::format::{format_currency, format_number};
use crate::geo::{select_markers, MapMarker};
use crate::records::{
    AgeProfile, AttendancePeriod, DisabilityPrevalence, ExecutiveKpis, MunicipalityAttendance,
    ProfessionalProductivity, TopDiagnosis,
};
use crate::series::{ChartSeries, SeriesBuilder, SeriesColors};

/// Shown in the ranking table when a professional has no CBO description.
pub const MISSING_CBO_PLACEHOLDER: &str = "N/A";

const BLUE_BORDER: &str = "rgb(54, 162, 235)";
const BLUE_FILL: &str = "rgba(54, 162, 235, 0.5)";
const RED_BORDER: &str = "rgb(255, 99, 132)";
const RED_FILL: &str = "rgba(255, 99, 132, 0.5)";
const TEAL_FILL: &str = "rgba(75, 192, 192, 0.5)";
const PYRAMID_MALE_FILL: &str = "rgba(54, 162, 235, 0.7)";
const PYRAMID_FEMALE_FILL: &str = "rgba(255, 99, 132, 0.7)";

/// Donut slices take these colours by position, wrapping around.
pub const DONUT_PALETTE: [&str; 4] = [
    "rgba(255, 159, 64, 0.7)",
    "rgba(75, 192, 192, 0.7)",
    "rgba(153, 102, 255, 0.7)",
    "rgba(255, 205, 86, 0.7)",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveView {
    pub kpis: ExecutiveKpis,
    pub attendance: Option<ChartSeries>,
}

impl ExecutiveView {
    pub fn new(kpis: ExecutiveKpis, periods: &[AttendancePeriod]) -> Self {
        Self {
            kpis,
            attendance: attendance_series(periods),
        }
    }

    pub fn kpi_cards(&self) -> [KpiCard; 3] {
        [
            KpiCard {
                title: "Total de Atendimentos no Periodo".to_string(),
                value: format_number(Some(self.kpis.total_atendimentos_mes.unwrap_or(0.0))),
            },
            KpiCard {
                title: "Pacientes unicos no Periodo".to_string(),
                value: format_number(Some(self.kpis.pacientes_unicos_mes.unwrap_or(0.0))),
            },
            KpiCard {
                title: "Faturamento Estimado (BPA/APAC)".to_string(),
                value: format_currency(Some(self.kpis.faturamento_estimado_mes.unwrap_or(0.0))),
            },
        ]
    }
}

/// One line per metric, periods in API order.
pub fn attendance_series(periods: &[AttendancePeriod]) -> Option<ChartSeries> {
    SeriesBuilder::new(periods, |row| row.periodo.clone())
        .dataset(
            "Total de Atendimentos",
            |row| row.total_atendimentos as f64,
            SeriesColors::line(BLUE_BORDER, BLUE_FILL),
        )
        .dataset(
            "Pacientes unicos",
            |row| row.pacientes_unicos as f64,
            SeriesColors::line(RED_BORDER, RED_FILL),
        )
        .build()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistencialView {
    pub diagnoses: Option<ChartSeries>,
    pub age_pyramid: Option<ChartSeries>,
    pub disabilities: Option<ChartSeries>,
}

impl AssistencialView {
    pub fn new(
        diagnoses: &[TopDiagnosis],
        ages: &[AgeProfile],
        disabilities: &[DisabilityPrevalence],
    ) -> Self {
        Self {
            diagnoses: diagnoses_series(diagnoses),
            age_pyramid: age_pyramid_series(ages),
            disabilities: disability_series(disabilities),
        }
    }
}

/// The API ranks most frequent first; a horizontal bar chart draws the last
/// label on top, so rows are reversed to keep the largest bar at the top.
pub fn diagnoses_series(rows: &[TopDiagnosis]) -> Option<ChartSeries> {
    let reversed: Vec<&TopDiagnosis> = rows.iter().rev().collect();
    SeriesBuilder::new(&reversed, |row| {
        format!("{} - {}", row.cid_codigo, row.cid_descricao)
    })
    .dataset(
        "Frequencia",
        |row| row.frequencia as f64,
        SeriesColors::fill(TEAL_FILL),
    )
    .build()
}

/// Male counts are negated so both sexes share the vertical axis.
/// Renderers show [`pyramid_display_value`] instead of the raw value.
pub fn age_pyramid_series(rows: &[AgeProfile]) -> Option<ChartSeries> {
    SeriesBuilder::new(rows, |row| row.faixa_etaria.clone())
        .dataset(
            "Masculino",
            |row| -(row.masculino as f64),
            SeriesColors::fill(PYRAMID_MALE_FILL),
        )
        .dataset(
            "Feminino",
            |row| row.feminino as f64,
            SeriesColors::fill(PYRAMID_FEMALE_FILL),
        )
        .build()
}

/// Value to print in ticks and tooltips of a mirrored chart.
pub fn pyramid_display_value(raw: f64) -> f64 {
    raw.abs()
}

pub fn disability_series(rows: &[DisabilityPrevalence]) -> Option<ChartSeries> {
    SeriesBuilder::new(rows, |row| row.tipo.clone())
        .dataset(
            "Numero de Pacientes",
            |row| row.total_pacientes as f64,
            SeriesColors::palette(&DONUT_PALETTE),
        )
        .build()
}

/// A ranking table row; `position` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedProfessional {
    pub position: usize,
    pub cns_profissional: Option<String>,
    pub profissional_nome: String,
    pub cbo_descricao: String,
    pub total_atendimentos: u64,
    pub pacientes_unicos: u64,
    pub media_diaria_atendimentos: f64,
}

pub fn productivity_ranking(rows: Vec<ProfessionalProductivity>) -> Vec<RankedProfessional> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| RankedProfessional {
            position: index + 1,
            cns_profissional: row.cns_profissional,
            profissional_nome: row.profissional_nome,
            cbo_descricao: row
                .cbo_descricao
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| MISSING_CBO_PLACEHOLDER.to_string()),
            total_atendimentos: row.total_atendimentos,
            pacientes_unicos: row.pacientes_unicos,
            media_diaria_atendimentos: row.media_diaria_atendimentos,
        })
        .collect()
}

/// The table keeps every row; the map only gets rows it can place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerritorialView {
    pub markers: Vec<MapMarker>,
    pub rows: Vec<MunicipalityAttendance>,
}

impl TerritorialView {
    pub fn new(rows: Vec<MunicipalityAttendance>) -> Self {
        Self {
            markers: select_markers(&rows),
            rows,
        }
    }
}
