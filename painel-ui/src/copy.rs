//! User-facing text. Written without diacritics throughout, matching the
//! strings the API client and view models already emit.

pub const LOAD_FAILURE_TITLE: &str = "Falha ao carregar dados";

pub const EMPTY_EXECUTIVE: &str = "Sem dados para o periodo selecionado.";
pub const EMPTY_ATTENDANCE: &str = "Sem dados de atendimentos para o periodo selecionado.";
pub const EMPTY_ASSISTENCIAL: &str = "Sem dados assistenciais para o periodo selecionado.";
pub const EMPTY_DIAGNOSES: &str = "Sem diagnosticos registrados no periodo.";
pub const EMPTY_AGE_PROFILE: &str = "Sem dados de faixa etaria no periodo.";
pub const EMPTY_DISABILITIES: &str = "Sem registros de deficiencias no periodo.";
pub const EMPTY_PRODUCTIVITY: &str = "Nao ha dados de produtividade para o periodo selecionado.";
pub const EMPTY_MUNICIPALITIES: &str = "Nao ha dados de municipios para o periodo selecionado.";

pub const CHART_ATTENDANCE: &str = "Evolucao Mensal";
pub const CHART_DIAGNOSES: &str = "Top 15 Diagnosticos (CID-10)";
pub const CHART_AGE_PYRAMID: &str = "Piramide Etaria de Pacientes";
pub const CHART_DISABILITIES: &str = "Prevalencia de Deficiencias";

pub const PRODUCTIVITY_HEADERS: [&str; 6] = [
    "#",
    "Profissional",
    "CBO",
    "Total de Atendimentos",
    "Pacientes Unicos",
    "Media Diaria",
];
pub const MUNICIPALITY_HEADERS: [&str; 4] = ["#", "Municipio", "UF", "No de Pacientes"];

/// Every string above, for checks that apply to all of them.
pub fn all() -> Vec<&'static str> {
    let mut texts = vec![
        LOAD_FAILURE_TITLE,
        EMPTY_EXECUTIVE,
        EMPTY_ATTENDANCE,
        EMPTY_ASSISTENCIAL,
        EMPTY_DIAGNOSES,
        EMPTY_AGE_PROFILE,
        EMPTY_DISABILITIES,
        EMPTY_PRODUCTIVITY,
        EMPTY_MUNICIPALITIES,
        CHART_ATTENDANCE,
        CHART_DIAGNOSES,
        CHART_AGE_PYRAMID,
        CHART_DISABILITIES,
    ];
    texts.extend(PRODUCTIVITY_HEADERS);
    texts.extend(MUNICIPALITY_HEADERS);
    texts
}
