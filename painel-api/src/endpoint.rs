//! Endpoints consumed by the dashboards, each with its declared response type.
//!
//! The response type decides the empty default returned when a fetch fails:
//! an empty object for the KPI endpoint, an empty list for the others.

use painel_core::{
    AgeProfile, AttendancePeriod, DisabilityPrevalence, ExecutiveKpis, MunicipalityAttendance,
    ProfessionalProductivity, TopDiagnosis,
};
use serde::de::DeserializeOwned;

pub trait Endpoint {
    const PATH: &'static str;
    type Response: DeserializeOwned + Default;
}

pub struct KpisPrincipais;
pub struct AtendimentosPorPeriodo;
pub struct TopDiagnosticos;
pub struct PerfilEtario;
pub struct PrevalenciaDeficiencias;
pub struct RankingProfissionais;
pub struct AtendimentosPorMunicipio;

impl Endpoint for KpisPrincipais {
    const PATH: &'static str = "/api/indicadores/executivo/kpis_principais";
    type Response = ExecutiveKpis;
}

impl Endpoint for AtendimentosPorPeriodo {
    const PATH: &'static str = "/api/indicadores/executivo/atendimentos_por_periodo";
    type Response = Vec<AttendancePeriod>;
}

impl Endpoint for TopDiagnosticos {
    const PATH: &'static str = "/api/indicadores/assistencial/top_diagnosticos";
    type Response = Vec<TopDiagnosis>;
}

impl Endpoint for PerfilEtario {
    const PATH: &'static str = "/api/indicadores/assistencial/perfil_etario";
    type Response = Vec<AgeProfile>;
}

impl Endpoint for PrevalenciaDeficiencias {
    const PATH: &'static str = "/api/indicadores/assistencial/prevalencia_deficiencias";
    type Response = Vec<DisabilityPrevalence>;
}

impl Endpoint for RankingProfissionais {
    const PATH: &'static str = "/api/indicadores/produtividade/ranking_profissionais";
    type Response = Vec<ProfessionalProductivity>;
}

impl Endpoint for AtendimentosPorMunicipio {
    const PATH: &'static str = "/api/indicadores/territorial/atendimentos_por_municipio";
    type Response = Vec<MunicipalityAttendance>;
}
