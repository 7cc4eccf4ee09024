//! Row shapes returned by the indicators API.
//!
//! Field names follow the wire format. Numeric fields tolerate `null` and
//! missing values (they coalesce to zero); nothing else is validated here.

use serde::{Deserialize, Deserializer, Serialize};

/// `/executivo/kpis_principais`: the only single-object endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveKpis {
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_atendimentos_mes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pacientes_unicos_mes: Option<f64>,
    /// Money is serialised by the server as a decimal string.
    #[serde(default, deserialize_with = "lenient_number")]
    pub faturamento_estimado_mes: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendancePeriod {
    #[serde(default, deserialize_with = "null_as_default")]
    pub periodo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_atendimentos: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pacientes_unicos: u64,
}

/// One CID-10 entry of the diagnosis ranking (most frequent first).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopDiagnosis {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cid_codigo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cid_descricao: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub frequencia: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub faixa_etaria: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub masculino: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feminino: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisabilityPrevalence {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tipo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pacientes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalProductivity {
    #[serde(default)]
    pub cns_profissional: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profissional_nome: String,
    #[serde(default)]
    pub cbo_descricao: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_atendimentos: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pacientes_unicos: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_diaria_atendimentos: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MunicipalityAttendance {
    #[serde(default)]
    pub municipio_ibge: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub municipio_nome: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uf: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pacientes: u64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Accept `123`, `123.4`, `"123.4"` or `null`; unparsable text becomes `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(number)) => Some(number),
        Some(NumberOrText::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    })
}
