//! Fetch client: one timed GET per call, every failure folded into a
//! `FetchResult` with the endpoint's empty default.

use chrono::NaiveDate;
use log::{debug, warn};
use painel_core::period::DATE_FORMAT;
use painel_core::DateRange;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::endpoint::Endpoint;
use crate::transport::{HttpRequest, ReqwestTransport, Transport, TransportError};

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Outcome of a fetch. When `error` is set, `data` is the type's empty default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchResult<T> {
    pub data: T,
    pub error: Option<String>,
}

impl<T: Default> FetchResult<T> {
    pub fn ok(data: T) -> Self {
        Self { data, error: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            data: T::default(),
            error: Some(message.into()),
        }
    }
}

impl<T> FetchResult<T> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<T, String> {
        match self.error {
            Some(message) => Err(message),
            None => Ok(self.data),
        }
    }
}

/// Failure kinds before they are collapsed into the message channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Requisicao excedeu o tempo limite")]
    Timeout,
    #[error("Erro ao buscar {endpoint}")]
    Network {
        endpoint: &'static str,
        reason: String,
    },
    #[error("Erro {status}: {detail}")]
    Http { status: u16, detail: String },
    #[error("Erro ao buscar {endpoint}")]
    Decode {
        endpoint: &'static str,
        reason: String,
    },
}

/// `{base}{path}` plus `data_inicio` / `data_fim` for whichever bound is given.
pub fn build_url(
    base_url: &str,
    path: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> String {
    let params: Vec<String> = [("data_inicio", start), ("data_fim", end)]
        .into_iter()
        .filter_map(|(name, date)| date.map(|d| format!("{name}={}", d.format(DATE_FORMAT))))
        .collect();

    if params.is_empty() {
        format!("{base_url}{path}")
    } else {
        format!("{base_url}{path}?{}", params.join("&"))
    }
}

pub struct ApiClient<T = ReqwestTransport> {
    config: ApiConfig,
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::default())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch `E` for the whole range, or with no date filter when `None`.
    pub async fn fetch<E: Endpoint>(&self, range: Option<&DateRange>) -> FetchResult<E::Response> {
        self.fetch_between::<E>(range.map(DateRange::start), range.map(DateRange::end))
            .await
    }

    /// Never fails: timeouts, transport errors, error statuses and bad
    /// bodies all come back as `FetchResult::failed`.
    pub async fn fetch_between<E: Endpoint>(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> FetchResult<E::Response> {
        match self.try_fetch::<E>(start, end).await {
            Ok(data) => FetchResult::ok(data),
            Err(err) => {
                warn!("{} failed: {err:?}", E::PATH);
                FetchResult::failed(err.to_string())
            }
        }
    }

    async fn try_fetch<E: Endpoint>(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<E::Response, FetchError> {
        let request = HttpRequest {
            url: build_url(&self.config.base_url, E::PATH, start, end),
            headers: self.headers(),
            timeout: self.config.timeout,
        };
        debug!("GET {}", request.url);

        let response = self
            .transport
            .get(request)
            .await
            .map_err(|err| match err {
                TransportError::Timeout => FetchError::Timeout,
                TransportError::Network(reason) => FetchError::Network {
                    endpoint: E::PATH,
                    reason,
                },
            })?;

        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
                detail: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|err| FetchError::Decode {
            endpoint: E::PATH,
            reason: err.to_string(),
        })
    }

    fn headers(&self) -> Vec<(String, String)> {
        self.config
            .api_key
            .iter()
            .map(|key| (API_KEY_HEADER.to_string(), key.clone()))
            .collect()
    }
}
