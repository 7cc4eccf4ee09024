//! HTTP access to the indicators API and the per-dashboard load pipelines.

pub mod client;
pub mod config;
pub mod dashboards;
pub mod endpoint;
pub mod transport;

pub use client::{build_url, ApiClient, FetchError, FetchResult};
pub use config::ApiConfig;
pub use dashboards::{
    latest_only, load_assistencial, load_executive, load_productivity, load_territorial,
};
pub use endpoint::Endpoint;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
