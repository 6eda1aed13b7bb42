use reqwest::Client;
use tracing::{error, info, warn};

use crate::{
    models::{
        error::{error_chain, ProxyError},
        weather::UpstreamRequest,
    },
    utils::config::{Config, ConfigError},
};

pub const TOKEN_HEADER: &str = "X-Gismeteo-Token";
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Forwards weather queries to Gismeteo and normalizes the outcome.
#[derive(Clone)]
pub struct GismeteoClient {
    http_client: Client,
    token: String,
    base_url: String,
}

impl GismeteoClient {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        if config.gismeteo_token.trim().is_empty() {
            return Err(ConfigError::Missing("GISMETEO_TOKEN"));
        }

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(0);

        if config.accept_invalid_certs {
            warn!("Upstream TLS certificate validation is disabled (GISMETEO_ACCEPT_INVALID_CERTS)");
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }

        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            token: config.gismeteo_token.clone(),
            base_url: config.gismeteo_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One GET per call. No retry, no cache.
    pub async fn fetch(&self, request: &UpstreamRequest) -> Result<String, ProxyError> {
        let result = self.send(request).await;

        match &result {
            Ok(body) => info!(
                "Successful response from {}. Response length: {} characters",
                request.url,
                body.chars().count()
            ),
            Err(err @ ProxyError::Unexpected(_)) => {
                error!(url = %request.url, "Error processing request: {}", err)
            }
            Err(err) => warn!(
                url = %request.url,
                status = %err.status(),
                kind = err.kind(),
                "Failed request: {}",
                err
            ),
        }

        result
    }

    async fn send(&self, request: &UpstreamRequest) -> Result<String, ProxyError> {
        let response = self
            .http_client
            .get(&request.url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            // The status must survive even if the error body can't be read.
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                format!(
                    "Response status code does not indicate success: {} ({}).",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )
            } else {
                body
            };
            return Err(ProxyError::UpstreamHttp { status, message });
        }

        response
            .text()
            .await
            .map_err(|err| ProxyError::Transport(error_chain(&err)))
    }
}
