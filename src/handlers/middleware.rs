use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::IntoResponse,
};
use http::{header, HeaderMap};
use tracing::info;

use crate::utils::gismeteo::TOKEN_HEADER;

/// Logs every inbound request and the status it was answered with.
pub async fn log_requests(req: Request, next: Next) -> impl IntoResponse {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let remote_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_default();

    info!(
        "Incoming request: {} {} from {}, Headers: {}",
        method,
        path,
        remote_ip,
        format_headers(req.headers())
    );

    let response = next.run(req).await;

    info!(
        "Response for {}: Status Code: {}",
        path,
        response.status().as_u16()
    );

    response
}

fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            let redacted = [header::AUTHORIZATION, header::COOKIE, header::PROXY_AUTHORIZATION]
                .contains(name)
                || name.as_str().eq_ignore_ascii_case(TOKEN_HEADER);
            if redacted {
                format!("{}: <redacted>", name)
            } else {
                format!("{}: {}", name, value.to_str().unwrap_or("<binary>"))
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
