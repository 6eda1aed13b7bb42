use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::extract::{ConnectInfo, Query, State};
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::{
    models::{
        error::ProxyError,
        weather::{Coordinate, QueryKind, UpstreamRequest, WeatherQuery},
    },
    utils::state::AppState,
};

pub async fn get_weather(
    kind: QueryKind,
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(params): Query<WeatherQuery>,
) -> Result<String, ProxyError> {
    proxy_weather(&state, kind, params.into(), Some(addr.ip())).await
}

/// Validates the coordinate and forwards the query upstream.
///
/// The request is logged before validation so rejected queries are still
/// audited. The upstream is never contacted for an invalid coordinate.
pub async fn proxy_weather(
    state: &AppState,
    kind: QueryKind,
    coordinate: Coordinate,
    client_ip: Option<IpAddr>,
) -> Result<String, ProxyError> {
    let request = UpstreamRequest::new(state.gismeteo.base_url(), kind, &coordinate);
    let client_ip = client_ip.map(|ip| ip.to_string()).unwrap_or_default();
    let request_time = Utc::now().format("%Y-%m-%d %H:%M:%S");

    info!(
        query = kind.name(),
        url = %request.url,
        client_ip = %client_ip,
        latitude = coordinate.latitude,
        longitude = coordinate.longitude,
        "Request received at {}",
        request_time
    );
    debug!("Sending request to Gismeteo API: {}", request.url);

    coordinate.validate().inspect_err(|_| {
        warn!(
            "Invalid coordinates received. Latitude: {}, Longitude: {}",
            coordinate.latitude, coordinate.longitude
        )
    })?;

    state.gismeteo.fetch(&request).await
}
