use axum::{middleware::from_fn, response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

pub mod weather;
pub use weather::weather_routes;

use crate::{
    handlers::middleware::log_requests,
    utils::{config::Config, state::AppState},
};

pub fn init_tracing(config: &Config) {
    let level = match config.log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_default(Level::WARN);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();
}

pub fn make_app(state: AppState) -> Router {
    info!("Initializing application...");
    let state = Arc::new(state);

    let app = Router::new()
        .route("/", get(health_check))
        .nest("/api/weather", weather_routes())
        .layer(from_fn(log_requests))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    info!("Application initialized successfully");

    app
}

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({"message": "BSP_Weather API is running"})),
    )
        .into_response()
}
