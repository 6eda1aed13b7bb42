use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{ConnectInfo, Query, State},
    routing::get,
    Router,
};

use crate::{
    handlers::weather::get_weather,
    models::weather::{QueryKind, WeatherQuery},
    utils::state::AppState,
};

/// One GET route per query kind, all served by the same handler.
pub fn weather_routes() -> Router<Arc<AppState>> {
    QueryKind::ALL
        .into_iter()
        .fold(Router::new(), |router, kind| {
            router.route(
                kind.route(),
                get(
                    move |state: State<Arc<AppState>>,
                          connect_info: ConnectInfo<SocketAddr>,
                          query: Query<WeatherQuery>| {
                        get_weather(kind, state, connect_info, query)
                    },
                ),
            )
        })
}
