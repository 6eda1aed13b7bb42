use std::{error::Error, net::SocketAddr};

use axum::serve;
use bsp_weather::{
    routes::{init_tracing, make_app},
    utils::{config::Config, state::AppState},
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let config = Config::init()?;
    init_tracing(&config);
    info!("Configuration loaded successfully");

    let bind_addr = config.bind_addr;
    let state = AppState::init(config)?;
    info!("External clients initialized successfully");

    let app = make_app(state);

    let listener = TcpListener::bind(bind_addr).await?;
    info!("Listening on http://{}", bind_addr);

    serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
