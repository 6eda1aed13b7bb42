use crate::utils::{
    config::{Config, ConfigError},
    gismeteo::GismeteoClient,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gismeteo: GismeteoClient,
}

impl AppState {
    pub fn init(config: Config) -> Result<Self, ConfigError> {
        let gismeteo = GismeteoClient::new(&config)?;
        Ok(AppState { config, gismeteo })
    }
}
