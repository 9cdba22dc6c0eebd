use crate::api::{ApiClient, ApiError};
use crate::config::PortalConfig;

/// Shared state of the catalog server.
#[derive(Clone)]
pub struct AppState {
    pub config: PortalConfig,
    pub api: ApiClient,
}

impl AppState {
    pub fn new(config: PortalConfig) -> Result<Self, ApiError> {
        let api = ApiClient::from_config(&config)?;
        Ok(Self { config, api })
    }

    pub fn with_client(config: PortalConfig, api: ApiClient) -> Self {
        Self { config, api }
    }
}
