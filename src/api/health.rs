use serde_json::Value;

use super::client::ApiClient;
use super::ApiError;

pub struct HealthApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl HealthApi<'_> {
    /// Raw health document of the backend, whatever its status code.
    /// Any failure is reported as the backend being unreachable.
    pub async fn check(&self) -> Result<Value, ApiError> {
        let endpoint = self.client.endpoints().health();
        match tokio::time::timeout(self.client.timeout(), self.probe(&endpoint)).await {
            Ok(Ok(body)) => Ok(body),
            Ok(Err(e)) => {
                log::debug!("Health probe to {} failed: {}", endpoint, e);
                Err(ApiError::backend_unreachable())
            }
            Err(_) => Err(ApiError::backend_unreachable()),
        }
    }

    async fn probe(&self, endpoint: &str) -> Result<Value, reqwest::Error> {
        self.client
            .http()
            .get(endpoint)
            .send()
            .await?
            .json::<Value>()
            .await
    }
}
