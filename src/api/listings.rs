//! Read-only service and state listings served by the backend.

use super::client::{ApiClient, RequestOptions};
use super::{ApiError, ApiResponse};

pub struct ServicesApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl ServicesApi<'_> {
    pub async fn all(&self) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().services();
        self.client.execute(&endpoint, RequestOptions::get()).await
    }

    pub async fn by_slug(&self, slug: &str) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().service_by_slug(slug);
        self.client.execute(&endpoint, RequestOptions::get()).await
    }
}

pub struct StatesApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl StatesApi<'_> {
    pub async fn all(&self) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().states();
        self.client.execute(&endpoint, RequestOptions::get()).await
    }

    pub async fn by_slug(&self, slug: &str) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().state_by_slug(slug);
        self.client.execute(&endpoint, RequestOptions::get()).await
    }
}
