use serde::{Deserialize, Serialize};

use super::client::{ApiClient, RequestOptions};
use super::{ApiError, ApiResponse};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub struct AuthApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl AuthApi<'_> {
    pub async fn register(&self, user: &RegisterRequest) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().auth_register();
        self.client
            .execute(&endpoint, RequestOptions::post(user)?)
            .await
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().auth_login();
        self.client
            .execute(&endpoint, RequestOptions::post(credentials)?)
            .await
    }

    /// Profile of the user whose token the client carries.
    pub async fn profile(&self) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().auth_profile();
        self.client.execute(&endpoint, RequestOptions::get()).await
    }
}
