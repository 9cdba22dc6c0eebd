//! Public lead-capture forms: consultations, callbacks, newsletter, contact.
//! None of these need a logged-in user.

use serde::{Deserialize, Serialize};

use super::client::{ApiClient, RequestOptions};
use super::{ApiError, ApiResponse};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ConsultationRequest {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CallbackRequest {
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_slug: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewsletterRequest {
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub struct ConsultationsApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl ConsultationsApi<'_> {
    pub async fn create_public(&self, data: &ConsultationRequest) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().consultations_public();
        self.client
            .execute(&endpoint, RequestOptions::post(data)?)
            .await
    }
}

pub struct CallbackRequestsApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl CallbackRequestsApi<'_> {
    pub async fn create_public(&self, data: &CallbackRequest) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().callback_requests_public();
        self.client
            .execute(&endpoint, RequestOptions::post(data)?)
            .await
    }
}

pub struct NewsletterApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl NewsletterApi<'_> {
    pub async fn subscribe(&self, data: &NewsletterRequest) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().newsletter_subscribe();
        self.client
            .execute(&endpoint, RequestOptions::post(data)?)
            .await
    }

    pub async fn unsubscribe(&self, data: &NewsletterRequest) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().newsletter_unsubscribe();
        self.client
            .execute(&endpoint, RequestOptions::post(data)?)
            .await
    }
}

pub struct ContactApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl ContactApi<'_> {
    pub async fn create_public(&self, data: &ContactRequest) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().contact_public();
        self.client
            .execute(&endpoint, RequestOptions::post(data)?)
            .await
    }
}
