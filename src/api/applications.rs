use serde::{Deserialize, Serialize};

use super::client::{ApiClient, RequestOptions};
use super::{ApiError, ApiResponse};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Application submitted without an account, usually right after payment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PublicRtiApplication {
    pub service_id: i64,
    pub state_id: i64,
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rti_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// Application submitted by a logged-in user. Missing address and pincode
/// are sent as `null`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RtiApplication {
    pub service_id: i64,
    pub state_id: i64,
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub rti_query: String,
    pub address: Option<String>,
    pub pincode: Option<String>,
}

/// Consultation form as filled in on the site.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationForm {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    #[serde(default)]
    pub rti_query: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
}

/// Shape a consultation form into an application payload. Blank optional
/// fields become an empty query and null address/pincode.
pub fn convert_consultation_form(
    form: &ConsultationForm,
    service_id: i64,
    state_id: i64,
) -> RtiApplication {
    let non_empty = |value: &Option<String>| value.clone().filter(|s| !s.is_empty());
    RtiApplication {
        service_id,
        state_id,
        full_name: form.full_name.clone(),
        mobile: form.mobile.clone(),
        email: form.email.clone(),
        rti_query: form.rti_query.clone().unwrap_or_default(),
        address: non_empty(&form.address),
        pincode: non_empty(&form.pincode),
    }
}

pub struct RtiApplicationsApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl RtiApplicationsApi<'_> {
    pub async fn create_public(
        &self,
        application: &PublicRtiApplication,
    ) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().rti_applications_public();
        self.client
            .execute(&endpoint, RequestOptions::post(application)?)
            .await
    }

    pub async fn create(&self, application: &RtiApplication) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().rti_applications();
        self.client
            .execute(&endpoint, RequestOptions::post(application)?)
            .await
    }

    /// Applications of the logged-in user, one page at a time.
    pub async fn mine(&self, page: u32, limit: u32) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().my_rti_applications(page, limit);
        self.client.execute(&endpoint, RequestOptions::get()).await
    }

    pub async fn mine_first_page(&self) -> Result<ApiResponse, ApiError> {
        self.mine(DEFAULT_PAGE, DEFAULT_PAGE_SIZE).await
    }

    pub async fn by_id(&self, id: i64) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().rti_application_by_id(id);
        self.client.execute(&endpoint, RequestOptions::get()).await
    }
}
