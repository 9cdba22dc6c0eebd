//! Client for the FileMyRTI backend.
//!
//! [`ApiClient::execute`] is the single request executor. The facades
//! returned by [`ApiClient::auth`], [`ApiClient::payments`] and friends only
//! pick a method and path and encode the payload.

pub mod applications;
pub mod auth;
pub mod careers;
pub mod classify;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod forms;
pub mod health;
pub mod listings;
pub mod payments;
pub mod response;
pub mod routes;

pub use applications::{
    convert_consultation_form, ConsultationForm, PublicRtiApplication, RtiApplication,
    RtiApplicationsApi,
};
pub use auth::{AuthApi, LoginRequest, RegisterRequest};
pub use careers::{CareerApplication, CareersApi, ResumeFile};
pub use client::{
    auth_headers, ApiClient, InMemoryTokenStore, NoToken, RequestOptions, StaticToken,
    TokenStore, REQUEST_TIMEOUT,
};
pub use endpoints::EndpointMap;
pub use error::{ApiError, ErrorKind};
pub use forms::{
    CallbackRequest, CallbackRequestsApi, ConsultationRequest, ConsultationsApi, ContactApi,
    ContactRequest, NewsletterApi, NewsletterRequest,
};
pub use health::HealthApi;
pub use listings::{ServicesApi, StatesApi};
pub use payments::{CreateOrderRequest, PaymentsApi, VerifyPaymentRequest};
pub use response::{ApiResponse, FieldError};

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }

    pub fn services(&self) -> ServicesApi<'_> {
        ServicesApi { client: self }
    }

    pub fn states(&self) -> StatesApi<'_> {
        StatesApi { client: self }
    }

    pub fn consultations(&self) -> ConsultationsApi<'_> {
        ConsultationsApi { client: self }
    }

    pub fn callback_requests(&self) -> CallbackRequestsApi<'_> {
        CallbackRequestsApi { client: self }
    }

    pub fn newsletter(&self) -> NewsletterApi<'_> {
        NewsletterApi { client: self }
    }

    pub fn rti_applications(&self) -> RtiApplicationsApi<'_> {
        RtiApplicationsApi { client: self }
    }

    pub fn payments(&self) -> PaymentsApi<'_> {
        PaymentsApi { client: self }
    }

    pub fn contact(&self) -> ContactApi<'_> {
        ContactApi { client: self }
    }

    pub fn careers(&self) -> CareersApi<'_> {
        CareersApi { client: self }
    }

    pub fn health(&self) -> HealthApi<'_> {
        HealthApi { client: self }
    }
}
