/// Absolute URLs of every backend route, derived from one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointMap {
    base_url: String,
}

impl EndpointMap {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn auth_register(&self) -> String {
        self.url("/api/auth/register")
    }

    pub fn auth_login(&self) -> String {
        self.url("/api/auth/login")
    }

    pub fn auth_profile(&self) -> String {
        self.url("/api/auth/profile")
    }

    pub fn services(&self) -> String {
        self.url("/api/services")
    }

    pub fn service_by_slug(&self, slug: &str) -> String {
        self.url(&format!("/api/services/{slug}"))
    }

    pub fn states(&self) -> String {
        self.url("/api/states")
    }

    pub fn state_by_slug(&self, slug: &str) -> String {
        self.url(&format!("/api/states/{slug}"))
    }

    pub fn consultations_public(&self) -> String {
        self.url("/api/consultations/public")
    }

    pub fn callback_requests_public(&self) -> String {
        self.url("/api/callback-requests/public")
    }

    pub fn newsletter_subscribe(&self) -> String {
        self.url("/api/newsletter/subscribe")
    }

    pub fn newsletter_unsubscribe(&self) -> String {
        self.url("/api/newsletter/unsubscribe")
    }

    pub fn rti_applications(&self) -> String {
        self.url("/api/rti-applications")
    }

    pub fn rti_applications_public(&self) -> String {
        format!("{}/public", self.rti_applications())
    }

    pub fn my_rti_applications(&self, page: u32, limit: u32) -> String {
        self.url(&format!(
            "/api/rti-applications/my-applications?page={page}&limit={limit}"
        ))
    }

    pub fn rti_application_by_id(&self, id: i64) -> String {
        self.url(&format!("/api/rti-applications/{id}"))
    }

    pub fn payments_create_order(&self) -> String {
        self.url("/api/payments/create-order")
    }

    pub fn payments_verify(&self) -> String {
        self.url("/api/payments/verify")
    }

    pub fn payments_order_status(&self, order_id: &str) -> String {
        self.url(&format!("/api/payments/order/{order_id}"))
    }

    pub fn contact_public(&self) -> String {
        self.url("/api/contact/public")
    }

    pub fn careers_public(&self) -> String {
        self.url("/api/careers/public")
    }

    pub fn health(&self) -> String {
        self.url("/health")
    }
}
