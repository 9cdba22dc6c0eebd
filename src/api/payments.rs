use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::client::{ApiClient, RequestOptions};
use super::{ApiError, ApiResponse};

pub const DEFAULT_CURRENCY: &str = "INR";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CreateOrderRequest {
    /// Amount in the smallest currency unit.
    pub amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<BTreeMap<String, String>>,
}

#[derive(Serialize, Debug)]
struct OrderPayload<'a> {
    amount: u64,
    currency: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    receipt: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a BTreeMap<String, String>>,
}

impl<'a> From<&'a CreateOrderRequest> for OrderPayload<'a> {
    fn from(order: &'a CreateOrderRequest) -> Self {
        Self {
            amount: order.amount,
            currency: order.currency.as_deref().unwrap_or(DEFAULT_CURRENCY),
            receipt: order.receipt.as_deref(),
            notes: order.notes.as_ref(),
        }
    }
}

/// Razorpay checkout result, forwarded for server-side signature checks.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct VerifyPaymentRequest {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
    pub order_id: String,
}

pub struct PaymentsApi<'a> {
    pub(super) client: &'a ApiClient,
}

impl PaymentsApi<'_> {
    /// Create an order; currency defaults to [`DEFAULT_CURRENCY`].
    pub async fn create_order(&self, order: &CreateOrderRequest) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().payments_create_order();
        let payload = OrderPayload::from(order);
        self.client
            .execute(&endpoint, RequestOptions::post(&payload)?)
            .await
    }

    pub async fn verify(&self, payment: &VerifyPaymentRequest) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().payments_verify();
        self.client
            .execute(&endpoint, RequestOptions::post(payment)?)
            .await
    }

    pub async fn order_status(&self, order_id: &str) -> Result<ApiResponse, ApiError> {
        let endpoint = self.client.endpoints().payments_order_status(order_id);
        self.client.execute(&endpoint, RequestOptions::get()).await
    }
}
