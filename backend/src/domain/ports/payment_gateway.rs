//! Port for the external payment gateway's order API.
//!
//! The gateway is an injected capability: the checkout service asks it to
//! mint an order and never sees credentials beyond the public key id it
//! forwards to clients for the checkout UI.

use async_trait::async_trait;

use super::macros::define_port_error;

/// Maximum receipt label length the gateway accepts.
pub const RECEIPT_MAX_LEN: usize = 40;

define_port_error! {
    /// Errors raised by payment gateway adapters.
    pub enum PaymentGatewayError {
        /// Request could not reach the gateway.
        Transport { message: String } =>
            "payment gateway request failed: {message}",
        /// Request exceeded the configured deadline.
        Timeout { message: String } =>
            "payment gateway request timed out: {message}",
        /// The gateway refused the order request.
        Rejected { message: String } =>
            "payment gateway rejected the order: {message}",
        /// The gateway response could not be decoded.
        Decode { message: String } =>
            "payment gateway response could not be decoded: {message}",
    }
}

/// Audit metadata attached to a gateway order for reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderNotes {
    /// Course the order pays for.
    pub course_id: String,
    /// Paying user.
    pub user_id: String,
    /// Course title at order time.
    pub course_title: String,
}

/// Request to mint a payment order at the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    /// Amount in minor currency units.
    pub amount_minor: i64,
    /// ISO currency code.
    pub currency: String,
    /// Receipt label, at most [`RECEIPT_MAX_LEN`] characters.
    pub receipt: String,
    /// Opaque reconciliation metadata.
    pub notes: OrderNotes,
}

/// Order descriptor returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayOrder {
    /// Gateway-assigned opaque order id.
    pub id: String,
    /// Echoed amount in minor units.
    pub amount_minor: i64,
    /// Echoed currency code.
    pub currency: String,
}

/// Port for creating payment orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Mint an order at the gateway.
    async fn create_order(&self, request: &OrderRequest)
    -> Result<GatewayOrder, PaymentGatewayError>;

    /// Public key identifier clients need to open the checkout UI.
    ///
    /// Safe to expose; the key secret never leaves the adapter.
    fn key_id(&self) -> &str;
}

/// Fixture gateway returning a canned order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePaymentGateway;

/// Key id reported by [`FixturePaymentGateway`].
pub const FIXTURE_GATEWAY_KEY_ID: &str = "rzp_test_fixture";

#[async_trait]
impl PaymentGateway for FixturePaymentGateway {
    async fn create_order(
        &self,
        request: &OrderRequest,
    ) -> Result<GatewayOrder, PaymentGatewayError> {
        Ok(GatewayOrder {
            id: "order_fixture".to_owned(),
            amount_minor: request.amount_minor,
            currency: request.currency.clone(),
        })
    }

    fn key_id(&self) -> &str {
        FIXTURE_GATEWAY_KEY_ID
    }
}
