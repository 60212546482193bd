//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CheckoutCommand, EnrollmentCommand, EnrollmentQuery, FIXTURE_GATEWAY_KEY_ID,
    FixtureCheckoutCommand, FixtureEnrollmentCommand, FixtureEnrollmentQuery,
    FixturePaymentVerificationCommand, PaymentVerificationCommand,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub enrollments: Arc<dyn EnrollmentCommand>,
    pub enrollments_query: Arc<dyn EnrollmentQuery>,
    pub checkout: Arc<dyn CheckoutCommand>,
    pub payments: Arc<dyn PaymentVerificationCommand>,
}

impl Default for HttpStatePorts {
    fn default() -> Self {
        Self {
            enrollments: Arc::new(FixtureEnrollmentCommand),
            enrollments_query: Arc::new(FixtureEnrollmentQuery),
            checkout: Arc::new(FixtureCheckoutCommand),
            payments: Arc::new(FixturePaymentVerificationCommand),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub enrollments: Arc<dyn EnrollmentCommand>,
    pub enrollments_query: Arc<dyn EnrollmentQuery>,
    pub checkout: Arc<dyn CheckoutCommand>,
    pub payments: Arc<dyn PaymentVerificationCommand>,
    /// Public gateway key id served by `GET /payments/key`.
    ///
    /// Held in state so the endpoint answers without touching the gateway
    /// port; the key secret never appears here.
    pub payment_key_id: String,
}

impl HttpState {
    /// Construct state from a ports bundle and the public gateway key.
    ///
    /// # Examples
    /// ```
    /// use smartlearn_backend::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts::default(), "rzp_test_abc");
    /// assert_eq!(state.payment_key_id, "rzp_test_abc");
    /// ```
    pub fn new(ports: HttpStatePorts, payment_key_id: impl Into<String>) -> Self {
        let HttpStatePorts {
            enrollments,
            enrollments_query,
            checkout,
            payments,
        } = ports;
        Self {
            enrollments,
            enrollments_query,
            checkout,
            payments,
            payment_key_id: payment_key_id.into(),
        }
    }

    /// State backed entirely by fixture ports, for boot without dependencies.
    pub fn fixtures() -> Self {
        Self::new(HttpStatePorts::default(), FIXTURE_GATEWAY_KEY_ID)
    }
}
