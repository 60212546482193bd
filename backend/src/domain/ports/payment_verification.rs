//! Driving port for payment verification.

use async_trait::async_trait;

use crate::domain::{CourseId, Enrollment, Error, UserId};

/// Signed proof of payment forwarded from the gateway callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyPaymentRequest {
    /// Authenticated caller.
    pub user_id: UserId,
    /// Course the payment was for.
    pub course_id: CourseId,
    /// Gateway order id referenced by the signature.
    pub order_id: String,
    /// Gateway payment id referenced by the signature.
    pub payment_id: String,
    /// Claimed hex HMAC signature over `order_id + "|" + payment_id`.
    pub signature: String,
}

/// Port for converting a verified payment into an enrollment, exactly once.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentVerificationCommand: Send + Sync {
    /// Verify the signature and persist the completed enrollment.
    async fn verify_payment(&self, request: VerifyPaymentRequest) -> Result<Enrollment, Error>;
}

/// Fixture used when no gateway secret is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePaymentVerificationCommand;

#[async_trait]
impl PaymentVerificationCommand for FixturePaymentVerificationCommand {
    async fn verify_payment(&self, _request: VerifyPaymentRequest) -> Result<Enrollment, Error> {
        Err(Error::service_unavailable(
            "payment verification is not configured",
        ))
    }
}
