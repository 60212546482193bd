//! Payment verification service.
//!
//! Authenticates a claimed payment against the gateway's HMAC signature and
//! converts it into a persisted enrollment exactly once. The duplicate
//! pre-check is an early exit; the store's uniqueness constraint settles
//! races between concurrent callbacks.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::checkout_service::map_enrollment_repo_error;
use crate::domain::ports::{
    EnrollmentRepository, PaymentVerificationCommand, VerifyPaymentRequest,
};
use crate::domain::{Enrollment, Error, signature};

/// Payment verification service implementing [`PaymentVerificationCommand`].
#[derive(Clone)]
pub struct PaymentVerificationService<R> {
    enrollments: Arc<R>,
    key_secret: String,
}

impl<R> PaymentVerificationService<R> {
    /// Create the service with the repository and the gateway key secret.
    pub fn new(enrollments: Arc<R>, key_secret: impl Into<String>) -> Self {
        Self {
            enrollments,
            key_secret: key_secret.into(),
        }
    }
}

impl<R> std::fmt::Debug for PaymentVerificationService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The key secret must never appear in logs.
        f.debug_struct("PaymentVerificationService")
            .field("key_secret", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<R> PaymentVerificationCommand for PaymentVerificationService<R>
where
    R: EnrollmentRepository,
{
    async fn verify_payment(&self, request: VerifyPaymentRequest) -> Result<Enrollment, Error> {
        if !signature::verify(
            &self.key_secret,
            &request.order_id,
            &request.payment_id,
            &request.signature,
        ) {
            warn!(
                order_id = %request.order_id,
                user_id = %request.user_id,
                "payment signature mismatch"
            );
            return Err(Error::payment_verification("payment verification failed"));
        }

        let existing = self
            .enrollments
            .find_by_user_and_course(&request.user_id, &request.course_id)
            .await
            .map_err(map_enrollment_repo_error)?;
        if existing.is_some() {
            // Callback delivered more than once; the first delivery won.
            return Err(Error::conflict("already enrolled in this course"));
        }

        let enrollment = Enrollment::completed(
            request.user_id,
            request.course_id,
            request.order_id,
            request.payment_id,
        )
        .map_err(|err| Error::invalid_request(format!("invalid payment reference: {err}")))?;

        let created = self
            .enrollments
            .create(&enrollment)
            .await
            .map_err(map_enrollment_repo_error)?;
        info!(
            course_id = %created.course_id,
            order_id = ?created.order_id,
            "payment verified, enrollment recorded"
        );
        Ok(created)
    }
}

#[cfg(test)]
#[path = "verification_service_tests.rs"]
mod tests;
