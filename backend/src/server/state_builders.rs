//! Builders selecting real adapter-backed services or fixture fallbacks.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use smartlearn_backend::domain::ports::{
    CheckoutCommand, EnrollmentCommand, EnrollmentQuery, PaymentVerificationCommand,
};
use smartlearn_backend::domain::{CheckoutService, EnrollmentService, PaymentVerificationService};
use smartlearn_backend::inbound::http::state::{HttpState, HttpStatePorts};
use smartlearn_backend::outbound::persistence::{
    DbPool, DieselCourseCatalogue, DieselEnrollmentRepository,
};
use smartlearn_backend::outbound::razorpay::RazorpayHttpGateway;

use super::{RazorpaySettings, ServerConfig};

/// Build the shared HTTP state from configured adapters.
///
/// Database-backed services require both a connection pool and gateway
/// credentials; anything less falls back to fixture ports so the server
/// still boots for local development.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let state = match (&config.db_pool, &config.razorpay) {
        (Some(pool), Some(razorpay)) => build_adapter_backed_state(pool, razorpay)?,
        (pool, razorpay) => {
            warn!(
                db_configured = pool.is_some(),
                gateway_configured = razorpay.is_some(),
                "incomplete configuration; serving fixture ports"
            );
            HttpState::fixtures()
        }
    };
    Ok(web::Data::new(state))
}

fn build_adapter_backed_state(
    pool: &DbPool,
    razorpay: &RazorpaySettings,
) -> std::io::Result<HttpState> {
    let gateway = RazorpayHttpGateway::new(
        razorpay.base_url.clone(),
        razorpay.key_id.clone(),
        razorpay.key_secret.clone(),
    )
    .map_err(|err| std::io::Error::other(format!("gateway client construction failed: {err}")))?;

    let catalogue = Arc::new(DieselCourseCatalogue::new(pool.clone()));
    let enrollments = Arc::new(DieselEnrollmentRepository::new(pool.clone()));

    let checkout = Arc::new(CheckoutService::new(
        catalogue.clone(),
        enrollments.clone(),
        Arc::new(gateway),
    ));
    let payments = Arc::new(PaymentVerificationService::new(
        enrollments.clone(),
        razorpay.key_secret.clone(),
    ));
    let enrollment_service = Arc::new(EnrollmentService::new(catalogue, enrollments));

    Ok(HttpState::new(
        HttpStatePorts {
            enrollments: enrollment_service.clone() as Arc<dyn EnrollmentCommand>,
            enrollments_query: enrollment_service as Arc<dyn EnrollmentQuery>,
            checkout: checkout as Arc<dyn CheckoutCommand>,
            payments: payments as Arc<dyn PaymentVerificationCommand>,
        },
        razorpay.key_id.clone(),
    ))
}
