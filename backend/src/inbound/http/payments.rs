//! Payment HTTP handlers.
//!
//! ```text
//! POST /payments/create-order
//! POST /payments/verify
//! GET  /payments/key
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    CheckoutOutcome, CreateOrderRequest, GatewayOrder, VerifyPaymentRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::enrollments::{CourseSummaryBody, EnrollmentBody};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_course_id};

/// Request payload for beginning checkout.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateOrderRequestBody {
    #[serde(rename = "courseId")]
    #[schema(format = "uuid")]
    pub course_id: String,
}

/// Request payload for the payment verification callback.
///
/// Field names follow the gateway's checkout callback verbatim so clients
/// can forward its payload unchanged.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct VerifyPaymentRequestBody {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    #[serde(rename = "courseId")]
    #[schema(format = "uuid")]
    pub course_id: String,
}

/// Gateway order descriptor echoed to the checkout UI.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderBody {
    pub id: String,
    /// Amount in minor currency units.
    pub amount: i64,
    pub currency: String,
}

impl From<GatewayOrder> for OrderBody {
    fn from(value: GatewayOrder) -> Self {
        Self {
            id: value.id,
            amount: value.amount_minor,
            currency: value.currency,
        }
    }
}

/// Response payload when the course was free and enrollment completed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FreeEnrollmentResponseBody {
    pub success: bool,
    pub message: String,
    pub enrollment: EnrollmentBody,
    pub is_free: bool,
}

/// Response payload when a gateway order was minted for a paid course.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderCreatedResponseBody {
    pub success: bool,
    pub order: OrderBody,
    pub course: CourseSummaryBody,
    /// Public gateway key id for the checkout UI.
    pub key: String,
}

/// Response payload for a verified payment.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyPaymentResponseBody {
    pub success: bool,
    pub message: String,
    pub enrollment: EnrollmentBody,
}

/// Response payload for the public key endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentKeyResponseBody {
    pub key: String,
}

/// Begin checkout: enroll immediately when the course is free, otherwise
/// mint a gateway order and defer enrollment to verification.
#[utoipa::path(
    post,
    path = "/payments/create-order",
    request_body = CreateOrderRequestBody,
    responses(
        (status = 200, description = "Payment order created", body = OrderCreatedResponseBody),
        (status = 201, description = "Free course, enrolled immediately", body = FreeEnrollmentResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Course not found", body = ErrorSchema),
        (status = 409, description = "Already enrolled", body = ErrorSchema),
        (status = 500, description = "Payment gateway failure", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "createOrder",
    security(("SessionCookie" = []))
)]
#[post("/payments/create-order")]
pub async fn create_order(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateOrderRequestBody>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let course_id = parse_course_id(payload.into_inner().course_id, FieldName::new("courseId"))?;

    let outcome = state
        .checkout
        .create_order(CreateOrderRequest { user_id, course_id })
        .await?;

    Ok(match outcome {
        CheckoutOutcome::Enrolled { enrollment } => {
            HttpResponse::Created().json(FreeEnrollmentResponseBody {
                success: true,
                message: "enrolled in free course".to_owned(),
                enrollment: enrollment.into(),
                is_free: true,
            })
        }
        CheckoutOutcome::PaymentRequired {
            order,
            course,
            key_id,
        } => HttpResponse::Ok().json(OrderCreatedResponseBody {
            success: true,
            order: order.into(),
            course: course.into(),
            key: key_id,
        }),
    })
}

/// Verify a payment callback signature and record the enrollment.
#[utoipa::path(
    post,
    path = "/payments/verify",
    request_body = VerifyPaymentRequestBody,
    responses(
        (status = 201, description = "Payment verified, enrollment created", body = VerifyPaymentResponseBody),
        (status = 400, description = "Signature mismatch or invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 409, description = "Already enrolled", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "verifyPayment",
    security(("SessionCookie" = []))
)]
#[post("/payments/verify")]
pub async fn verify_payment(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<VerifyPaymentRequestBody>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let payload = payload.into_inner();
    let course_id = parse_course_id(payload.course_id, FieldName::new("courseId"))?;

    let enrollment = state
        .payments
        .verify_payment(VerifyPaymentRequest {
            user_id,
            course_id,
            order_id: payload.razorpay_order_id,
            payment_id: payload.razorpay_payment_id,
            signature: payload.razorpay_signature,
        })
        .await?;

    Ok(HttpResponse::Created().json(VerifyPaymentResponseBody {
        success: true,
        message: "payment verified".to_owned(),
        enrollment: enrollment.into(),
    }))
}

/// Expose the public gateway key id for the checkout UI.
#[utoipa::path(
    get,
    path = "/payments/key",
    security([]),
    responses(
        (status = 200, description = "Public gateway key", body = PaymentKeyResponseBody)
    ),
    tags = ["payments"],
    operation_id = "paymentKey"
)]
#[get("/payments/key")]
pub async fn payment_key(state: web::Data<HttpState>) -> web::Json<PaymentKeyResponseBody> {
    web::Json(PaymentKeyResponseBody {
        key: state.payment_key_id.clone(),
    })
}

#[cfg(test)]
#[path = "payments_tests.rs"]
mod tests;
