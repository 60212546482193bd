//! Tests for payment HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockCheckoutCommand, MockPaymentVerificationCommand};
use crate::domain::{Course, CourseId, Enrollment, Error, UserId};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::test_utils::{TEST_USER_ID, login_and_get_cookie, test_login};

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(crate::inbound::http::test_utils::test_session_middleware())
        .route("/test-login", web::get().to(test_login))
        .service(create_order)
        .service(verify_payment)
        .service(payment_key)
}

fn state_with_checkout(checkout: MockCheckoutCommand) -> HttpState {
    HttpState::new(
        HttpStatePorts {
            checkout: Arc::new(checkout),
            ..HttpStatePorts::default()
        },
        "rzp_test_abc",
    )
}

fn state_with_payments(payments: MockPaymentVerificationCommand) -> HttpState {
    HttpState::new(
        HttpStatePorts {
            payments: Arc::new(payments),
            ..HttpStatePorts::default()
        },
        "rzp_test_abc",
    )
}

fn test_user() -> UserId {
    UserId::new(TEST_USER_ID).expect("fixture id")
}

fn verify_payload(course_id: &CourseId) -> Value {
    json!({
        "razorpay_order_id": "order_live_1",
        "razorpay_payment_id": "pay_live_1",
        "razorpay_signature": "00".repeat(32),
        "courseId": course_id.as_ref(),
    })
}

#[actix_web::test]
async fn create_order_enrolls_free_course_with_201() {
    let enrollment = Enrollment::free(test_user(), CourseId::random());
    let mut checkout = MockCheckoutCommand::new();
    let echoed = enrollment.clone();
    checkout.expect_create_order().times(1).returning(move |_| {
        Ok(CheckoutOutcome::Enrolled {
            enrollment: echoed.clone(),
        })
    });

    let app = actix_test::init_service(test_app(state_with_checkout(checkout))).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/payments/create-order")
            .cookie(cookie)
            .set_json(json!({ "courseId": enrollment.course_id.as_ref() }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["isFree"], json!(true));
    assert_eq!(body["enrollment"]["paymentStatus"], json!("free"));
}

#[actix_web::test]
async fn create_order_returns_order_course_and_key_for_paid_course() {
    let course =
        Course::new(CourseId::random(), "Rust for Backend Engineers", 499.0).expect("valid course");
    let mut checkout = MockCheckoutCommand::new();
    let echoed = course.clone();
    checkout.expect_create_order().times(1).returning(move |_| {
        Ok(CheckoutOutcome::PaymentRequired {
            order: GatewayOrder {
                id: "order_live_1".to_owned(),
                amount_minor: 49_900,
                currency: "INR".to_owned(),
            },
            course: echoed.clone(),
            key_id: "rzp_test_abc".to_owned(),
        })
    });

    let app = actix_test::init_service(test_app(state_with_checkout(checkout))).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/payments/create-order")
            .cookie(cookie)
            .set_json(json!({ "courseId": course.id.as_ref() }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["order"]["id"], json!("order_live_1"));
    assert_eq!(body["order"]["amount"], json!(49_900));
    assert_eq!(body["order"]["currency"], json!("INR"));
    assert_eq!(body["course"]["title"], json!("Rust for Backend Engineers"));
    assert_eq!(body["course"]["price"], json!(499.0));
    assert_eq!(body["key"], json!("rzp_test_abc"));
}

#[actix_web::test]
async fn create_order_requires_authenticated_session() {
    let mut checkout = MockCheckoutCommand::new();
    checkout.expect_create_order().never();
    let app = actix_test::init_service(test_app(state_with_checkout(checkout))).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/payments/create-order")
            .set_json(json!({ "courseId": CourseId::random().as_ref() }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn create_order_maps_gateway_failure_to_500() {
    let mut checkout = MockCheckoutCommand::new();
    checkout
        .expect_create_order()
        .returning(|_| Err(Error::payment_gateway("payment order creation failed")));

    let app = actix_test::init_service(test_app(state_with_checkout(checkout))).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/payments/create-order")
            .cookie(cookie)
            .set_json(json!({ "courseId": CourseId::random().as_ref() }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], json!("payment order creation failed"));
}

#[actix_web::test]
async fn verify_payment_returns_created_enrollment() {
    let course_id = CourseId::random();
    let enrollment = Enrollment::completed(
        test_user(),
        course_id.clone(),
        "order_live_1",
        "pay_live_1",
    )
    .expect("valid enrollment");
    let mut payments = MockPaymentVerificationCommand::new();
    let echoed = enrollment.clone();
    payments
        .expect_verify_payment()
        .times(1)
        .withf(|request| {
            request.order_id == "order_live_1" && request.payment_id == "pay_live_1"
        })
        .returning(move |_| Ok(echoed.clone()));

    let app = actix_test::init_service(test_app(state_with_payments(payments))).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/payments/verify")
            .cookie(cookie)
            .set_json(verify_payload(&course_id))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["enrollment"]["paymentStatus"], json!("completed"));
    assert_eq!(body["enrollment"]["orderId"], json!("order_live_1"));
    assert_eq!(body["enrollment"]["paymentId"], json!("pay_live_1"));
}

#[actix_web::test]
async fn verify_payment_maps_signature_mismatch_to_400() {
    let mut payments = MockPaymentVerificationCommand::new();
    payments
        .expect_verify_payment()
        .returning(|_| Err(Error::payment_verification("payment verification failed")));

    let app = actix_test::init_service(test_app(state_with_payments(payments))).await;
    let cookie = login_and_get_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/payments/verify")
            .cookie(cookie)
            .set_json(verify_payload(&CourseId::random()))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], json!("payment verification failed"));
}

#[actix_web::test]
async fn verify_payment_rejects_unknown_fields() {
    let mut payments = MockPaymentVerificationCommand::new();
    payments.expect_verify_payment().never();

    let app = actix_test::init_service(test_app(state_with_payments(payments))).await;
    let cookie = login_and_get_cookie(&app).await;

    let mut payload = verify_payload(&CourseId::random());
    payload["unexpected"] = json!("field");

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/payments/verify")
            .cookie(cookie)
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn payment_key_is_public() {
    let app = actix_test::init_service(test_app(HttpState::new(
        HttpStatePorts::default(),
        "rzp_test_abc",
    )))
    .await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/payments/key")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "key": "rzp_test_abc" }));
}
