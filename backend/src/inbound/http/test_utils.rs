//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::{HttpResponse, test};

use crate::domain::{Error, UserId};
use crate::inbound::http::session::SessionContext;

/// Fixed user id persisted by [`test_login`].
pub const TEST_USER_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Route handler standing in for the identity collaborator: persists
/// [`TEST_USER_ID`] in the session so protected endpoints can be exercised.
pub async fn test_login(session: SessionContext) -> Result<HttpResponse, Error> {
    let id = UserId::new(TEST_USER_ID).expect("fixture id is a valid UUID");
    session.persist_user(&id)?;
    Ok(HttpResponse::Ok().finish())
}

/// Call the `/test-login` route and return the issued session cookie.
pub async fn login_and_get_cookie(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
) -> Cookie<'static> {
    let res = test::call_service(
        app,
        test::TestRequest::get().uri("/test-login").to_request(),
    )
    .await;
    assert!(res.status().is_success());
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}
