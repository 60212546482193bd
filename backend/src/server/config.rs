//! HTTP server configuration object and helpers.

use std::fmt;
use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use url::Url;
use smartlearn_backend::outbound::persistence::DbPool;

/// Razorpay credentials and endpoint for the gateway adapter.
pub struct RazorpaySettings {
    pub(crate) base_url: Url,
    pub(crate) key_id: String,
    pub(crate) key_secret: String,
}

impl RazorpaySettings {
    /// Bundle gateway credentials with the API base URL.
    #[must_use]
    pub fn new(base_url: Url, key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            base_url,
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        }
    }
}

// The key secret must never appear in logs.
impl fmt::Debug for RazorpaySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RazorpaySettings")
            .field("base_url", &self.base_url.as_str())
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .finish()
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) razorpay: Option<RazorpaySettings>,
}

impl ServerConfig {
    /// Construct a server configuration using application preferences.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
            razorpay: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When provided together with gateway credentials, the server uses
    /// database-backed services instead of fixtures.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Attach Razorpay credentials for the gateway adapter.
    #[must_use]
    pub fn with_razorpay(mut self, settings: RazorpaySettings) -> Self {
        self.razorpay = Some(settings);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_the_secret() {
        let settings = RazorpaySettings::new(
            Url::parse("https://api.razorpay.invalid/").expect("valid URL"),
            "rzp_test_abc",
            "secret_value",
        );
        let rendered = format!("{settings:?}");
        assert!(rendered.contains("rzp_test_abc"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("secret_value"));
    }
}
