//! Backend entry-point: wires REST endpoints, persistence, and OpenAPI docs.

mod server;

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use url::Url;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{RazorpaySettings, ServerConfig};
use smartlearn_backend::inbound::http::health::HealthState;
use smartlearn_backend::outbound::persistence::{DbPool, PoolConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_RAZORPAY_BASE_URL: &str = "https://api.razorpay.com/";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key = load_session_key()?;

    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let mut config = ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr);

    if let Ok(database_url) = env::var("DATABASE_URL") {
        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
        config = config.with_db_pool(pool);
    }

    if let Some(settings) = load_razorpay_settings()? {
        config = config.with_razorpay(settings);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(health_state, config)?;
    server.await
}

/// Read the session signing key, falling back to an ephemeral key in
/// development builds only.
fn load_session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}

/// Read gateway credentials from the environment.
///
/// Both halves of the credential pair must be present; a lone key id or
/// secret is a configuration mistake and fails the boot rather than
/// silently serving fixtures.
fn load_razorpay_settings() -> std::io::Result<Option<RazorpaySettings>> {
    let key_id = env::var("RAZORPAY_KEY_ID").ok();
    let key_secret = env::var("RAZORPAY_KEY_SECRET").ok();
    match (key_id, key_secret) {
        (Some(key_id), Some(key_secret)) => {
            let base_url = env::var("RAZORPAY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_RAZORPAY_BASE_URL.into());
            let base_url = Url::parse(&base_url)
                .map_err(|e| std::io::Error::other(format!("invalid RAZORPAY_BASE_URL: {e}")))?;
            Ok(Some(RazorpaySettings::new(base_url, key_id, key_secret)))
        }
        (None, None) => Ok(None),
        _ => Err(std::io::Error::other(
            "RAZORPAY_KEY_ID and RAZORPAY_KEY_SECRET must be set together",
        )),
    }
}
