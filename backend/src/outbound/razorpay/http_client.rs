//! Reqwest-backed Razorpay gateway adapter.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::{OrderRequestDto, OrderResponseDto};
use crate::domain::ports::{GatewayOrder, OrderRequest, PaymentGateway, PaymentGatewayError};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const ORDERS_PATH: &str = "v1/orders";

/// Gateway adapter performing authenticated HTTP POST requests against the
/// Razorpay orders endpoint.
pub struct RazorpayHttpGateway {
    client: Client,
    base_url: Url,
    key_id: String,
    key_secret: String,
}

impl RazorpayHttpGateway {
    /// Build an adapter with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        key_id: impl Into<String>,
        key_secret: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, key_id, key_secret, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(
        base_url: Url,
        key_id: impl Into<String>,
        key_secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        })
    }

    fn orders_url(&self) -> Result<Url, PaymentGatewayError> {
        self.base_url
            .join(ORDERS_PATH)
            .map_err(|err| PaymentGatewayError::transport(format!("invalid orders URL: {err}")))
    }
}

// The key secret authenticates every outbound request and must stay out of
// logs; Debug prints a placeholder instead.
impl fmt::Debug for RazorpayHttpGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RazorpayHttpGateway")
            .field("base_url", &self.base_url.as_str())
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl PaymentGateway for RazorpayHttpGateway {
    async fn create_order(
        &self,
        request: &OrderRequest,
    ) -> Result<GatewayOrder, PaymentGatewayError> {
        let url = self.orders_url()?;
        let response = self
            .client
            .post(url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&OrderRequestDto::from_domain(request))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        decode_order(body.as_ref())
    }

    fn key_id(&self) -> &str {
        &self.key_id
    }
}

fn decode_order(body: &[u8]) -> Result<GatewayOrder, PaymentGatewayError> {
    let decoded: OrderResponseDto = serde_json::from_slice(body).map_err(|error| {
        PaymentGatewayError::decode(format!("invalid order JSON payload: {error}"))
    })?;
    Ok(decoded.into_domain_order())
}

fn map_transport_error(error: reqwest::Error) -> PaymentGatewayError {
    if error.is_timeout() {
        PaymentGatewayError::timeout(error.to_string())
    } else {
        PaymentGatewayError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> PaymentGatewayError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            PaymentGatewayError::timeout(message)
        }
        _ if status.is_client_error() => PaymentGatewayError::rejected(message),
        _ => PaymentGatewayError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network gateway mapping helpers.

    use super::*;
    use rstest::rstest;

    fn gateway() -> RazorpayHttpGateway {
        RazorpayHttpGateway::new(
            Url::parse("https://api.razorpay.invalid/").expect("valid URL"),
            "rzp_test_abc",
            "secret_value",
        )
        .expect("client builds")
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, "Timeout")]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, "Timeout")]
    #[case::bad_request(StatusCode::BAD_REQUEST, "Rejected")]
    #[case::unauthorized(StatusCode::UNAUTHORIZED, "Rejected")]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, "Transport")]
    fn maps_http_statuses_to_expected_gateway_errors(
        #[case] status: StatusCode,
        #[case] expected: &str,
    ) {
        let error = map_status_error(status, b"{\"error\":{\"description\":\"bad order\"}}");
        match expected {
            "Timeout" => {
                assert!(
                    matches!(error, PaymentGatewayError::Timeout { .. }),
                    "timeout statuses should map to Timeout",
                );
            }
            "Rejected" => {
                assert!(
                    matches!(error, PaymentGatewayError::Rejected { .. }),
                    "client statuses should map to Rejected",
                );
            }
            "Transport" => {
                assert!(
                    matches!(error, PaymentGatewayError::Transport { .. }),
                    "other statuses should map to Transport",
                );
            }
            _ => panic!("unsupported test expectation: {expected}"),
        }
    }

    #[test]
    fn rejection_message_includes_body_preview() {
        let error = map_status_error(
            StatusCode::BAD_REQUEST,
            b"{\"error\":{\"description\":\"amount too small\"}}",
        );
        let PaymentGatewayError::Rejected { message } = error else {
            panic!("expected Rejected");
        };
        assert!(message.contains("status 400"));
        assert!(message.contains("amount too small"));
    }

    #[test]
    fn body_preview_truncates_long_bodies() {
        let long = "x".repeat(500);
        let preview = body_preview(long.as_bytes());
        assert!(preview.ends_with("..."));
        assert!(preview.chars().count() <= 163);
    }

    #[test]
    fn malformed_order_payload_is_a_decode_error() {
        let error = decode_order(b"{\"id\":42}").expect_err("decode must fail");
        assert!(matches!(error, PaymentGatewayError::Decode { .. }));
    }

    #[test]
    fn debug_output_redacts_the_secret() {
        let rendered = format!("{:?}", gateway());
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("secret_value"));
    }

    #[test]
    fn orders_url_joins_base_and_path() {
        let url = gateway().orders_url().expect("joins");
        assert_eq!(url.as_str(), "https://api.razorpay.invalid/v1/orders");
    }
}
