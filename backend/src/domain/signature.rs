//! Payment callback signature verification.
//!
//! The gateway signs `"<order_id>|<payment_id>"` with HMAC-SHA256 under the
//! shared key secret and sends the hex digest alongside the callback.
//! Verification recomputes the MAC and compares via [`Mac::verify_slice`],
//! which is constant time, so the comparison does not leak how many digest
//! bytes matched.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn mac_for(secret: &str, order_id: &str, payment_id: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    mac
}

/// Compute the hex signature the gateway is expected to send.
///
/// Used by tests and gateway fakes; the verification path never surfaces
/// this value so a mismatch cannot leak the expected digest.
pub fn sign(secret: &str, order_id: &str, payment_id: &str) -> String {
    hex::encode(mac_for(secret, order_id, payment_id).finalize().into_bytes())
}

/// Verify a claimed hex signature against the expected MAC.
///
/// Returns `false` for malformed hex and for any digest mismatch.
pub fn verify(secret: &str, order_id: &str, payment_id: &str, claimed: &str) -> bool {
    let Ok(claimed_bytes) = hex::decode(claimed) else {
        return false;
    };
    mac_for(secret, order_id, payment_id)
        .verify_slice(&claimed_bytes)
        .is_ok()
}
