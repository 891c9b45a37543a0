//! Signed session tokens of the form `timestamp.signature`.
//!
//! The timestamp is the issuance time in milliseconds since the Unix epoch and
//! the signature is the hex HMAC-SHA256 of that decimal string under the
//! server-held secret. Tokens carry no nonce, so the secret is the only
//! protected material.

use anyhow::{Result, anyhow};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const TOKEN_TTL_MS: i64 = 24 * 60 * 60 * 1000;
const SEPARATOR: char = '.';

pub fn issue_token(secret: &str) -> Result<String> {
    issue_token_at(secret, now_ms())
}

pub fn issue_token_at(secret: &str, issued_at_ms: i64) -> Result<String> {
    let timestamp = issued_at_ms.to_string();
    let mac = signature_mac(secret, &timestamp)
        .ok_or_else(|| anyhow!("failed to initialise token signer"))?;
    let signature = hex::encode(mac.finalize().into_bytes());
    Ok(format!("{timestamp}{SEPARATOR}{signature}"))
}

/// Returns `true` only for a well-formed, correctly signed token younger than
/// [`TOKEN_TTL_MS`]. Every failure collapses to `false`.
pub fn verify_token(token: &str, secret: &str) -> bool {
    verify_token_at(token, secret, now_ms())
}

pub fn verify_token_at(token: &str, secret: &str, now_ms: i64) -> bool {
    let mut parts = token.split(SEPARATOR);
    let (Some(timestamp), Some(signature), None) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if timestamp.is_empty() || signature.is_empty() {
        return false;
    }

    let Ok(expected) = hex::decode(signature) else {
        return false;
    };
    let Some(mac) = signature_mac(secret, timestamp) else {
        return false;
    };
    if mac.verify_slice(&expected).is_err() {
        return false;
    }

    let Some(issued_at_ms) = parse_timestamp(timestamp) else {
        return false;
    };

    now_ms.saturating_sub(issued_at_ms) < TOKEN_TTL_MS
}

fn signature_mac(secret: &str, timestamp: &str) -> Option<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(timestamp.as_bytes());
    Some(mac)
}

fn parse_timestamp(raw: &str) -> Option<i64> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
