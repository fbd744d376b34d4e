//! WSSE `UsernameToken` header derivation.
//!
//! Every authenticated request carries an `X-WSSE` header proving possession
//! of the shared token without transmitting it:
//!
//! ```text
//! UsernameToken Username="...", PasswordDigest="...", Nonce="...", Created="..."
//! ```
//!
//! The digest is derived per request from a one-time nonce, the creation
//! timestamp, and the shared token:
//!
//! 1. `nonce`: SHA-512 over 32 bytes of OS randomness, rendered as
//!    lowercase hex.
//! 2. `created`: the current local time as RFC 3339 with UTC offset.
//! 3. `digest`: `base64(SHA-1(base64_decode(nonce) + created + token))`.
//!
//! # Wire compatibility
//!
//! Step 3 base64-decodes the hex-rendered nonce before hashing, even though
//! the nonce was never base64-encoded. Every hex character is also a valid
//! base64 character, so the 128-char nonce decodes to 96 bytes of signing
//! material. The remote service computes the digest the same way; this
//! asymmetry must be preserved bit-for-bit, so do not "fix" it here. See
//! `lenient_base64_decode` for the exact decoding rules.

use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{alphabet, Engine as _};
use chrono::{Local, SecondsFormat};
use rand::rngs::OsRng;
use rand::RngCore;
use sha1::Sha1;
use sha2::{Digest, Sha512};

use crate::config::Credential;

/// Base64 engine that tolerates missing padding, matching the lenient
/// decoder on the service side.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Builds a complete `X-WSSE` header value for the given credential.
///
/// Consumes OS randomness for the nonce and captures the current local time.
/// This function does not fail: if the OS random source is unavailable the
/// process aborts rather than degrading to weaker entropy.
///
/// # Example
///
/// ```rust
/// use outofbox_sdk::Credential;
/// use outofbox_sdk::auth::wsse;
///
/// let credential = Credential::new("shop-user", "shared-token");
/// let header = wsse::header(&credential);
/// assert!(header.starts_with("UsernameToken Username=\"shop-user\""));
/// ```
#[must_use]
pub fn header(credential: &Credential) -> String {
    let nonce = generate_nonce();
    let created = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);
    header_with(credential, &nonce, &created)
}

/// Builds the header value from explicit nonce and timestamp inputs.
///
/// Deterministic given fixed inputs; [`header`] is the randomized entry
/// point used for live requests.
#[must_use]
pub fn header_with(credential: &Credential, nonce: &str, created: &str) -> String {
    let digest = password_digest(nonce, created, credential.shared_token());
    format!(
        r#"UsernameToken Username="{}", PasswordDigest="{}", Nonce="{}", Created="{}""#,
        credential.username(),
        digest,
        nonce,
        created
    )
}

/// Computes the password digest: `base64(SHA-1(decode(nonce) + created + token))`.
///
/// The raw 20-byte SHA-1 output is base64-encoded, not hex-encoded.
#[must_use]
pub fn password_digest(nonce: &str, created: &str, token: &str) -> String {
    let mut material = lenient_base64_decode(nonce);
    material.extend_from_slice(created.as_bytes());
    material.extend_from_slice(token.as_bytes());
    let digest = Sha1::digest(&material);
    STANDARD.encode(digest)
}

/// Generates a one-time nonce: SHA-512 over fresh OS randomness, lowercase hex.
///
/// # Panics
///
/// Panics if the OS random source fails; a request must never be signed with
/// predictable nonce material.
#[must_use]
pub fn generate_nonce() -> String {
    let mut seed = [0u8; 32];
    OsRng.fill_bytes(&mut seed);
    hex::encode(Sha512::digest(seed))
}

/// Decodes a string the way the service's non-strict base64 decoder does:
/// characters outside the base64 alphabet are skipped, a dangling trailing
/// character is dropped, and missing padding is tolerated.
///
/// The nonce handed to this function is always 128 lowercase hex characters
/// (all within the base64 alphabet, length divisible by four), which decode
/// to exactly 96 bytes.
fn lenient_base64_decode(input: &str) -> Vec<u8> {
    let mut filtered: String = input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '+' || *c == '/')
        .collect();
    if filtered.len() % 4 == 1 {
        filtered.pop();
    }
    LENIENT_BASE64.decode(filtered.as_bytes()).unwrap_or_default()
}

// Internal hex encoding since we don't want to add another dependency
mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}
