// File:    totp.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: The TOTP engine: window derivation, dynamic truncation, verification, and provisioning URIs.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::algorithm::HashAlgorithm;
use crate::defaults;
use crate::error::TotpError;
use crate::{secret, uri};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Construction parameters for a [`Totp`] engine.
///
/// Every numeric field is optional; a missing value takes its default from
/// [`crate::defaults`]. An explicit zero is indistinguishable from "unset"
/// and also takes the default, so a `TotpParameters::default()` (or a value
/// deserialized from an empty document) yields the standard
/// 6-digit/30-second configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TotpParameters {
    /// The shared secret as base32 text (RFC 4648, standard alphabet).
    pub secret: String,
    /// Hash function for the keyed digest.
    pub algorithm: Option<HashAlgorithm>,
    /// Number of decimal digits in an emitted code.
    pub code_length: Option<u8>,
    /// Width of a time step, in seconds.
    pub period: Option<u64>,
    /// Accepted steps behind the current window during verification.
    pub steps_back: Option<u32>,
    /// Accepted steps ahead of the current window during verification.
    pub steps_forward: Option<u32>,
    /// Account label shown by authenticator apps.
    pub label: String,
    /// Issuer shown by authenticator apps.
    pub issuer: String,
    /// Whether the provisioning URI carries an `algorithm` parameter.
    pub algorithm_in_uri: bool,
}

/// A configured TOTP engine.
///
/// Immutable once constructed; for a fixed secret, algorithm, code length,
/// and period, the code for a given time window is a pure deterministic
/// function, so a `Totp` may be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Totp {
    secret: Vec<u8>,
    algorithm: HashAlgorithm,
    code_length: u8,
    period: u64,
    steps_back: u32,
    steps_forward: u32,
    label: String,
    issuer: String,
    algorithm_in_uri: bool,
}

impl Totp {
    /// Builds an engine from `parameters`, decoding the secret and applying
    /// defaults to unset (or zero) numeric fields.
    ///
    /// # Errors
    ///
    /// Returns [`TotpError::InvalidSecret`] if the secret text is not valid
    /// base32. This is the only failure; code generation and verification on
    /// a constructed engine cannot fail.
    pub fn new(parameters: TotpParameters) -> Result<Self, TotpError> {
        let key = secret::decode_base32(&parameters.secret)?;
        Ok(Self {
            secret: key,
            algorithm: parameters
                .algorithm
                .unwrap_or(defaults::DEFAULT_HASH_ALGORITHM),
            code_length: or_default(parameters.code_length, defaults::DEFAULT_CODE_LENGTH),
            period: or_default(parameters.period, defaults::DEFAULT_PERIOD),
            steps_back: or_default(parameters.steps_back, defaults::DEFAULT_STEPS_BACK),
            steps_forward: or_default(parameters.steps_forward, defaults::DEFAULT_STEPS_FORWARD),
            label: parameters.label,
            issuer: parameters.issuer,
            algorithm_in_uri: parameters.algorithm_in_uri,
        })
    }

    /// The code for the current time window.
    #[must_use]
    pub fn current_code(&self) -> u32 {
        self.code_at(unix_now(), 0)
    }

    /// The code for the window `offset` steps away from the current one.
    /// Negative offsets address past windows.
    #[must_use]
    pub fn code_at_step(&self, offset: i64) -> u32 {
        self.code_at(unix_now(), offset)
    }

    /// The code for the window `offset` steps away from the one containing
    /// `unix_seconds`.
    #[must_use]
    pub fn code_at(&self, unix_seconds: u64, offset: i64) -> u32 {
        self.code_for_window(self.window_at(unix_seconds, offset))
    }

    /// Checks `candidate` against every window from `steps_back` behind to
    /// `steps_forward` ahead of the current one, inclusive.
    #[must_use]
    pub fn verify(&self, candidate: u32) -> bool {
        self.verify_at(candidate, unix_now())
    }

    /// Checks `candidate` against the acceptance window around the time step
    /// containing `unix_seconds`.
    ///
    /// A non-matching candidate is a normal `false` result, reported only
    /// after the whole closed range has been scanned.
    #[must_use]
    pub fn verify_at(&self, candidate: u32, unix_seconds: u64) -> bool {
        let back = i64::from(self.steps_back);
        let forward = i64::from(self.steps_forward);
        (-back..=forward).any(|step| self.code_at(unix_seconds, step) == candidate)
    }

    /// Seconds until the current window rolls over.
    #[must_use]
    pub fn seconds_remaining(&self) -> u64 {
        self.seconds_remaining_at(unix_now())
    }

    /// Seconds until the window containing `unix_seconds` rolls over.
    #[must_use]
    pub const fn seconds_remaining_at(&self, unix_seconds: u64) -> u64 {
        self.period - unix_seconds % self.period
    }

    /// Builds the `otpauth://totp/` provisioning URI consumed by
    /// authenticator apps scanning a QR code.
    ///
    /// The `algorithm` parameter is appended only when the engine was
    /// constructed with `algorithm_in_uri` set.
    #[must_use]
    pub fn provisioning_uri(&self) -> String {
        let label = uri::query_escape(&self.label);
        let issuer = uri::query_escape(&self.issuer);
        let mut data = format!(
            "otpauth://totp/{label}?secret={}&digits={}&period={}&issuer={issuer}",
            self.secret_base32(),
            self.code_length,
            self.period,
        );
        if self.algorithm_in_uri {
            data.push_str("&algorithm=");
            data.push_str(self.algorithm.uri_name());
        }
        data
    }

    /// A Google Charts URL rendering the provisioning URI as a QR code.
    #[must_use]
    pub fn chart_url(&self) -> String {
        format!(
            "https://chart.googleapis.com/chart?cht=qr&chs=200x200&chl={}",
            uri::query_escape_plus(&self.provisioning_uri())
        )
    }

    /// The secret in its base32 textual form.
    #[must_use]
    pub fn secret_base32(&self) -> String {
        secret::encode_base32(&self.secret)
    }

    /// The configured hash function.
    #[must_use]
    pub const fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Number of decimal digits in an emitted code.
    #[must_use]
    pub const fn code_length(&self) -> u8 {
        self.code_length
    }

    /// Width of a time step, in seconds.
    #[must_use]
    pub const fn period(&self) -> u64 {
        self.period
    }

    /// Accepted steps behind the current window during verification.
    #[must_use]
    pub const fn steps_back(&self) -> u32 {
        self.steps_back
    }

    /// Accepted steps ahead of the current window during verification.
    #[must_use]
    pub const fn steps_forward(&self) -> u32 {
        self.steps_forward
    }

    /// The account label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The issuer.
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    const fn window_at(&self, unix_seconds: u64, offset: i64) -> i64 {
        (unix_seconds / self.period) as i64 + offset
    }

    fn code_for_window(&self, window: i64) -> u32 {
        // RFC 4226 §5.2: the moving factor is the window index as an 8-byte
        // big-endian value; negative indices keep their two's-complement bits.
        let counter = (window as u64).to_be_bytes();
        let digest = self.algorithm.hmac(&self.secret, &counter);

        // RFC 4226 §5.3 dynamic truncation: the low nibble of the last byte
        // selects 4 bytes, whose sign bit is cleared to form a 31-bit value.
        let offset = usize::from(digest[digest.len() - 1] & 0x0f);
        let truncated = (u32::from(digest[offset] & 0x7f) << 24)
            | (u32::from(digest[offset + 1]) << 16)
            | (u32::from(digest[offset + 2]) << 8)
            | u32::from(digest[offset + 3]);

        let modulus = 10u64.saturating_pow(u32::from(self.code_length));
        (u64::from(truncated) % modulus) as u32
    }
}

// Zero is indistinguishable from "unset" for unsigned fields and must take
// the default rather than be rejected.
fn or_default<T: PartialEq + From<u8>>(value: Option<T>, default: T) -> T {
    match value {
        Some(v) if v != T::from(0) => v,
        _ => default,
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
