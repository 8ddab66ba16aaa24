// File:    secret.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Base32 secret codec and generation of new shared secrets from OS entropy.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the secret codec and generation helpers.

use crate::error::TotpError;
use base32::Alphabet;
use log::debug;
use rand::{TryRngCore, rngs::OsRng};

// RFC 4648 standard alphabet with '=' padding, matching authenticator apps.
const BASE32: Alphabet = Alphabet::Rfc4648 { padding: true };

const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Decodes base32 text into raw secret bytes.
///
/// # Errors
///
/// Returns [`TotpError::InvalidSecret`] if `text` is not valid base32.
pub fn decode_base32(text: &str) -> Result<Vec<u8>, TotpError> {
    base32::decode(BASE32, text).ok_or(TotpError::InvalidSecret)
}

/// Encodes raw bytes as base32 text.
#[must_use]
pub fn encode_base32(bytes: &[u8]) -> String {
    base32::encode(BASE32, bytes)
}

/// Encodes the UTF-8 bytes of `text` as base32.
#[must_use]
pub fn text_to_base32(text: &str) -> String {
    encode_base32(text.as_bytes())
}

/// Fills a buffer of `length` bytes from the OS entropy source.
///
/// # Errors
///
/// Returns [`TotpError::Entropy`] if the entropy source is unavailable.
pub fn random_bytes(length: usize) -> Result<Vec<u8>, TotpError> {
    let mut buffer = vec![0u8; length];
    // Use the failable `try_fill_bytes` and map the error to an `io::Error`.
    OsRng
        .try_fill_bytes(&mut buffer)
        .map_err(std::io::Error::other)?;
    Ok(buffer)
}

/// Generates a new shared secret of `length` alphanumeric characters,
/// base32-encoded when `encode` is set.
///
/// Intended for provisioning new accounts; the verification path never
/// consumes entropy.
///
/// # Errors
///
/// Returns [`TotpError::Entropy`] if the entropy source is unavailable.
pub fn random_secret(length: usize, encode: bool) -> Result<String, TotpError> {
    let bytes = random_bytes(length)?;
    let text: String = bytes
        .iter()
        .map(|&b| char::from(ALPHANUMERIC[usize::from(b) % ALPHANUMERIC.len()]))
        .collect();
    debug!("Generated a new {length}-character shared secret.");
    if encode {
        Ok(text_to_base32(&text))
    } else {
        Ok(text)
    }
}
