// File:    algorithm.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Hash-algorithm selection and the single HMAC dispatch point used by the TOTP engine.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use std::fmt;

/// The hash function underlying the keyed digest.
///
/// The set is closed: an unrecognized selector is unrepresentable, so digest
/// computation has no error path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// HMAC-SHA-1, the RFC 6238 default (20-byte digest).
    #[default]
    Sha1,
    /// HMAC-SHA-256 (32-byte digest).
    Sha256,
    /// HMAC-SHA-512 (64-byte digest).
    Sha512,
}

impl HashAlgorithm {
    /// Computes HMAC over `message` with `secret` as the key, using the
    /// selected hash function.
    ///
    /// # Panics
    ///
    /// Never in practice: HMAC is defined for keys of any length.
    #[must_use]
    pub fn hmac(self, secret: &[u8], message: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha1 => {
                let mut mac =
                    Hmac::<Sha1>::new_from_slice(secret).expect("HMAC accepts any key length");
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
            Self::Sha256 => {
                let mut mac =
                    Hmac::<Sha256>::new_from_slice(secret).expect("HMAC accepts any key length");
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
            Self::Sha512 => {
                let mut mac =
                    Hmac::<Sha512>::new_from_slice(secret).expect("HMAC accepts any key length");
                mac.update(message);
                mac.finalize().into_bytes().to_vec()
            }
        }
    }

    /// The lowercase name used in the `algorithm` URI parameter.
    #[must_use]
    pub const fn uri_name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri_name())
    }
}
