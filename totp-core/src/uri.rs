// File:    uri.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Percent escaping for text embedded in provisioning URIs.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Everything outside [A-Za-z0-9-_.~ ] is escaped with uppercase hex.
// The space is deliberately left out of the set: authenticator apps accept a
// literal space in the label/issuer, never `+` or `%20`.
const LABEL_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-escapes `text` for embedding in an `otpauth://` label or query
/// value, keeping spaces literal.
#[must_use]
pub fn query_escape(text: &str) -> String {
    utf8_percent_encode(text, LABEL_SET).to_string()
}

/// Percent-escapes `text` as a full query-string component, rendering spaces
/// as `+`.
#[must_use]
pub fn query_escape_plus(text: &str) -> String {
    query_escape(text).replace(' ', "+")
}
