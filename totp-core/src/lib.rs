// File:    lib.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: The main library crate for totp-core, orchestrating code generation, verification, and secret management.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # TOTP Core Library
//!
//! This library provides the core functionality for time-based one-time
//! passwords (TOTP, RFC 6238): time-window derivation, HMAC digest
//! computation over SHA-1/SHA-256/SHA-512, dynamic truncation into a decimal
//! code, and skew-tolerant verification.

/// Hash-algorithm selection and HMAC dispatch.
pub mod algorithm;
/// Named defaults applied to unset construction parameters.
pub mod defaults;
/// The error type shared across the library.
pub mod error;
/// Base32 secret codec and random secret generation.
pub mod secret;
/// The TOTP engine: code generation, verification, and provisioning URIs.
pub mod totp;
/// Percent escaping for provisioning-URI text.
pub mod uri;
