// File:    defaults.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Default values applied to unset TOTP construction parameters.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::algorithm::HashAlgorithm;

/// Number of decimal digits in an emitted code.
pub const DEFAULT_CODE_LENGTH: u8 = 6;

/// Width of a time step, in seconds.
pub const DEFAULT_PERIOD: u64 = 30;

/// Accepted steps behind the current window during verification.
pub const DEFAULT_STEPS_BACK: u32 = 1;

/// Accepted steps ahead of the current window during verification.
pub const DEFAULT_STEPS_FORWARD: u32 = 1;

/// Character count of a generated random secret.
pub const DEFAULT_RANDOM_SECRET_LENGTH: usize = 100;

/// Hash function used when none is selected.
pub const DEFAULT_HASH_ALGORITHM: HashAlgorithm = HashAlgorithm::Sha1;
