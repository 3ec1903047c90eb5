// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the domain layer.

use thiserror::Error;

/// Errors that can occur when parsing domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The status name does not match any recognized pickup status.
    #[error("unrecognized pickup status: '{0}'")]
    UnknownStatus(String),
    /// The pickup mode does not match any recognized mode.
    #[error("unrecognized pickup mode: '{0}'")]
    UnknownPickupMode(String),
}
