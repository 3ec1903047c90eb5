// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the service layer.

use curbside_domain::DomainError;

/// Service-layer errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract: input problems and lookup failures, nothing transient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found or the caller is not authorized
    /// for it. The two cases are deliberately indistinguishable so callers
    /// cannot probe which students exist under which parent.
    ResourceNotFound {
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for '{field}': {message}")
            }
            Self::ResourceNotFound { message } => write!(f, "{message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownStatus(value) => Self::InvalidInput {
                field: String::from("status"),
                message: format!("'{value}' is not a recognized pickup status"),
            },
            DomainError::UnknownPickupMode(value) => Self::InvalidInput {
                field: String::from("pickupType"),
                message: format!("'{value}' is not a recognized pickup mode"),
            },
        }
    }
}
