// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API boundary layer.

use milkrun_domain::{DateRejection, DomainError};
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain errors and represent the contract with
/// callers that hand us backend payloads or build backend requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A field the boundary cannot do without was absent.
    #[error("Missing required field '{field}'")]
    MissingField {
        /// The missing field, as named in the backend payload.
        field: &'static str,
    },

    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },

    /// A delivery or subscription rule rejected the request.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The stable code of the rule that was violated.
        rule: &'static str,
        /// A human-readable description of the violation.
        message: String,
    },

    /// A backend payload could not be decoded.
    #[error("Malformed payload: {message}")]
    MalformedPayload {
        /// The decoder's description of the problem.
        message: String,
    },
}

impl From<DateRejection> for ApiError {
    fn from(rejection: DateRejection) -> Self {
        Self::DomainRuleViolation {
            rule: rejection.code(),
            message: rejection.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedPayload {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(field: &str, err: DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}
