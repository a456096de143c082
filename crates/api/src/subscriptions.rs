// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subscription status and quantity requests.
//!
//! Dates are validated here, before anything is sent to the backend.
//! Cancellation carries no dates and is never rejected.

use crate::error::ApiError;
use crate::request_response::{
    DateCheckResponse, QuantityDelta, QuantityUpdateRequest, StatusUpdateRequest,
};
use chrono::{NaiveDate, NaiveDateTime};
use milkrun_domain::{
    DateValidation, SubscriptionStatus, format_api_date, validate_pause_window,
    validate_reactivation,
};
use tracing::debug;

/// A requested change of subscription status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatusChange {
    /// Stop deliveries from `from` through `to`, inclusive.
    Pause {
        /// First paused day.
        from: NaiveDate,
        /// Last paused day.
        to: NaiveDate,
    },
    /// Resume deliveries from `from`.
    Resume {
        /// First day deliveries resume.
        from: NaiveDate,
    },
    /// Stop deliveries permanently.
    Cancel,
}

impl SubscriptionStatusChange {
    /// The status the subscription will have after this change.
    #[must_use]
    pub const fn target_status(&self) -> SubscriptionStatus {
        match self {
            Self::Pause { .. } => SubscriptionStatus::Paused,
            Self::Resume { .. } => SubscriptionStatus::Active,
            Self::Cancel => SubscriptionStatus::Cancelled,
        }
    }

    /// Checks this change's dates at `now`.
    #[must_use]
    pub fn validate(&self, now: NaiveDateTime) -> DateValidation {
        match self {
            Self::Pause { from, to } => validate_pause_window(*from, *to, now),
            Self::Resume { from } => validate_reactivation(*from, now),
            Self::Cancel => DateValidation::valid(),
        }
    }
}

/// Builds a validated status update request body.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` if the change's dates are
/// rejected.
pub fn build_status_update(
    change: SubscriptionStatusChange,
    now: NaiveDateTime,
) -> Result<StatusUpdateRequest, ApiError> {
    if let Err(rejection) = change.validate(now).into_result() {
        debug!(
            status = %change.target_status(),
            code = rejection.code(),
            "Rejected subscription status change"
        );
        return Err(rejection.into());
    }

    let request: StatusUpdateRequest = match change {
        SubscriptionStatusChange::Pause { from, to } => StatusUpdateRequest {
            status: SubscriptionStatus::Paused,
            pause_from: Some(format_api_date(from)),
            pause_to: Some(format_api_date(to)),
            reactivate_from: None,
        },
        SubscriptionStatusChange::Resume { from } => StatusUpdateRequest {
            status: SubscriptionStatus::Active,
            pause_from: None,
            pause_to: None,
            reactivate_from: Some(format_api_date(from)),
        },
        SubscriptionStatusChange::Cancel => StatusUpdateRequest {
            status: SubscriptionStatus::Cancelled,
            pause_from: None,
            pause_to: None,
            reactivate_from: None,
        },
    };

    Ok(request)
}

/// Builds a quantity update for a single subscription line.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for a zero delta.
pub fn build_quantity_update(
    subscription_id: i64,
    line_id: i64,
    delta: i32,
) -> Result<QuantityUpdateRequest, ApiError> {
    if delta == 0 {
        return Err(ApiError::InvalidInput {
            field: String::from("delta"),
            message: String::from("Quantity change must not be zero"),
        });
    }

    Ok(QuantityUpdateRequest {
        subscription_id,
        lines: vec![QuantityDelta { line_id, delta }],
    })
}

/// Shapes a date validation for display.
#[must_use]
pub fn describe_validation(validation: DateValidation) -> DateCheckResponse {
    DateCheckResponse {
        valid: validation.is_valid(),
        reason: validation.reason().map(|reason| reason.code()),
        message: validation.reason().map(|reason| reason.to_string()),
    }
}
