// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date rules for pausing, resuming and starting subscriptions.
//!
//! ## Invariants
//!
//! - Pause-from, reactivation and recurring start dates are tomorrow or later
//! - Pause-to is tomorrow or later and not before pause-from
//!
//! Validators are single-shot predicates. They return a [`DateValidation`]
//! instead of failing, and callers decide how to surface the reason.

use crate::types::Frequency;
use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Returns tomorrow's calendar date relative to `now`.
///
/// This is the earliest date any subscription change may take effect.
#[must_use]
pub fn tomorrow(now: NaiveDateTime) -> NaiveDate {
    now.date().succ_opt().unwrap_or(NaiveDate::MAX)
}

/// A date input on the subscription screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateField {
    /// First day of a pause.
    PauseFrom,
    /// Last day of a pause.
    PauseTo,
    /// First day deliveries resume.
    ReactivateFrom,
    /// First delivery of a new recurring line.
    StartDate,
}

impl DateField {
    /// Human-readable field name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PauseFrom => "Pause from date",
            Self::PauseTo => "Pause to date",
            Self::ReactivateFrom => "Reactivation date",
            Self::StartDate => "Start date",
        }
    }
}

/// Why a set of subscription dates was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateRejection {
    /// Pause-from falls after pause-to.
    InvalidWindow,
    /// A date is today or in the past.
    PastDate {
        /// The offending field.
        field: DateField,
    },
    /// A custom-days schedule selected no weekdays.
    NoDeliveryDays,
}

impl DateRejection {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidWindow => "INVALID_WINDOW",
            Self::PastDate { .. } => "PAST_DATE",
            Self::NoDeliveryDays => "NO_DELIVERY_DAYS",
        }
    }

    /// The field at fault, if the rejection concerns a single field.
    #[must_use]
    pub const fn field(&self) -> Option<DateField> {
        match self {
            Self::PastDate { field } => Some(*field),
            Self::InvalidWindow | Self::NoDeliveryDays => None,
        }
    }
}

impl std::fmt::Display for DateRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWindow => write!(f, "Pause from date must be before pause to date"),
            Self::PastDate { field } => {
                write!(f, "{} must be from tomorrow onwards", field.label())
            }
            Self::NoDeliveryDays => write!(f, "Select at least one delivery day"),
        }
    }
}

impl std::error::Error for DateRejection {}

/// Result of a subscription date check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateValidation {
    reason: Option<DateRejection>,
}

impl DateValidation {
    /// A passing validation.
    #[must_use]
    pub const fn valid() -> Self {
        Self { reason: None }
    }

    /// A failing validation.
    #[must_use]
    pub const fn rejected(reason: DateRejection) -> Self {
        Self {
            reason: Some(reason),
        }
    }

    /// Returns whether the dates passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.reason.is_none()
    }

    /// The rejection reason, if any.
    #[must_use]
    pub const fn reason(&self) -> Option<DateRejection> {
        self.reason
    }

    /// Converts into a `Result` for `?`-style callers.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason when the validation failed.
    pub const fn into_result(self) -> Result<(), DateRejection> {
        match self.reason {
            Some(reason) => Err(reason),
            None => Ok(()),
        }
    }
}

/// Validates a pause window.
///
/// Checked in order: the window must not be inverted, then pause-from and
/// pause-to must each be tomorrow or later.
#[must_use]
pub fn validate_pause_window(
    pause_from: NaiveDate,
    pause_to: NaiveDate,
    now: NaiveDateTime,
) -> DateValidation {
    if pause_from > pause_to {
        return DateValidation::rejected(DateRejection::InvalidWindow);
    }

    let earliest: NaiveDate = tomorrow(now);

    if pause_from < earliest {
        return DateValidation::rejected(DateRejection::PastDate {
            field: DateField::PauseFrom,
        });
    }

    if pause_to < earliest {
        return DateValidation::rejected(DateRejection::PastDate {
            field: DateField::PauseTo,
        });
    }

    DateValidation::valid()
}

/// Validates the date a paused subscription resumes.
#[must_use]
pub fn validate_reactivation(reactivate_from: NaiveDate, now: NaiveDateTime) -> DateValidation {
    if reactivate_from < tomorrow(now) {
        return DateValidation::rejected(DateRejection::PastDate {
            field: DateField::ReactivateFrom,
        });
    }

    DateValidation::valid()
}

/// Validates the start of a new cart or subscription line.
///
/// One-time deliveries carry no start date and always pass. Recurring
/// lines must start tomorrow or later, and a custom-days line must select
/// at least one weekday.
#[must_use]
pub fn validate_subscription_start(
    frequency: Frequency,
    start_date: NaiveDate,
    custom_days: &[Weekday],
    now: NaiveDateTime,
) -> DateValidation {
    if !frequency.is_recurring() {
        return DateValidation::valid();
    }

    if start_date < tomorrow(now) {
        return DateValidation::rejected(DateRejection::PastDate {
            field: DateField::StartDate,
        });
    }

    if frequency == Frequency::CustomDays && custom_days.is_empty() {
        return DateValidation::rejected(DateRejection::NoDeliveryDays);
    }

    DateValidation::valid()
}

/// Replaces a selected start date of today or earlier with tomorrow.
#[must_use]
pub fn clamp_start_date(selected: NaiveDate, now: NaiveDateTime) -> NaiveDate {
    selected.max(tomorrow(now))
}

/// The earliest date a picker for `field` may offer.
///
/// Pause-to is bounded by the chosen pause-from when that is later than
/// tomorrow.
#[must_use]
pub fn minimum_date(
    field: DateField,
    pause_from: Option<NaiveDate>,
    now: NaiveDateTime,
) -> NaiveDate {
    let earliest: NaiveDate = tomorrow(now);

    match (field, pause_from) {
        (DateField::PauseTo, Some(pause_from)) => pause_from.max(earliest),
        _ => earliest,
    }
}

/// Initial pause window offered to the user: tomorrow through the day after.
#[must_use]
pub fn default_pause_window(now: NaiveDateTime) -> (NaiveDate, NaiveDate) {
    let pause_from: NaiveDate = tomorrow(now);
    let pause_to: NaiveDate = pause_from.succ_opt().unwrap_or(NaiveDate::MAX);
    (pause_from, pause_to)
}

/// Initial reactivation date offered to the user.
#[must_use]
pub fn default_reactivation(now: NaiveDateTime) -> NaiveDate {
    tomorrow(now)
}

/// Keeps a pause window ordered after pause-from changes.
///
/// If the current pause-to now falls before the new pause-from, it moves
/// to the day after pause-from.
#[must_use]
pub fn adjust_pause_to(new_pause_from: NaiveDate, current_pause_to: NaiveDate) -> NaiveDate {
    if current_pause_to < new_pause_from {
        new_pause_from.succ_opt().unwrap_or(NaiveDate::MAX)
    } else {
        current_pause_to
    }
}

/// Applies a quantity delta to an order or subscription line, never dropping
/// below one.
#[must_use]
pub fn clamp_quantity(current: u32, delta: i32) -> u32 {
    let next: i64 = i64::from(current) + i64::from(delta);
    u32::try_from(next.max(1)).unwrap_or(u32::MAX)
}
