// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whether an order line can still change quantity or be cancelled.
//!
//! ## Rules
//!
//! 1. Delivered lines are locked, whatever the date
//! 2. A delivery date that cannot be parsed is locked
//! 3. Today or earlier is locked
//! 4. Two or more days out is editable, whatever the cutoff
//! 5. Tomorrow is editable until today's cutoff instant, or always when
//!    the line has no cutoff
//!
//! Every rule fails closed: nothing here panics or lets a malformed input
//! through, except rule 5's explicit "no cutoff" case.

use crate::cutoff::CutoffTime;
use crate::delivery_date::{days_between, parse_delivery_date};
use crate::types::OrderLineStatus;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Days out from which a delivery is editable regardless of the cutoff.
pub const ALWAYS_EDITABLE_FROM_DAYS: i64 = 2;

/// Why an editability decision came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditabilityReason {
    /// The line has been delivered.
    Delivered,
    /// The delivery date could not be parsed.
    UnparseableDate,
    /// The delivery date is today or in the past.
    PastOrToday,
    /// The delivery date is far enough out that the cutoff does not apply.
    BeyondCutoffHorizon,
    /// Delivery is tomorrow and the line has no cutoff.
    NoCutoff,
    /// Delivery is tomorrow and today's cutoff has not passed.
    BeforeCutoff,
    /// Delivery is tomorrow and today's cutoff has passed.
    AfterCutoff,
}

impl EditabilityReason {
    /// Stable code, matching the serialized name.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Delivered => "DELIVERED",
            Self::UnparseableDate => "UNPARSEABLE_DATE",
            Self::PastOrToday => "PAST_OR_TODAY",
            Self::BeyondCutoffHorizon => "BEYOND_CUTOFF_HORIZON",
            Self::NoCutoff => "NO_CUTOFF",
            Self::BeforeCutoff => "BEFORE_CUTOFF",
            Self::AfterCutoff => "AFTER_CUTOFF",
        }
    }
}

/// The outcome of an editability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditabilityDecision {
    /// Whether quantity changes and cancellation are permitted.
    pub editable: bool,
    /// The rule that decided.
    pub reason: EditabilityReason,
    /// Whole days from today to the delivery date, when it was parsed.
    pub days_until_delivery: Option<i64>,
}

impl EditabilityDecision {
    const fn new(editable: bool, reason: EditabilityReason, days: Option<i64>) -> Self {
        Self {
            editable,
            reason,
            days_until_delivery: days,
        }
    }
}

/// Evaluates editability from typed inputs.
#[must_use]
pub fn evaluate_editability_for(
    cutoff: Option<&CutoffTime>,
    status: Option<&OrderLineStatus>,
    delivery_date: NaiveDate,
    now: NaiveDateTime,
) -> EditabilityDecision {
    if status.is_some_and(OrderLineStatus::is_delivered) {
        return EditabilityDecision::new(false, EditabilityReason::Delivered, None);
    }

    let diff_days: i64 = days_between(now.date(), delivery_date);

    if diff_days <= 0 {
        return EditabilityDecision::new(false, EditabilityReason::PastOrToday, Some(diff_days));
    }

    if diff_days >= ALWAYS_EDITABLE_FROM_DAYS {
        return EditabilityDecision::new(
            true,
            EditabilityReason::BeyondCutoffHorizon,
            Some(diff_days),
        );
    }

    // Delivery is tomorrow.
    match cutoff {
        None => EditabilityDecision::new(true, EditabilityReason::NoCutoff, Some(diff_days)),
        Some(cutoff) if cutoff.is_before_cutoff(now) => {
            EditabilityDecision::new(true, EditabilityReason::BeforeCutoff, Some(diff_days))
        }
        Some(_) => {
            EditabilityDecision::new(false, EditabilityReason::AfterCutoff, Some(diff_days))
        }
    }
}

/// Evaluates editability from raw backend fields.
///
/// `cutoff_time` and `status` may be absent. `delivery_date` is a backend
/// date or a label previously produced by the delivery calendar.
#[must_use]
pub fn evaluate_editability(
    cutoff_time: Option<&str>,
    status: Option<&str>,
    delivery_date: &str,
    now: NaiveDateTime,
) -> EditabilityDecision {
    let status: Option<OrderLineStatus> = status.map(OrderLineStatus::parse);
    if status.as_ref().is_some_and(OrderLineStatus::is_delivered) {
        return EditabilityDecision::new(false, EditabilityReason::Delivered, None);
    }

    let Ok(date) = parse_delivery_date(delivery_date, now.date()) else {
        return EditabilityDecision::new(false, EditabilityReason::UnparseableDate, None);
    };

    let cutoff: Option<CutoffTime> = CutoffTime::parse_optional(cutoff_time);
    evaluate_editability_for(cutoff.as_ref(), status.as_ref(), date, now)
}

/// Returns whether an order line may still be changed at `now`.
#[must_use]
pub fn is_editable(
    cutoff_time: Option<&str>,
    status: Option<&str>,
    delivery_date: &str,
    now: NaiveDateTime,
) -> bool {
    evaluate_editability(cutoff_time, status, delivery_date, now).editable
}
