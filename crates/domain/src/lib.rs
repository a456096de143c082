// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delivery calendar and subscription date rules.
//!
//! Everything in this crate is pure: rules take the current local time as an
//! explicit argument and never read the clock themselves. Use a [`Clock`] to
//! sample `now` once per decision.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod clock;
mod cutoff;
mod delivery_date;
mod editability;
mod error;
mod subscription;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use cutoff::{CutoffTime, compute_next_delivery_date, next_delivery_date};
pub use delivery_date::{
    NOT_SPECIFIED, days_between, format_api_date, format_delivery_label, format_display_date,
    parse_delivery_date,
};
pub use editability::{
    ALWAYS_EDITABLE_FROM_DAYS, EditabilityDecision, EditabilityReason, evaluate_editability,
    evaluate_editability_for, is_editable,
};
pub use error::DomainError;
pub use subscription::{
    DateField, DateRejection, DateValidation, adjust_pause_to, clamp_quantity, clamp_start_date,
    default_pause_window, default_reactivation, minimum_date, tomorrow, validate_pause_window,
    validate_reactivation, validate_subscription_start,
};
pub use types::{Frequency, OrderLineStatus, SubscriptionStatus, weekday_from_id};
