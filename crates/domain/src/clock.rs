// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wall-clock access for the delivery rules.
//!
//! Every rule takes `now` as an explicit local `NaiveDateTime`. Callers
//! sample a [`Clock`] exactly once per logical decision and pass that value
//! down, so a cutoff boundary cannot move between two checks that belong to
//! the same decision.

use crate::error::DomainError;
use chrono::{Local, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Source of the current local wall-clock time.
pub trait Clock {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock, either in the device zone or in a declared
/// IANA zone (the store's delivery zone).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock {
    zone: Option<Tz>,
}

impl SystemClock {
    /// Creates a clock in the device's local zone.
    #[must_use]
    pub const fn local() -> Self {
        Self { zone: None }
    }

    /// Creates a clock in a declared zone.
    #[must_use]
    pub const fn in_zone(zone: Tz) -> Self {
        Self { zone: Some(zone) }
    }

    /// Creates a clock from an IANA zone name such as `Asia/Kolkata`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the name is unknown.
    pub fn from_zone_name(name: &str) -> Result<Self, DomainError> {
        let zone: Tz = name
            .parse()
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))?;
        Ok(Self::in_zone(zone))
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.zone {
            Some(zone) => Utc::now().with_timezone(&zone).naive_local(),
            None => Local::now().naive_local(),
        }
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Creates a clock that always reports `now`.
    #[must_use]
    pub const fn new(now: NaiveDateTime) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
