// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Daily cutoff time and next delivery date.
//!
//! A product carries a daily cutoff time. Orders placed before today's
//! cutoff instant are delivered tomorrow; orders placed at or after it are
//! delivered the day after tomorrow.
//!
//! ## Invariants
//!
//! - Only an empty string is "no cutoff". Anything else parses, and each
//!   absent, blank or non-numeric segment is 0 (`"   "` is midnight)
//! - Out-of-range segments roll into the next unit (`24:00:00` is midnight
//!   of the following day), the same way a calendar constructor would
//! - `now` equal to the cutoff instant counts as past the cutoff. Advancing
//!   the label only when `now > cutoff` would still promise tomorrow at the
//!   exact instant while editability (`now < cutoff`) already locks the
//!   line. Both rules share [`CutoffTime::is_before_cutoff`] instead

use crate::delivery_date::{NOT_SPECIFIED, format_delivery_label};
use crate::subscription::tomorrow;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// A daily order cutoff, `HH:MM:SS` in local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CutoffTime {
    hours: i32,
    minutes: i32,
    seconds: i32,
}

impl CutoffTime {
    /// Creates a cutoff from raw components. Components are not range
    /// checked; see the module invariants.
    #[must_use]
    pub const fn from_hms(hours: i32, minutes: i32, seconds: i32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Parses a backend cutoff string.
    ///
    /// Returns `None` only for an empty string, which callers treat as "no
    /// cutoff configured". Any other input yields a cutoff; whitespace-only
    /// input is midnight.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let mut segments = raw.split(':');
        let hours: i32 = parse_segment(segments.next());
        let minutes: i32 = parse_segment(segments.next());
        let seconds: i32 = parse_segment(segments.next());

        Some(Self::from_hms(hours, minutes, seconds))
    }

    /// Parses an optional backend field; `None` and `""` are both absent.
    #[must_use]
    pub fn parse_optional(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::parse)
    }

    /// Offset of the cutoff from midnight, in seconds.
    #[must_use]
    pub fn offset_seconds(&self) -> i64 {
        i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60 + i64::from(self.seconds)
    }

    /// The cutoff instant on a given calendar date.
    ///
    /// Returns `None` only if the result falls outside the representable
    /// date range.
    #[must_use]
    pub fn instant_on(&self, date: NaiveDate) -> Option<NaiveDateTime> {
        date.and_time(NaiveTime::MIN)
            .checked_add_signed(Duration::seconds(self.offset_seconds()))
    }

    /// Returns whether `now` is strictly before today's cutoff instant.
    ///
    /// An unrepresentable cutoff instant is treated as already passed.
    #[must_use]
    pub fn is_before_cutoff(&self, now: NaiveDateTime) -> bool {
        self.instant_on(now.date())
            .is_some_and(|cutoff_today| now < cutoff_today)
    }
}

impl std::fmt::Display for CutoffTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

fn parse_segment(segment: Option<&str>) -> i32 {
    segment
        .and_then(|s| s.trim().parse::<i32>().ok())
        .unwrap_or(0)
}

/// Computes the next date a newly placed order will be delivered.
///
/// Tomorrow if `now` is before today's cutoff instant, otherwise the day
/// after tomorrow.
#[must_use]
pub fn next_delivery_date(cutoff: &CutoffTime, now: NaiveDateTime) -> NaiveDate {
    let candidate: NaiveDate = tomorrow(now);

    if cutoff.is_before_cutoff(now) {
        candidate
    } else {
        candidate.succ_opt().unwrap_or(NaiveDate::MAX)
    }
}

/// Computes the next delivery date and formats it for display, e.g.
/// `"Monday, June 5"`.
///
/// A missing or empty cutoff yields `"Not specified"`.
#[must_use]
pub fn compute_next_delivery_date(cutoff_time: Option<&str>, now: NaiveDateTime) -> String {
    CutoffTime::parse_optional(cutoff_time).map_or_else(
        || String::from(NOT_SPECIFIED),
        |cutoff| format_delivery_label(next_delivery_date(&cutoff, now)),
    )
}
