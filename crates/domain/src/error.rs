// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while turning raw strings into typed domain values.
///
/// The rule functions themselves never surface these; they degrade to a
/// safe default instead. Typed callers (the API boundary, the CLI) use
/// them to report exactly what was wrong with an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Failed to parse a calendar date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A display date named a weekday that does not match the resolved date.
    WeekdayMismatch {
        /// The original input string.
        date_string: String,
        /// The date the input resolved to.
        resolved: chrono::NaiveDate,
    },
    /// Timezone name is not a known IANA zone.
    InvalidTimezone(String),
    /// Subscription status is not one of the known values.
    InvalidSubscriptionStatus(String),
    /// Delivery frequency is not one of the known values.
    InvalidFrequency(String),
    /// Custom delivery day id is outside 0 (Sunday) through 6 (Saturday).
    InvalidDeliveryDay(u8),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::WeekdayMismatch {
                date_string,
                resolved,
            } => {
                write!(
                    f,
                    "Date '{date_string}' names the wrong weekday: {resolved} is a {}",
                    chrono::Datelike::weekday(resolved)
                )
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
            Self::InvalidSubscriptionStatus(msg) => {
                write!(f, "Invalid subscription status: {msg}")
            }
            Self::InvalidFrequency(msg) => write!(f, "Invalid delivery frequency: {msg}"),
            Self::InvalidDeliveryDay(day) => {
                write!(
                    f,
                    "Invalid delivery day: {day}. Must be between 0 (Sunday) and 6 (Saturday)"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
