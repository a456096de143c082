// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing and formatting of delivery dates.
//!
//! Delivery dates reach the rules in several shapes:
//! - backend dates: `2026-06-05`, `2026/06/05`, or a datetime whose date
//!   part is used (`2026-06-05T00:00:00Z`)
//! - labels produced by [`format_delivery_label`]: `Monday, June 5`
//! - short display dates: `Jun 5, 2026`
//!
//! Labels without a year resolve to the year (previous, current or next)
//! that puts the date closest to today. A weekday that disagrees with the
//! resolved date is rejected rather than guessed around.

use crate::error::DomainError;
use chrono::{Datelike, Month, NaiveDate, Weekday};

/// Label shown when no delivery date can be derived.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Formats a date as a delivery label, e.g. `Monday, June 5`.
#[must_use]
pub fn format_delivery_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// Formats a date for short display, e.g. `Jun 5, 2026`.
#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats a date for backend requests, `YYYY-MM-DD`.
#[must_use]
pub fn format_api_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Whole calendar days from `today` to `date`; negative for past dates.
#[must_use]
pub fn days_between(today: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// Parses a delivery date in any of the accepted shapes.
///
/// `today` anchors labels that carry no year.
///
/// # Errors
///
/// Returns an error if the input matches none of the accepted shapes, names
/// an impossible date, or names a weekday that disagrees with the date.
pub fn parse_delivery_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, DomainError> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return Err(parse_error(raw, "date is empty"));
    }

    let normalized: String = trimmed.replace('/', "-");
    if let Some(date) = parse_backend_date(&normalized) {
        return Ok(date);
    }

    parse_display_date(trimmed, today)
}

/// Parses the date part of an ISO date or datetime.
fn parse_backend_date(normalized: &str) -> Option<NaiveDate> {
    let date_part: &str = normalized.split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parses `[Weekday,] Month Day[, Year]` with long or short names.
fn parse_display_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, DomainError> {
    let cleaned: String = raw.replace(',', " ");
    let mut tokens = cleaned.split_whitespace();

    let first: &str = tokens
        .next()
        .ok_or_else(|| parse_error(raw, "date is empty"))?;

    let (weekday, month_token): (Option<Weekday>, &str) = match first.parse::<Weekday>() {
        Ok(weekday) => {
            let month_token: &str = tokens
                .next()
                .ok_or_else(|| parse_error(raw, "missing month"))?;
            (Some(weekday), month_token)
        }
        Err(_) => (None, first),
    };

    let month: Month = month_token
        .parse()
        .map_err(|_| parse_error(raw, &format!("unknown month '{month_token}'")))?;

    let day: u32 = tokens
        .next()
        .ok_or_else(|| parse_error(raw, "missing day"))?
        .parse()
        .map_err(|_| parse_error(raw, "day is not a number"))?;

    let year: Option<i32> = match tokens.next() {
        Some(token) => Some(
            token
                .parse()
                .map_err(|_| parse_error(raw, "year is not a number"))?,
        ),
        None => None,
    };

    if tokens.next().is_some() {
        return Err(parse_error(raw, "unexpected trailing text"));
    }

    let date: NaiveDate = match year {
        Some(year) => NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
            .ok_or_else(|| parse_error(raw, "no such calendar date"))?,
        None => resolve_nearest_year(month, day, today)
            .ok_or_else(|| parse_error(raw, "no such calendar date"))?,
    };

    if weekday.is_some_and(|named| named != date.weekday()) {
        return Err(DomainError::WeekdayMismatch {
            date_string: raw.to_string(),
            resolved: date,
        });
    }

    Ok(date)
}

/// Picks the year around `today` that puts `month`/`day` closest to today.
fn resolve_nearest_year(month: Month, day: u32, today: NaiveDate) -> Option<NaiveDate> {
    let year: i32 = today.year();

    [year - 1, year, year + 1]
        .into_iter()
        .filter_map(|y| NaiveDate::from_ymd_opt(y, month.number_from_month(), day))
        .min_by_key(|candidate| days_between(today, *candidate).abs())
}

fn parse_error(raw: &str, error: &str) -> DomainError {
    DomainError::DateParseError {
        date_string: raw.to_string(),
        error: error.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_nearest_year_wraps_forward_at_year_end() {
        let today: NaiveDate = date(2026, 12, 31);
        assert_eq!(
            resolve_nearest_year(Month::January, 2, today),
            Some(date(2027, 1, 2))
        );
    }

    #[test]
    fn test_resolve_nearest_year_wraps_backward_at_year_start() {
        let today: NaiveDate = date(2027, 1, 1);
        assert_eq!(
            resolve_nearest_year(Month::December, 30, today),
            Some(date(2026, 12, 30))
        );
    }

    #[test]
    fn test_resolve_nearest_year_skips_missing_leap_day() {
        let today: NaiveDate = date(2027, 3, 1);
        assert_eq!(
            resolve_nearest_year(Month::February, 29, today),
            Some(date(2028, 2, 29))
        );
    }

    #[test]
    fn test_parse_backend_date_ignores_time_part() {
        assert_eq!(
            parse_backend_date("2026-06-05T00:00:00Z"),
            Some(date(2026, 6, 5))
        );
        assert_eq!(
            parse_backend_date("2026-06-05 08:30:00"),
            Some(date(2026, 6, 5))
        );
    }
}
