// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{date, days_from_today, now_at, today};
use crate::{
    DateField, DateRejection, DateValidation, Frequency, adjust_pause_to, clamp_quantity,
    clamp_start_date, default_pause_window, default_reactivation, minimum_date, tomorrow,
    validate_pause_window, validate_reactivation, validate_subscription_start,
};
use chrono::Weekday;

#[test]
fn test_tomorrow_is_next_calendar_day_regardless_of_time() {
    assert_eq!(tomorrow(now_at(0, 0, 0)), date(2026, 6, 5));
    assert_eq!(tomorrow(now_at(23, 59, 59)), date(2026, 6, 5));
    assert_eq!(
        tomorrow(date(2026, 12, 31).and_hms_opt(12, 0, 0).unwrap()),
        date(2027, 1, 1)
    );
}

#[test]
fn test_pause_window_from_tomorrow_is_valid() {
    let result: DateValidation =
        validate_pause_window(days_from_today(1), days_from_today(3), now_at(9, 0, 0));
    assert!(result.is_valid());
    assert_eq!(result.reason(), None);
    assert_eq!(result.into_result(), Ok(()));
}

#[test]
fn test_single_day_pause_window_is_valid() {
    let result: DateValidation =
        validate_pause_window(days_from_today(1), days_from_today(1), now_at(9, 0, 0));
    assert!(result.is_valid());
}

#[test]
fn test_pause_window_ending_today_is_rejected() {
    let result: DateValidation =
        validate_pause_window(days_from_today(1), today(), now_at(9, 0, 0));
    assert!(!result.is_valid());
    assert_eq!(result.reason(), Some(DateRejection::InvalidWindow));
}

#[test]
fn test_inverted_pause_window_is_rejected() {
    let result: DateValidation =
        validate_pause_window(days_from_today(2), days_from_today(1), now_at(9, 0, 0));
    assert_eq!(result.reason(), Some(DateRejection::InvalidWindow));
    assert_eq!(result.reason().map(|r| r.code()), Some("INVALID_WINDOW"));
}

#[test]
fn test_pause_window_starting_today_is_rejected() {
    let result: DateValidation =
        validate_pause_window(today(), days_from_today(2), now_at(9, 0, 0));
    assert_eq!(
        result.reason(),
        Some(DateRejection::PastDate {
            field: DateField::PauseFrom
        })
    );
    assert_eq!(result.reason().map(|r| r.code()), Some("PAST_DATE"));
}

#[test]
fn test_pause_window_entirely_in_past_reports_pause_from() {
    let result: DateValidation =
        validate_pause_window(days_from_today(-3), days_from_today(-1), now_at(9, 0, 0));
    assert_eq!(
        result.into_result(),
        Err(DateRejection::PastDate {
            field: DateField::PauseFrom
        })
    );
}

#[test]
fn test_reactivation_dates() {
    assert!(!validate_reactivation(today(), now_at(9, 0, 0)).is_valid());
    assert!(!validate_reactivation(days_from_today(-1), now_at(9, 0, 0)).is_valid());
    assert!(validate_reactivation(days_from_today(1), now_at(23, 59, 59)).is_valid());

    let rejected: DateValidation = validate_reactivation(today(), now_at(9, 0, 0));
    assert_eq!(
        rejected.reason().and_then(|r| r.field()),
        Some(DateField::ReactivateFrom)
    );
}

#[test]
fn test_one_time_start_date_is_ignored() {
    let result: DateValidation =
        validate_subscription_start(Frequency::OneTime, days_from_today(-10), &[], now_at(9, 0, 0));
    assert!(result.is_valid());
}

#[test]
fn test_recurring_start_must_be_tomorrow_or_later() {
    for frequency in [Frequency::Daily, Frequency::AlternateDay] {
        let today_start: DateValidation =
            validate_subscription_start(frequency, today(), &[], now_at(9, 0, 0));
        assert_eq!(
            today_start.reason(),
            Some(DateRejection::PastDate {
                field: DateField::StartDate
            })
        );

        let tomorrow_start: DateValidation =
            validate_subscription_start(frequency, days_from_today(1), &[], now_at(9, 0, 0));
        assert!(tomorrow_start.is_valid());
    }
}

#[test]
fn test_custom_days_needs_at_least_one_day() {
    let empty: DateValidation = validate_subscription_start(
        Frequency::CustomDays,
        days_from_today(1),
        &[],
        now_at(9, 0, 0),
    );
    assert_eq!(empty.reason(), Some(DateRejection::NoDeliveryDays));

    let with_days: DateValidation = validate_subscription_start(
        Frequency::CustomDays,
        days_from_today(1),
        &[Weekday::Mon, Weekday::Thu],
        now_at(9, 0, 0),
    );
    assert!(with_days.is_valid());
}

#[test]
fn test_clamp_start_date() {
    assert_eq!(clamp_start_date(today(), now_at(9, 0, 0)), days_from_today(1));
    assert_eq!(
        clamp_start_date(days_from_today(-4), now_at(9, 0, 0)),
        days_from_today(1)
    );
    assert_eq!(
        clamp_start_date(days_from_today(6), now_at(9, 0, 0)),
        days_from_today(6)
    );
}

#[test]
fn test_minimum_dates() {
    let now = now_at(9, 0, 0);
    assert_eq!(minimum_date(DateField::PauseFrom, None, now), days_from_today(1));
    assert_eq!(
        minimum_date(DateField::ReactivateFrom, Some(days_from_today(5)), now),
        days_from_today(1)
    );
    assert_eq!(
        minimum_date(DateField::PauseTo, Some(days_from_today(5)), now),
        days_from_today(5)
    );
    assert_eq!(
        minimum_date(DateField::PauseTo, Some(days_from_today(-2)), now),
        days_from_today(1)
    );
    assert_eq!(minimum_date(DateField::PauseTo, None, now), days_from_today(1));
}

#[test]
fn test_default_dates() {
    let now = now_at(22, 0, 0);
    assert_eq!(
        default_pause_window(now),
        (days_from_today(1), days_from_today(2))
    );
    assert_eq!(default_reactivation(now), days_from_today(1));
    assert!(validate_pause_window(days_from_today(1), days_from_today(2), now).is_valid());
}

#[test]
fn test_adjust_pause_to_follows_pause_from() {
    assert_eq!(
        adjust_pause_to(days_from_today(5), days_from_today(3)),
        days_from_today(6)
    );
    assert_eq!(
        adjust_pause_to(days_from_today(2), days_from_today(3)),
        days_from_today(3)
    );
    assert_eq!(
        adjust_pause_to(days_from_today(3), days_from_today(3)),
        days_from_today(3)
    );
}

#[test]
fn test_clamp_quantity_never_below_one() {
    assert_eq!(clamp_quantity(3, 2), 5);
    assert_eq!(clamp_quantity(3, -1), 2);
    assert_eq!(clamp_quantity(1, -1), 1);
    assert_eq!(clamp_quantity(0, -5), 1);
}

#[test]
fn test_rejection_messages() {
    assert_eq!(
        DateRejection::InvalidWindow.to_string(),
        "Pause from date must be before pause to date"
    );
    assert_eq!(
        DateRejection::PastDate {
            field: DateField::PauseTo
        }
        .to_string(),
        "Pause to date must be from tomorrow onwards"
    );
    assert_eq!(
        DateRejection::PastDate {
            field: DateField::ReactivateFrom
        }
        .to_string(),
        "Reactivation date must be from tomorrow onwards"
    );
    assert_eq!(DateRejection::NoDeliveryDays.code(), "NO_DELIVERY_DAYS");
}
