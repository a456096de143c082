// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{days_from_today, now_at};
use crate::{
    CutoffTime, EditabilityDecision, EditabilityReason, compute_next_delivery_date,
    evaluate_editability, format_api_date, format_delivery_label, is_editable,
    next_delivery_date,
};
use chrono::NaiveDateTime;

fn api_date(offset: i64) -> String {
    format_api_date(days_from_today(offset))
}

#[test]
fn test_delivered_is_never_editable_in_any_case() {
    for status in ["Delivered", "DELIVERED", "delivered", " dElIvErEd "] {
        let decision: EditabilityDecision =
            evaluate_editability(Some("18:00:00"), Some(status), &api_date(5), now_at(9, 0, 0));
        assert!(!decision.editable, "status {status}");
        assert_eq!(decision.reason, EditabilityReason::Delivered);
    }
}

#[test]
fn test_delivered_wins_over_unparseable_date() {
    let decision: EditabilityDecision =
        evaluate_editability(None, Some("delivered"), "garbage", now_at(9, 0, 0));
    assert_eq!(decision.reason, EditabilityReason::Delivered);
}

#[test]
fn test_today_and_past_are_never_editable() {
    for offset in [0, -1, -30] {
        let decision: EditabilityDecision =
            evaluate_editability(None, Some("pending"), &api_date(offset), now_at(0, 0, 1));
        assert!(!decision.editable, "offset {offset}");
        assert_eq!(decision.reason, EditabilityReason::PastOrToday);
        assert_eq!(decision.days_until_delivery, Some(offset));
    }
}

#[test]
fn test_two_or_more_days_out_ignores_cutoff() {
    let late: NaiveDateTime = now_at(23, 59, 59);

    for offset in [2, 3, 14] {
        let decision: EditabilityDecision =
            evaluate_editability(Some("00:00:00"), Some("PENDING"), &api_date(offset), late);
        assert!(decision.editable, "offset {offset}");
        assert_eq!(decision.reason, EditabilityReason::BeyondCutoffHorizon);
    }
}

#[test]
fn test_tomorrow_depends_on_cutoff() {
    let tomorrow: String = api_date(1);

    assert!(is_editable(
        Some("18:00:00"),
        Some("pending"),
        &tomorrow,
        now_at(17, 59, 0)
    ));
    assert!(!is_editable(
        Some("18:00:00"),
        Some("pending"),
        &tomorrow,
        now_at(18, 1, 0)
    ));
    assert!(!is_editable(
        Some("18:00:00"),
        Some("pending"),
        &tomorrow,
        now_at(18, 0, 0)
    ));
}

#[test]
fn test_tomorrow_without_cutoff_is_editable() {
    let decision: EditabilityDecision =
        evaluate_editability(None, None, &api_date(1), now_at(23, 0, 0));
    assert!(decision.editable);
    assert_eq!(decision.reason, EditabilityReason::NoCutoff);

    assert!(is_editable(Some(""), None, &api_date(1), now_at(23, 0, 0)));
}

#[test]
fn test_tomorrow_with_whitespace_cutoff_is_locked_all_day() {
    for now in [now_at(0, 0, 0), now_at(9, 0, 0), now_at(23, 0, 0)] {
        let decision: EditabilityDecision =
            evaluate_editability(Some("   "), Some("pending"), &api_date(1), now);
        assert!(!decision.editable, "now {now}");
        assert_eq!(decision.reason, EditabilityReason::AfterCutoff);
    }
    assert!(is_editable(Some("   "), Some("pending"), &api_date(2), now_at(23, 0, 0)));
}

#[test]
fn test_other_statuses_do_not_lock() {
    for status in ["PENDING", "NOT_DELIVERED", "not delivered", "CANCELLED", "ON_HOLD"] {
        assert!(
            is_editable(None, Some(status), &api_date(3), now_at(9, 0, 0)),
            "status {status}"
        );
    }
}

#[test]
fn test_unparseable_dates_fail_closed() {
    for raw in ["", "Not specified", "tomorrow", "2026-02-30", "Monday, June 6"] {
        let decision: EditabilityDecision =
            evaluate_editability(None, None, raw, now_at(9, 0, 0));
        assert!(!decision.editable, "input {raw:?}");
        assert_eq!(decision.reason, EditabilityReason::UnparseableDate);
    }
}

#[test]
fn test_slash_separated_dates_are_accepted() {
    assert!(is_editable(None, None, "2026/06/07", now_at(9, 0, 0)));
    assert!(!is_editable(None, None, "2026/06/04", now_at(9, 0, 0)));
}

#[test]
fn test_delivery_labels_are_accepted() {
    let label: String = format_delivery_label(days_from_today(2));
    assert_eq!(label, "Saturday, June 6");
    assert!(is_editable(Some("18:00:00"), None, &label, now_at(20, 0, 0)));
}

#[test]
fn test_label_round_trip_keeps_decision() {
    let cutoffs: [&str; 4] = ["00:00:00", "06:30:00", "18:00:00", "23:59:59"];
    let times: [NaiveDateTime; 5] = [
        now_at(0, 0, 0),
        now_at(6, 29, 59),
        now_at(12, 0, 0),
        now_at(18, 0, 0),
        now_at(23, 59, 59),
    ];

    for cutoff in cutoffs {
        let parsed: CutoffTime = CutoffTime::parse(cutoff).unwrap();
        for now in times {
            let label: String = compute_next_delivery_date(Some(cutoff), now);
            let iso: String = format_api_date(next_delivery_date(&parsed, now));

            let from_label: bool = is_editable(Some(cutoff), None, &label, now);
            let from_iso: bool = is_editable(Some(cutoff), None, &iso, now);

            assert_eq!(from_label, from_iso, "cutoff {cutoff} at {now}");
            assert!(from_label, "cutoff {cutoff} at {now}");
        }
    }
}

#[test]
fn test_reason_codes() {
    assert_eq!(EditabilityReason::Delivered.code(), "DELIVERED");
    assert_eq!(EditabilityReason::UnparseableDate.code(), "UNPARSEABLE_DATE");
    assert_eq!(EditabilityReason::PastOrToday.code(), "PAST_OR_TODAY");
    assert_eq!(EditabilityReason::BeyondCutoffHorizon.code(), "BEYOND_CUTOFF_HORIZON");
    assert_eq!(EditabilityReason::NoCutoff.code(), "NO_CUTOFF");
    assert_eq!(EditabilityReason::BeforeCutoff.code(), "BEFORE_CUTOFF");
    assert_eq!(EditabilityReason::AfterCutoff.code(), "AFTER_CUTOFF");
}

#[test]
fn test_exact_cutoff_moves_label_and_lock_together() {
    let cutoff: CutoffTime = CutoffTime::from_hms(18, 0, 0);
    let at_cutoff: NaiveDateTime = now_at(18, 0, 0);

    assert_eq!(next_delivery_date(&cutoff, at_cutoff), days_from_today(2));
    assert!(!is_editable(Some("18:00:00"), None, &api_date(1), at_cutoff));
    assert!(is_editable(Some("18:00:00"), None, &api_date(1), now_at(17, 59, 59)));
}
