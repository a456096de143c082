// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures. The clock reads Thursday 2026-06-04.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use milkrun_domain::FixedClock;

use crate::{OrderLinePayload, PayloadId};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 4).unwrap()
}

pub fn days_from_today(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

pub fn now_at(hour: u32, minute: u32) -> NaiveDateTime {
    today().and_hms_opt(hour, minute, 0).unwrap()
}

pub fn clock_at(hour: u32, minute: u32) -> FixedClock {
    FixedClock::new(now_at(hour, minute))
}

pub fn create_order_payload(id: i64) -> OrderLinePayload {
    OrderLinePayload {
        id: Some(PayloadId::Number(id)),
        product_name: Some(String::from("Toned Milk 500ml")),
        quantity: Some(2),
        status: Some(String::from("PENDING")),
        cutoff_time: Some(String::from("18:00:00")),
        delivery_date: None,
    }
}
