// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures. All tests run against Thursday 2026-06-04.

use chrono::{Duration, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 4).unwrap()
}

pub fn days_from_today(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

pub fn now_at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    today().and_hms_opt(hour, minute, second).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
