// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cart delivery estimates and add-to-cart requests.

use crate::error::{ApiError, translate_domain_error};
use crate::orders::non_empty;
use crate::request_response::{AddToCartRequest, CartLinePayload, CartLineView};
use chrono::{NaiveDate, NaiveDateTime, Weekday};
use milkrun_domain::{
    Clock, Frequency, compute_next_delivery_date, format_api_date, tomorrow,
    validate_subscription_start, weekday_from_id,
};
use tracing::debug;

/// What the customer picked on the product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSelection {
    /// The product being added.
    pub product_id: i64,
    /// Quantity, at least one.
    pub quantity: u32,
    /// Delivery frequency.
    pub frequency: Frequency,
    /// First delivery of a recurring line; defaults to tomorrow.
    pub start_date: Option<NaiveDate>,
    /// Weekday ids (0 = Sunday) for a custom-days line.
    pub custom_days: Vec<u8>,
}

impl CartSelection {
    /// A single delivery of `quantity` units.
    #[must_use]
    pub const fn one_time(product_id: i64, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
            frequency: Frequency::OneTime,
            start_date: None,
            custom_days: Vec::new(),
        }
    }
}

/// Annotates a cart line with its delivery estimate at `now`.
///
/// # Errors
///
/// Returns `ApiError::MissingField` if the payload has no `id`.
pub fn annotate_cart_line(
    payload: CartLinePayload,
    now: NaiveDateTime,
) -> Result<CartLineView, ApiError> {
    let id: String = payload
        .id
        .map(|id| id.to_string())
        .ok_or(ApiError::MissingField { field: "id" })?;
    let cutoff_time: Option<String> = non_empty(payload.cutoff_time);
    let delivery_estimate: String = compute_next_delivery_date(cutoff_time.as_deref(), now);

    Ok(CartLineView {
        id,
        product_name: payload.product_name,
        quantity: payload.quantity,
        cutoff_time,
        delivery_estimate,
    })
}

/// Annotates every cart line against a single clock reading.
///
/// # Errors
///
/// Returns an error if any line lacks an `id`.
pub fn annotate_cart(
    payloads: Vec<CartLinePayload>,
    clock: &impl Clock,
) -> Result<Vec<CartLineView>, ApiError> {
    let now: NaiveDateTime = clock.now();
    payloads
        .into_iter()
        .map(|payload| annotate_cart_line(payload, now))
        .collect()
}

/// Builds a validated add-to-cart request.
///
/// One-time lines carry neither a start date nor custom days. Recurring
/// lines start tomorrow unless another date is chosen, and custom-days
/// lines list their weekdays.
///
/// # Errors
///
/// Returns an error if the quantity is zero, a weekday id is out of range,
/// or the start date or weekday selection breaks a subscription rule.
pub fn build_add_to_cart(
    user_id: i64,
    selection: &CartSelection,
    now: NaiveDateTime,
) -> Result<AddToCartRequest, ApiError> {
    if selection.quantity == 0 {
        return Err(ApiError::InvalidInput {
            field: String::from("quantity"),
            message: String::from("Quantity must be at least 1"),
        });
    }

    if !selection.frequency.is_recurring() {
        return Ok(AddToCartRequest {
            user_id,
            product_id: selection.product_id,
            quantity: selection.quantity,
            frequency: selection.frequency,
            start_date: None,
            custom_days: None,
        });
    }

    let start_date: NaiveDate = selection.start_date.unwrap_or_else(|| tomorrow(now));
    let custom_days: Vec<u8> = if selection.frequency == Frequency::CustomDays {
        selection.custom_days.clone()
    } else {
        Vec::new()
    };
    let weekdays: Vec<Weekday> = custom_days
        .iter()
        .map(|id| weekday_from_id(*id))
        .collect::<Result<_, _>>()
        .map_err(|err| translate_domain_error("customDays", err))?;

    if let Err(rejection) =
        validate_subscription_start(selection.frequency, start_date, &weekdays, now).into_result()
    {
        debug!(
            product_id = selection.product_id,
            code = rejection.code(),
            "Rejected add-to-cart start date"
        );
        return Err(rejection.into());
    }

    Ok(AddToCartRequest {
        user_id,
        product_id: selection.product_id,
        quantity: selection.quantity,
        frequency: selection.frequency,
        start_date: Some(format_api_date(start_date)),
        custom_days: (selection.frequency == Frequency::CustomDays).then_some(custom_days),
    })
}
