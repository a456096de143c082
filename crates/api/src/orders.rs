// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order list annotation.
//!
//! Turns backend order items into typed lines and decides, for each one,
//! which delivery date to show and whether it may still be changed.
//! Quantity updates and removals are only built for lines that are still
//! editable at the moment of the request.

use crate::error::ApiError;
use crate::request_response::{
    OrderItemAction, OrderItemDelete, OrderItemUpdate, OrderItemUpdateRequest, OrderLinePayload,
    OrderLineView,
};
use chrono::NaiveDateTime;
use milkrun_domain::{
    Clock, EditabilityDecision, OrderLineStatus, clamp_quantity, compute_next_delivery_date,
    evaluate_editability,
};
use tracing::debug;

/// An order item validated at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// Order item identifier.
    pub id: String,
    /// Product display name.
    pub product_name: Option<String>,
    /// Ordered quantity.
    pub quantity: Option<u32>,
    /// Raw backend status, kept for display.
    pub raw_status: Option<String>,
    /// Parsed status.
    pub status: Option<OrderLineStatus>,
    /// Raw cutoff; an empty string is dropped.
    pub cutoff_time: Option<String>,
    /// Backend delivery date; an empty string is dropped.
    pub delivery_date: Option<String>,
}

impl OrderLine {
    /// Validates a backend payload.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingField` if the payload has no `id`.
    pub fn try_from_payload(payload: OrderLinePayload) -> Result<Self, ApiError> {
        let id: String = payload
            .id
            .map(|id| id.to_string())
            .ok_or(ApiError::MissingField { field: "id" })?;

        let raw_status: Option<String> = non_blank(payload.status);
        let status: Option<OrderLineStatus> = raw_status.as_deref().map(OrderLineStatus::parse);

        Ok(Self {
            id,
            product_name: payload.product_name,
            quantity: payload.quantity,
            raw_status,
            status,
            cutoff_time: non_empty(payload.cutoff_time),
            delivery_date: non_empty(payload.delivery_date),
        })
    }

    /// The date to show: the backend's, else one derived from the cutoff,
    /// else `Not specified`.
    #[must_use]
    pub fn delivery_label(&self, now: NaiveDateTime) -> String {
        self.delivery_date.clone().unwrap_or_else(|| {
            compute_next_delivery_date(self.cutoff_time.as_deref(), now)
        })
    }

    /// Decides whether this line may still be changed at `now`.
    #[must_use]
    pub fn editability(&self, now: NaiveDateTime) -> EditabilityDecision {
        evaluate_editability(
            self.cutoff_time.as_deref(),
            self.status.as_ref().map(OrderLineStatus::as_str),
            &self.delivery_label(now),
            now,
        )
    }

    /// Annotates this line for display at `now`.
    #[must_use]
    pub fn annotate(&self, now: NaiveDateTime) -> OrderLineView {
        let delivery_date: String = self.delivery_label(now);
        let decision: EditabilityDecision = self.editability(now);

        debug!(
            line_id = %self.id,
            delivery_date = %delivery_date,
            editable = decision.editable,
            reason = ?decision.reason,
            "Evaluated order line editability"
        );

        OrderLineView {
            id: self.id.clone(),
            product_name: self.product_name.clone(),
            quantity: self.quantity,
            status: self.raw_status.clone(),
            delivery_date,
            editable: decision.editable,
            edit_reason: decision.reason,
            delivered: self
                .status
                .as_ref()
                .is_some_and(OrderLineStatus::is_delivered),
        }
    }
}

/// Annotates a batch of order lines against a single clock reading.
#[must_use]
pub fn annotate_order_lines(lines: &[OrderLine], clock: &impl Clock) -> Vec<OrderLineView> {
    let now: NaiveDateTime = clock.now();
    lines.iter().map(|line| line.annotate(now)).collect()
}

/// Decodes the orders endpoint body and annotates every line.
///
/// # Errors
///
/// Returns an error if the body is not a JSON array of order items or any
/// item lacks an `id`.
pub fn annotate_orders_json(body: &str, clock: &impl Clock) -> Result<Vec<OrderLineView>, ApiError> {
    let payloads: Vec<OrderLinePayload> = serde_json::from_str(body)?;
    let lines: Vec<OrderLine> = payloads
        .into_iter()
        .map(OrderLine::try_from_payload)
        .collect::<Result<_, _>>()?;

    debug!(count = lines.len(), "Decoded order lines");
    Ok(annotate_order_lines(&lines, clock))
}

/// Refuses a change to `line` unless it is editable at `now`.
fn ensure_editable(line: &OrderLine, now: NaiveDateTime, change: &str) -> Result<(), ApiError> {
    let decision: EditabilityDecision = line.editability(now);
    if decision.editable {
        return Ok(());
    }

    debug!(
        line_id = %line.id,
        change,
        reason = ?decision.reason,
        "Rejected change to locked order line"
    );
    Err(ApiError::DomainRuleViolation {
        rule: decision.reason.code(),
        message: format!("Order item {} can no longer be changed", line.id),
    })
}

/// Builds a one-step quantity update for an order item.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` if the line is not editable at
/// `now`; the rule is the editability reason code.
pub fn build_order_item_update(
    line: &OrderLine,
    action: OrderItemAction,
    now: NaiveDateTime,
) -> Result<OrderItemUpdate, ApiError> {
    ensure_editable(line, now, "update")?;

    Ok(OrderItemUpdate {
        path: format!("{ORDER_ITEM_UPDATE_PATH}/{}", line.id),
        body: OrderItemUpdateRequest::from(action),
        expected_quantity: line
            .quantity
            .map(|quantity| clamp_quantity(quantity, action.delta())),
    })
}

/// Builds the removal of an order item.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` if the line is not editable at
/// `now`.
pub fn build_order_item_delete(
    line: &OrderLine,
    now: NaiveDateTime,
) -> Result<OrderItemDelete, ApiError> {
    ensure_editable(line, now, "delete")?;

    Ok(OrderItemDelete {
        path: format!("{ORDER_ITEM_DELETE_PATH}/{}", line.id),
    })
}

const ORDER_ITEM_UPDATE_PATH: &str = "/api/orders/updateItemsById";
const ORDER_ITEM_DELETE_PATH: &str = "/api/orders/items";

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
