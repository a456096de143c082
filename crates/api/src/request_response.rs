// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend payloads and request/response data transfer objects.
//!
//! Payload types mirror what the backend actually sends: every field is
//! optional and unknown fields are ignored. Typed values are produced from
//! them by the order, cart and subscription modules.

use milkrun_domain::{EditabilityReason, Frequency, SubscriptionStatus};
use serde::{Deserialize, Serialize};

/// An identifier the backend sends either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PayloadId {
    /// Numeric identifier.
    Number(i64),
    /// String identifier.
    Text(String),
}

impl std::fmt::Display for PayloadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => write!(f, "{id}"),
        }
    }
}

/// An order item as returned by the orders endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLinePayload {
    /// Order item identifier.
    pub id: Option<PayloadId>,
    /// Product display name.
    pub product_name: Option<String>,
    /// Ordered quantity.
    pub quantity: Option<u32>,
    /// Fulfilment status, any case.
    pub status: Option<String>,
    /// Daily cutoff of the product, `HH:MM:SS`.
    pub cutoff_time: Option<String>,
    /// Delivery date chosen by the backend, if any.
    pub delivery_date: Option<String>,
}

/// An order item annotated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineView {
    /// Order item identifier.
    pub id: String,
    /// Product display name.
    pub product_name: Option<String>,
    /// Ordered quantity.
    pub quantity: Option<u32>,
    /// Fulfilment status as sent by the backend.
    pub status: Option<String>,
    /// Backend delivery date, or one derived from the cutoff.
    pub delivery_date: String,
    /// Whether quantity changes and deletion are allowed now.
    pub editable: bool,
    /// The rule that decided `editable`.
    pub edit_reason: EditabilityReason,
    /// Whether the line has been delivered.
    pub delivered: bool,
}

/// A one-step quantity change on an order item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderItemAction {
    /// Add one.
    Increment,
    /// Remove one.
    Decrement,
}

impl OrderItemAction {
    /// Signed quantity change.
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }
}

/// Body of an order item quantity update; exactly one side is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemUpdateRequest {
    /// `1` to add one, else `0`.
    pub increment: u8,
    /// `1` to remove one, else `0`.
    pub decrement: u8,
}

impl From<OrderItemAction> for OrderItemUpdateRequest {
    fn from(action: OrderItemAction) -> Self {
        match action {
            OrderItemAction::Increment => Self {
                increment: 1,
                decrement: 0,
            },
            OrderItemAction::Decrement => Self {
                increment: 0,
                decrement: 1,
            },
        }
    }
}

/// A validated `PUT` against one order item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemUpdate {
    /// Request path, `/api/orders/updateItemsById/{id}`.
    pub path: String,
    /// Request body.
    pub body: OrderItemUpdateRequest,
    /// Quantity to show until the list is refetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_quantity: Option<u32>,
}

/// A validated `DELETE` of one order item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDelete {
    /// Request path, `/api/orders/items/{id}`.
    pub path: String,
}

/// A cart line as returned by the cart endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLinePayload {
    /// Cart item identifier.
    pub id: Option<PayloadId>,
    /// Product display name.
    pub product_name: Option<String>,
    /// Quantity in the cart.
    pub quantity: Option<u32>,
    /// Daily cutoff of the product, `HH:MM:SS`.
    pub cutoff_time: Option<String>,
}

/// A cart line annotated with its delivery estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    /// Cart item identifier.
    pub id: String,
    /// Product display name.
    pub product_name: Option<String>,
    /// Quantity in the cart.
    pub quantity: Option<u32>,
    /// The cutoff as sent by the backend.
    pub cutoff_time: Option<String>,
    /// Expected delivery, e.g. `Monday, June 5`, or `Not specified`.
    pub delivery_estimate: String,
}

/// Body of an add-to-cart request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    /// The customer.
    pub user_id: i64,
    /// The product being added.
    pub product_id: i64,
    /// Quantity, at least one.
    pub quantity: u32,
    /// Delivery frequency.
    pub frequency: Frequency,
    /// First delivery, `YYYY-MM-DD`; recurring frequencies only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Weekday ids (0 = Sunday); custom-days frequency only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_days: Option<Vec<u8>>,
}

/// Body of a subscription status change request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    /// The requested status.
    pub status: SubscriptionStatus,
    /// First paused day, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_from: Option<String>,
    /// Last paused day, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_to: Option<String>,
    /// First day deliveries resume, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactivate_from: Option<String>,
}

/// One line of a subscription quantity update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityDelta {
    /// The subscription line.
    pub line_id: i64,
    /// Signed quantity change.
    pub delta: i32,
}

/// Body of a subscription quantity update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityUpdateRequest {
    /// The subscription.
    pub subscription_id: i64,
    /// The changed lines.
    pub lines: Vec<QuantityDelta>,
}

/// Outcome of a date check, shaped for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateCheckResponse {
    /// Whether the dates passed.
    pub valid: bool,
    /// Rejection code, e.g. `PAST_DATE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    /// Rejection message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
