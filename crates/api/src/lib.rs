// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary between backend payloads and the delivery rules.
//!
//! Backend order, cart and subscription payloads are loosely typed. This
//! crate validates them into explicit structs, runs the rules from
//! `milkrun-domain` against a single clock reading per batch, and builds the
//! request bodies sent back to the backend.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod cart;
mod error;
mod orders;
mod request_response;
mod subscriptions;

#[cfg(test)]
mod tests;

pub use cart::{CartSelection, annotate_cart, annotate_cart_line, build_add_to_cart};
pub use error::{ApiError, translate_domain_error};
pub use orders::{
    OrderLine, annotate_order_lines, annotate_orders_json, build_order_item_delete,
    build_order_item_update,
};
pub use request_response::{
    AddToCartRequest, CartLinePayload, CartLineView, DateCheckResponse, OrderItemAction,
    OrderItemDelete, OrderItemUpdate, OrderItemUpdateRequest, OrderLinePayload, OrderLineView,
    PayloadId, QuantityDelta, QuantityUpdateRequest, StatusUpdateRequest,
};
pub use subscriptions::{
    SubscriptionStatusChange, build_quantity_update, build_status_update, describe_validation,
};
