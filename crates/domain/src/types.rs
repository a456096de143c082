// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Normalizes a backend status token: trimmed, uppercase, with spaces and
/// hyphens folded into underscores.
fn normalize_token(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

/// Fulfilment status of a single order line as reported by the backend.
///
/// Backend values arrive in any case. Unknown values are preserved rather
/// than rejected so that a new backend status never blocks rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderLineStatus {
    /// Order line accepted, not yet dispatched.
    Pending,
    /// Delivery was attempted or skipped without success.
    NotDelivered,
    /// Delivered. Never editable.
    Delivered,
    /// Cancelled by the customer or the store.
    Cancelled,
    /// Any other value, kept verbatim.
    Other(String),
}

impl OrderLineStatus {
    /// Parses a backend status string. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "PENDING" => Self::Pending,
            "NOT_DELIVERED" => Self::NotDelivered,
            "DELIVERED" => Self::Delivered,
            "CANCELLED" | "CANCELED" => Self::Cancelled,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    /// Returns whether this status locks the line against any change.
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// Converts this status to its backend string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::NotDelivered => "NOT_DELIVERED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
            Self::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for OrderLineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a recurring subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    /// Generating deliveries.
    #[default]
    Active,
    /// Temporarily not generating deliveries.
    Paused,
    /// Permanently stopped.
    Cancelled,
}

impl FromStr for SubscriptionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "ACTIVE" => Ok(Self::Active),
            "PAUSED" => Ok(Self::Paused),
            "CANCELLED" | "CANCELED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidSubscriptionStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SubscriptionStatus {
    /// Converts this status to its backend string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Paused => "PAUSED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// How often a cart line or subscription line is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    /// Single delivery, no start date.
    #[default]
    OneTime,
    /// Every day from the start date.
    Daily,
    /// Every second day from the start date.
    AlternateDay,
    /// On the selected weekdays only.
    CustomDays,
}

impl FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "ONE_TIME" => Ok(Self::OneTime),
            "DAILY" => Ok(Self::Daily),
            "ALTERNATE_DAY" => Ok(Self::AlternateDay),
            "CUSTOM_DAYS" => Ok(Self::CustomDays),
            _ => Err(DomainError::InvalidFrequency(s.to_string())),
        }
    }
}

impl Frequency {
    /// Converts this frequency to its backend string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneTime => "ONE_TIME",
            Self::Daily => "DAILY",
            Self::AlternateDay => "ALTERNATE_DAY",
            Self::CustomDays => "CUSTOM_DAYS",
        }
    }

    /// Returns whether this frequency produces more than one delivery and
    /// therefore needs a start date.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        !matches!(self, Self::OneTime)
    }
}

/// Converts a backend weekday id (0 = Sunday, 6 = Saturday) into a weekday.
///
/// # Errors
///
/// Returns `DomainError::InvalidDeliveryDay` for ids above 6.
pub const fn weekday_from_id(id: u8) -> Result<Weekday, DomainError> {
    match id {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(DomainError::InvalidDeliveryDay(other)),
    }
}
