use std::fmt;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Order lifecycle states. One-directional in normal use
/// (draft → pending → completed); an admin edit may resubmit a pending
/// order but nothing transitions backward out of `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Draft,
    Pending,
    Completed,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
        }
    }

    /// Parse a stored or user-supplied status string. `partially_pending`
    /// is the spelling the replaced system used for drafts; it is accepted
    /// on read but never written back.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" | "partially_pending" => Some(OrderStatus::Draft),
            "pending" => Some(OrderStatus::Pending),
            "completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line item of an order. `received_quantity` tracks partial
/// fulfillment on drafts; it stays `None` on ordinary submissions.
#[derive(Debug, Clone)]
pub struct ProductSelection {
    pub product_id: String,
    pub product_name: String,
    pub unit_price: BigDecimal,
    pub quantity: BigDecimal,
    pub received_quantity: Option<BigDecimal>,
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub village: String,
}

/// Everything the presentation layer hands over when registering or
/// editing an order. `total_bill` is the manual override path; when absent
/// the bill calculator supplies the total.
#[derive(Debug, Clone)]
pub struct OrderSubmission {
    pub customer: Customer,
    pub selections: Vec<ProductSelection>,
    pub total_bill: Option<BigDecimal>,
}

/// A persisted order as read back from the store.
#[derive(Debug, Clone)]
pub struct OrderSnapshot {
    pub id: Uuid,
    pub customer: Customer,
    pub selections: Vec<ProductSelection>,
    pub total_bill: BigDecimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(StatusFilter::All),
            "pending" => Some(StatusFilter::Pending),
            "completed" => Some(StatusFilter::Completed),
            _ => None,
        }
    }

    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == OrderStatus::Pending,
            StatusFilter::Completed => status == OrderStatus::Completed,
        }
    }
}

/// Listing criteria: a status filter plus a free-text search over
/// name/village (case-insensitive) and phone (plain substring).
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: StatusFilter,
    pub search: Option<String>,
}
