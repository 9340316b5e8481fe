use uuid::Uuid;

use bigdecimal::BigDecimal;

use super::errors::DomainError;
use super::order::{Customer, OrderFilter, OrderSnapshot, OrderStatus, ProductSelection};

/// A validated order ready to be persisted. Selections are already
/// filtered down to quantities > 0 and the total is at bill scale.
#[derive(Debug, Clone)]
pub struct NewOrderRecord {
    pub customer: Customer,
    pub selections: Vec<ProductSelection>,
    pub total_bill: BigDecimal,
    pub status: OrderStatus,
}

/// Row-oriented persistence for orders and their product lines. The
/// store assigns identifiers and timestamps; multi-row writes must be
/// atomic (order row and product rows commit or roll back together).
pub trait OrderStore: Send + Sync + 'static {
    /// Persist a new order, returning it with its assigned id.
    fn insert(&self, record: NewOrderRecord) -> Result<OrderSnapshot, DomainError>;

    /// Full replace of customer fields, total, status, and the product
    /// set (delete-then-reinsert, not merge). Bumps `updated_at`.
    /// `NotFound` when the id does not resolve.
    fn replace(&self, id: Uuid, record: NewOrderRecord) -> Result<OrderSnapshot, DomainError>;

    /// Status-only update, bumping `updated_at` and touching nothing
    /// else. `NotFound` when the id does not resolve.
    fn set_status(&self, id: Uuid, status: OrderStatus) -> Result<(), DomainError>;

    /// Remove the order and all its product lines. `NotFound` when the
    /// id does not resolve.
    fn delete(&self, id: Uuid) -> Result<(), DomainError>;

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderSnapshot>, DomainError>;

    /// Orders matching the filter, newest first, each with its full
    /// product set.
    fn list(&self, filter: &OrderFilter) -> Result<Vec<OrderSnapshot>, DomainError>;
}
