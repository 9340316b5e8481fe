use bigdecimal::rounding::RoundingMode;
use bigdecimal::{BigDecimal, Zero};
use uuid::Uuid;

use crate::domain::billing::{self, BILL_SCALE};
use crate::domain::errors::DomainError;
use crate::domain::order::{
    OrderFilter, OrderSnapshot, OrderStatus, OrderSubmission, ProductSelection,
};
use crate::domain::ports::{NewOrderRecord, OrderStore};

/// The single authority for order state transitions and for what
/// constitutes a submittable order. Validation happens here, before any
/// store interaction; the store is never asked to persist an order this
/// type has not vetted. Errors reach the caller untouched; there are
/// no internal retries.
pub struct OrderLifecycle<S> {
    store: S,
}

impl<S: OrderStore> OrderLifecycle<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a customer submission. Validates customer fields,
    /// selections, and the total, then persists with status `Pending`.
    pub fn create(&self, submission: OrderSubmission) -> Result<OrderSnapshot, DomainError> {
        let record = submittable_record(submission, OrderStatus::Pending)?;
        self.store.insert(record)
    }

    /// Save an in-progress order without submission-level validation.
    /// Inserts when `id` is absent, replaces in place otherwise. The
    /// total is computed from the selections when not supplied.
    pub fn save_draft(
        &self,
        id: Option<Uuid>,
        submission: OrderSubmission,
    ) -> Result<OrderSnapshot, DomainError> {
        let record = draft_record(submission)?;
        match id {
            Some(id) => self.store.replace(id, record),
            None => self.store.insert(record),
        }
    }

    /// Admin edit: full replace of customer fields and the selection set.
    /// Validates like `create` unless the target status is `Draft`.
    pub fn update(
        &self,
        id: Uuid,
        submission: OrderSubmission,
        target: OrderStatus,
    ) -> Result<OrderSnapshot, DomainError> {
        let record = match target {
            OrderStatus::Draft => draft_record(submission)?,
            _ => submittable_record(submission, target)?,
        };
        self.store.replace(id, record)
    }

    /// Status-only transition to `Completed`. Re-completing an already
    /// completed order is allowed and succeeds.
    pub fn mark_completed(&self, id: Uuid) -> Result<(), DomainError> {
        self.store.set_status(id, OrderStatus::Completed)
    }

    /// Remove the order and its product lines.
    pub fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.store.delete(id)
    }

    pub fn get(&self, id: Uuid) -> Result<OrderSnapshot, DomainError> {
        self.store.find_by_id(id)?.ok_or(DomainError::NotFound)
    }

    pub fn list(&self, filter: &OrderFilter) -> Result<Vec<OrderSnapshot>, DomainError> {
        self.store.list(filter)
    }
}

fn submittable_record(
    submission: OrderSubmission,
    status: OrderStatus,
) -> Result<NewOrderRecord, DomainError> {
    let OrderSubmission {
        customer,
        selections,
        total_bill,
    } = submission;

    require_field("name", &customer.name)?;
    require_field("phone", &customer.phone)?;
    require_field("village", &customer.village)?;

    let selections = kept_selections(selections)?;
    if selections.is_empty() {
        return Err(DomainError::validation(
            "products",
            "select at least one product with a quantity",
        ));
    }

    let total = match total_bill {
        Some(total) => total,
        None => billing::order_total(&selections),
    };
    if total <= BigDecimal::zero() {
        return Err(DomainError::validation(
            "total_bill",
            "total bill must be greater than zero",
        ));
    }

    Ok(NewOrderRecord {
        customer,
        selections,
        total_bill: total.with_scale_round(BILL_SCALE, RoundingMode::HalfUp),
        status,
    })
}

/// Drafts only need structural well-formedness: decimals already parsed,
/// no negative quantities. Blank customer fields and an empty selection
/// set are fine.
fn draft_record(submission: OrderSubmission) -> Result<NewOrderRecord, DomainError> {
    let OrderSubmission {
        customer,
        selections,
        total_bill,
    } = submission;

    let selections = kept_selections(selections)?;
    let total = match total_bill {
        Some(total) => total,
        None => billing::order_total(&selections),
    };

    Ok(NewOrderRecord {
        customer,
        selections,
        total_bill: total.with_scale_round(BILL_SCALE, RoundingMode::HalfUp),
        status: OrderStatus::Draft,
    })
}

fn require_field(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, format!("{field} is required")));
    }
    Ok(())
}

/// Rejects negative quantities, then drops zero-quantity lines: a
/// selection with quantity 0 is not part of the order's product set.
fn kept_selections(
    selections: Vec<ProductSelection>,
) -> Result<Vec<ProductSelection>, DomainError> {
    let zero = BigDecimal::zero();
    for selection in &selections {
        if selection.quantity < zero {
            return Err(DomainError::validation(
                "quantity",
                format!("negative quantity for {}", selection.product_id),
            ));
        }
        if let Some(received) = &selection.received_quantity {
            if *received < zero {
                return Err(DomainError::validation(
                    "received_quantity",
                    format!("negative received quantity for {}", selection.product_id),
                ));
            }
        }
    }
    Ok(selections
        .into_iter()
        .filter(|s| s.quantity > zero)
        .collect())
}
