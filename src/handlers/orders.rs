use std::str::FromStr;

use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{
    Customer, OrderFilter, OrderSnapshot, OrderStatus, OrderSubmission, ProductSelection,
    StatusFilter,
};
use crate::errors::ApiError;
use crate::receipt::{self, ShopProfile};

use super::Lifecycle;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductSelectionRequest {
    pub id: String,
    pub name: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "50"
    pub price: String,
    /// Quantities are fractional (goods sold by weight), e.g. "0.5"
    pub quantity: String,
    #[serde(default)]
    pub received_quantity: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub name: String,
    pub phone: String,
    pub village: String,
    pub products: Vec<ProductSelectionRequest>,
    /// Manually entered total; computed from the products when absent.
    #[serde(default)]
    pub total_bill: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveDraftRequest {
    /// Present when re-saving an existing draft.
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub phone: String,
    pub village: String,
    pub products: Vec<ProductSelectionRequest>,
    #[serde(default)]
    pub total_bill: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub name: String,
    pub phone: String,
    pub village: String,
    pub products: Vec<ProductSelectionRequest>,
    #[serde(default)]
    pub total_bill: Option<String>,
    /// Target status: "draft", "pending", or "completed".
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductSelectionResponse {
    pub id: String,
    pub name: String,
    pub price: String,
    pub quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_quantity: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub village: String,
    pub products: Vec<ProductSelectionResponse>,
    pub total_bill: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListOrdersParams {
    /// Status filter: "all" (default), "pending", or "completed".
    #[serde(default)]
    pub status: Option<String>,
    /// Free-text search over name, phone, and village.
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListOrdersResponse {
    pub items: Vec<OrderResponse>,
    pub total: usize,
}

impl From<OrderSnapshot> for OrderResponse {
    fn from(order: OrderSnapshot) -> Self {
        OrderResponse {
            id: order.id,
            name: order.customer.name,
            phone: order.customer.phone,
            village: order.customer.village,
            products: order
                .selections
                .into_iter()
                .map(|s| ProductSelectionResponse {
                    id: s.product_id,
                    name: s.product_name,
                    price: s.unit_price.to_string(),
                    quantity: s.quantity.to_string(),
                    received_quantity: s.received_quantity.map(|q| q.to_string()),
                })
                .collect(),
            total_bill: order.total_bill.to_string(),
            status: order.status.to_string(),
            created_at: order.created_at.to_rfc3339(),
            updated_at: order.updated_at.to_rfc3339(),
        }
    }
}

// ── DTO to domain conversions ────────────────────────────────────────────────

fn parse_decimal(field: &'static str, value: &str) -> Result<BigDecimal, DomainError> {
    BigDecimal::from_str(value.trim())
        .map_err(|e| DomainError::validation(field, format!("invalid decimal '{value}': {e}")))
}

impl ProductSelectionRequest {
    fn into_selection(self) -> Result<ProductSelection, DomainError> {
        Ok(ProductSelection {
            unit_price: parse_decimal("price", &self.price)?,
            quantity: parse_decimal("quantity", &self.quantity)?,
            received_quantity: self
                .received_quantity
                .as_deref()
                .map(|v| parse_decimal("received_quantity", v))
                .transpose()?,
            product_id: self.id,
            product_name: self.name,
        })
    }
}

fn submission(
    name: String,
    phone: String,
    village: String,
    products: Vec<ProductSelectionRequest>,
    total_bill: Option<String>,
) -> Result<OrderSubmission, DomainError> {
    Ok(OrderSubmission {
        customer: Customer {
            name,
            phone,
            village,
        },
        selections: products
            .into_iter()
            .map(ProductSelectionRequest::into_selection)
            .collect::<Result<_, _>>()?,
        total_bill: total_bill
            .as_deref()
            .map(|v| parse_decimal("total_bill", v))
            .transpose()?,
    })
}

fn parse_status(value: &str) -> Result<OrderStatus, DomainError> {
    OrderStatus::parse(value)
        .ok_or_else(|| DomainError::validation("status", format!("unknown status '{value}'")))
}

fn canceled(e: actix_web::error::BlockingError) -> ApiError {
    log::error!("blocking task failed: {e}");
    ApiError::Store
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Registers a customer submission. The order and its product lines are
/// written in a single database transaction; the response carries the
/// persisted order with its assigned id.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order registered", body = OrderResponse),
        (status = 400, description = "Invalid input"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    svc: web::Data<Lifecycle>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let submission = submission(body.name, body.phone, body.village, body.products, body.total_bill)?;

    let svc = svc.into_inner();
    let order = web::block(move || svc.create(submission))
        .await
        .map_err(canceled)??;

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// POST /orders/drafts
///
/// Saves an in-progress order without submission validation. Upsert:
/// inserts when `id` is absent, replaces the existing draft otherwise.
#[utoipa::path(
    post,
    path = "/orders/drafts",
    request_body = SaveDraftRequest,
    responses(
        (status = 200, description = "Draft saved", body = OrderResponse),
        (status = 404, description = "Draft id does not resolve"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn save_draft(
    svc: web::Data<Lifecycle>,
    body: web::Json<SaveDraftRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let id = body.id;
    let submission = submission(body.name, body.phone, body.village, body.products, body.total_bill)?;

    let svc = svc.into_inner();
    let order = web::block(move || svc.save_draft(id, submission))
        .await
        .map_err(canceled)??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// GET /orders
///
/// Orders matching the status filter and search term, newest first,
/// each with its full product set.
#[utoipa::path(
    get,
    path = "/orders",
    params(
        ("status" = Option<String>, Query, description = "all (default), pending, or completed"),
        ("search" = Option<String>, Query, description = "substring match on name, phone, village"),
    ),
    responses(
        (status = 200, description = "Matching orders", body = ListOrdersResponse),
        (status = 400, description = "Invalid filter"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    svc: web::Data<Lifecycle>,
    query: web::Query<ListOrdersParams>,
) -> Result<HttpResponse, ApiError> {
    let params = query.into_inner();
    let status = match params.status.as_deref() {
        None => StatusFilter::All,
        Some(value) => StatusFilter::parse(value).ok_or_else(|| {
            ApiError::from(DomainError::validation(
                "status",
                format!("unknown status filter '{value}'"),
            ))
        })?,
    };
    let filter = OrderFilter {
        status,
        search: params.search,
    };

    let svc = svc.into_inner();
    let orders = web::block(move || svc.list(&filter))
        .await
        .map_err(canceled)??;

    let items: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    let total = items.len();
    Ok(HttpResponse::Ok().json(ListOrdersResponse { items, total }))
}

/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    svc: web::Data<Lifecycle>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let svc = svc.into_inner();
    let order = web::block(move || svc.get(id)).await.map_err(canceled)??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// PUT /orders/{id}
///
/// Admin edit: replaces customer fields and the whole product set.
/// Validated like a fresh submission unless the target status is
/// "draft".
#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn update_order(
    svc: web::Data<Lifecycle>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateOrderRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let body = body.into_inner();
    let target = parse_status(&body.status)?;
    let submission = submission(body.name, body.phone, body.village, body.products, body.total_bill)?;

    let svc = svc.into_inner();
    let order = web::block(move || svc.update(id, submission, target))
        .await
        .map_err(canceled)??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// POST /orders/{id}/complete
///
/// Status-only transition to completed. Re-completing succeeds.
#[utoipa::path(
    post,
    path = "/orders/{id}/complete",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order completed"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn complete_order(
    svc: web::Data<Lifecycle>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let svc = svc.into_inner();
    web::block(move || svc.mark_completed(id))
        .await
        .map_err(canceled)??;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /orders/{id}
///
/// Removes the order and its product lines in one transaction.
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    svc: web::Data<Lifecycle>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let svc = svc.into_inner();
    web::block(move || svc.delete(id))
        .await
        .map_err(canceled)??;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /orders/{id}/receipt
///
/// Printable HTML receipt for the order.
#[utoipa::path(
    get,
    path = "/orders/{id}/receipt",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Printable receipt", body = String, content_type = "text/html"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn order_receipt(
    svc: web::Data<Lifecycle>,
    shop: web::Data<ShopProfile>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let svc = svc.into_inner();
    let order = web::block(move || svc.get(id)).await.map_err(canceled)??;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(receipt::render(&order, &shop)))
}
