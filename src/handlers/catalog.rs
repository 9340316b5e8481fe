use actix_web::HttpResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::catalog;

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogProductResponse {
    pub id: String,
    pub name: String,
    pub price: String,
}

/// GET /catalog
///
/// The shop's fixed product assortment, for rendering the selection
/// table.
#[utoipa::path(
    get,
    path = "/catalog",
    responses(
        (status = 200, description = "Product catalog", body = [CatalogProductResponse]),
    ),
    tag = "catalog"
)]
pub async fn list_catalog() -> HttpResponse {
    let products: Vec<CatalogProductResponse> = catalog::products()
        .into_iter()
        .map(|p| CatalogProductResponse {
            id: p.id.to_string(),
            name: p.name.to_string(),
            price: p.unit_price.to_string(),
        })
        .collect();
    HttpResponse::Ok().json(products)
}
