pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod receipt;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::lifecycle::OrderLifecycle;
use infrastructure::order_store::DieselOrderStore;

pub use db::{create_pool, DbPool};
pub use receipt::ShopProfile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::create_order,
        handlers::orders::save_draft,
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::update_order,
        handlers::orders::complete_order,
        handlers::orders::delete_order,
        handlers::orders::order_receipt,
        handlers::catalog::list_catalog,
    ),
    components(schemas(
        handlers::orders::ProductSelectionRequest,
        handlers::orders::CreateOrderRequest,
        handlers::orders::SaveDraftRequest,
        handlers::orders::UpdateOrderRequest,
        handlers::orders::ProductSelectionResponse,
        handlers::orders::OrderResponse,
        handlers::orders::ListOrdersResponse,
        handlers::catalog::CatalogProductResponse,
    ))
)]
pub struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    shop: ShopProfile,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let lifecycle = web::Data::new(OrderLifecycle::new(DieselOrderStore::new(pool)));
    let shop = web::Data::new(shop);

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(lifecycle.clone())
            .app_data(shop.clone())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .route("/catalog", web::get().to(handlers::catalog::list_catalog))
            .service(
                web::scope("/orders")
                    .route("", web::post().to(handlers::orders::create_order))
                    .route("", web::get().to(handlers::orders::list_orders))
                    // registered before the {id} routes so "drafts" is not
                    // captured as an order id
                    .route("/drafts", web::post().to(handlers::orders::save_draft))
                    .route("/{id}", web::get().to(handlers::orders::get_order))
                    .route("/{id}", web::put().to(handlers::orders::update_order))
                    .route("/{id}", web::delete().to(handlers::orders::delete_order))
                    .route(
                        "/{id}/complete",
                        web::post().to(handlers::orders::complete_order),
                    )
                    .route(
                        "/{id}/receipt",
                        web::get().to(handlers::orders::order_receipt),
                    ),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
