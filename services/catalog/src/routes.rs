// storefront/services/catalog/src/routes.rs

use actix_web::web;

use crate::handlers;

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/catalog")
      .route("/health", web::get().to(handlers::health_handler))
      .route("/products", web::get().to(handlers::list_products_handler))
      .route("/products/{product_id}", web::get().to(handlers::get_product_handler)),
  );
}
