// storefront/services/orders/src/web/routes.rs

use actix_web::web;

use crate::web::handlers;

// Literal routes are registered before the `{order_id}` capture so /health and
// /place never match as an id.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/order")
      .route("/health", web::get().to(handlers::health_handler))
      .route("/place", web::post().to(handlers::place_order_handler))
      .route("/{order_id}", web::get().to(handlers::get_order_handler)),
  );
}
