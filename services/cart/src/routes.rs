// storefront/services/cart/src/routes.rs

use actix_web::web;

use crate::handlers;

// Literal routes first so /health, /add and /clear never match the
// `{user_id}` capture.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/cart")
      .route("/health", web::get().to(handlers::health_handler))
      .route("/add", web::post().to(handlers::add_to_cart_handler))
      .route("/clear", web::post().to(handlers::clear_cart_handler))
      .route("/{user_id}", web::get().to(handlers::get_cart_handler)),
  );
}
