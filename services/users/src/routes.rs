// storefront/services/users/src/routes.rs

use actix_web::web;

use crate::handlers;

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/user")
      .route("/health", web::get().to(handlers::health_handler))
      .route("/register", web::post().to(handlers::register_handler))
      .route("/login", web::post().to(handlers::login_handler)),
  );
}
