// storefront/services/cart/src/main.rs

mod handlers;
mod models;
mod routes;
mod state;
mod storage;

use actix_web::{web as actix_data, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::state::AppState;
use storefront_core::{json_error_handler, path_error_handler, ReadinessState, ServiceConfig, DB2};

const DEFAULT_PORT: u16 = 5004;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting cart service...");

  let config = match ServiceConfig::from_env(&DB2, DEFAULT_PORT) {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load service configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  let db_pool = match PgPoolOptions::new()
    .max_connections(5)
    .connect_lazy(&config.database_url)
  {
    Ok(pool) => pool,
    Err(e) => {
      tracing::error!(error = %e, "Invalid database configuration.");
      panic!("Database configuration error: {}", e);
    }
  };

  let readiness = ReadinessState::new();
  tokio::spawn(storage::init_storage(db_pool.clone(), readiness.clone()));

  let app_state = AppState { db_pool, readiness };

  let server_address = config.bind_addr();
  tracing::info!("Binding cart service to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .app_data(actix_data::JsonConfig::default().error_handler(json_error_handler))
      .app_data(actix_data::PathConfig::default().error_handler(path_error_handler))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(routes::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
