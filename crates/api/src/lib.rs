pub mod middleware;
pub mod railway_headers;
pub mod routes;

use crate::{
    middleware::railway_headers_middleware,
    routes::{deployment, health_check, request_headers, RailwayState},
};
use axum::{middleware::from_fn, routing::get, Router};
use config::LoggingConfig;

pub use railway_headers::RailwayHeaders;

/// Build the application router. Every route sees the parsed Railway headers.
pub fn build_app(state: RailwayState) -> Router {
    let railway_routes = Router::new()
        .route("/request", get(request_headers))
        .route("/deployment", get(deployment))
        .with_state(state);

    Router::new()
        .route("/health", get(health_check))
        .nest("/v1/railway", railway_routes)
        .layer(from_fn(railway_headers_middleware))
}

pub fn init_tracing(logging_config: &LoggingConfig) {
    let filter = logging_config.filter_directive();

    // Initialize tracing based on the format specified in config
    match logging_config.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .init();
        }
        "compact" => {
            tracing_subscriber::fmt()
                .compact()
                .with_env_filter(filter)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .init();
        }
    }
}
