use api::{build_app, init_tracing, routes::RailwayState};
use config::{ApiConfig, RailwayEnv, RailwayEnvError};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Load configuration first to get logging settings
    let config = ApiConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    init_tracing(&config.logging);

    let railway_env = match RailwayEnv::load() {
        Ok(env) => {
            tracing::info!(
                project = %env.project_name,
                environment = %env.environment_name,
                service = %env.service_name,
                region = %env.replica_region,
                "Running on Railway"
            );
            Some(Arc::new(env))
        }
        Err(RailwayEnvError::NotRailway) => {
            tracing::info!("Not running on Railway, deployment details disabled");
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "Invalid Railway environment");
            std::process::exit(1);
        }
    };

    let app = build_app(RailwayState { env: railway_env });

    let bind_address = config.server.bind_address();
    let listener = match tokio::net::TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(address = %bind_address, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(address = %bind_address, "Server started successfully");
    tracing::info!("API Endpoints:");
    tracing::info!("  - GET /health");
    tracing::info!("  - GET /v1/railway/request (Railway headers of the request)");
    tracing::info!("  - GET /v1/railway/deployment (Deployment details)");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
