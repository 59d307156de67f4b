/// Gatherly Server - Main entry point
use actix_web::{web, App, HttpServer};
use anyhow::Context;

use gatherly_server::{
    config::Config, db, routes::configure_routes, security::jwt::JwtService, telemetry, AppState,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for local development before reading configuration
    dotenvy::dotenv().ok();

    telemetry::init_tracing();

    let config = Config::from_env().context("Failed to load configuration from environment")?;

    tracing::info!(
        "Starting Gatherly Server on {}:{}",
        config.server_host,
        config.server_port
    );

    let pool = db::create_pool(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool initialized");

    db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations applied");

    let app_state = AppState {
        db: pool,
        jwt: JwtService::new(&config.jwt_secret),
    };

    let bind_addr = (config.server_host.clone(), config.server_port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(configure_routes)
    })
    .bind(bind_addr)
    .context("Failed to bind server address")?
    .run()
    .await
    .context("Server error")
}
