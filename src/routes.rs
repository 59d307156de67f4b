//! Route configuration
//!
//! Centralized route setup so main.rs only wires state and the server.

use actix_web::web;

use crate::handlers;
use crate::metrics;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Operational endpoints
        .route("/metrics", web::get().to(metrics::metrics_handler))
        .route("/health", web::get().to(handlers::health_check))
        .route("/readiness", web::get().to(handlers::readiness_check))
        // API routes
        .service(
            web::scope("/api/v1")
                .route("/auth/register", web::post().to(handlers::register))
                .route("/auth/login", web::post().to(handlers::login))
                .route("/auth/logout", web::post().to(handlers::logout))
                .route("/events", web::post().to(handlers::create_event))
                .route("/events/{id}", web::get().to(handlers::get_event))
                .route(
                    "/public/events/{id}",
                    web::get().to(handlers::get_public_event),
                ),
        );
}
