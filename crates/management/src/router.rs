//! Management API router — mounts all management endpoints under /api/v1.

use crate::handlers::{self, ManagementState};
use crate::store::ManagementStore;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Build the management router with all endpoints.
/// Returns a Router that should be merged into the main app.
pub fn management_router() -> Router {
    let store = Arc::new(ManagementStore::new());
    let state = ManagementState { store };

    Router::new()
        // Auth
        .route("/api/v1/auth/login", post(handlers::handle_login))
        // Newsletters
        .route(
            "/api/v1/newsletters",
            get(handlers::list_newsletters).post(handlers::create_newsletter),
        )
        .route(
            "/api/v1/newsletters/{id}",
            get(handlers::get_newsletter)
                .put(handlers::update_newsletter)
                .delete(handlers::delete_newsletter),
        )
        // Campaigns
        .route(
            "/api/v1/campaigns",
            get(handlers::list_campaigns).post(handlers::create_campaign),
        )
        .route(
            "/api/v1/campaigns/{id}",
            get(handlers::get_campaign)
                .put(handlers::update_campaign)
                .delete(handlers::delete_campaign),
        )
        .route("/api/v1/campaigns/{id}/pause", post(handlers::pause_campaign))
        .route("/api/v1/campaigns/{id}/resume", post(handlers::resume_campaign))
        // Landing pages
        .route(
            "/api/v1/landing-pages",
            get(handlers::list_landing_pages).post(handlers::create_landing_page),
        )
        .route(
            "/api/v1/landing-pages/{id}",
            get(handlers::get_landing_page)
                .put(handlers::update_landing_page)
                .delete(handlers::delete_landing_page),
        )
        .route(
            "/api/v1/landing-pages/{id}/publish",
            post(handlers::publish_landing_page),
        )
        .route(
            "/api/v1/landing-pages/{id}/archive",
            post(handlers::archive_landing_page),
        )
        // Cross-promotion directory
        .route(
            "/api/v1/network/listings",
            get(handlers::list_listings).post(handlers::create_listing),
        )
        .route(
            "/api/v1/network/listings/{id}",
            axum::routing::delete(handlers::delete_listing),
        )
        // Dashboard
        .route("/api/v1/dashboard/overview", get(handlers::dashboard_overview))
        // Audit log
        .route("/api/v1/audit-log", get(handlers::audit_log))
        .with_state(state)
}
