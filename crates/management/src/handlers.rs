//! Axum REST handlers for the management API.

use crate::auth;
use crate::models::*;
use crate::store::ManagementStore;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use uuid::Uuid;

/// Shared management state.
#[derive(Clone)]
pub struct ManagementState {
    pub store: Arc<ManagementStore>,
}

// ─── Auth ──────────────────────────────────────────────────────────────────

pub async fn handle_login(
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<ErrorResponse>)> {
    match auth::authenticate(&req) {
        Ok(resp) => Ok(Json(resp)),
        Err(msg) => Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "auth_failed".to_string(),
                message: msg,
            }),
        )),
    }
}

// ─── Newsletters ───────────────────────────────────────────────────────────

pub async fn list_newsletters(State(state): State<ManagementState>) -> Json<Vec<Newsletter>> {
    Json(state.store.list_newsletters())
}

pub async fn get_newsletter(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Newsletter>, StatusCode> {
    state
        .store
        .get_newsletter(id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn create_newsletter(
    State(state): State<ManagementState>,
    Json(req): Json<CreateNewsletterRequest>,
) -> Result<(StatusCode, Json<NewsletterCreated>), (StatusCode, Json<ErrorResponse>)> {
    if req.name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "invalid_newsletter".to_string(),
                message: "Name is required".to_string(),
            }),
        ));
    }
    let created = state.store.create_newsletter(req, "admin");
    metrics::counter!("management.newsletters.created").increment(1);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_newsletter(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNewsletterRequest>,
) -> Result<Json<Newsletter>, StatusCode> {
    state
        .store
        .update_newsletter(id, req, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn delete_newsletter(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    if state.store.delete_newsletter(id, "admin") {
        metrics::counter!("management.newsletters.deleted").increment(1);
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

// ─── Campaigns ─────────────────────────────────────────────────────────────

pub async fn list_campaigns(
    State(state): State<ManagementState>,
    Query(filter): Query<CampaignFilter>,
) -> Json<Vec<Campaign>> {
    Json(state.store.list_campaigns(&filter))
}

pub async fn get_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, StatusCode> {
    state
        .store
        .get_campaign(id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn create_campaign(
    State(state): State<ManagementState>,
    Json(req): Json<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<Campaign>), (StatusCode, Json<ErrorResponse>)> {
    match state.store.create_campaign(req, "admin") {
        Ok(campaign) => {
            metrics::counter!("management.campaigns.created").increment(1);
            Ok((StatusCode::CREATED, Json(campaign)))
        }
        Err(msg) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "invalid_campaign".to_string(),
                message: msg,
            }),
        )),
    }
}

pub async fn update_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCampaignRequest>,
) -> Result<Json<Campaign>, StatusCode> {
    state
        .store
        .update_campaign(id, req, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn delete_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    if state.store.delete_campaign(id, "admin") {
        metrics::counter!("management.campaigns.deleted").increment(1);
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

pub async fn pause_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, StatusCode> {
    state
        .store
        .pause_campaign(id, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn resume_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, StatusCode> {
    state
        .store
        .resume_campaign(id, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

// ─── Landing pages ─────────────────────────────────────────────────────────

#[derive(Debug, Default, serde::Deserialize)]
pub struct LandingPageFilter {
    #[serde(default)]
    pub newsletter_id: Option<Uuid>,
}

pub async fn list_landing_pages(
    State(state): State<ManagementState>,
    Query(filter): Query<LandingPageFilter>,
) -> Json<Vec<LandingPage>> {
    Json(state.store.list_landing_pages(filter.newsletter_id))
}

pub async fn get_landing_page(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LandingPage>, StatusCode> {
    state
        .store
        .get_landing_page(id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn create_landing_page(
    State(state): State<ManagementState>,
    Json(req): Json<CreateLandingPageRequest>,
) -> Result<(StatusCode, Json<LandingPage>), (StatusCode, Json<ErrorResponse>)> {
    match state.store.create_landing_page(req, "admin") {
        Ok(page) => {
            metrics::counter!("management.landing_pages.created").increment(1);
            Ok((StatusCode::CREATED, Json(page)))
        }
        Err(msg) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "invalid_landing_page".to_string(),
                message: msg,
            }),
        )),
    }
}

pub async fn update_landing_page(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateLandingPageRequest>,
) -> Result<Json<LandingPage>, StatusCode> {
    state
        .store
        .update_landing_page(id, req, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn delete_landing_page(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    if state.store.delete_landing_page(id, "admin") {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

pub async fn publish_landing_page(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LandingPage>, StatusCode> {
    state
        .store
        .publish_landing_page(id, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn archive_landing_page(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LandingPage>, StatusCode> {
    state
        .store
        .archive_landing_page(id, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

// ─── Cross-promotion directory ─────────────────────────────────────────────

pub async fn list_listings(State(state): State<ManagementState>) -> Json<Vec<CrossPromoListing>> {
    Json(state.store.list_listings())
}

pub async fn create_listing(
    State(state): State<ManagementState>,
    Json(req): Json<CreateListingRequest>,
) -> (StatusCode, Json<CrossPromoListing>) {
    let listing = state.store.create_listing(req, "admin");
    metrics::counter!("management.listings.created").increment(1);
    (StatusCode::CREATED, Json(listing))
}

pub async fn delete_listing(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    if state.store.delete_listing(id, "admin") {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

// ─── Dashboard / audit ─────────────────────────────────────────────────────

pub async fn dashboard_overview(State(state): State<ManagementState>) -> Json<DashboardOverview> {
    Json(state.store.dashboard_overview())
}

pub async fn audit_log(State(state): State<ManagementState>) -> Json<Vec<AuditLogEntry>> {
    Json(state.store.get_audit_log())
}
