//! REST API handlers for copy generation and operational endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use promo_adcopy::types::{
    AdCopyRequest, AdCopyResponse, PromotionKitRequest, PromotionKitResponse, SeoOptimization,
    SeoOptimizeRequest,
};
use promo_adcopy::AdCopyGenerator;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, warn};

/// Shared application state for REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<AdCopyGenerator>,
    pub node_id: String,
    pub start_time: Instant,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub node_id: String,
    pub demo_mode: bool,
    pub uptime_secs: u64,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn validation_error(message: String) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "invalid_request".to_string(),
            message,
        }),
    )
}

fn generation_error(message: &str) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "generation_failed".to_string(),
            message: message.to_string(),
        }),
    )
}

/// POST /api/v1/ai/generate-ad-copy — platform ad-copy generation.
pub async fn handle_generate_ad_copy(
    State(state): State<AppState>,
    Json(request): Json<AdCopyRequest>,
) -> Result<Json<AdCopyResponse>, HandlerError> {
    match state.generator.generate(&request).await {
        Ok(response) => {
            metrics::counter!("api.adcopy.generated").increment(1);
            Ok(Json(response))
        }
        Err(e) if e.is_validation() => {
            warn!(platform = %request.platform, error = %e, "Ad copy request validation failed");
            metrics::counter!("api.validation_errors").increment(1);
            Err(validation_error(e.to_string()))
        }
        Err(e) => {
            error!(platform = %request.platform, error = %e, "Ad copy generation failed");
            metrics::counter!("api.generation_errors").increment(1);
            Err(generation_error("Failed to generate ad copy"))
        }
    }
}

/// POST /api/v1/ai/promotion-kit — weekly organic promotion kit.
pub async fn handle_promotion_kit(
    State(state): State<AppState>,
    Json(request): Json<PromotionKitRequest>,
) -> Result<Json<PromotionKitResponse>, HandlerError> {
    match state.generator.promotion_kit(&request).await {
        Ok(response) => {
            metrics::counter!("api.promotion_kits.generated").increment(1);
            Ok(Json(response))
        }
        Err(e) if e.is_validation() => {
            warn!(error = %e, "Promotion kit request validation failed");
            metrics::counter!("api.validation_errors").increment(1);
            Err(validation_error(e.to_string()))
        }
        Err(e) => {
            error!(error = %e, "Promotion kit generation failed");
            metrics::counter!("api.generation_errors").increment(1);
            Err(generation_error("Failed to generate promotion kit"))
        }
    }
}

/// POST /api/v1/ai/optimize-seo — landing page optimization advice.
pub async fn handle_optimize_seo(
    State(state): State<AppState>,
    Json(request): Json<SeoOptimizeRequest>,
) -> Result<Json<SeoOptimization>, HandlerError> {
    match state.generator.optimize_seo(&request).await {
        Ok(optimization) => Ok(Json(optimization)),
        Err(e) if e.is_validation() => {
            warn!(error = %e, "SEO optimization request validation failed");
            metrics::counter!("api.validation_errors").increment(1);
            Err(validation_error(e.to_string()))
        }
        Err(e) => {
            error!(error = %e, "SEO optimization failed");
            metrics::counter!("api.generation_errors").increment(1);
            Err(generation_error("Failed to optimize SEO"))
        }
    }
}

/// GET /health — Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        node_id: state.node_id.clone(),
        demo_mode: state.generator.is_demo(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /ready — Readiness probe for Kubernetes.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /live — Liveness probe for Kubernetes.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}
