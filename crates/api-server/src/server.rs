//! API server — assembles the HTTP router and metrics exporter.

use crate::rest::{self, AppState};
use axum::routing::{get, post};
use axum::Router;
use promo_adcopy::AdCopyGenerator;
use promo_core::config::AppConfig;
use promo_management::management_router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Main API server managing the REST surface.
pub struct ApiServer {
    config: AppConfig,
    generator: Arc<AdCopyGenerator>,
}

impl ApiServer {
    pub fn new(config: AppConfig, generator: Arc<AdCopyGenerator>) -> Self {
        Self { config, generator }
    }

    /// Start the HTTP REST server.
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let state = AppState {
            generator: self.generator.clone(),
            node_id: self.config.node_id.clone(),
            start_time: Instant::now(),
        };

        let app = Router::new()
            // Copy generation endpoints
            .route(
                "/api/v1/ai/generate-ad-copy",
                post(rest::handle_generate_ad_copy),
            )
            .route("/api/v1/ai/promotion-kit", post(rest::handle_promotion_kit))
            .route("/api/v1/ai/optimize-seo", post(rest::handle_optimize_seo))
            // Operational endpoints
            .route("/health", get(rest::health_check))
            .route("/ready", get(rest::readiness))
            .route("/live", get(rest::liveness))
            .with_state(state)
            // Management endpoints (newsletters, campaigns, landing pages, directory)
            .merge(management_router())
            // Middleware
            .layer(axum::middleware::from_fn(
                promo_management::auth::auth_middleware,
            ))
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);

        info!(addr = %addr, demo_mode = self.generator.is_demo(), "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Start the metrics exporter on a separate port.
    pub async fn start_metrics(&self) -> anyhow::Result<()> {
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        let handle = builder
            .with_http_listener(SocketAddr::new(
                self.config.api.host.parse()?,
                self.config.metrics.port,
            ))
            .install_recorder()?;

        info!(port = self.config.metrics.port, "Metrics exporter started");

        // Keep the handle alive
        std::mem::forget(handle);
        Ok(())
    }
}
