use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

#[cfg(not(test))]
use {
    axum::extract::ConnectInfo,
    std::net::IpAddr,
    std::sync::Arc,
    tower_governor::{governor::GovernorConfigBuilder, key_extractor::KeyExtractor, GovernorLayer},
};

use crate::api::handlers::{self as api_handlers, AppState};
use crate::config::Settings;
use crate::web::handlers as web_handlers;

/// Create the router with all endpoints (API + Web UI)
#[cfg_attr(test, allow(unused_variables))]
pub fn create_router(state: AppState, settings: &Settings) -> Router {
    // Every analysis costs three upstream GitHub requests
    #[cfg_attr(test, allow(unused_mut))]
    let mut analysis_routes = Router::new()
        .route("/analyze", get(web_handlers::analyze_page))
        .route("/api/analyze", get(api_handlers::analyze_repository))
        .with_state(state.clone());

    // Apply rate limiting only in non-test builds
    // NOTE: Rate limiting uses a custom key extractor that:
    // 1. Tries to extract peer IP from connection
    // 2. Falls back to 127.0.0.1 for local testing when peer IP is unavailable
    #[cfg(not(test))]
    {
        // Custom key extractor that provides fallback
        #[derive(Clone, Copy, Debug)]
        struct FallbackIpKeyExtractor;

        impl KeyExtractor for FallbackIpKeyExtractor {
            type Key = IpAddr;

            fn extract<B>(
                &self,
                req: &axum::http::Request<B>,
            ) -> Result<Self::Key, tower_governor::GovernorError> {
                // Peer address, present when served with connect info
                if let Some(ConnectInfo(addr)) =
                    req.extensions().get::<ConnectInfo<std::net::SocketAddr>>()
                {
                    return Ok(addr.ip());
                }

                // Fall back to localhost for local development/testing
                Ok(IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)))
            }
        }

        let burst_size = u32::try_from(settings.server.api_rate_limit.saturating_mul(2))
            .unwrap_or(u32::MAX);
        match GovernorConfigBuilder::default()
            .key_extractor(FallbackIpKeyExtractor)
            .per_second(settings.server.api_rate_limit)
            .burst_size(burst_size)
            .finish()
        {
            Some(config) => {
                analysis_routes = analysis_routes.layer(GovernorLayer {
                    config: Arc::new(config),
                });
            }
            None => {
                tracing::warn!("Invalid rate limit configuration, analysis routes are unthrottled");
            }
        }
    }

    let analysis_routes = analysis_routes;

    // Web UI routes
    let web_routes = Router::new().route("/", get(web_handlers::index));

    let health_routes = Router::new().route("/health", get(api_handlers::health_check));

    // Main router with middleware
    Router::new()
        .merge(web_routes)
        .merge(health_routes)
        .merge(analysis_routes)
        .layer(
            // Request body size limit - prevent memory exhaustion from large payloads
            RequestBodyLimitLayer::new(settings.server.max_request_body_size),
        )
        .layer(
            // CORS - allow all origins for the read-only API
            CorsLayer::new()
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(
            // Security headers
            SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(
                "default-src 'self'; style-src 'self' 'unsafe-inline'; object-src 'none'; base-uri 'self'",
            ),
        ))
        .layer(
            // Compression
            CompressionLayer::new(),
        )
        .layer(
            // Tracing
            TraceLayer::new_for_http(),
        )
}
