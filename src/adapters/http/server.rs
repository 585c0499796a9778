//! HTTP server assembly.
//!
//! Wires the configured decision strategy into the router, applies the
//! tower-http middleware stack and runs the listener.

use std::future::Future;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::decide::handlers::not_found;
use super::decide::{decide_router, DecideAppState};
use crate::application::handlers::MakeDecisionHandler;
use crate::config::{AppConfig, ServerConfig, ValidationError};

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// The decision service: router plus the settings it was built from.
pub struct DecisionServer {
    router: Router,
    bind_address: String,
}

impl DecisionServer {
    /// Builds the service from validated configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ServerError> {
        config.validate()?;
        let strategy = config.engine.build_strategy()?;
        let handler = MakeDecisionHandler::new(strategy);

        tracing::info!(
            strategy = handler.strategy_name(),
            yes_percent = config.engine.yes_percent,
            seeded = config.engine.seed.is_some(),
            "Decision engine configured"
        );

        let state =
            DecideAppState::new(handler).with_verbose_errors(config.features.verbose_errors);

        Ok(Self {
            router: build_router(state, config),
            bind_address: config.server.bind_address(),
        })
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Binds the configured address.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        TcpListener::bind(&self.bind_address)
            .await
            .map_err(|source| ServerError::Bind {
                address: self.bind_address.clone(),
                source,
            })
    }

    /// Serves on `listener` until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        tracing::info!("Decision service listening on {}", local_addr);
        tracing::info!("Decide endpoint: POST http://{}/api/decide", local_addr);
        tracing::info!("Health check: http://{}/health", local_addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Decision service stopped");
        Ok(())
    }
}

/// Creates the full application router with middleware.
pub fn build_router(state: DecideAppState, config: &AppConfig) -> Router {
    let mut router = decide_router()
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server));

    if config.features.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }

    // Outermost so the id is present for tracing and echoed on the response.
    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// CORS policy: explicit origins when configured, permissive in
/// development, same-origin only otherwise.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if !origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);
    }

    if server.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::permissive()
    }
}
