//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Mount the resource router into an axum `Router`
//! - Wire up middleware (tracing, request ID, timeout, body limit)
//! - Serve on a listener until shutdown is signalled

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::lifecycle::shutdown;
use crate::routing::ResourceRouter;

/// HTTP server exposing a [`ResourceRouter`].
pub struct HttpServer {
    app: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `router` with the given configuration.
    pub fn new(config: ServerConfig, router: ResourceRouter) -> Self {
        for route in router.routes() {
            tracing::debug!(
                method = %route.method(),
                path = %route.template(),
                action = %route.action(),
                resource = route.resource(),
                "Route"
            );
        }

        let app = Self::build_app(&config, router);
        Self { app, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_app(config: &ServerConfig, router: ResourceRouter) -> Router {
        router
            .into_axum_router()
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered application, for mounting or in-process testing.
    pub fn app(&self) -> Router {
        self.app.clone()
    }

    /// Run the server, accepting connections until `shutdown_rx` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown::recv(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
