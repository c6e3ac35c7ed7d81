use std::time::Duration;

use poem::endpoint::BoxEndpoint;
use poem::listener::{Listener, TcpListener};
use poem::{EndpointExt, Route, Server as PoemServer, middleware::Tracing};
use poem_openapi::{OpenApi, OpenApiService};

use crate::api::health::registry::{HealthRegistry, ServingStatus};
use crate::api::health::routes::Api as HealthApi;
use crate::config::server_config::ServerConfig;

/// Time given to in-flight calls once shutdown starts.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

pub struct Server;

impl Server {
    /// Assembles the RPC routes, health endpoint, OpenAPI document and Swagger UI.
    pub fn app<T>(addr: &str, title: &str, api: T, health: HealthRegistry) -> BoxEndpoint<'static>
    where
        T: OpenApi + 'static,
    {
        let api_service = OpenApiService::new(
            (HealthApi::new(health), api),
            title,
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(Tracing)
            .map_to_response()
            .boxed()
    }

    /// Serves `api` plus the health endpoint until Ctrl-C.
    ///
    /// Health flips to SERVING only after the listener is bound, and back to
    /// NOT_SERVING when shutdown begins.
    pub async fn run<T>(
        config: &ServerConfig,
        title: &str,
        api: T,
        health: HealthRegistry,
    ) -> anyhow::Result<()>
    where
        T: OpenApi + 'static,
    {
        let addr = config.bind_address();
        let app = Self::app(&addr, title, api, health.clone());

        let acceptor = TcpListener::bind(addr.clone()).into_acceptor().await?;
        health.set_all(ServingStatus::Serving);
        tracing::info!(
            "{} listening on {} with {} workers",
            title,
            addr,
            config.workers
        );

        let shutdown_health = health.clone();
        let shutdown = async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received interrupt signal, shutting down...");
            shutdown_health.set_all(ServingStatus::NotServing);
        };

        PoemServer::new_with_acceptor(acceptor)
            .run_with_graceful_shutdown(app, shutdown, Some(SHUTDOWN_GRACE))
            .await?;
        Ok(())
    }
}
