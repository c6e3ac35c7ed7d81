//! RPC surface of the storefront recommendation and email services.
//!
//! - config/: Environment configuration (server, mail, recommendation table)
//! - setup/: Dependency injection and server runtime
//! - api/: RPC handlers, DTOs, error mapping and health reporting
pub mod api;
pub mod config;
pub mod setup;

/// Initializes tracing with the RUST_LOG env filter (default: "info").
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Builds the multi-threaded runtime backing the worker pool.
pub fn build_runtime(workers: usize) -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .worker_threads(workers)
        .enable_all()
        .build()?)
}
