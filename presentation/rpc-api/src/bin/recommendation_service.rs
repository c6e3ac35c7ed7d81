use dotenvy::dotenv;

use rpc_api::api::health::registry::HealthRegistry;
use rpc_api::api::recommendation::routes::SERVICE_NAME;
use rpc_api::config::app_config::AppConfig;
use rpc_api::config::recommendation_config::RecommendationConfig;
use rpc_api::setup::dependency_injection::RecommendationContainer;
use rpc_api::setup::server::Server;

/// Recommendation service entry point
///
/// Loads the affinity table, wires the engine and serves ListRecommendations.
fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    rpc_api::init_tracing();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    let recommendation_config = RecommendationConfig::from_env()?;

    // 4. Wire dependencies (affinity table faults abort here)
    let container = RecommendationContainer::new(&recommendation_config)?;

    // 5. Run server on a fixed-size worker pool
    let runtime = rpc_api::build_runtime(config.server.workers)?;
    runtime.block_on(Server::run(
        &config.server,
        "Recommendation Service",
        container.recommendation_api,
        HealthRegistry::new([SERVICE_NAME]),
    ))
}
