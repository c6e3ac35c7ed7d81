use dotenvy::dotenv;

use rpc_api::api::email::routes::SERVICE_NAME;
use rpc_api::api::health::registry::HealthRegistry;
use rpc_api::config::app_config::AppConfig;
use rpc_api::config::mail_config::MailConfig;
use rpc_api::setup::dependency_injection::EmailContainer;
use rpc_api::setup::server::Server;

/// Email service entry point
///
/// Wires the renderer and the configured mail sender and serves SendOrderConfirmation.
fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    rpc_api::init_tracing();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    let mail_config = MailConfig::from_env()?;

    // 4. Run server on a fixed-size worker pool
    let runtime = rpc_api::build_runtime(config.server.workers)?;
    runtime.block_on(async {
        // The pooled SMTP transport spawns tasks, so it is built inside the runtime.
        let container = EmailContainer::new(&mail_config)?;
        Server::run(
            &config.server,
            "Email Service",
            container.email_api,
            HealthRegistry::new([SERVICE_NAME]),
        )
        .await
    })
}
