use premier_zone_server::{api::Api, config_handler, LogResult};
use tracing::log;

#[tokio::main]
async fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "info")
    }

    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Some(config) = config_handler::get_config().ok_log("[CONFIG] Failed to load config") else {
        std::process::exit(1);
    };

    log::info!("[MAIN] Proxy to {} views via {}", config.api_url, config.get_proxy_url());
    if Api::serve(&config).await.ok_log("[API] Server stopped").is_none() {
        std::process::exit(1);
    }
}
