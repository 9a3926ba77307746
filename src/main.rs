use tokio::net::TcpListener;

use switchboard::config::{generate_config_template, Config};
use switchboard::routes;
use switchboard::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load config with layered precedence: defaults < TOML < env < CLI
    let config = Config::load()?;

    // Handle --generate-config: print template and exit
    if config.generate_config {
        print!("{}", generate_config_template());
        return Ok(());
    }

    // Initialize tracing/logging
    if config.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "switchboard=info".parse().unwrap()),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "switchboard=info".parse().unwrap()),
            )
            .init();
    }

    tracing::info!("switchboard v{} starting", env!("CARGO_PKG_VERSION"));

    if config.turn.is_none() {
        tracing::warn!(
            "No [turn] section configured; /api/get-turn-credentials will return 503"
        );
    }

    // All state is in-memory; a restart starts from nothing.
    let app_state = AppState::new(config.turn.clone());

    // Build router
    let app = routes::build_router(app_state);

    // Bind and serve
    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
