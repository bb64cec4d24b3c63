use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ado_chat_bridge::build_app;
use ado_chat_bridge::config::Config;
use ado_chat_bridge::router::Recipient;
use ado_chat_bridge::routes::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ado_chat_bridge=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            eprintln!("Error: Failed to load configuration: {}", e);
            eprintln!("\nEnvironment variables:");
            eprintln!("  ADO_WEBHOOK_USER                - Basic auth username sent by Azure DevOps");
            eprintln!("  ADO_WEBHOOK_PASS                - Basic auth password sent by Azure DevOps");
            eprintln!("  GOOGLE_CHAT_WEBHOOK_URL_HANS    - Google Chat webhook for @Hans");
            eprintln!("  GOOGLE_CHAT_WEBHOOK_URL_ALEXIS  - Google Chat webhook for @Alexis");
            eprintln!("  GOOGLE_CHAT_WEBHOOK_URL_JUSTIN  - Google Chat webhook for @Justin");
            eprintln!("  GOOGLE_CHAT_WEBHOOK_URL_EFFORT  - Google Chat webhook for effort reviews");
            eprintln!("  LISTEN_ADDR                     - Address to bind (default: 0.0.0.0:3000)");
            std::process::exit(1);
        }
    };

    if config.credentials().is_none() {
        warn!("ADO_WEBHOOK_USER / ADO_WEBHOOK_PASS not set, every request will be rejected");
    }
    for recipient in Recipient::FALLBACK_ORDER {
        if config.destination(recipient).is_none() {
            warn!(recipient = %recipient, "No Google Chat webhook URL configured");
        }
    }

    info!(
        listen_addr = %config.listen_addr,
        destinations_configured = config.destination_count(),
        "Starting ADO → Google Chat bridge"
    );

    let app_state = Arc::new(AppState::new(config.clone()));
    let app = build_app(app_state);

    // Start the server
    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(error = %e, address = %config.listen_addr, "Failed to bind to address");
            std::process::exit(1);
        }
    };

    info!(address = %config.listen_addr, "Server listening");
    info!("ADO webhook URL: http://<your-host>/ado/events");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
