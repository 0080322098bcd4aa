use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use estatenexus_api::config::ServerConfig;
use estatenexus_api::router::build_app_router;
use estatenexus_api::state::AppState;
use estatenexus_insights::{DisabledProvider, GeminiClient, InsightsProvider};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estatenexus_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database (optional: the API starts degraded without it) ---
    let pool = match &config.database_url {
        Some(url) => match estatenexus_db::create_pool(url).await {
            Ok(pool) => {
                estatenexus_db::run_migrations(&pool)
                    .await
                    .expect("Failed to run database migrations");
                tracing::info!("Database connection pool created, migrations applied");
                Some(pool)
            }
            Err(err) => {
                tracing::error!(error = %err, "Database unreachable; starting in degraded mode");
                None
            }
        },
        None => {
            tracing::warn!("DATABASE_URL is not set; data access is disabled");
            None
        }
    };

    // --- Narrative provider ---
    let insights: Arc<dyn InsightsProvider> = match &config.gemini_api_key {
        Some(key) => Arc::new(GeminiClient::new(key.clone(), config.gemini_model.clone())),
        None => {
            tracing::warn!("GEMINI_API_KEY is not set; narrative summaries will use fallback text");
            Arc::new(DisabledProvider)
        }
    };

    // --- App state & router ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        insights,
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
