use ta_server::{AppState, LogMailer, build_router, logger};

use ta_auth::{JwtIssuer, JwtValidator};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = ta_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, config.logging.colored)?;

    info!("Starting ta-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    info!("Connecting to database: {}", config.database.path);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&config.database.path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/ta-db/migrations").run(&pool).await?;
    info!("Migrations complete");

    // Token issuance and validation share the HS256 secret
    let secret = config.auth.secret().as_bytes().to_vec();
    let issuer = JwtIssuer::new(
        &secret,
        config.auth.access_ttl_secs,
        config.auth.refresh_ttl_secs,
    );
    let validator = JwtValidator::with_hs256(&secret);
    info!("JWT: HS256 authentication enabled");

    // Build application state
    let app_state = AppState {
        pool,
        issuer: Arc::new(issuer),
        validator: Arc::new(validator),
        mailer: Arc::new(LogMailer),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
