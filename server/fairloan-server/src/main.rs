//! Main entry point for the FairLoan auth API.
//!
//! Loads configuration from the environment, runs database migrations,
//! and serves the axum application.

use anyhow::Context;
use auth_core::AuthConfig;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fairloan_server::{create_app, AppState};

/// FairLoan HTTP API server
#[derive(Parser, Debug)]
#[command(name = "fairloan-server")]
#[command(about = "Authentication API backing the FairLoan web application")]
struct Args {
    /// Server bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // .env is optional; real deployments set the environment directly.
    dotenvy::dotenv().ok();
    init_tracing(args.verbose);

    info!("Starting FairLoan auth server");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Configuration errors are fatal at startup. The server never runs
    // with a missing secret or an ill-defined token policy.
    let config = AuthConfig::from_env().context("invalid auth configuration")?;

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(&database_url)
        .await
        .context("failed to connect to database")?;

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .context("failed to run database migrations")?;

    let state = AppState::new(pool, &config);
    let app = create_app(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fairloan_server={0},auth_core={0},tower_http=info", default_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
