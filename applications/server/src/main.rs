/// User Table Server - read-only user activity API
use anyhow::Context;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_table_core::UserDirectory;
use user_table_server::{
    api,
    cli::{self, Cli, Commands},
    config::ServerConfig,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_table_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command() {
        Commands::Serve => {
            serve(cli.config.as_deref()).await?;
        }
        Commands::ListUsers { json, today } => {
            list_users(json, today)?;
        }
        Commands::Check => {
            check()?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&Path>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    tracing::info!("Starting User Table Server");

    let users = UserDirectory::seeded();
    if let Err(e) = users.validate_dates() {
        tracing::warn!("Seeded dataset has malformed dates: {}", e);
    }
    tracing::info!("Serving {} user records", users.len());

    if let Some(dir) = &config.web.dir {
        tracing::info!("Serving web UI from {}", dir.display());
    }

    let app = api::create_router(AppState::new(users), &config);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn list_users(json: bool, today: Option<chrono::NaiveDate>) -> anyhow::Result<()> {
    let directory = UserDirectory::seeded();

    if json {
        println!("{}", cli::render_json(&directory)?);
        return Ok(());
    }

    let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
    print!("{}", cli::render_report(&directory, today)?);

    Ok(())
}

fn check() -> anyhow::Result<()> {
    let summary = cli::check(&UserDirectory::seeded()).context("User dataset failed validation")?;
    println!("{}", summary);
    Ok(())
}
