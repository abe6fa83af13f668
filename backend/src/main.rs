//! Recipe Book server
//!
//! Serves the recipe pages and the `/api/v1` JSON API from one process.
//! Configuration comes from `config/{RUST_ENV}.toml` and `RB__*` variables.

use anyhow::{bail, Context, Result};
use recipe_book_backend::{config::AppConfig, db, routes, state::AppState};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let production = AppConfig::is_production();
    init_tracing(production);

    let config = AppConfig::load().context("failed to load configuration")?;
    check_config(&config, production)?;

    let pool = db::connect(&config.database)
        .await
        .context("failed to connect to the recipe database")?;

    // Production applies migrations as a separate deploy step
    if !production {
        db::run_migrations(&pool).await?;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        site = %config.site.title,
        page_size = config.site.page_size,
        %addr,
        "Recipe Book listening"
    );

    let app = routes::create_router(AppState::new(pool, config));
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Recipe Book stopped");
    Ok(())
}

/// Pretty logs while developing, JSON lines in production
fn init_tracing(production: bool) {
    let default_filter = if production {
        "recipe_book_backend=info,tower_http=info"
    } else {
        "recipe_book_backend=debug,tower_http=debug,sqlx=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    let registry = tracing_subscriber::registry().with(filter);

    if production {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}

fn check_config(config: &AppConfig, production: bool) -> Result<()> {
    let problems = config.problems();
    for problem in &problems {
        error!("Configuration error: {}", problem);
    }
    if !problems.is_empty() {
        bail!("invalid configuration ({} problems)", problems.len());
    }

    if production && config.uses_local_database() {
        warn!("database.url points at localhost in production");
    }
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => info!("Ctrl+C received, shutting down"),
                    _ = sigterm.recv() => info!("SIGTERM received, shutting down"),
                }
            }
            Err(e) => {
                warn!("SIGTERM handler unavailable: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        info!("Ctrl+C received, shutting down");
    }
}
