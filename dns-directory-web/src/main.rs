//! Binary entrypoint: configuration, logging, store selection, HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Condition;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use dns_directory_app::AppStateBuilder;
use dns_directory_app::adapters::SqliteStore;
use dns_directory_web::config::{Config, LogFormat};
use dns_directory_web::error::json_error_handler;
use dns_directory_web::middleware::RequestLog;
use dns_directory_web::routes;

/// Resolve the config file path: CLI argument, then environment variable,
/// then `config.toml` next to the working directory.
fn config_path() -> PathBuf {
    if let Some(arg) = std::env::args().nth(1) {
        return PathBuf::from(arg);
    }
    if let Ok(path) = std::env::var("DNS_DIRECTORY_CONFIG") {
        return PathBuf::from(path);
    }
    PathBuf::from("config.toml")
}

/// Initialize the tracing subscriber.
///
/// Returns the appender guard when file logging is enabled; it must stay
/// alive for the lifetime of the process or buffered lines are lost.
fn init_tracing(config: &Config) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log.level.clone()));

    if let Some(ref dir) = config.log.directory {
        let appender = tracing_appender::rolling::daily(dir, "dns-directory.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        match config.log.format {
            LogFormat::Json => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .json()
                .init(),
            LogFormat::Pretty => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init(),
        }
        Some(guard)
    } else {
        match config.log.format {
            LogFormat::Json => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .init(),
            LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        }
        None
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load(&config_path())?;
    let _log_guard = init_tracing(&config);

    // Pick the store: SQLite when a database path is configured, otherwise
    // records live in memory and vanish on restart.
    let mut builder = AppStateBuilder::new();
    if let Some(ref db_path) = config.database.path {
        let store = SqliteStore::new(db_path)
            .await
            .with_context(|| format!("failed to open database {}", db_path.display()))?;
        tracing::info!(path = %db_path.display(), "using sqlite record store");
        builder = builder.record_repository(Arc::new(store));
    } else {
        tracing::info!("using in-memory record store");
    }
    let app_state = web::Data::new(builder.build());

    let workers = if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    };
    let cors_enabled = config.server.cors;

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        workers,
        cors = cors_enabled,
        "starting server"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(Condition::new(cors_enabled, Cors::permissive()))
            .wrap(RequestLog)
            .configure(routes::configure)
    })
    .workers(workers)
    .bind((config.server.host.as_str(), config.server.port))
    .with_context(|| {
        format!(
            "failed to bind {}:{}",
            config.server.host, config.server.port
        )
    })?
    .run()
    .await?;

    Ok(())
}
