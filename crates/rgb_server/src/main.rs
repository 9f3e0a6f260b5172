mod config;
mod db;
mod error;
mod handlers;
mod logging;
mod models;
mod routes;
mod validation;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;

use crate::config::ServerConfig;
use crate::handlers::AppState;

#[derive(Parser, Debug)]
#[command(name = "rgb_server")]
#[command(about = "Year-by-month input tables with quarterly totals, served over HTTP")]
struct Args {
    /// Path to the data directory (default: ~/.rgb_table/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Address to listen on, overriding the config file
    #[arg(short, long)]
    bind: Option<String>,

    /// Config file (default: {data_dir}/rgb.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".rgb_table")
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    logging::init_logging(&data_dir, &args.log_level)?;

    let config_path = args.config.unwrap_or_else(|| data_dir.join("rgb.yaml"));
    let mut config = ServerConfig::load(&config_path)?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }

    let db_path = config.database_path(&data_dir);
    let conn = Connection::open(&db_path)?;
    db::init_db(&conn)?;
    tracing::info!("Using database {}", db_path.display());

    if let Some(cutoff) = config.session_cutoff(chrono::Utc::now()) {
        let removed = db::prune_forms(&conn, &cutoff.to_rfc3339())?;
        tracing::info!("Pruned {} form sessions idle since {}", removed, cutoff);
    }

    let state = AppState {
        db: Arc::new(Mutex::new(conn)),
        limits: config.limits(),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, routes::app(state)).await?;

    tracing::info!("Server shutting down");
    Ok(())
}
