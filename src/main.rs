use std::process::ExitCode;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use tracing::{error, info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::config::Config;
use crate::database::Database;
use crate::error::ConfigError;

mod config;
mod database;
mod endpoints;
mod error;
mod extract;
mod middleware;
mod model;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let max_level = match config.max_level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Begin logging
    let subscriber = FmtSubscriber::builder().with_max_level(max_level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Could not install logger: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = run(config).await {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run(config: Config) -> Result<(), ConfigError> {
    let addr = config.socket_addr()?;

    // Seed the stores, aborting start-up if the seed file is unusable
    let database = Database::init(&config.activities)?;
    info!("Database initialized");

    let app = endpoints::router(Arc::new(database), &config.static_dir);

    match &config.tls {
        Some(tls) => {
            if rustls::crypto::aws_lc_rs::default_provider()
                .install_default()
                .is_err()
            {
                warn!("A rustls crypto provider was already installed");
            }

            let rustls_config = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
                .await
                .map_err(ConfigError::Tls)?;

            info!("Serving HTTPS on {addr}");
            axum_server::bind_rustls(addr, rustls_config)
                .serve(app.into_make_service())
                .await
                .map_err(ConfigError::Serve)
        }
        None => {
            info!("Serving HTTP on {addr}");
            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await
                .map_err(ConfigError::Serve)
        }
    }
}
