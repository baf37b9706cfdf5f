#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the PredictivePulse dashboard.
//!
//! Serves the REST API the dashboard frontend consumes: the region
//! catalog, the heatmap projection endpoint, and (when enabled) a demo
//! projection over a compiled-in sample dataset. Static frontend files
//! are served from `app/dist` in production.

mod demo;
mod handlers;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use thiserror::Error;

/// Errors that can occur while reading the server configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid port number.
    #[error("Invalid PORT value: {value}")]
    InvalidPort {
        /// The rejected value.
        value: String,
    },

    /// A boolean flag variable was set to something unrecognizable.
    #[error("Invalid {name} value: {value} (expected true/false/1/0)")]
    InvalidFlag {
        /// Name of the environment variable.
        name: String,
        /// The rejected value.
        value: String,
    },
}

/// Server configuration, read once at startup and injected into the
/// application state. Kept explicit rather than consulted as ambient
/// globals.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind on (`BIND_ADDR`, default `127.0.0.1`).
    pub bind_addr: String,
    /// Port to bind on (`PORT`, default `8080`).
    pub port: u16,
    /// Whether the demo heatmap endpoint is enabled (`DEMO_MODE`,
    /// default off).
    pub demo_mode: bool,
}

impl ServerConfig {
    /// Reads the configuration from environment variables.
    ///
    /// Absent variables get defaults; present but malformed values are
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `PORT` or `DEMO_MODE` is set to an
    /// unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            demo_mode: parse_flag("DEMO_MODE", std::env::var("DEMO_MODE").ok().as_deref())?,
        })
    }
}

/// Parses an optional `PORT` value, defaulting to 8080.
fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(8080),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
            value: value.to_string(),
        }),
    }
}

/// Parses an optional boolean flag variable, defaulting to false.
fn parse_flag(name: &str, raw: Option<&str>) -> Result<bool, ConfigError> {
    match raw {
        None => Ok(false),
        Some(value) => match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" | "" => Ok(false),
            _ => Err(ConfigError::InvalidFlag {
                name: name.to_string(),
                value: value.to_string(),
            }),
        },
    }
}

/// Shared application state.
pub struct AppState {
    /// Server configuration read at startup.
    pub config: ServerConfig,
}

/// Starts the PredictivePulse API server.
///
/// Reads the configuration from the environment and starts the Actix-Web
/// HTTP server. This is a regular async function — the caller is
/// responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
///
/// # Panics
///
/// Panics if the environment carries a malformed `PORT` or `DEMO_MODE`
/// value.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = ServerConfig::from_env().expect("Invalid server configuration");
    let bind_addr = config.bind_addr.clone();
    let port = config.port;
    if config.demo_mode {
        log::info!("Demo mode enabled");
    }

    let state = web::Data::new(AppState { config });

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/regions", web::get().to(handlers::regions))
                    .route("/heatmap", web::post().to(handlers::heatmap))
                    .route("/heatmap/demo", web::get().to(handlers::heatmap_demo)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
