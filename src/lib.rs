use std::path::PathBuf;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};

use crate::domain::SiteRoot;
use crate::middleware::NoCache;
use crate::models::config::ServerConfig;
use crate::services::site::SiteService;

pub mod domain;
pub mod dto;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

/// SPA shell, relative to the site root.
pub const INDEX_FILE: &str = "index.html";
pub const FAVICON_FILE: &str = "favicon.ico";

/// Allow-all CORS: any origin, method and header, credentials included.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

/// Bind and run the HTTP server until it is shut down.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let debug_mode = server_config.debug_mode();
    let timeout = Duration::from_secs(server_config.request_timeout_secs);
    let site = web::Data::new(SiteService::new(SiteRoot::from(PathBuf::from(
        &server_config.root,
    ))));

    log::info!(
        "Serving {:?} on {}:{} (environment: {}, no-cache: {})",
        site.root().as_path(),
        server_config.address,
        server_config.port,
        server_config.environment,
        debug_mode
    );

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(NoCache::new(debug_mode))
            .wrap(Logger::default())
            .app_data(site.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::main::spa_fallback))
    })
    .client_request_timeout(timeout)
    .keep_alive(timeout)
    .bind((server_config.address.as_str(), server_config.port))?
    .run()
    .await
}
