//! Administrative REST API for airport operations data.
//!
//! The `data` feature exposes the domain, persistence and pagination layers;
//! `server` adds the Actix-web application on top.

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_governor::Governor;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::db::{establish_connection_pool, run_migrations};
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

#[cfg(feature = "server")]
pub mod auth;
pub mod db;
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
pub mod models;
pub mod pagination;
#[cfg(feature = "server")]
pub mod rate_limit;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

pub const ADMIN_ROLE: &str = "Admin";
pub const USER_ROLE: &str = "User";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    run_migrations(&pool)
        .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;

    let repo = DieselRepository::new(pool);

    if let Some(account) = &server_config.admin {
        services::auth::ensure_admin_account(&repo, account).map_err(|e| {
            std::io::Error::other(format!("Failed to create administrator account: {e}"))
        })?;
    }

    let governor_config = rate_limit::governor_config(&server_config.rate_limit)
        .ok_or_else(|| std::io::Error::other("Invalid rate limit settings"))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .route("/health", web::get().to(routes::health::health))
            .service(
                web::scope("/api")
                    .wrap(Governor::new(&governor_config))
                    .wrap(routes::errors::rate_limit_handlers())
                    .configure(routes::configure),
            )
    })
    .bind(bind_address)?
    .run()
    .await
}
