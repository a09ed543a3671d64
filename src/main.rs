use actix_web::{middleware::Logger, web, App, HttpServer};
use school_admin::config::EnvConfig;
use school_admin::db::sqlite_service::SqliteService;
use school_admin::routes::configure_routes;
use school_admin::utils::render::Renderer;
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = EnvConfig::from_env();
    let addr = config.bind_addr();

    let sqlite_service = Arc::new(
        SqliteService::new(&config.db_url)
            .await
            .map_err(io::Error::other)?
    );
    sqlite_service.seed_defaults().await.map_err(io::Error::other)?;

    let renderer = Arc::new(Renderer::new().map_err(io::Error::other)?);

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&sqlite_service)))
            .app_data(web::Data::new(Arc::clone(&renderer)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
