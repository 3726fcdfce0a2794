use actix_web::{App, HttpServer, middleware::Logger};

mod config;
mod routes;

use config::SiteConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env is fine, the defaults cover local development
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = SiteConfig::from_env()?;
    log::info!(
        "serving {} (assets from {}) on http://{}:{}",
        cfg.dist_dir.display(),
        cfg.assets_dir.display(),
        cfg.host,
        cfg.port
    );
    if !cfg.dist_dir.join("index.html").is_file() {
        log::warn!("no index.html in {}, run `trunk build` first", cfg.dist_dir.display());
    }

    let routes = routes::configure(cfg.dist_dir.clone(), cfg.assets_dir.clone());
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(routes.clone())
    })
    .bind((cfg.host.as_str(), cfg.port))?
    .run()
    .await?;

    Ok(())
}
