use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use food_orders::config::Config;
use food_orders::handlers::fallback;
use food_orders::repositories::{in_memory::InMemoryOrderRepository, seed};
use food_orders::{routes, state};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config = Config::from_env();

    let repo = match &config.seed_file {
        Some(path) => seed::load(path).map_err(|e| {
            tracing::error!(path = %path.display(), err = %e, "failed to load seed orders");
            std::io::Error::other(e)
        })?,
        None => InMemoryOrderRepository::default(),
    };
    let state = state::AppState::new(repo);

    tracing::info!(addr = %config.server_addr, "starting order service");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::config)
            .default_service(web::to(fallback::not_found))
    })
    .bind(&config.server_addr)?
    .run()
    .await
}
