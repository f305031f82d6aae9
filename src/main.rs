use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use shopping_cart::config::ServerConfig;
use shopping_cart::routes;
use shopping_cart::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    // Built once and shared by every worker.
    let state = web::Data::new(AppState::demo());

    log::info!("Shopping cart listening on {}", config.socket_addr());
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(config.socket_addr())?
    .run()
    .await
}
