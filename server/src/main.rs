use actix_web::{App, HttpServer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod endpoints;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok(); // loads from .env file

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let config = config::Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    tracing::info!(host = %config.host, port = config.port, "starting street lines server");

    // every request is computed independently, nothing is shared between workers
    HttpServer::new(|| endpoints::services(App::new()))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
