use std::net::TcpListener;

use taxi_fare::config::Config;
use taxi_fare::engine::Engine;
use taxi_fare::error::Error;
use taxi_fare::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let engine = Engine::new(config.pricing);
    let listener = TcpListener::bind(config.listen_addr)?;

    serve(listener, engine, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
