mod handlers;

use std::future::Future;
use std::net::TcpListener;
use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};

use crate::api::{DynAPI, API};
use crate::error::{server_error, Error};
use crate::server::handlers::rides;

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/", get(rides::list).post(rides::create))
        .route("/:id", get(rides::find))
        .layer(Extension(api))
}

/// Serves `api` on `listener` until `shutdown` resolves.
pub async fn serve<T, F>(listener: TcpListener, api: T, shutdown: F) -> Result<(), Error>
where
    T: API + Sync + Send + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;

    tracing::info!("listening on {}", addr);

    axum::Server::from_tcp(listener)
        .map_err(server_error)?
        .serve(router(api).into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(server_error)?;

    tracing::info!("server on {} stopped", addr);

    Ok(())
}
