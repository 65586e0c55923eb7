use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::api::{DynAPI, RideAPI};
use crate::entities::{Ride, RideRequest};
use crate::error::Error;

pub const NOT_FOUND: &str = "Not Found";

#[derive(Serialize)]
pub struct FareResponse {
    #[serde(rename = "taxiFare")]
    taxi_fare: f64,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    body: Result<Json<RideRequest>, JsonRejection>,
) -> Result<Json<FareResponse>, Error> {
    let Json(request) = body?;
    let ride = api.create_ride(request).await?;

    Ok(FareResponse {
        taxi_fare: ride.fare,
    }
    .into())
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Ride>>, Error> {
    let rides = api.list_rides().await?;

    Ok(rides.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<u64>,
) -> Result<Response, Error> {
    let response = match api.find_ride(id).await? {
        Some(ride) => Json(ride).into_response(),
        None => (StatusCode::NOT_FOUND, Json(NOT_FOUND)).into_response(),
    };

    Ok(response)
}
