use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Ride, RideRequest};
use crate::error::Error;

#[async_trait]
pub trait RideAPI {
    async fn create_ride(&self, request: RideRequest) -> Result<Ride, Error>;
    async fn list_rides(&self) -> Result<Vec<Ride>, Error>;
    async fn find_ride(&self, id: u64) -> Result<Option<Ride>, Error>;
}

pub trait API: RideAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
