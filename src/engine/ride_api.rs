use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RideAPI,
    entities::{Ride, RideRequest},
    error::Error,
};

#[async_trait]
impl RideAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_ride(&self, request: RideRequest) -> Result<Ride, Error> {
        let ride = self.ledger.lock().await.record_ride(&request)?;

        tracing::info!("recorded ride {} with fare {}", ride.id, ride.fare);

        Ok(ride)
    }

    #[tracing::instrument(skip(self))]
    async fn list_rides(&self) -> Result<Vec<Ride>, Error> {
        Ok(self.ledger.lock().await.list_rides())
    }

    #[tracing::instrument(skip(self))]
    async fn find_ride(&self, id: u64) -> Result<Option<Ride>, Error> {
        let ride = self.ledger.lock().await.find_ride(id);

        if ride.is_none() {
            tracing::info!("no ride with id {}", id);
        }

        Ok(ride)
    }
}
