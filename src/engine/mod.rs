mod ride_api;

use tokio::sync::Mutex;

use crate::{api::API, entities::Pricing, ledger::Ledger};

/// Shared handle to a ledger. Every ledger access holds the lock for its
/// whole duration, so allocating an id, pricing the ride and appending it
/// happen as one step.
#[derive(Debug, Default)]
pub struct Engine {
    ledger: Mutex<Ledger>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new")]
    pub fn new(pricing: Pricing) -> Self {
        Self {
            ledger: Mutex::new(Ledger::new(pricing)),
        }
    }

    pub async fn pricing(&self) -> Pricing {
        *self.ledger.lock().await.pricing()
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_pricing(&self, pricing: Pricing) {
        self.ledger.lock().await.set_pricing(pricing);
    }
}

impl API for Engine {}
