use serde::{Deserialize, Serialize};

use crate::entities::Amount;
use crate::error::{invalid_amount_error, Error};

pub const INITIAL_CHARGE: f64 = 1.0;
pub const DISTANCE_CHARGE: f64 = 0.5;
// 1/5 of a mile
pub const DISTANCE_INCREMENT: f64 = 0.2;
pub const NIGHT_CHARGE: f64 = 0.5;
pub const BUSY_CHARGE: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub initial_charge: f64,
    pub distance_charge: f64,
    pub distance_increment: f64,
}

impl Pricing {
    pub fn new(
        initial_charge: impl Into<Amount>,
        distance_charge: impl Into<Amount>,
        distance_increment: impl Into<Amount>,
    ) -> Result<Self, Error> {
        let pricing = Self {
            initial_charge: initial_charge.into().non_negative("initial charge")?,
            distance_charge: distance_charge.into().non_negative("distance charge")?,
            distance_increment: distance_increment.into().value()?,
        };

        check_increment(pricing.distance_increment)?;

        Ok(pricing)
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            initial_charge: INITIAL_CHARGE,
            distance_charge: DISTANCE_CHARGE,
            distance_increment: DISTANCE_INCREMENT,
        }
    }
}

pub(crate) fn check_increment(distance_increment: f64) -> Result<f64, Error> {
    if distance_increment <= 0.0 {
        return Err(invalid_amount_error(format!(
            "distance increment must be positive, got {}",
            distance_increment
        )));
    }

    Ok(distance_increment)
}
