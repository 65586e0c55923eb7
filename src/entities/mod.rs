mod amount;
mod pricing;
mod ride;

pub use amount::Amount;
pub(crate) use pricing::check_increment;
pub use pricing::{
    Pricing, BUSY_CHARGE, DISTANCE_CHARGE, DISTANCE_INCREMENT, INITIAL_CHARGE, NIGHT_CHARGE,
};
pub use ride::{Ride, RideRequest};
