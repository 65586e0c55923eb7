use serde::{Deserialize, Serialize, Serializer};

use crate::entities::Amount;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideRequest {
    /// Miles.
    pub distance: Amount,
    /// ISO-8601 timestamp.
    pub start_time: String,
    /// Seconds.
    pub duration: Amount,
}

impl RideRequest {
    pub fn new(
        distance: impl Into<Amount>,
        start_time: impl Into<String>,
        duration: impl Into<Amount>,
    ) -> Self {
        Self {
            distance: distance.into(),
            start_time: start_time.into(),
            duration: duration.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub id: u64,
    /// The distance increment the ride was priced with, not the ride distance.
    pub distance: f64,
    pub start_time: String,
    /// Seconds. Whole numbers of seconds are written as JSON integers.
    #[serde(serialize_with = "whole_seconds")]
    pub duration: f64,
    #[serde(rename = "taxiFare")]
    pub fare: f64,
}

// exactly representable integers only
const MAX_WHOLE_SECONDS: f64 = 9_007_199_254_740_992.0;

fn whole_seconds<S: Serializer>(duration: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if duration.fract() == 0.0 && duration.abs() <= MAX_WHOLE_SECONDS {
        serializer.serialize_i64(*duration as i64)
    } else {
        serializer.serialize_f64(*duration)
    }
}
