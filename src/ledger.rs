use crate::entities::{Pricing, Ride, RideRequest};
use crate::error::Error;
use crate::fare::compute_fare;

/// Append-only record of every fare computed, in creation order.
#[derive(Debug, Default)]
pub struct Ledger {
    pricing: Pricing,
    last_id: u64,
    rides: Vec<Ride>,
}

impl Ledger {
    pub fn new(pricing: Pricing) -> Self {
        Self {
            pricing,
            last_id: 0,
            rides: Vec::new(),
        }
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    /// Rides recorded from now on are priced with `pricing`.
    pub fn set_pricing(&mut self, pricing: Pricing) {
        self.pricing = pricing;
    }

    pub fn record_ride(&mut self, request: &RideRequest) -> Result<Ride, Error> {
        let pricing = self.pricing;

        self.record_ride_with(request, &pricing)
    }

    /// Prices `request` and appends it. An id is only allocated once the
    /// request is known to be valid.
    pub fn record_ride_with(
        &mut self,
        request: &RideRequest,
        pricing: &Pricing,
    ) -> Result<Ride, Error> {
        let fare = compute_fare(request.distance.clone(), &request.start_time, pricing)?;
        let duration = request.duration.non_negative("duration")?;

        self.last_id += 1;

        let ride = Ride {
            id: self.last_id,
            distance: pricing.distance_increment,
            start_time: request.start_time.clone(),
            duration,
            fare,
        };

        self.rides.push(ride.clone());

        Ok(ride)
    }

    pub fn list_rides(&self) -> Vec<Ride> {
        self.rides.clone()
    }

    pub fn find_ride(&self, id: u64) -> Option<Ride> {
        self.rides.iter().find(|ride| ride.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const DAYTIME: &str = "2020-06-19T14:01:17.031Z";

    fn request(distance: f64) -> RideRequest {
        RideRequest::new(distance, DAYTIME, 1000)
    }

    #[test]
    fn records_rides_in_order() {
        let mut ledger = Ledger::default();

        for distance in [10.0, 2.0, 4.5] {
            ledger.record_ride(&request(distance)).unwrap();
        }

        let rides = ledger.list_rides();
        let ids: Vec<u64> = rides.iter().map(|ride| ride.id).collect();

        assert_eq!(ledger.len(), 3);
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(rides[0].fare, 26.0);
        assert_eq!(rides[0].duration, 1000.0);
        assert_eq!(rides[0].start_time, DAYTIME);
    }

    #[test]
    fn ids_ignore_pricing_changes() {
        let mut ledger = Ledger::default();

        ledger.record_ride(&request(10.0)).unwrap();
        ledger.set_pricing(Pricing::new(5, 1.2, 0.1).unwrap());
        ledger.record_ride(&request(10.0)).unwrap();
        ledger
            .record_ride_with(&request(10.0), &Pricing::default())
            .unwrap();

        let rides = ledger.list_rides();

        assert_eq!(
            rides.iter().map(|ride| ride.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            rides.iter().map(|ride| ride.fare).collect::<Vec<_>>(),
            vec![26.0, 125.0, 26.0]
        );
        assert_eq!(ledger.pricing().initial_charge, 5.0);
    }

    #[test]
    fn recorded_distance_is_the_increment() {
        let mut ledger = Ledger::new(Pricing::new(1, 0.5, 0.25).unwrap());

        let ride = ledger.record_ride(&request(10.0)).unwrap();

        // the ride distance itself is not kept
        assert_eq!(ride.distance, 0.25);
    }

    #[test]
    fn failed_requests_leave_no_trace() {
        let mut ledger = Ledger::default();

        let err = ledger
            .record_ride(&RideRequest::new("far", DAYTIME, 1000))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidAmount);

        let err = ledger
            .record_ride(&RideRequest::new(10, "2020-06-19T25:59:17.031Z", 1000))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTimestamp);

        let err = ledger
            .record_ride(&RideRequest::new(10, DAYTIME, -5))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidAmount);

        assert!(ledger.is_empty());
        assert_eq!(ledger.record_ride(&request(1.0)).unwrap().id, 1);
    }

    #[test]
    fn finds_rides_by_id() {
        let mut ledger = Ledger::default();

        let first = ledger.record_ride(&request(10.0)).unwrap();
        let second = ledger.record_ride(&request(2.0)).unwrap();

        assert_eq!(ledger.find_ride(1), Some(first));
        assert_eq!(ledger.find_ride(2), Some(second));
        assert_eq!(ledger.find_ride(0), None);
        assert_eq!(ledger.find_ride(3), None);
    }

    #[test]
    fn listing_is_a_snapshot() {
        let mut ledger = Ledger::default();

        ledger.record_ride(&request(10.0)).unwrap();
        let snapshot = ledger.list_rides();
        ledger.record_ride(&request(10.0)).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(ledger.len(), 2);
    }
}
