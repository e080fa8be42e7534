// src/factories/vehicle_factory.rs

use crate::{Vehicle, VehicleError, VehicleKind};

/// Factory for vehicles selected by a string key.
///
/// Every call builds a fresh, independently owned [`Vehicle`]; nothing is
/// cached and no state is shared between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleFactory;

impl VehicleFactory {
    /// Creates the vehicle named by `key`.
    ///
    /// # Arguments
    /// * `key` - Exact, case-sensitive variant name (`"Scooter"` or `"Bike"`)
    ///
    /// # Returns
    /// * `Ok(Vehicle)` - Vehicle whose kind equals `key`
    /// * `Err(VehicleError::UnknownVariant)` - `key` names no known vehicle
    ///
    /// # Examples
    /// ```
    /// use vehicle_factory::{factories::VehicleFactory, ports::Drivable};
    ///
    /// let scooter = VehicleFactory::create("Scooter").unwrap();
    /// assert_eq!(scooter.drive(10).to_string(), "Drive the Scooter : 10km");
    /// ```
    pub fn create(key: &str) -> Result<Vehicle, VehicleError> {
        let kind = key.parse::<VehicleKind>().inspect_err(|_| {
            tracing::warn!(key, "unknown vehicle key");
        })?;
        Ok(Self::create_kind(kind))
    }

    /// Creates a vehicle from an already validated kind.
    pub fn create_kind(kind: VehicleKind) -> Vehicle {
        tracing::debug!(%kind, "creating vehicle");
        Vehicle::of_kind(kind)
    }

    /// Instance form of [`VehicleFactory::create`].
    pub fn get_vehicle(&self, key: &str) -> Result<Vehicle, VehicleError> {
        Self::create(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Drivable;
    use rstest::rstest;

    #[rstest]
    #[case("Scooter", VehicleKind::Scooter)]
    #[case("Bike", VehicleKind::Bike)]
    fn test_create_known_keys(#[case] key: &str, #[case] expected: VehicleKind) {
        let vehicle = VehicleFactory::create(key).unwrap();
        assert_eq!(vehicle.kind(), expected);
        assert_eq!(vehicle.kind().as_str(), key);
    }

    #[rstest]
    #[case("Unknown")]
    #[case("")]
    #[case("bike")]
    #[case("SCOOTER")]
    #[case("Bike ")]
    #[case("Sports")]
    fn test_create_unknown_keys(#[case] key: &str) {
        match VehicleFactory::create(key) {
            Err(VehicleError::UnknownVariant(reported)) => assert_eq!(reported, key),
            other => panic!("expected UnknownVariant for {key:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_scenario_scooter_ten_km() {
        let trip = VehicleFactory::create("Scooter").unwrap().drive(10);
        assert_eq!(trip.description(), "Drive the Scooter : 10km");
    }

    #[test]
    fn test_scenario_bike_twenty_km() {
        let trip = VehicleFactory::create("Bike").unwrap().drive(20);
        assert_eq!(trip.description(), "Drive the Bike : 20km");
    }

    #[test]
    fn test_repeated_creation_is_identical() {
        let first = VehicleFactory.get_vehicle("Bike").unwrap();
        let second = VehicleFactory.get_vehicle("Bike").unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.drive(7).to_string().as_bytes(),
            second.drive(7).to_string().as_bytes()
        );
    }

    #[test]
    fn test_create_from_many_threads() {
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    scope.spawn(move || {
                        let key = if i % 2 == 0 { "Scooter" } else { "Bike" };
                        VehicleFactory::create(key).map(|v| v.drive(i))
                    })
                })
                .collect();

            for (i, handle) in handles.into_iter().enumerate() {
                let trip = handle.join().unwrap().unwrap();
                assert_eq!(trip.distance_km, i as i32);
            }
        });
    }
}
