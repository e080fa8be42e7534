use crate::VehicleKind;
use std::fmt;

/// Description produced by driving a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip {
    pub kind: VehicleKind,
    pub distance_km: i32,
}

impl Trip {
    pub fn new(kind: VehicleKind, distance_km: i32) -> Self {
        Self { kind, distance_km }
    }

    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Drive the {} : {}km", self.kind, self.distance_km)
    }
}
