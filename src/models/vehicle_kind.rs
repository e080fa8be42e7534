use crate::VehicleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tag of a vehicle the single-product factory can build.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Scooter,
    Bike,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 2] = [Self::Scooter, Self::Bike];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scooter => "Scooter",
            Self::Bike => "Bike",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleKind {
    type Err = VehicleError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "Scooter" => Ok(Self::Scooter),
            "Bike" => Ok(Self::Bike),
            _ => Err(VehicleError::unknown_variant(key)),
        }
    }
}
