use crate::VehicleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Family key shared by every product of a brand factory.
///
/// One trim selects a consistent pair: a bike and a scooter of the same line.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trim {
    Regular,
    Sports,
}

impl Trim {
    pub const ALL: [Trim; 2] = [Self::Regular, Self::Sports];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Sports => "Sports",
        }
    }
}

impl fmt::Display for Trim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Trim {
    type Err = VehicleError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "Regular" => Ok(Self::Regular),
            "Sports" => Ok(Self::Sports),
            _ => Err(VehicleError::unknown_variant(key)),
        }
    }
}
