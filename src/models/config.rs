use crate::{Brand, VehicleError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What the showcase programs build and print.
///
/// Keys stay as plain strings so an unrecognized one is reported by the
/// factory that receives it, not by the TOML parser.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseConfig {
    #[serde(default)]
    pub drives: Vec<DriveStep>,

    #[serde(default)]
    pub families: Vec<FamilyRun>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DriveStep {
    pub vehicle: String,
    pub distance_km: i32,
}

impl DriveStep {
    pub fn new<S: Into<String>>(vehicle: S, distance_km: i32) -> Self {
        Self {
            vehicle: vehicle.into(),
            distance_km,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FamilyRun {
    pub brand: Brand,
    pub trims: Vec<String>,
}

impl FamilyRun {
    pub fn new(brand: Brand) -> Self {
        Self {
            brand,
            trims: Vec::new(),
        }
    }

    pub fn with_trim<S: Into<String>>(mut self, trim: S) -> Self {
        self.trims.push(trim.into());
        self
    }
}

impl ShowcaseConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, VehicleError> {
        let config: Self = toml::from_str(input)
            .map_err(|e| VehicleError::config(format!("Invalid showcase TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, VehicleError> {
        let input =
            std::fs::read_to_string(path).map_err(|source| VehicleError::ConfigNotReadable {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&input)
    }

    pub fn to_toml_string(&self) -> Result<String, VehicleError> {
        toml::to_string(self)
            .map_err(|e| VehicleError::config(format!("Cannot serialize showcase: {}", e)))
    }

    pub fn validate(&self) -> Result<(), VehicleError> {
        if self.drives.is_empty() && self.families.is_empty() {
            return Err(VehicleError::invalid_config(
                "Showcase has neither drives nor families",
            ));
        }

        if let Some(run) = self.families.iter().find(|run| run.trims.is_empty()) {
            return Err(VehicleError::invalid_config(format!(
                "Family run for {} lists no trims",
                run.brand
            )));
        }

        Ok(())
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            drives: vec![DriveStep::new("Scooter", 10), DriveStep::new("Bike", 20)],
            families: vec![
                FamilyRun::new(Brand::Honda)
                    .with_trim("Regular")
                    .with_trim("Sports"),
                FamilyRun::new(Brand::Hero)
                    .with_trim("Regular")
                    .with_trim("Sports"),
            ],
        }
    }
}
