// src/factories/brand_factory.rs

use crate::{BikeModel, Brand, ScooterModel, Trim, ports::VehicleFamilyFactory};

/// Abstract-factory implementation for a single brand.
///
/// Honda and Hero build the same families, so one factory parameterized by
/// [`Brand`] serves both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandFactory {
    brand: Brand,
}

impl BrandFactory {
    pub fn new(brand: Brand) -> Self {
        Self { brand }
    }

    pub fn honda() -> Self {
        Self::new(Brand::Honda)
    }

    pub fn hero() -> Self {
        Self::new(Brand::Hero)
    }
}

impl VehicleFamilyFactory for BrandFactory {
    fn brand(&self) -> Brand {
        self.brand
    }

    fn bike(&self, trim: Trim) -> BikeModel {
        tracing::debug!(brand = %self.brand, %trim, "creating bike");
        match trim {
            Trim::Regular => BikeModel::Regular,
            Trim::Sports => BikeModel::Sports,
        }
    }

    fn scooter(&self, trim: Trim) -> ScooterModel {
        tracing::debug!(brand = %self.brand, %trim, "creating scooter");
        match trim {
            Trim::Regular => ScooterModel::Regular,
            Trim::Sports => ScooterModel::Scooty,
        }
    }
}
