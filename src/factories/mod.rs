// src/factories/mod.rs

mod brand_factory;
mod vehicle_factory;

pub use brand_factory::BrandFactory;
pub use vehicle_factory::VehicleFactory;

use crate::Brand;

/// Collection of the factories the showcases draw from.
pub struct Factories {
    vehicle: VehicleFactory,
    honda: BrandFactory,
    hero: BrandFactory,
}

impl Factories {
    /// Creates a new collection of factories.
    pub fn new() -> Self {
        Self {
            vehicle: VehicleFactory,
            honda: BrandFactory::honda(),
            hero: BrandFactory::hero(),
        }
    }

    /// Returns the single-product vehicle factory.
    pub fn vehicle(&self) -> &VehicleFactory {
        &self.vehicle
    }

    /// Returns the family factory for `brand`.
    pub fn family(&self, brand: Brand) -> &BrandFactory {
        match brand {
            Brand::Honda => &self.honda,
            Brand::Hero => &self.hero,
        }
    }
}

impl Default for Factories {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::VehicleFamilyFactory;

    #[test]
    fn test_family_lookup_matches_brand() {
        let factories = Factories::default();
        assert_eq!(factories.family(Brand::Honda).brand(), Brand::Honda);
        assert_eq!(factories.family(Brand::Hero).brand(), Brand::Hero);
    }
}
