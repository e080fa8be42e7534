use crate::{
    BikeModel, ScooterModel, VehicleError,
    ports::{Named, VehicleFamilyFactory},
};

/// Holds one bike and one scooter built by the same factory from one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleClient {
    bike: BikeModel,
    scooter: ScooterModel,
}

impl VehicleClient {
    pub fn new<F>(factory: &F, key: &str) -> Result<Self, VehicleError>
    where
        F: VehicleFamilyFactory + ?Sized,
    {
        let bike = factory.get_bike(key)?;
        let scooter = factory.get_scooter(key)?;

        Ok(Self { bike, scooter })
    }

    pub fn bike(&self) -> BikeModel {
        self.bike
    }

    pub fn scooter(&self) -> ScooterModel {
        self.scooter
    }

    pub fn bike_name(&self) -> &'static str {
        self.bike.name()
    }

    pub fn scooter_name(&self) -> &'static str {
        self.scooter.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factories::BrandFactory;

    #[test]
    fn test_client_pairs_family_members() {
        let client = VehicleClient::new(&BrandFactory::honda(), "Sports").unwrap();

        assert_eq!(client.bike(), BikeModel::Sports);
        assert_eq!(client.scooter(), ScooterModel::Scooty);
        assert_eq!(client.bike_name(), "Sports Bike- Name");
        assert_eq!(client.scooter_name(), "Scooty- Name");
    }

    #[test]
    fn test_client_from_trait_object() {
        let factory: Box<dyn VehicleFamilyFactory> = Box::new(BrandFactory::hero());
        let client = VehicleClient::new(factory.as_ref(), "Regular").unwrap();

        assert_eq!(client.bike_name(), "Regular Bike- Name");
        assert_eq!(client.scooter_name(), "Regular Scooter- Name");
    }

    #[test]
    fn test_client_rejects_unknown_key() {
        let result = VehicleClient::new(&BrandFactory::honda(), "Touring");
        assert!(matches!(result, Err(VehicleError::UnknownVariant(ref k)) if k == "Touring"));
    }
}
