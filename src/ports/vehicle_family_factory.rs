use crate::{BikeModel, Brand, ScooterModel, Trim, VehicleError};

/// Produces a consistent family of products (a bike and a scooter) for a trim.
///
/// The keyed methods parse the trim from a string and fail with
/// [`VehicleError::UnknownVariant`] when it is not recognized.
pub trait VehicleFamilyFactory: Send + Sync {
    fn brand(&self) -> Brand;

    fn bike(&self, trim: Trim) -> BikeModel;

    fn scooter(&self, trim: Trim) -> ScooterModel;

    fn get_bike(&self, key: &str) -> Result<BikeModel, VehicleError> {
        let trim = key.parse::<Trim>().inspect_err(|_| {
            tracing::warn!(brand = %self.brand(), key, "unknown bike trim");
        })?;
        Ok(self.bike(trim))
    }

    fn get_scooter(&self, key: &str) -> Result<ScooterModel, VehicleError> {
        let trim = key.parse::<Trim>().inspect_err(|_| {
            tracing::warn!(brand = %self.brand(), key, "unknown scooter trim");
        })?;
        Ok(self.scooter(trim))
    }
}
