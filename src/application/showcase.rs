use crate::{
    ShowcaseConfig, VehicleError,
    factories::Factories,
    ports::{Drivable, VehicleFamilyFactory},
    services::VehicleClient,
};
use std::io::Write;

/// Runs the two creation showcases and writes their output lines.
///
/// Output goes to any [`Write`] sink. A step with an unknown key stops the
/// run; lines written before it are kept.
pub struct Showcase {
    config: ShowcaseConfig,
    factories: Factories,
}

impl Showcase {
    pub fn new(config: ShowcaseConfig) -> Result<Self, VehicleError> {
        config.validate()?;
        Ok(Self {
            config,
            factories: Factories::new(),
        })
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// Creates each configured vehicle by key and prints its trip.
    pub fn run_factory_method<W: Write>(&self, out: &mut W) -> Result<(), VehicleError> {
        tracing::info!(steps = self.config.drives.len(), "running factory method showcase");

        for step in &self.config.drives {
            let vehicle = self.factories.vehicle().get_vehicle(&step.vehicle)?;
            writeln!(out, "{}", vehicle.drive(step.distance_km))?;
        }

        out.flush()?;
        Ok(())
    }

    /// Prints, per brand, the bike and scooter names for every configured trim.
    pub fn run_abstract_factory<W: Write>(&self, out: &mut W) -> Result<(), VehicleError> {
        tracing::info!(
            brands = self.config.families.len(),
            "running abstract factory showcase"
        );

        for run in &self.config.families {
            let factory = self.factories.family(run.brand);
            writeln!(out, "******* {} **********", factory.brand())?;

            for trim in &run.trims {
                let client = VehicleClient::new(factory, trim)?;
                writeln!(out, "{}", client.bike_name())?;
                writeln!(out, "{}", client.scooter_name())?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            config: ShowcaseConfig::default(),
            factories: Factories::new(),
        }
    }
}
