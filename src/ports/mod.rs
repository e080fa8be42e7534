// src/ports/mod.rs

pub use capability::{Drivable, Named};
pub use vehicle_family_factory::VehicleFamilyFactory;

pub mod capability;
pub mod vehicle_family_factory;
