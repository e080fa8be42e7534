use crate::{Trip, VehicleKind};

/// Something that can be driven a given distance.
pub trait Drivable: Send + Sync {
    fn kind(&self) -> VehicleKind;

    fn drive(&self, distance_km: i32) -> Trip {
        Trip::new(self.kind(), distance_km)
    }
}

/// Something that reports a fixed display name.
pub trait Named: Send + Sync {
    fn name(&self) -> &'static str;
}
