use crate::{VehicleKind, ports::Drivable};

/// Product of the single-product factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vehicle {
    Scooter,
    Bike,
}

impl Vehicle {
    pub fn of_kind(kind: VehicleKind) -> Self {
        match kind {
            VehicleKind::Scooter => Self::Scooter,
            VehicleKind::Bike => Self::Bike,
        }
    }
}

impl Drivable for Vehicle {
    fn kind(&self) -> VehicleKind {
        match self {
            Self::Scooter => VehicleKind::Scooter,
            Self::Bike => VehicleKind::Bike,
        }
    }
}
