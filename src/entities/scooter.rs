use crate::ports::Named;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScooterModel {
    Regular,
    /// The sports line scooter.
    Scooty,
}

impl Named for ScooterModel {
    fn name(&self) -> &'static str {
        match self {
            Self::Regular => "Regular Scooter- Name",
            Self::Scooty => "Scooty- Name",
        }
    }
}
