use crate::ports::Named;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BikeModel {
    Regular,
    Sports,
}

impl Named for BikeModel {
    fn name(&self) -> &'static str {
        match self {
            Self::Regular => "Regular Bike- Name",
            Self::Sports => "Sports Bike- Name",
        }
    }
}
