pub mod bike;
pub mod scooter;
pub mod vehicle;

pub use bike::*;
pub use scooter::*;
pub use vehicle::*;
