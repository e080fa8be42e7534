pub mod brand;
pub mod config;
pub mod trim;
pub mod trip;
pub mod vehicle_kind;

pub use brand::*;
pub use config::*;
pub use trim::*;
pub use trip::*;
pub use vehicle_kind::*;
