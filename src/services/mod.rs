pub mod vehicle_client;

pub use vehicle_client::VehicleClient;
