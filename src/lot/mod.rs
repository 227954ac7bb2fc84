pub mod builder;
pub mod parking;
pub mod selection;
pub mod shared;

pub use builder::{BuildError, ParkingBuilder};
pub use parking::Parking;
pub use shared::SharedParking;
