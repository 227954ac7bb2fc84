//! lanepark - Square parking lot with nearest-to-exit bay selection and lane-reversal rendering

pub mod config;
pub mod domain;
pub mod lot;
pub mod render;

pub use config::LotConfig;
pub use lot::{BuildError, Parking, ParkingBuilder, SharedParking};
