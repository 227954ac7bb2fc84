pub mod bay;
pub mod vehicle;

pub use bay::{BayKind, EXIT_GLYPH, FREE_DISABLED_GLYPH, FREE_ORDINARY_GLYPH};
pub use vehicle::{DISABLED_TAG, VehicleClass};
