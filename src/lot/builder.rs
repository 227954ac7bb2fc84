use std::collections::BTreeSet;

use thiserror::Error;

use super::Parking;

/// Errors raised while assembling a lot layout
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("parking lot size was never set")]
    MissingSize,
    #[error("a {0}x{0} parking lot has more bays than can be indexed")]
    SizeTooLarge(usize),
}

/// Fluent accumulator for a lot layout.
///
/// Indices are taken as given: nothing stops an exit from also being a
/// disabled bay, or an index from lying outside the grid. Such input is
/// logged when the lot is built.
#[derive(Debug, Clone, Default)]
pub struct ParkingBuilder {
    size: Option<usize>,
    pedestrian_exits: BTreeSet<usize>,
    disabled_bays: BTreeSet<usize>,
}

impl ParkingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the side length of the square lot
    pub fn with_square_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Reserve a bay index as a pedestrian exit
    pub fn with_pedestrian_exit(mut self, index: usize) -> Self {
        self.pedestrian_exits.insert(index);
        self
    }

    /// Reserve a bay index for disabled drivers
    pub fn with_disabled_bay(mut self, index: usize) -> Self {
        self.disabled_bays.insert(index);
        self
    }

    pub fn build(self) -> Result<Parking, BuildError> {
        let size = self.size.ok_or(BuildError::MissingSize)?;
        let bay_count = size
            .checked_mul(size)
            .ok_or(BuildError::SizeTooLarge(size))?;

        for &exit in self.pedestrian_exits.iter().filter(|&&i| i >= bay_count) {
            tracing::warn!("Pedestrian exit {} is outside a {}x{} lot", exit, size, size);
        }
        for &bay in self.disabled_bays.iter().filter(|&&i| i >= bay_count) {
            tracing::warn!("Disabled bay {} is outside a {}x{} lot", bay, size, size);
        }
        for bay in self.pedestrian_exits.intersection(&self.disabled_bays) {
            tracing::warn!("Bay {} is both a pedestrian exit and a disabled bay", bay);
        }

        Ok(Parking::new(size, self.pedestrian_exits, self.disabled_bays))
    }
}
