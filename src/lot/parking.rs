use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{BayKind, VehicleClass};
use crate::lot::selection::closest_to_exit;

/// A square parking lot of `size * size` bays.
///
/// Bays are indexed from the entrance, row by row. The layout (pedestrian
/// exits and disabled-only bays) is fixed at construction; only occupancy
/// changes afterwards.
#[derive(Debug, Clone)]
pub struct Parking {
    size: usize,
    pedestrian_exits: BTreeSet<usize>,
    disabled_bays: BTreeSet<usize>,
    /// Bay index -> tag of the parked vehicle
    parked: BTreeMap<usize, char>,
}

impl Parking {
    pub(crate) fn new(
        size: usize,
        pedestrian_exits: BTreeSet<usize>,
        disabled_bays: BTreeSet<usize>,
    ) -> Self {
        Self {
            size,
            pedestrian_exits,
            disabled_bays,
            parked: BTreeMap::new(),
        }
    }

    /// Side length of the square
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of bays, exits included. The builder rejects sizes whose
    /// square does not fit in a `usize`.
    pub fn bay_count(&self) -> usize {
        self.size * self.size
    }

    /// Number of bays a vehicle could still park in
    pub fn available_bays(&self) -> usize {
        self.bay_count()
            .saturating_sub(self.pedestrian_exits.len())
            .saturating_sub(self.parked.len())
    }

    /// Number of bays currently holding a vehicle
    pub fn occupied_count(&self) -> usize {
        self.parked.len()
    }

    pub fn is_pedestrian_exit(&self, index: usize) -> bool {
        self.pedestrian_exits.contains(&index)
    }

    pub fn is_disabled_bay(&self, index: usize) -> bool {
        self.disabled_bays.contains(&index)
    }

    /// Tag of the vehicle parked at `index`, if any
    pub fn occupant(&self, index: usize) -> Option<char> {
        self.parked.get(&index).copied()
    }

    /// Layout role of a bay. Exits take precedence over disabled designation.
    pub fn bay_kind(&self, index: usize) -> BayKind {
        if self.is_pedestrian_exit(index) {
            BayKind::PedestrianExit
        } else if self.is_disabled_bay(index) {
            BayKind::Disabled
        } else {
            BayKind::Ordinary
        }
    }

    /// Park a vehicle in the free bay closest to a pedestrian exit.
    ///
    /// A disabled vehicle (`'D'`) takes a free disabled bay when one exists,
    /// otherwise an ordinary bay. Every other vehicle only uses ordinary bays.
    ///
    /// # Returns
    /// * `Some(index)` - the bay the vehicle now occupies
    /// * `None` - no eligible bay is free
    pub fn park(&mut self, tag: char) -> Option<usize> {
        let bay = match VehicleClass::from_tag(tag) {
            VehicleClass::Disabled => self
                .next_free_disabled_bay()
                .or_else(|| self.next_free_ordinary_bay()),
            VehicleClass::Ordinary => self.next_free_ordinary_bay(),
        };

        match bay {
            Some(index) => {
                self.parked.insert(index, tag);
                tracing::debug!("Parked '{}' in bay {}", tag, index);
            }
            None => tracing::debug!("No free bay for '{}'", tag),
        }
        bay
    }

    /// Free the bay at `index`.
    ///
    /// Returns `true` if a vehicle was parked there. Free, exit and
    /// out-of-range indices return `false`.
    pub fn unpark(&mut self, index: usize) -> bool {
        match self.parked.remove(&index) {
            Some(tag) => {
                tracing::debug!("Unparked '{}' from bay {}", tag, index);
                true
            }
            None => false,
        }
    }

    fn is_free(&self, index: usize) -> bool {
        !self.parked.contains_key(&index)
    }

    fn next_free_disabled_bay(&self) -> Option<usize> {
        let bay_count = self.bay_count();
        let candidates = self.disabled_bays.iter().copied().filter(|&bay| {
            bay < bay_count && !self.is_pedestrian_exit(bay) && self.is_free(bay)
        });
        closest_to_exit(candidates, &self.pedestrian_exits)
    }

    fn next_free_ordinary_bay(&self) -> Option<usize> {
        let candidates = (0..self.bay_count())
            .filter(|&bay| self.bay_kind(bay) == BayKind::Ordinary && self.is_free(bay));
        closest_to_exit(candidates, &self.pedestrian_exits)
    }
}
