use std::sync::Arc;

use parking_lot::Mutex;

use super::Parking;

/// A lot that can be handed to several threads.
///
/// Every operation holds the lock for its full duration, so the search and
/// the reservation inside `park` happen as one step.
#[derive(Debug, Clone)]
pub struct SharedParking {
    inner: Arc<Mutex<Parking>>,
}

impl SharedParking {
    pub fn new(parking: Parking) -> Self {
        Self {
            inner: Arc::new(Mutex::new(parking)),
        }
    }

    pub fn park(&self, tag: char) -> Option<usize> {
        self.inner.lock().park(tag)
    }

    pub fn unpark(&self, index: usize) -> bool {
        self.inner.lock().unpark(index)
    }

    pub fn available_bays(&self) -> usize {
        self.inner.lock().available_bays()
    }

    pub fn render(&self) -> String {
        self.inner.lock().render()
    }

    /// Copy of the current lot state
    pub fn snapshot(&self) -> Parking {
        self.inner.lock().clone()
    }
}

impl From<Parking> for SharedParking {
    fn from(parking: Parking) -> Self {
        Self::new(parking)
    }
}
