//! Single-slot latest-value channel.
//!
//! The tracking producer overwrites the slot at its own cadence; the tick
//! loop drains whatever is newest when it gets around to it. No queueing, no
//! backpressure, no blocking beyond the momentary lock.

use std::sync::{Arc, Mutex};

pub struct LatestSlot<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for LatestSlot<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> LatestSlot<T> {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace whatever the slot holds. A value never consumed is simply lost.
    pub fn publish(&self, value: T) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(value);
        }
    }

    /// Take the newest value, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        self.slot.lock().ok().and_then(|mut slot| slot.take())
    }
}
