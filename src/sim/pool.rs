//! Fixed-capacity object pools
//!
//! Slots are never added or removed after construction. A request against a
//! full pool is dropped without error.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SetupError};

/// An entity that can live in a [`Pool`]
pub trait Slot {
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

/// Index of a slot within its pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handle(pub usize);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Slot> Pool<T> {
    /// Build a pool of `capacity` inactive slots
    pub fn new(name: &'static str, capacity: usize, mut fill: impl FnMut(usize) -> T) -> Result<Self> {
        if capacity == 0 {
            return Err(SetupError::ZeroPoolCapacity { pool: name });
        }
        let slots = (0..capacity)
            .map(|i| {
                let mut slot = fill(i);
                slot.set_active(false);
                slot
            })
            .collect();
        Ok(Self { slots })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Slot::is_active)
    }

    /// Activate the lowest-index free slot
    ///
    /// The slot keeps whatever geometry it had; the caller must overwrite it.
    /// Returns `None` (and changes nothing) when every slot is active.
    pub fn acquire(&mut self) -> Option<Handle> {
        let index = self.slots.iter().position(|s| !s.is_active())?;
        self.slots[index].set_active(true);
        Some(Handle(index))
    }

    /// Free a slot. Releasing an already free slot is a no-op.
    pub fn release(&mut self, handle: Handle) {
        if let Some(slot) = self.slots.get_mut(handle.0) {
            slot.set_active(false);
        }
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.slots.get(handle.0)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.slots.get_mut(handle.0)
    }

    /// All slots, active or not, in index order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_active())
            .map(|(i, s)| (Handle(i), s))
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (Handle, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, s)| s.is_active())
            .map(|(i, s)| (Handle(i), s))
    }

    /// Handles of active slots, for loops that need to touch other state
    pub fn active_handles(&self) -> Vec<Handle> {
        self.iter_active().map(|(h, _)| h).collect()
    }
}

impl<T> Index<Handle> for Pool<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &T {
        &self.slots[handle.0]
    }
}

impl<T> IndexMut<Handle> for Pool<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut T {
        &mut self.slots[handle.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Dummy {
        active: bool,
        tag: u32,
    }

    impl Slot for Dummy {
        fn is_active(&self) -> bool {
            self.active
        }
        fn set_active(&mut self, active: bool) {
            self.active = active;
        }
    }

    #[test]
    fn test_acquire_lowest_free_slot() {
        let mut pool = Pool::new("dummy", 3, |_| Dummy::default()).unwrap();
        assert_eq!(pool.acquire(), Some(Handle(0)));
        assert_eq!(pool.acquire(), Some(Handle(1)));
        pool.release(Handle(0));
        assert_eq!(pool.acquire(), Some(Handle(0)));
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_full_pool_drops_request() {
        let mut pool = Pool::new("dummy", 2, |_| Dummy::default()).unwrap();
        pool.acquire();
        pool.acquire();
        assert!(pool.is_full());
        assert_eq!(pool.acquire(), None);
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_released_slot_keeps_stale_data() {
        let mut pool = Pool::new("dummy", 1, |_| Dummy::default()).unwrap();
        let h = pool.acquire().unwrap();
        pool[h].tag = 42;
        pool.release(h);
        assert_eq!(pool.iter_active().count(), 0);
        assert_eq!(pool.get(h).map(|d| d.tag), Some(42));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = Pool::new("bullets", 0, |_| Dummy::default()).unwrap_err();
        assert!(matches!(err, SetupError::ZeroPoolCapacity { pool: "bullets" }));
    }

    #[test]
    fn test_fill_slots_start_inactive() {
        let pool = Pool::new("dummy", 4, |i| Dummy {
            active: true,
            tag: i as u32,
        })
        .unwrap();
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.iter().map(|d| d.tag).sum::<u32>(), 6);
    }
}
