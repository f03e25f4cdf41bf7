//! Fixed-capacity slot table
//!
//! Stores callback handles in `N` slots. A slot is either empty or holds one
//! handle; emptiness is the only occupancy marker, there is no separate
//! count. The table never calls a handle, it only stores and returns them.

use crate::types::{MulticastError, Result};

/// Fixed-size table of optional callback handles
#[derive(Debug, Clone)]
pub struct SlotTable<F, const N: usize> {
    slots: [Option<F>; N],
}

impl<F: Copy + PartialEq, const N: usize> SlotTable<F, N> {
    const NON_ZERO_CAPACITY: () = assert!(N > 0, "slot table capacity must be at least 1");

    /// Create a table with every slot empty
    ///
    /// A capacity of zero fails to compile.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO_CAPACITY;
        Self { slots: [None; N] }
    }

    /// Store `handle` in the first empty slot and return that slot's index
    ///
    /// Duplicates are not detected: adding the same handle twice occupies
    /// two slots.
    ///
    /// # Errors
    /// * `CapacityExhausted` - every slot is already occupied
    pub fn add(&mut self, handle: F) -> Result<usize> {
        match self.slots.iter().position(Option::is_none) {
            Some(index) => {
                self.slots[index] = Some(handle);
                Ok(index)
            }
            None => Err(MulticastError::CapacityExhausted { capacity: N }),
        }
    }

    /// Clear the first slot holding `handle` and return its index
    ///
    /// Later slots holding the same handle are left alone. Returns `None`
    /// if the handle is not present. Handles compare with `PartialEq`,
    /// which for function pointers is address equality.
    pub fn remove(&mut self, handle: &F) -> Option<usize> {
        let index = self.position(handle)?;
        self.slots[index] = None;
        Some(index)
    }

    /// Get the handle at `index`, or `None` if that slot is empty
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `index >= N`
    pub fn get_at(&self, index: usize) -> Result<Option<F>> {
        self.slots
            .get(index)
            .copied()
            .ok_or(MulticastError::IndexOutOfRange { index, capacity: N })
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        self.slots = [None; N];
    }

    /// Number of slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn contains(&self, handle: &F) -> bool {
        self.position(handle).is_some()
    }

    /// Occupied slots in ascending index order, as `(index, handle)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, F)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|handle| (index, handle)))
    }

    fn position(&self, handle: &F) -> Option<usize> {
        self.slots.iter().position(|slot| slot.as_ref() == Some(handle))
    }
}

impl<F: Copy + PartialEq, const N: usize> Default for SlotTable<F, N> {
    fn default() -> Self {
        Self::new()
    }
}
