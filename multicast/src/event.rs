//! Typed event facade
//!
//! A [`Multicast`] binds one callback signature to one private slot table
//! and exposes register, unregister and invoke. The table sits behind a
//! mutex so an event may be shared between threads or placed in a `static`.

use crate::callback::Callback;
use crate::slot_table::SlotTable;
use crate::types::Result;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Multicast event with up to `N` subscribers of signature `F`
///
/// # Example
/// ```
/// use multicast::Multicast;
///
/// fn on_level(level: u8) {
///     println!("level {}", level);
/// }
///
/// static LEVEL_CHANGED: Multicast<fn(u8), 2> = Multicast::new();
///
/// LEVEL_CHANGED.register(on_level).unwrap();
/// LEVEL_CHANGED.invoke((3,));
/// assert!(LEVEL_CHANGED.unregister(on_level));
/// ```
#[derive(Debug)]
pub struct Multicast<F, const N: usize> {
    table: Mutex<SlotTable<F, N>>,
}

impl<F: Callback, const N: usize> Multicast<F, N> {
    /// Create an event with no subscribers
    pub const fn new() -> Self {
        Self {
            table: Mutex::new(SlotTable::new()),
        }
    }

    /// Register a subscriber and return the slot it occupies
    ///
    /// Registering the same callback twice occupies two slots and the
    /// callback is then invoked twice per dispatch.
    ///
    /// # Errors
    /// * `CapacityExhausted` - all `N` slots are occupied
    pub fn register(&self, callback: F) -> Result<usize> {
        match self.lock().add(callback) {
            Ok(index) => {
                log::debug!("Registered callback in slot {}/{}", index, N);
                Ok(index)
            }
            Err(e) => {
                log::warn!("Callback registration refused: {}", e);
                Err(e)
            }
        }
    }

    /// Unregister the first slot holding `callback`
    ///
    /// Returns `false` if the callback was not registered; that is not an
    /// error and leaves the table unchanged.
    ///
    /// Callbacks match by function pointer address. Optimized builds may
    /// merge functions with identical bodies into one address, in which
    /// case unregistering either of them clears the first slot holding
    /// that address, whichever function registered it.
    pub fn unregister(&self, callback: F) -> bool {
        match self.lock().remove(&callback) {
            Some(index) => {
                log::debug!("Unregistered callback from slot {}/{}", index, N);
                true
            }
            None => {
                log::trace!("Unregister ignored: callback not registered");
                false
            }
        }
    }

    /// Call every registered subscriber with `args`, in slot order
    ///
    /// Each slot is read under the lock and the lock is released before the
    /// subscriber runs, so subscribers may register or unregister on this
    /// event. Such changes apply to slots not yet visited. A panicking
    /// subscriber unwinds through `invoke` and the remaining slots are
    /// skipped.
    pub fn invoke(&self, args: F::Args)
    where
        F::Args: Clone,
    {
        for index in 0..N {
            let slot = self.lock().get_at(index);
            if let Ok(Some(callback)) = slot {
                log::trace!("Dispatching to slot {}/{}", index, N);
                callback.call(args.clone());
            }
        }
    }

    /// Unregister every subscriber
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.lock().is_full()
    }

    /// Whether any slot holds `callback`, compared by address as in
    /// [`unregister`](Self::unregister)
    pub fn contains(&self, callback: F) -> bool {
        self.lock().contains(&callback)
    }

    /// Copy of the current slot contents, for inspection
    pub fn snapshot(&self) -> SlotTable<F, N> {
        self.lock().clone()
    }

    // Subscribers never run under the lock, so a poisoned table is still consistent
    fn lock(&self) -> MutexGuard<'_, SlotTable<F, N>> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<F: Callback, const N: usize> Default for Multicast<F, N> {
    fn default() -> Self {
        Self::new()
    }
}
