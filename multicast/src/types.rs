//! Core types for the multicast library
//!
//! Errors here are contract violations: an undersized callback budget or an
//! out-of-range slot lookup. Removing a callback that is not registered is
//! not an error and never produces one.

/// Result type for multicast operations
pub type Result<T> = std::result::Result<T, MulticastError>;

/// Errors that can occur while registering or looking up callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MulticastError {
    /// Every slot is occupied; the event was declared with too small a capacity
    #[error("Callback table full: all {capacity} slots are occupied")]
    CapacityExhausted { capacity: usize },

    /// Slot lookup past the end of the table
    #[error("Slot index {index} out of range for capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },
}

impl MulticastError {
    /// Capacity of the table that raised the error
    pub fn capacity(&self) -> usize {
        match self {
            MulticastError::CapacityExhausted { capacity } => *capacity,
            MulticastError::IndexOutOfRange { capacity, .. } => *capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let full = MulticastError::CapacityExhausted { capacity: 3 };
        assert_eq!(full.to_string(), "Callback table full: all 3 slots are occupied");

        let range = MulticastError::IndexOutOfRange { index: 4, capacity: 2 };
        assert_eq!(range.to_string(), "Slot index 4 out of range for capacity 2");
    }

    #[test]
    fn test_error_capacity() {
        assert_eq!(MulticastError::CapacityExhausted { capacity: 5 }.capacity(), 5);
        assert_eq!(
            MulticastError::IndexOutOfRange { index: 9, capacity: 1 }.capacity(),
            1
        );
    }
}
