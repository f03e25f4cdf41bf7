//! Multicast Callback Library
//!
//! A type-safe, fixed-capacity multicast callback (observer) mechanism. A
//! publisher declares an event with a fixed argument signature of zero to
//! five arguments, subscribers register plain function pointers, and the
//! publisher invokes them all, in slot order, whenever the event fires.
//!
//! # Architecture
//!
//! - [`SlotTable`] - `N` optional handles; add/remove/get by index. Knows
//!   nothing about how handles are called.
//! - [`Callback`] - the `fn(A, B, ...)` signatures a table can hold, with
//!   the argument list carried as a tuple.
//! - [`Multicast`] - one table per event behind a mutex, with register,
//!   unregister and invoke.
//! - [`multicast!`] - declares an event as its own named type with an
//!   `invoke` that takes the arguments individually.
//!
//! No allocation happens anywhere: capacity is a const generic and tables
//! can live in `static` items.
//!
//! Registering into a full table is an error ([`MulticastError::CapacityExhausted`]);
//! callback budgets must be sized at design time. Unregistering a callback
//! that is not present is silently ignored.
//!
//! # Example Usage
//!
//! ```
//! use multicast::multicast;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! pub enum Mode {
//!     Starting,
//!     Normal,
//! }
//!
//! multicast! {
//!     /// Fired on every mode change
//!     pub struct ModeChanged(mode: Mode) [3];
//! }
//!
//! static MODE_CHANGED: ModeChanged = ModeChanged::new();
//!
//! fn on_mode(mode: Mode) {
//!     println!("mode -> {:?}", mode);
//! }
//!
//! MODE_CHANGED.register(on_mode).unwrap();
//! MODE_CHANGED.invoke(Mode::Normal);
//! MODE_CHANGED.unregister(on_mode);
//! ```

// Public modules
pub mod callback;
pub mod event;
pub mod slot_table;
pub mod types;

mod macros;

// Re-export main types for convenience
pub use callback::Callback;
pub use event::Multicast;
pub use slot_table::SlotTable;
pub use types::{MulticastError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
