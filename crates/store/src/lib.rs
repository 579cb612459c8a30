//! `quotehub-store` — the persistence seam.
//!
//! The domain layer talks to a [`Store`] trait object: point lookup by id,
//! foreign-key-filtered listing, insert with id assignment, guarded update
//! and cascade delete. [`MemoryStore`] is the bundled backend (dev/test); a
//! database-backed implementation plugs in at the same trait.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::{Store, StoreError, StoreResult};
