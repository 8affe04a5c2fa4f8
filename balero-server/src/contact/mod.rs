//! Rider contact records and their persistence.
//!
//! One record per phone number holds everything the assistant knows about a
//! rider: their boarding station, platform direction, line and home stop.
//! The [`ContactStore`] trait is the seam for swapping backends; a managed
//! key-value table would implement the same three operations.

mod record;
mod store;

pub use record::Contact;
pub use store::{ContactStore, FileContactStore, MemoryContactStore, StoreError};
