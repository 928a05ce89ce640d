//! Argus Store crate - in-memory supplier dataset and structured search.
//!
//! Provides a thread-safe supplier store seeded once at process start with
//! the fixed demo roster, plus filter/sort/limit evaluation of structured
//! queries against it.

pub mod seed;
pub mod store;

pub use seed::{SeedEntry, SEED_ENTRIES};
pub use store::SupplierStore;
