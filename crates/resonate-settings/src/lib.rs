//! Persisted preferences store used by Resonate Studio.

mod store;

pub use store::*;
