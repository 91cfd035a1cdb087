//! Core domain for the check-in system.
//!
//! Pure types and contracts shared by the storage backends and the tooling:
//! the records kept in the store, the repository capability traits and the
//! repository error taxonomy. Nothing in this crate performs I/O.

pub mod models;
pub mod storage;
