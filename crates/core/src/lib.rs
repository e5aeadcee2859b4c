//! Domain types and rules for the notas service.
//!
//! Nothing in this crate touches the database or HTTP; it is shared by the
//! `notas-db` and `notas-api` crates.

pub mod env;
pub mod error;
pub mod note;
pub mod types;
