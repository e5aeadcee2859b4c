//! Row structs and DTOs.
//!
//! Rust field names are English; the serde and sqlx renames keep the
//! Spanish column and JSON names the API exposes.

pub mod note;
