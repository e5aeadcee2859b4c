//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument and run exactly one statement.

pub mod note_repo;

pub use note_repo::NoteRepo;
