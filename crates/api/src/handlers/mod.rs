pub mod fallback;
pub mod notes;
pub mod pages;
