//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod assets;
pub mod footer;
pub mod header;
pub mod search;
