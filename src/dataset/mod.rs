//! Sortie and fence-event tables.
//!
//! This module provides:
//! - Row types for the two source tables
//! - A one-shot CSV loader producing the immutable in-memory dataset

pub mod loader;
pub mod records;

pub use loader::*;
pub use records::*;
