//! Off-screen chart rendering.
//!
//! This module provides:
//! - The pie / placeholder renderer producing in-memory PNG bytes
//! - A data-URI helper for presentation layers offering downloads

pub mod pie;

pub use pie::*;

use base64::Engine;

/// Encode PNG bytes as a `data:image/png;base64,...` URI.
pub fn png_data_uri(bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:image/png;base64,{encoded}")
}
