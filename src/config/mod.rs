//! Configuration for the aircover pipeline.

pub mod settings;

pub use settings::*;
