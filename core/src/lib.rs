//! Compiles PNG artwork into the C tables baked into the particle
//! simulation firmware.

pub mod batch;
pub mod error;
pub mod fs;
pub mod gamma;
pub mod header;
pub mod image;
pub mod particles;
pub mod stages;
pub mod universe;

pub use error::{Error, Result};
