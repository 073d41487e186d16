//! Common utilities for physics simulations
//!
//! This crate provides window and GPU setup plus the 2D camera used by the
//! simulation binaries.

pub mod graphics;
pub mod camera;
pub mod error;

pub use graphics::*;
pub use camera::*;
pub use error::{GraphicsError, Result};
