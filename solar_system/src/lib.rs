//! Point-mass gravity simulation
//!
//! The core is three modules with no I/O:
//!
//! - **body**: a point mass with position, velocity, mass and an active flag
//! - **pool**: the ordered set of bodies a step runs over
//! - **solver**: pairwise gravity and the per-frame update
//!
//! The rest supports the windowed driver: settings, user commands, the
//! two-body scene and frame pacing.

pub mod body;
pub mod pool;
pub mod solver;

pub mod config;
pub mod controls;
pub mod scene;
pub mod clock;

pub use body::{Body, BodyId};
pub use pool::BodyPool;
pub use solver::{GravitySolver, G};
