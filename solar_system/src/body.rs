//! Point masses taking part in the gravity simulation

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;

static NEXT_BODY_ID: AtomicU64 = AtomicU64::new(0);

/// Stable identity of a body.
///
/// Assigned once in [`Body::new`] and carried along by clones, so a clone is
/// treated as the same participant by [`crate::pool::BodyPool::add`] and by
/// self-pair exclusion in the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(u64);

impl BodyId {
    fn next() -> Self {
        Self(NEXT_BODY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body({})", self.0)
    }
}

/// A point mass with position, velocity and an active flag.
///
/// All physical fields are public so the driver can change them between
/// steps. `mass` must stay positive while the body is active: position
/// integration divides by it.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    id: BodyId,
    pub position: Vec2,
    pub mass: f32,
    pub velocity: Vec2,
    pub active: bool,
}

impl Body {
    /// Active body at rest.
    pub fn new(position: Vec2, mass: f32) -> Self {
        Self {
            id: BodyId::next(),
            position,
            mass,
            velocity: Vec2::ZERO,
            active: true,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    /// Add a velocity delta. Inactive bodies ignore it.
    pub fn update_velocity(&mut self, delta: Vec2) {
        if !self.active {
            return;
        }
        self.velocity += delta;
    }

    /// Move by `velocity / mass`. Inactive bodies stay put.
    ///
    /// This is not a time integral of velocity: the displacement is scaled
    /// by inverse mass and not by `dt`, which is how the model advances.
    pub fn apply_velocity(&mut self) {
        if !self.active {
            return;
        }
        debug_assert!(self.mass > 0.0, "active body with non-positive mass");
        self.position += self.velocity / self.mass;
    }

    pub fn distance_to(&self, other: &Body) -> f32 {
        self.position.distance(other.position)
    }
}
