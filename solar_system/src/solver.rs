//! Pairwise gravity and per-step integration
//!
//! Every ordered pair of distinct active bodies is visited. The pull of the
//! second body is added to the first body's velocity and the first body is
//! moved straight away, before the next partner is considered. Results
//! therefore depend on pool order; this is the model's behaviour and is kept
//! as is.

use glam::Vec2;

use crate::body::Body;
use crate::pool::BodyPool;

/// Gravitational constant (scaled for visualization)
pub const G: f32 = 6.6743;

/// Advances a [`BodyPool`] one frame at a time.
#[derive(Debug, Clone, Copy)]
pub struct GravitySolver {
    pub gravitational_constant: f32,
}

impl GravitySolver {
    pub fn new(gravitational_constant: f32) -> Self {
        Self {
            gravitational_constant,
        }
    }

    /// Whether `other` pulls on `body`: distinct and both active.
    pub fn should_apply_gravity(&self, body: &Body, other: &Body) -> bool {
        body.id() != other.id() && body.active && other.active
    }

    /// Unit vector from `body` toward `other`, `None` if they coincide.
    pub fn direction(&self, body: &Body, other: &Body) -> Option<Vec2> {
        if body.distance_to(other) <= 0.0 {
            return None;
        }
        Some((other.position - body.position).normalize())
    }

    /// `G * m1 * m2 / d^2`, `None` if the bodies coincide or are so close
    /// that the force overflows.
    pub fn force_magnitude(&self, body: &Body, other: &Body) -> Option<f32> {
        let distance = body.distance_to(other);
        if distance <= 0.0 {
            return None;
        }
        let force = self.gravitational_constant * body.mass * other.mass / (distance * distance);
        force.is_finite().then_some(force)
    }

    /// Velocity change imparted to `body` by `other` over `dt`.
    pub fn velocity_delta(&self, body: &Body, other: &Body, dt: f32) -> Option<Vec2> {
        let direction = self.direction(body, other)?;
        let force = self.force_magnitude(body, other)?;
        let delta = direction * force * dt;
        delta.is_finite().then_some(delta)
    }

    /// Advance every active body by one timestep.
    ///
    /// A zero, negative or non-finite `dt` leaves the pool untouched.
    pub fn step(&self, pool: &mut BodyPool, dt: f32) {
        if !(dt > 0.0 && dt.is_finite()) {
            log::trace!("skipping step with dt = {}", dt);
            return;
        }

        let bodies = pool.all_mut();
        let n = bodies.len();

        for i in 0..n {
            for j in 0..n {
                if !self.should_apply_gravity(&bodies[i], &bodies[j]) {
                    continue;
                }

                let delta = match self.velocity_delta(&bodies[i], &bodies[j], dt) {
                    Some(delta) => delta,
                    None => {
                        log::debug!(
                            "{} and {} coincide, no pull applied",
                            bodies[i].id(),
                            bodies[j].id()
                        );
                        Vec2::ZERO
                    }
                };

                let body = &mut bodies[i];
                body.update_velocity(delta);
                body.apply_velocity();
            }
        }
    }
}

impl Default for GravitySolver {
    fn default() -> Self {
        Self::new(G)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn body_never_pulls_itself() {
        let solver = GravitySolver::default();
        let body = Body::new(Vec2::ZERO, 10.0);
        assert!(!solver.should_apply_gravity(&body, &body));
        assert!(!solver.should_apply_gravity(&body, &body.clone()));
    }

    #[test]
    fn inactive_partner_disables_pair() {
        let solver = GravitySolver::default();
        let a = Body::new(Vec2::ZERO, 10.0);
        let b = Body::new(Vec2::X, 10.0).with_active(false);
        assert!(!solver.should_apply_gravity(&a, &b));
        assert!(!solver.should_apply_gravity(&b, &a));
    }

    #[test]
    fn coincident_bodies_have_no_delta() {
        let solver = GravitySolver::default();
        let a = Body::new(Vec2::new(5.0, 5.0), 10.0);
        let b = Body::new(Vec2::new(5.0, 5.0), 20.0);
        assert_eq!(solver.direction(&a, &b), None);
        assert_eq!(solver.force_magnitude(&a, &b), None);
        assert_eq!(solver.velocity_delta(&a, &b, 1.0), None);
    }

    #[test]
    fn near_coincident_bodies_have_no_delta() {
        let solver = GravitySolver::default();
        let a = Body::new(Vec2::ZERO, 15000.0);
        let b = Body::new(Vec2::new(4e-23, 0.0), 70.0);
        assert_eq!(solver.force_magnitude(&a, &b), None);
        assert_eq!(solver.velocity_delta(&a, &b, 1.0 / 60.0), None);
    }

    #[test]
    fn near_coincident_step_stays_finite() {
        let solver = GravitySolver::default();
        let mut pool = BodyPool::new();
        pool.add(Body::new(Vec2::ZERO, 15000.0));
        pool.add(Body::new(Vec2::new(4e-23, 0.0), 70.0));

        solver.step(&mut pool, 1.0 / 60.0);

        for body in &pool {
            assert!(body.position.is_finite());
            assert!(body.velocity.is_finite());
        }
    }

    #[test]
    fn directions_are_opposite() {
        let solver = GravitySolver::default();
        let a = Body::new(Vec2::new(-3.0, 1.0), 10.0);
        let b = Body::new(Vec2::new(4.0, 7.5), 10.0);
        let ab = solver.direction(&a, &b).unwrap();
        let ba = solver.direction(&b, &a).unwrap();
        assert_eq!(ab, -ba);
    }

    #[test]
    fn force_follows_inverse_square_law() {
        let solver = GravitySolver::default();
        let a = Body::new(Vec2::ZERO, 3.0);
        let b = Body::new(Vec2::new(0.0, 2.0), 5.0);
        let force = solver.force_magnitude(&a, &b).unwrap();
        assert_relative_eq!(force, G * 3.0 * 5.0 / 4.0, epsilon = 1e-5);
    }

    #[test]
    fn delta_scales_linearly_with_dt() {
        let solver = GravitySolver::default();
        let a = Body::new(Vec2::ZERO, 3.0);
        let b = Body::new(Vec2::new(10.0, 0.0), 5.0);
        let short = solver.velocity_delta(&a, &b, 0.5).unwrap();
        let long = solver.velocity_delta(&a, &b, 1.0).unwrap();
        assert_relative_eq!(long.x, short.x * 2.0, epsilon = 1e-6);
        assert_eq!(long.y, 0.0);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let solver = GravitySolver::default();
        let mut pool = BodyPool::new();
        pool.add(Body::new(Vec2::ZERO, 100.0).with_velocity(Vec2::new(1.0, 2.0)));
        pool.add(Body::new(Vec2::new(50.0, 0.0), 10.0));
        let before = pool.all().to_vec();

        for _ in 0..10 {
            solver.step(&mut pool, 0.0);
        }

        assert_eq!(pool.all(), &before[..]);
    }

    #[test]
    fn coincident_bodies_still_drift() {
        let solver = GravitySolver::default();
        let mut pool = BodyPool::new();
        pool.add(Body::new(Vec2::ZERO, 2.0).with_velocity(Vec2::new(4.0, 0.0)));
        pool.add(Body::new(Vec2::ZERO, 2.0));

        solver.step(&mut pool, 1.0 / 60.0);

        let moved = &pool.all()[0];
        assert_eq!(moved.velocity, Vec2::new(4.0, 0.0));
        assert!(moved.position.is_finite());
    }
}
