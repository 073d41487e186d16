use approx::assert_relative_eq;
use glam::Vec2;
use solar_system::{Body, BodyPool, GravitySolver, G};

const DT: f32 = 1.0 / 60.0;

/// Sun at the origin and a planet 100 units along +x, both active.
fn sun_and_planet() -> BodyPool {
    let mut pool = BodyPool::new();
    pool.add(Body::new(Vec2::ZERO, 15000.0));
    pool.add(Body::new(Vec2::new(100.0, 0.0), 70.0));
    pool
}

// ==================================================================================
// Two-body step
// ==================================================================================

#[test]
fn one_step_pulls_bodies_toward_each_other() {
    let solver = GravitySolver::default();
    let mut pool = sun_and_planet();
    let expected = G * 15000.0 * 70.0 / (100.0 * 100.0) * DT;

    solver.step(&mut pool, DT);

    let sun = &pool.all()[0];
    let planet = &pool.all()[1];

    assert!(sun.velocity.x > 0.0);
    assert!(planet.velocity.x < 0.0);
    assert_eq!(sun.velocity.y, 0.0);
    assert_eq!(planet.velocity.y, 0.0);

    assert_relative_eq!(sun.velocity.x, expected, max_relative = 1e-5);
    // The sun has already moved when the planet's pull is computed.
    assert_relative_eq!(planet.velocity.x, -expected, max_relative = 1e-4);

    assert_relative_eq!(sun.position.x, sun.velocity.x / 15000.0, max_relative = 1e-5);
    assert_relative_eq!(
        planet.position.x,
        100.0 + planet.velocity.x / 70.0,
        max_relative = 1e-5
    );
}

#[test]
fn force_does_not_depend_on_dt() {
    let solver = GravitySolver::default();
    let a = Body::new(Vec2::ZERO, 15000.0);
    let b = Body::new(Vec2::new(100.0, 0.0), 70.0);

    let force = solver.force_magnitude(&a, &b).unwrap();
    assert_relative_eq!(force, G * 15000.0 * 70.0 / 10000.0, max_relative = 1e-6);
    assert_relative_eq!(solver.force_magnitude(&b, &a).unwrap(), force, max_relative = 1e-6);

    let slow = solver.velocity_delta(&a, &b, DT).unwrap();
    let fast = solver.velocity_delta(&a, &b, 3.0 * DT).unwrap();
    assert_relative_eq!(fast.x, 3.0 * slow.x, max_relative = 1e-6);
}

// ==================================================================================
// Activation
// ==================================================================================

#[test]
fn inactive_body_is_untouched_and_exerts_no_pull() {
    let solver = GravitySolver::default();
    let mut pool = BodyPool::new();
    let sun = Body::new(Vec2::ZERO, 15000.0).with_velocity(Vec2::new(3.0, 0.0));
    let parked = Body::new(Vec2::new(50.0, 50.0), 70.0)
        .with_velocity(Vec2::new(-7.0, 2.0))
        .with_active(false);
    let (sun_id, parked_id) = (sun.id(), parked.id());
    pool.add(sun);
    pool.add(parked);

    for _ in 0..5 {
        solver.step(&mut pool, DT);
    }

    let parked = pool.get(parked_id).unwrap();
    assert_eq!(parked.position, Vec2::new(50.0, 50.0));
    assert_eq!(parked.velocity, Vec2::new(-7.0, 2.0));

    // No partners, so the sun keeps its velocity and is never moved.
    let sun = pool.get(sun_id).unwrap();
    assert_eq!(sun.velocity, Vec2::new(3.0, 0.0));
    assert_eq!(sun.position, Vec2::ZERO);
}

#[test]
fn reactivated_body_rejoins() {
    let solver = GravitySolver::default();
    let mut pool = sun_and_planet();
    let planet_id = pool.all()[1].id();
    pool.get_mut(planet_id).unwrap().active = false;

    solver.step(&mut pool, DT);
    assert_eq!(pool.all()[0].velocity, Vec2::ZERO);

    pool.get_mut(planet_id).unwrap().active = true;
    solver.step(&mut pool, DT);
    assert!(pool.all()[0].velocity.x > 0.0);
}

// ==================================================================================
// Update order
// ==================================================================================

#[test]
fn each_partner_moves_the_body_before_the_next() {
    let solver = GravitySolver::default();
    let bodies = [
        Body::new(Vec2::ZERO, 500.0),
        Body::new(Vec2::new(40.0, 0.0), 80.0),
        Body::new(Vec2::new(0.0, 30.0), 120.0),
    ];

    let mut pool = BodyPool::new();
    for body in bodies.iter().cloned() {
        pool.add(body);
    }
    solver.step(&mut pool, DT);

    let mut expected = bodies.to_vec();
    for i in 0..expected.len() {
        for j in 0..expected.len() {
            if i == j {
                continue;
            }
            let delta = solver.velocity_delta(&expected[i], &expected[j], DT).unwrap();
            expected[i].update_velocity(delta);
            expected[i].apply_velocity();
        }
    }

    for (got, want) in pool.all().iter().zip(&expected) {
        assert_eq!(got.velocity, want.velocity);
        assert_eq!(got.position, want.position);
    }
}

#[test]
fn zero_dt_never_moves_anything() {
    let solver = GravitySolver::default();
    let mut pool = sun_and_planet();
    pool.all_mut()[1].velocity = Vec2::new(0.0, 25.0);
    let before = pool.all().to_vec();

    for _ in 0..100 {
        solver.step(&mut pool, 0.0);
    }

    assert_eq!(pool.all(), &before[..]);
}
