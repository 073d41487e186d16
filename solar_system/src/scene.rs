//! The running two-body setup: bodies, their appearance, and user commands

use std::collections::HashMap;

use glam::Vec2;

use crate::body::{Body, BodyId};
use crate::config::SimConfig;
use crate::controls::Command;
use crate::pool::BodyPool;
use crate::solver::GravitySolver;

/// How a body is drawn. Kept apart from [`Body`] and joined by id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub radius: f32,
    pub color: [f32; 4],
}

/// A heavy sun at the centre of the viewport and a light planet the user
/// places and launches.
pub struct Scene {
    pool: BodyPool,
    solver: GravitySolver,
    appearances: HashMap<BodyId, Appearance>,
    sun: BodyId,
    planet: BodyId,
    viewport: Vec2,
    min_mass: f32,
    mass_step: f32,
    launch_clamp: f32,
    launch_scale: f32,
}

impl Scene {
    /// Sun at rest in the middle of `viewport`; planet parked, inactive, at
    /// the origin until the first relaunch.
    pub fn new(config: &SimConfig, viewport: Vec2) -> Self {
        let appearance = Appearance {
            radius: config.body_radius,
            color: config.body_color,
        };

        let sun = Body::new(viewport / 2.0, config.sun_mass);
        let planet = Body::new(Vec2::ZERO, config.planet_mass).with_active(false);
        let (sun_id, planet_id) = (sun.id(), planet.id());

        let mut pool = BodyPool::new();
        let mut appearances = HashMap::new();
        for body in [sun, planet] {
            appearances.insert(body.id(), appearance);
            pool.add(body);
        }

        Self {
            pool,
            solver: GravitySolver::new(config.gravitational_constant),
            appearances,
            sun: sun_id,
            planet: planet_id,
            viewport,
            min_mass: config.min_mass,
            mass_step: config.mass_step,
            launch_clamp: config.launch_clamp,
            launch_scale: config.launch_scale,
        }
    }

    pub fn pool(&self) -> &BodyPool {
        &self.pool
    }

    pub fn sun(&self) -> &Body {
        self.body(self.sun)
    }

    pub fn planet(&self) -> &Body {
        self.body(self.planet)
    }

    fn body(&self, id: BodyId) -> &Body {
        self.pool
            .get(id)
            .expect("scene bodies are added at construction and never removed")
    }

    fn body_mut(&mut self, id: BodyId) -> &mut Body {
        self.pool
            .get_mut(id)
            .expect("scene bodies are added at construction and never removed")
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Advance physics by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.solver.step(&mut self.pool, dt);
    }

    /// Active bodies in draw order with their appearance.
    pub fn drawables(&self) -> impl Iterator<Item = (Vec2, Appearance)> + '_ {
        self.pool
            .iter()
            .filter(|body| body.active)
            .filter_map(|body| {
                self.appearances
                    .get(&body.id())
                    .map(|appearance| (body.position, *appearance))
            })
    }

    /// Run `command` with the cursor at `cursor` (pixels). Returns `false`
    /// once the driver should stop.
    pub fn apply(&mut self, command: Command, cursor: Vec2) -> bool {
        log::info!("command: {}", command.label());

        match command {
            Command::Quit => return false,
            Command::Relaunch => {
                let centre = self.viewport / 2.0;
                let sun = self.body_mut(self.sun);
                sun.velocity = Vec2::ZERO;
                sun.position = centre;

                let planet = self.body_mut(self.planet);
                planet.active = true;
                planet.velocity = Vec2::ZERO;
                planet.position = cursor;
            }
            Command::Launch => {
                let (clamp, scale) = (self.launch_clamp, self.launch_scale);
                let planet = self.body_mut(self.planet);
                planet.velocity += (cursor - planet.position).clamp_length_max(clamp) * scale;
            }
            Command::Deactivate => self.body_mut(self.planet).active = false,
            Command::IncreaseMass => {
                let step = self.mass_step;
                self.body_mut(self.planet).mass += step;
            }
            Command::DecreaseMass => {
                let (step, floor) = (self.mass_step, self.min_mass);
                let planet = self.body_mut(self.planet);
                planet.mass = (planet.mass - step).max(floor);
            }
        }

        true
    }
}
