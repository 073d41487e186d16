//! Tunable settings for the simulation and its window

use std::env;
use std::str::FromStr;

use crate::solver::G;

/// Settings shared by the scene, the input commands and the driver loop.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Frame-rate cap used by the frame clock
    pub fps: u32,
    /// Largest dt handed to the solver after a stall
    pub max_dt: f32,
    pub gravitational_constant: f32,
    pub sun_mass: f32,
    pub planet_mass: f32,
    /// Mass floor for the mass-down command
    pub min_mass: f32,
    pub mass_step: f32,
    /// Launch offsets longer than this are shortened to it
    pub launch_clamp: f32,
    pub launch_scale: f32,
    pub body_radius: f32,
    pub body_color: [f32; 4],
    /// sRGB-encoded clear colour
    pub background: [f64; 4],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            title: "Solar System".to_string(),
            width: 1280,
            height: 720,
            fps: 60,
            max_dt: 0.1,
            gravitational_constant: G,
            sun_mass: 15000.0,
            planet_mass: 70.0,
            min_mass: 10.0,
            mass_step: 10.0,
            launch_clamp: 10.0,
            launch_scale: 10.0,
            body_radius: 30.0,
            body_color: [1.0, 0.0, 0.0, 1.0],
            // darkblue, #00008b
            background: [0.0, 0.0, 139.0 / 255.0, 1.0],
        }
    }
}

impl SimConfig {
    /// Defaults with `SOLAR_SYSTEM_FPS`, `SOLAR_SYSTEM_G`,
    /// `SOLAR_SYSTEM_WIDTH` and `SOLAR_SYSTEM_HEIGHT` applied on top.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Values that do not parse,
    /// or that would make the simulation degenerate, are logged and ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(fps) = parse_override::<u32, _>(&lookup, "SOLAR_SYSTEM_FPS") {
            if fps > 0 {
                self.fps = fps;
            } else {
                log::warn!("SOLAR_SYSTEM_FPS must be positive, keeping {}", self.fps);
            }
        }
        if let Some(g) = parse_override::<f32, _>(&lookup, "SOLAR_SYSTEM_G") {
            if g.is_finite() {
                self.gravitational_constant = g;
            } else {
                log::warn!("SOLAR_SYSTEM_G must be finite, keeping {}", self.gravitational_constant);
            }
        }
        if let Some(width) = parse_override::<u32, _>(&lookup, "SOLAR_SYSTEM_WIDTH") {
            self.width = width.max(1);
        }
        if let Some(height) = parse_override::<u32, _>(&lookup, "SOLAR_SYSTEM_HEIGHT") {
            self.height = height.max(1);
        }
        self
    }
}

fn parse_override<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => {
            log::info!("{} = {}", key, raw.trim());
            Some(value)
        }
        Err(_) => {
            log::warn!("ignoring {}: could not parse {:?}", key, raw);
            None
        }
    }
}
