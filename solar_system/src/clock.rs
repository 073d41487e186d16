//! Frame pacing for the driver loop

use std::thread;
use std::time::{Duration, Instant};

/// Caps the frame rate and reports the time between frames.
pub struct FrameClock {
    frame_time: Duration,
    max_dt: f32,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(fps: u32, max_dt: f32) -> Self {
        Self {
            frame_time: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            max_dt,
            last_tick: Instant::now(),
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Sleep out the rest of the current frame, then return the seconds since
    /// the previous tick, capped at `max_dt`.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.frame_time {
            thread::sleep(self.frame_time - elapsed);
        }

        let now = Instant::now();
        let dt = (now - self.last_tick).as_secs_f32();
        self.last_tick = now;

        dt.min(self.max_dt)
    }

    /// Close out a frame: run `step` with the dt of the frame just shown,
    /// then tick. Returns the dt for the next frame.
    pub fn finish_frame<F>(&mut self, dt: f32, step: F) -> f32
    where
        F: FnOnce(f32),
    {
        step(dt);
        self.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_waits_for_a_full_frame() {
        let mut clock = FrameClock::new(60, 0.1);
        let dt = clock.tick();
        assert!(dt >= clock.frame_time().as_secs_f32() * 0.99);
    }

    #[test]
    fn tick_is_capped_after_a_stall() {
        let mut clock = FrameClock::new(1000, 0.005);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(clock.tick(), 0.005);
    }

    #[test]
    fn finish_frame_steps_with_the_previous_dt() {
        let mut clock = FrameClock::new(1000, 0.1);
        let mut stepped = Vec::new();

        let next = clock.finish_frame(0.25, |dt| stepped.push(dt));
        let after = clock.finish_frame(next, |dt| stepped.push(dt));

        assert_eq!(stepped, vec![0.25, next]);
        assert!(next > 0.0 && after > 0.0);
    }

    #[test]
    fn zero_fps_falls_back_to_one() {
        let clock = FrameClock::new(0, 0.1);
        assert_eq!(clock.frame_time(), Duration::from_secs(1));
    }
}
