// particle.rs - A single drifting point
//
// Position advances every rendered frame; velocity changes only on the
// force clock and when the point wraps through an edge.

use glam::DVec2;
use rand::Rng;

use crate::color::{Color, GLOW_ALPHA};
use crate::config::FieldConfig;
use crate::render::Surface;

// Spawn ranges
const SPAWN_SPEED: f64 = 0.5;     // per axis, centred on zero
const SIZE_MIN: f64 = 1.0;
const SIZE_SPAN: f64 = 5.0;
const OUTLINE_WIDTH: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    pub color: Color,
}

/// Axes that wrapped during one `integrate` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Wrap {
    pub x: bool,
    pub y: bool,
}

impl Wrap {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

impl Particle {
    pub fn new(pos: DVec2, vel: DVec2, size: f64, color: Color) -> Self {
        Self { pos, vel, size, color }
    }

    /// Random particle somewhere on a `w` x `h` surface.
    pub fn spawn<R: Rng + ?Sized>(w: f64, h: f64, rng: &mut R) -> Self {
        let pos = DVec2::new(rng.random::<f64>() * w, rng.random::<f64>() * h);
        let vel = DVec2::new(
            (rng.random::<f64>() - 0.5) * SPAWN_SPEED,
            (rng.random::<f64>() - 0.5) * SPAWN_SPEED,
        );
        let size = rng.random::<f64>() * SIZE_SPAN + SIZE_MIN;
        let color = Color::purple(rng.random::<f64>());
        Self { pos, vel, size, color }
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// `size` stands in for mass.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.size * self.vel.length_squared()
    }

    /// Advance one frame and wrap toroidally.
    ///
    /// Each axis boosts at most once per call even if the step overshot by
    /// more than a whole bound; the position itself is reduced modulo the
    /// bound so it always lands in `[0, bound)`.
    pub fn integrate(&mut self, w: f64, h: f64, cfg: &FieldConfig) -> Wrap {
        self.pos += self.vel;

        let wrap = Wrap {
            x: wrap_axis(&mut self.pos.x, &mut self.vel.x, w, cfg.wrap_boost),
            y: wrap_axis(&mut self.pos.y, &mut self.vel.y, h, cfg.wrap_boost),
        };

        self.clamp_speed(cfg.max_speed);
        wrap
    }

    /// Push away from `pointer`, then damp and cap.
    pub fn apply_repulsion(&mut self, pointer: DVec2, cfg: &FieldConfig) {
        let d = pointer - self.pos;
        let dist = d.length().max(cfg.min_distance);

        // coincident pointer: d == 0, no direction, no push
        if dist > 0.0 {
            self.vel -= d / dist * (cfg.repulsion * self.size);
        }

        self.vel *= cfg.damping;
        self.clamp_speed(cfg.max_speed);
    }

    /// Uniformly rescale velocity down to `max`.
    pub fn clamp_speed(&mut self, max: f64) {
        let s = self.vel.length();
        if s > max {
            self.vel *= max / s;
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.disc(self.pos, self.size, self.color, Color::glow(GLOW_ALPHA), OUTLINE_WIDTH);
    }
}

/// Wrap one coordinate into `[0, bound)`. Returns true if it wrapped.
fn wrap_axis(pos: &mut f64, vel: &mut f64, bound: f64, boost: f64) -> bool {
    if !(bound > 0.0) {
        *pos = 0.0;
        return false;
    }
    if *pos >= 0.0 && *pos < bound {
        return false;
    }

    let mut p = pos.rem_euclid(bound);
    // rem_euclid can round up to `bound` for tiny negatives
    if p >= bound {
        p = 0.0;
    }
    *pos = p;
    *vel *= boost;
    true
}
