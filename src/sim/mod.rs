// sim/ - Particle field simulation
//
// Pure state and math, no host calls, so it runs natively under test.
// The browser host owns scheduling and feeds pointer/resize input in.

mod links;
mod particle;

pub use links::{Link, draw_links, for_each_link, link_alpha};
pub use particle::{Particle, Wrap};

use glam::DVec2;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::FieldConfig;
use crate::render::Surface;

/// Shared state both clocks read and write.
pub struct Field {
    // Surface dimensions
    w: f64,
    h: f64,

    // Last known pointer, surface-local
    pointer: DVec2,

    particles: Vec<Particle>,
    cfg: FieldConfig,

    // Construction and line jitter
    rng: SmallRng,
}

impl Field {
    /// Populate a `w` x `h` field from a seed.
    pub fn new(w: f64, h: f64, cfg: FieldConfig, seed: u64) -> Self {
        Self::with_rng(w, h, cfg, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(w: f64, h: f64, cfg: FieldConfig, mut rng: SmallRng) -> Self {
        let count = cfg.particle_count(w);
        let particles = (0..count).map(|_| Particle::spawn(w, h, &mut rng)).collect();
        Self { w, h, pointer: center(w, h), particles, cfg, rng }
    }

    /// Field with a caller-chosen population; the count formula is bypassed.
    pub fn from_particles(w: f64, h: f64, cfg: FieldConfig, particles: Vec<Particle>, seed: u64) -> Self {
        Self {
            w,
            h,
            pointer: center(w, h),
            particles,
            cfg,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Advance every particle one frame. Returns how many wrapped.
    pub fn integrate(&mut self) -> usize {
        let (w, h) = (self.w, self.h);
        let cfg = self.cfg;
        self.particles
            .iter_mut()
            .map(|p| p.integrate(w, h, &cfg))
            .filter(|wrap| wrap.any())
            .count()
    }

    /// One force tick: repel every particle from the current pointer.
    pub fn apply_forces(&mut self) {
        let pointer = self.pointer;
        for p in &mut self.particles {
            p.apply_repulsion(pointer, &self.cfg);
        }
    }

    /// Integrate and paint each particle, then the links.
    pub fn step_and_draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let (w, h) = (self.w, self.h);
        for p in &mut self.particles {
            p.integrate(w, h, &self.cfg);
            p.draw(surface);
        }
        draw_links(&self.particles, &self.cfg, surface, &mut self.rng);
    }

    /// New surface size. The pointer is recentred rather than re-queried;
    /// particles stay put and wrap back in on their next step.
    pub fn resize(&mut self, w: f64, h: f64) {
        self.w = w;
        self.h = h;
        self.pointer = center(w, h);
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = DVec2::new(x, y);
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    // Accessors
    pub fn particles(&self) -> &[Particle] { &self.particles }
    pub fn pointer(&self) -> DVec2 { self.pointer }
    pub fn config(&self) -> &FieldConfig { &self.cfg }
    pub fn width(&self) -> f64 { self.w }
    pub fn height(&self) -> f64 { self.h }
}

#[inline]
fn center(w: f64, h: f64) -> DVec2 {
    DVec2::new(w / 2.0, h / 2.0)
}
