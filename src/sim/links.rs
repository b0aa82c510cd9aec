// links.rs - Proximity lines between particles
//
// Full pair scan every frame, nothing cached. Keep the population small
// (see `FieldConfig::particle_count`).

use glam::DVec2;
use rand::Rng;

use super::Particle;
use crate::color::Color;
use crate::config::FieldConfig;
use crate::render::Surface;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: DVec2,
    pub to: DVec2,
    pub opacity: f64,
    /// Mean radius of the two ends; drawn width is a random fraction of it.
    pub base_width: f64,
}

/// Line alpha for two points `distance` apart.
///
/// Linear falloff: `max` at zero distance, exactly zero at `threshold` and beyond.
#[inline]
pub fn link_alpha(distance: f64, threshold: f64, max: f64) -> f64 {
    if distance >= threshold {
        return 0.0;
    }
    (1.0 - distance / threshold) * max
}

/// Visit every unordered pair `i < j` closer than `cfg.link_distance`.
pub fn for_each_link<F>(particles: &[Particle], cfg: &FieldConfig, mut f: F)
where
    F: FnMut(Link),
{
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let distance = a.pos.distance(b.pos);
            if distance < cfg.link_distance {
                f(Link {
                    from: a.pos,
                    to: b.pos,
                    opacity: link_alpha(distance, cfg.link_distance, cfg.link_opacity),
                    base_width: (a.size + b.size) / 2.0,
                });
            }
        }
    }
}

/// Stroke every link; width jitters per call.
pub fn draw_links<S, R>(particles: &[Particle], cfg: &FieldConfig, surface: &mut S, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    for_each_link(particles, cfg, |link| {
        let width = rng.random::<f64>() * link.base_width;
        surface.line(link.from, link.to, Color::glow(link.opacity), width);
    });
}
