// config.rs - Tunable constants
//
// Everything is fixed at startup. `FieldConfig::default()` is what the page
// runs with; tests build variants.

pub const MAX_PARTICLES: usize = 80;
pub const PX_PER_PARTICLE: f64 = 15.0;

// Links
pub const LINK_DISTANCE: f64 = 150.0;
pub const LINK_OPACITY: f64 = 0.8;

// Pointer repulsion
pub const MIN_DISTANCE: f64 = 60.0;   // soften the push near the cursor
pub const REPULSION: f64 = 0.005;     // negative mass: push away from the pointer
pub const DAMPING: f64 = 0.9925;      // per force tick

// Motion
pub const MAX_SPEED: f64 = 1.5;       // hard cap
pub const WRAP_BOOST: f64 = 2.5;      // velocity multiplier on wrap

// Timing / look
pub const FORCE_PERIOD_MS: i32 = 50;
pub const TRAIL_ALPHA: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub max_particles: usize,
    pub px_per_particle: f64,
    pub link_distance: f64,
    pub link_opacity: f64,
    pub min_distance: f64,
    pub repulsion: f64,
    pub damping: f64,
    pub max_speed: f64,
    pub wrap_boost: f64,
    pub force_period_ms: i32,
    pub trail_alpha: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            px_per_particle: PX_PER_PARTICLE,
            link_distance: LINK_DISTANCE,
            link_opacity: LINK_OPACITY,
            min_distance: MIN_DISTANCE,
            repulsion: REPULSION,
            damping: DAMPING,
            max_speed: MAX_SPEED,
            wrap_boost: WRAP_BOOST,
            force_period_ms: FORCE_PERIOD_MS,
            trail_alpha: TRAIL_ALPHA,
        }
    }
}

impl FieldConfig {
    /// Particle count for a surface width: `min(max, floor(width / px))`.
    ///
    /// The pair scan is O(n²) per frame, so narrow screens get fewer points
    /// and wide ones stop at the cap.
    pub fn particle_count(&self, width: f64) -> usize {
        if !(width > 0.0) || self.px_per_particle <= 0.0 {
            return 0;
        }
        ((width / self.px_per_particle).floor() as usize).min(self.max_particles)
    }
}
